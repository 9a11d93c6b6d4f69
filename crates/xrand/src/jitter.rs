//! Duration jitter.
//!
//! Perturbs a duration by a random fraction of itself so that many clients
//! running the same periodic work (retries, polling, cache expiry) drift
//! apart instead of converging on the same instant.

use std::time::Duration;

use crate::service::RandomService;

/// Maximum fraction applied by [`RandomService::jitter`] when no usable
/// factor is given (±20%).
pub const DEFAULT_JITTER_FACTOR: f64 = 0.2;

const NANOS_PER_SEC: u128 = 1_000_000_000;

impl RandomService {
    /// Returns `duration` altered by a random amount in
    /// `[-factor * duration, factor * duration)`.
    ///
    /// If `max_factor` is `None`, not positive or not finite,
    /// [`DEFAULT_JITTER_FACTOR`] is used. Candidates that are not strictly
    /// positive are redrawn rather than clamped, so any non-zero input
    /// yields a non-zero result. A zero duration is returned unchanged.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap
    )]
    pub fn jitter(&self, duration: Duration, max_factor: Option<f64>) -> Duration {
        let factor = effective_factor(max_factor);
        if duration.is_zero() {
            return duration;
        }

        // Duration::MAX in nanoseconds is far below i128::MAX.
        let nanos = duration.as_nanos() as i128;
        let magnitude = nanos as f64;
        let mut rejected: u32 = 0;
        loop {
            let spread = 2.0 * self.float64() - 1.0; // [-1.0, 1.0)
            // Float-to-int casts truncate toward zero and saturate.
            let delta = (spread * factor * magnitude) as i128;
            let candidate = nanos.saturating_add(delta);
            if candidate > 0 {
                if rejected > 0 {
                    tracing::trace!(rejected, "redrew non-positive jitter candidates");
                }
                return duration_from_nanos(candidate.unsigned_abs());
            }
            rejected = rejected.saturating_add(1);
        }
    }
}

fn effective_factor(max_factor: Option<f64>) -> f64 {
    match max_factor {
        Some(factor) if factor > 0.0 && factor.is_finite() => factor,
        _ => DEFAULT_JITTER_FACTOR,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn duration_from_nanos(nanos: u128) -> Duration {
    match u64::try_from(nanos / NANOS_PER_SEC) {
        // The remainder is always below one billion.
        Ok(secs) => Duration::new(secs, (nanos % NANOS_PER_SEC) as u32),
        Err(_) => Duration::MAX,
    }
}
