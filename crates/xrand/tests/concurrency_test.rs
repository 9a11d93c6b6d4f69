//! The shared generator under concurrent use.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use xrand::RandomService;

#[test]
fn test_shared_is_a_single_instance() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| std::ptr::from_ref(xrand::shared()) as usize))
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_concurrent_callers_get_valid_values() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..1000 {
                    let n = xrand::int_n(100);
                    assert!((0..100).contains(&n));
                    let s = xrand::string(12, Some(xrand::DIGITS_ALPHABET));
                    assert!(s.len() == 12 && s.bytes().all(|b| b.is_ascii_digit()));
                    let d = xrand::jitter(Duration::from_millis(50), None);
                    assert!(d >= Duration::from_millis(40) && d < Duration::from_millis(60));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_owned_service_shared_across_threads() {
    let service = Arc::new(RandomService::from_entropy());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || (0..500).map(|_| service.int_n(1_000_000)).collect::<Vec<_>>())
        })
        .collect();

    let mut all: Vec<i64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(all.len(), 2000);
    all.sort_unstable();
    all.dedup();
    assert!(all.len() > 1);
}
