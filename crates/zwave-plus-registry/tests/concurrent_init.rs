use std::sync::{Arc, Barrier};
use std::thread;
use zwave_plus_registry::{build_count, lookup, DeviceTypeEntry, DEVICE_TYPES};

const THREADS: usize = 16;

#[test]
fn concurrent_first_access_builds_once() {
    assert_eq!(build_count(), 0);

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let spec = &DEVICE_TYPES[i % DEVICE_TYPES.len()];
                let entry = lookup(spec.code).map(|e| e as *const DeviceTypeEntry as usize);
                let seen: Vec<bool> = DEVICE_TYPES
                    .iter()
                    .map(|s| lookup(s.code).map(|e| e.code()) == Some(s.code))
                    .collect();
                (spec.code, entry, seen)
            })
        })
        .collect();

    let mut first_ptrs = Vec::new();
    for h in handles {
        let (code, entry, seen) = h.join().unwrap();
        assert!(entry.is_some(), "0x{code:04X} missing");
        assert!(seen.iter().all(|ok| *ok));
        first_ptrs.push((code, entry));
    }

    assert_eq!(build_count(), 1);
    for (code, ptr) in first_ptrs {
        let again = lookup(code).map(|e| e as *const DeviceTypeEntry as usize);
        assert_eq!(ptr, again);
    }
}
