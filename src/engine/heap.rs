//! In-process engine backend.
//!
//! Stands in for the real collector when the `bdwgc` feature is off,
//! honoring the primitive contracts the shim relies on: granule-rounded
//! true sizes, a monotonic heap-size counter, and reclamation that is
//! deferred until a collection entry point runs. Tracing and object
//! scanning stay inside the real engine; this backend reclaims only what
//! was freed explicitly.

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ptr::NonNull;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crossbeam_queue::SegQueue;
use dashmap::DashMap;
use once_cell::sync::Lazy;

/// Granule every request is rounded up to, so true sizes carry slack the
/// way a real collecting engine's size classes do.
const GRANULE: usize = 16;

/// Reclamations processed per bounded unit of collection work.
const INCREMENTAL_BATCH: usize = 32;

struct EngineState {
    /// Live backing allocations: start address -> granule-rounded size.
    live: DashMap<usize, usize>,
    /// Freed ranges awaiting the sweep.
    deferred: SegQueue<(usize, usize)>,
    heap_bytes: AtomicU64,
    initialized: AtomicBool,
    collection_enabled: AtomicBool,
    leak_detection: AtomicBool,
}

static ENGINE: Lazy<EngineState> = Lazy::new(|| EngineState {
    live: DashMap::new(),
    deferred: SegQueue::new(),
    heap_bytes: AtomicU64::new(0),
    initialized: AtomicBool::new(false),
    collection_enabled: AtomicBool::new(true),
    leak_detection: AtomicBool::new(false),
});

pub(super) fn is_initialized() -> bool {
    ENGINE.initialized.load(Ordering::Acquire)
}

pub(super) fn init() {
    ENGINE.initialized.store(true, Ordering::Release);
}

pub(super) fn malloc(bytes: usize) -> Option<NonNull<u8>> {
    let size = bytes.max(1).checked_add(GRANULE - 1)? & !(GRANULE - 1);
    let layout = Layout::from_size_align(size, GRANULE).ok()?;
    let ptr = NonNull::new(unsafe { alloc_zeroed(layout) })?;

    ENGINE.live.insert(ptr.as_ptr() as usize, size);
    ENGINE.heap_bytes.fetch_add(size as u64, Ordering::Relaxed);

    // Allocation is where the engine opportunistically collects.
    if ENGINE.collection_enabled.load(Ordering::Acquire) {
        sweep_batch(INCREMENTAL_BATCH);
    }

    Some(ptr)
}

pub(super) fn free(ptr: NonNull<u8>) {
    let addr = ptr.as_ptr() as usize;
    let (_, size) = ENGINE
        .live
        .remove(&addr)
        .expect("pointer not owned by the engine");
    ENGINE.deferred.push((addr, size));
}

pub(super) fn true_size(ptr: NonNull<u8>) -> usize {
    *ENGINE
        .live
        .get(&(ptr.as_ptr() as usize))
        .expect("pointer not owned by the engine")
}

pub(super) fn heap_size() -> u64 {
    ENGINE.heap_bytes.load(Ordering::Relaxed)
}

pub(super) fn disable() {
    ENGINE.collection_enabled.store(false, Ordering::Release);
}

pub(super) fn enable() {
    ENGINE.collection_enabled.store(true, Ordering::Release);
}

pub(super) fn full_collect() {
    while sweep_batch(INCREMENTAL_BATCH) == INCREMENTAL_BATCH {}

    if ENGINE.leak_detection.load(Ordering::Acquire) {
        let live = ENGINE.live.len();
        if live > 0 {
            log::warn!("leak detection: {live} allocation(s) were never freed");
        }
    }
}

pub(super) fn incremental_collect() -> u8 {
    sweep_batch(INCREMENTAL_BATCH);
    u8::from(!ENGINE.deferred.is_empty())
}

pub(super) fn set_leak_detection(enabled: bool) {
    ENGINE.leak_detection.store(enabled, Ordering::Release);
}

/// Reclaim up to `limit` deferred ranges; returns how many were swept.
fn sweep_batch(limit: usize) -> usize {
    let mut swept = 0;
    while swept < limit {
        match ENGINE.deferred.pop() {
            Some((addr, size)) => {
                // Layout mirrors the one used at allocation.
                let layout = Layout::from_size_align(size, GRANULE)
                    .expect("deferred range recorded with a valid layout");
                unsafe { dealloc(addr as *mut u8, layout) };
                swept += 1;
            }
            None => break,
        }
    }
    swept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malloc_rounds_to_granules() {
        let ptr = malloc(1).expect("tiny allocation");
        assert_eq!(true_size(ptr) % GRANULE, 0);
        assert!(true_size(ptr) >= 1);
        free(ptr);
    }

    #[test]
    fn true_size_never_below_request() {
        for request in [1usize, 15, 16, 17, 100, 4096] {
            let ptr = malloc(request).expect("allocation");
            assert!(true_size(ptr) >= request);
            free(ptr);
        }
    }

    #[test]
    fn heap_size_grows_with_allocations() {
        let before = heap_size();
        let ptr = malloc(1024).expect("allocation");
        assert!(heap_size() >= before + 1024);
        free(ptr);
    }

    #[test]
    fn init_is_one_way() {
        init();
        assert!(is_initialized());
        init();
        assert!(is_initialized());
    }
}
