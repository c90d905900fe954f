//! Engine lifecycle control.
//!
//! Idempotent initialization plus the collection-control surface: heap
//! size query, enable/disable of automatic collection, full and
//! incremental collection, and leak-detection mode. Every operation is a
//! thin passthrough over the engine boundary; this component owns no heap
//! state and no locks of its own.

use std::sync::OnceLock;

use crate::engine;

/// Process-wide lifecycle handle for the collection engine.
///
/// Initialization is one-way: once the engine reports itself initialized
/// it never transitions back. Collection-enabled (default on) and
/// leak-detection (default off) are independent flags layered on top, not
/// state transitions.
///
/// # Examples
///
/// ```
/// use consgc::EngineLifecycle;
///
/// let engine = EngineLifecycle::global();
/// engine.ensure_initialized();
/// engine.ensure_initialized(); // idempotent
/// engine.collect_full();
/// ```
pub struct EngineLifecycle {
    _priv: (),
}

impl EngineLifecycle {
    /// Global lifecycle handle; every allocator instance in the process
    /// routes through the same engine singleton.
    pub fn global() -> &'static EngineLifecycle {
        static GLOBAL: OnceLock<EngineLifecycle> = OnceLock::new();
        GLOBAL.get_or_init(|| EngineLifecycle { _priv: () })
    }

    /// Initialize the engine if it has not been initialized yet.
    ///
    /// Safe to call any number of times, and must be the first
    /// engine-touching call in the process. The engine does not specify
    /// what happens when the very first initialization is raced by
    /// multiple threads before any allocation has occurred; call this once
    /// before spawning threads that allocate.
    pub fn ensure_initialized(&self) {
        if !engine::is_initialized() {
            engine::init();
            log::debug!("collection engine initialized");
        }
    }

    /// Current engine-managed heap size in bytes.
    pub fn heap_size(&self) -> u64 {
        engine::heap_size()
    }

    /// Forbid automatic collection during allocation.
    ///
    /// Allocation still succeeds while disabled; the heap may grow
    /// unboundedly until [`enable`](Self::enable) is called or a
    /// collection is requested explicitly.
    pub fn disable(&self) {
        engine::disable()
    }

    /// Re-allow automatic collection during allocation.
    pub fn enable(&self) {
        engine::enable()
    }

    /// Synchronous stop-the-world full collection.
    ///
    /// Blocks the calling thread until the pass completes; it cannot be
    /// cancelled or timed out. Callers needing bounded pauses should issue
    /// [`collect_incremental`](Self::collect_incremental) repeatedly
    /// instead. With leak detection active, unreachable-but-never-freed
    /// allocations are reported through the log.
    pub fn collect_full(&self) {
        log::debug!("full collection requested");
        engine::full_collect();
        log::debug!(
            "full collection finished, heap is {} bytes",
            engine::heap_size()
        );
    }

    /// Perform one bounded unit of incremental collection work.
    ///
    /// Returns 0 when no work remained (the heap is idle), nonzero
    /// otherwise. Amortizes collection pauses across many small calls.
    pub fn collect_incremental(&self) -> u8 {
        engine::incremental_collect()
    }

    /// Toggle leak-detection mode.
    pub fn set_leak_detection(&self, enabled: bool) {
        engine::set_leak_detection(enabled)
    }
}
