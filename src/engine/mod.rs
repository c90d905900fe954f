//! The backing-engine boundary.
//!
//! Every interaction with the collection engine goes through the eleven
//! primitives in this module; no engine type leaks past it. The engine is
//! a process-wide singleton: memory handed out here is visible to, and
//! reclaimable by, collections requested from anywhere in the process.
//!
//! The backend is selected at compile time. The `bdwgc` feature links the
//! installed Boehm-Demers-Weiser collector; the default is an in-process
//! engine that honors the same primitive contracts.

use std::ptr::NonNull;

#[cfg(feature = "bdwgc")]
mod bdwgc;
#[cfg(not(feature = "bdwgc"))]
mod heap;

#[cfg(feature = "bdwgc")]
use bdwgc as backend;
#[cfg(not(feature = "bdwgc"))]
use heap as backend;

/// Whether the engine has completed its one-way transition to initialized.
pub fn is_initialized() -> bool {
    backend::is_initialized()
}

/// Initialize the engine. Calling again after initialization is a no-op.
pub fn init() {
    backend::init()
}

/// Request `bytes` of unaligned memory from the engine. `None` means the
/// engine could not supply memory.
pub fn malloc(bytes: usize) -> Option<NonNull<u8>> {
    backend::malloc(bytes)
}

/// Return a backing allocation to the engine. Advisory: the engine would
/// also reclaim it once unreachable.
///
/// `ptr` must be the start of an allocation previously returned by
/// [`malloc`] and not yet freed.
pub fn free(ptr: NonNull<u8>) {
    backend::free(ptr)
}

/// True usable size of the backing allocation starting at `ptr`. At least
/// as large as the size requested from [`malloc`].
pub fn true_size(ptr: NonNull<u8>) -> usize {
    backend::true_size(ptr)
}

/// Current engine-managed heap size in bytes.
pub fn heap_size() -> u64 {
    backend::heap_size()
}

/// Forbid automatic collection during allocation.
pub fn disable() {
    backend::disable()
}

/// Re-allow automatic collection during allocation.
pub fn enable() {
    backend::enable()
}

/// Synchronous stop-the-world full collection.
pub fn full_collect() {
    backend::full_collect()
}

/// One bounded unit of incremental collection work; returns 0 when no
/// work remained.
pub fn incremental_collect() -> u8 {
    backend::incremental_collect()
}

/// Toggle leak-detection mode: with it on, collections report
/// unreachable-but-never-freed allocations through the log.
pub fn set_leak_detection(enabled: bool) {
    backend::set_leak_detection(enabled)
}
