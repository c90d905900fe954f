//! Boehm-Demers-Weiser engine backend.
//!
//! Thin bindings onto the system collector; enabled with the `bdwgc`
//! feature and linked against the installed `libgc`.

use std::os::raw::{c_int, c_void};
use std::ptr::NonNull;

#[link(name = "gc")]
extern "C" {
    fn GC_init();
    fn GC_is_init_called() -> c_int;
    fn GC_malloc(bytes: usize) -> *mut c_void;
    fn GC_free(ptr: *mut c_void);
    fn GC_size(ptr: *const c_void) -> usize;
    fn GC_get_heap_size() -> usize;
    fn GC_disable();
    fn GC_enable();
    fn GC_gcollect();
    fn GC_collect_a_little() -> c_int;
    fn GC_set_find_leak(enabled: c_int);
}

pub(super) fn is_initialized() -> bool {
    unsafe { GC_is_init_called() != 0 }
}

pub(super) fn init() {
    unsafe { GC_init() }
}

pub(super) fn malloc(bytes: usize) -> Option<NonNull<u8>> {
    NonNull::new(unsafe { GC_malloc(bytes) }.cast::<u8>())
}

pub(super) fn free(ptr: NonNull<u8>) {
    unsafe { GC_free(ptr.as_ptr().cast()) }
}

pub(super) fn true_size(ptr: NonNull<u8>) -> usize {
    unsafe { GC_size(ptr.as_ptr().cast()) }
}

pub(super) fn heap_size() -> u64 {
    unsafe { GC_get_heap_size() as u64 }
}

pub(super) fn disable() {
    unsafe { GC_disable() }
}

pub(super) fn enable() {
    unsafe { GC_enable() }
}

pub(super) fn full_collect() {
    unsafe { GC_gcollect() }
}

pub(super) fn incremental_collect() -> u8 {
    u8::from(unsafe { GC_collect_a_little() } != 0)
}

pub(super) fn set_leak_detection(enabled: bool) {
    unsafe { GC_set_find_leak(c_int::from(enabled)) }
}
