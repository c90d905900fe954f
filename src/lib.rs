//! Aligned allocation over a conservative, tracing collection engine.
//!
//! The engine only offers unaligned malloc / free / size-query primitives;
//! the [`shim`] synthesizes arbitrary power-of-two alignment, in-place
//! resize, and capacity queries on top of them by stashing a one-word
//! back-reference just below every block it hands out. [`GcAllocator`] is
//! the public facade over the shim, and [`EngineLifecycle`] controls the
//! process-wide engine (initialization, enable/disable, full and
//! incremental collection, leak detection).
//!
//! # Examples
//!
//! ```
//! use consgc::{EngineLifecycle, GcAllocator};
//!
//! EngineLifecycle::global().ensure_initialized();
//!
//! let gc = GcAllocator::new();
//! let block = gc.allocate(4096, 4096).unwrap();
//! assert_eq!(block.as_ptr() as usize % 4096, 0);
//! unsafe { gc.free(block) };
//!
//! EngineLifecycle::global().collect_full();
//! ```

pub mod engine;
pub mod error;
pub mod gc_allocator;
pub mod lifecycle;
pub mod shim;

pub use error::{GcError, GcResult};
pub use gc_allocator::GcAllocator;
pub use lifecycle::EngineLifecycle;
