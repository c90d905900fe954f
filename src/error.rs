//! Error types for the collecting allocator.

use std::fmt;

/// Errors that can surface through the allocation contract.
///
/// Out-of-memory is the only allocation-path failure: it is raised
/// synchronously when the engine's malloc returns nothing, propagated to
/// the caller of `allocate`, and never retried internally. A resize that
/// cannot happen in place is an ordinary `None`, not an error.
///
/// # Examples
///
/// ```
/// use consgc::error::{GcError, GcResult};
///
/// let failure: GcResult<usize> = Err(GcError::OutOfMemory);
/// assert!(failure.is_err());
/// assert_eq!(GcError::OutOfMemory.to_string(), "Out of memory");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcError {
    /// Allocation failed because the engine could not supply memory
    OutOfMemory,
}

impl fmt::Display for GcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GcError::OutOfMemory => write!(f, "Out of memory"),
        }
    }
}

impl std::error::Error for GcError {}

/// Result type for allocation operations
pub type GcResult<T> = Result<T, GcError>;
