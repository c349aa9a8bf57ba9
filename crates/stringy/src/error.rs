use thiserror::Error;

/// Contract violations and allocation failures.
///
/// Whenever an operation returns one of these, the destination buffer has not
/// been touched. [`StrError::Format`] is the exception: the partial output is
/// left in place, terminated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrError {
    /// A capacity of zero leaves no room for the terminator.
    #[error("capacity must leave room for the terminator")]
    ZeroCapacity,
    /// The stated capacity is larger than the destination slice.
    #[error("capacity {capacity} exceeds destination of {len} elements")]
    CapacityExceedsBuffer {
        /// Requested capacity.
        capacity: usize,
        /// Actual destination length.
        len: usize,
    },
    /// Insert position at or past the capacity.
    #[error("insert position {pos} is outside capacity {capacity}")]
    InsertOutOfBounds {
        /// Requested insert offset.
        pos: usize,
        /// Destination capacity.
        capacity: usize,
    },
    /// The allocator refused a request, or its size overflowed.
    #[error("failed to allocate {elements} elements")]
    AllocFailed {
        /// Number of elements requested.
        elements: usize,
    },
    /// A formatting trait implementation returned an error before the output
    /// was complete.
    #[error("formatter failed after {written} elements")]
    Format {
        /// Elements written before the failure; the buffer is terminated there.
        written: usize,
    },
}

/// Checks `1 <= capacity <= len`.
pub(crate) fn check_capacity(capacity: usize, len: usize) -> Result<(), StrError> {
    let err = if capacity == 0 {
        StrError::ZeroCapacity
    } else if capacity > len {
        StrError::CapacityExceedsBuffer { capacity, len }
    } else {
        return Ok(());
    };
    tracing::debug!(%err, "rejected bounded operation");
    Err(err)
}
