use thiserror::Error;

/// Error type for the fallible `try_` operation variants.
///
/// The panicking operations treat these conditions as contract violations
/// and abort; the `try_` twins report them instead so a caller can validate
/// untrusted indices without a catch-unwind boundary.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SliceOpsError {
    /// Insertion position is beyond the current length
    #[error("index out of bounds: index {index} is beyond length {length}")]
    IndexOutOfBounds {
        /// Index that was requested
        index: usize,
        /// Current length of the sequence
        length: usize,
    },
    /// Deletion range is not within `0 <= start <= end <= length`
    #[error("invalid range: {start}..{end} is not a valid range for length {length}")]
    InvalidRange {
        /// Start of the requested range
        start: usize,
        /// End of the requested range (exclusive)
        end: usize,
        /// Current length of the sequence
        length: usize,
    },
    /// Requested capacity growth cannot be satisfied
    #[error("capacity overflow: cannot reserve {additional} additional elements")]
    CapacityOverflow {
        /// Number of additional elements requested
        additional: usize,
    },
}
