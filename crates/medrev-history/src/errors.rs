use medrev_diff::DiffError;
use thiserror::Error;

/// Result type alias using HistoryError
pub type Result<T> = std::result::Result<T, HistoryError>;

/// Error taxonomy for revision store construction and navigation
///
/// All failures are local and synchronous; navigation never returns a
/// partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Revision store has zero snapshots
    #[error("Revision store is empty")]
    EmptyStore,

    /// Snapshot dates must be non-decreasing across the sequence
    #[error("Snapshot at index {index} is dated earlier than its predecessor")]
    SnapshotOutOfOrder { index: usize },

    /// Navigation index outside the valid range [1, len - 1]
    #[error("Revision index {index} is out of range for a store of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The diff engine rejected one of the snapshot pair's lists
    #[error(transparent)]
    Diff(#[from] DiffError),
}
