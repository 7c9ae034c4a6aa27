use thiserror::Error;

/// Result type alias using DiffError
pub type Result<T> = std::result::Result<T, DiffError>;

/// Which input list a failing medication record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The earlier snapshot's list
    Before,
    /// The later snapshot's list
    After,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Before => write!(f, "before"),
            Side::After => write!(f, "after"),
        }
    }
}

/// Error taxonomy for the diff engine
///
/// All failures are local and synchronous: either a complete, internally
/// consistent [`crate::model::MedListDiff`] is returned, or one of these
/// errors is raised and no result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Medication record is malformed (name missing or blank)
    #[error("Invalid medication in {side} list at index {index}: {reason}")]
    InvalidMedication {
        side: Side,
        index: usize,
        reason: String,
    },

    /// Two medications in one list share a case-insensitive name.
    ///
    /// Strict mode: duplicates are rejected rather than resolved last-wins.
    #[error("Duplicate medication name in {side} list: {name}")]
    DuplicateName { side: Side, name: String },
}
