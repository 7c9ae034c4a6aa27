use chrono::{DateTime, Utc};
use medrev_diff::Medication;
use serde::{Deserialize, Serialize};

/// One recorded medication-list state at a point in time.
///
/// Snapshots are supplied by an external persistence collaborator as
/// JSON-serializable records and treated as read-only input by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When this revision was recorded (ISO-8601 on the wire)
    pub date: DateTime<Utc>,

    /// The full medication list as of `date`, at most one entry per
    /// lower-cased name
    pub meds: Vec<Medication>,

    /// Free-text reason this revision was created
    pub reason: String,
}

impl Snapshot {
    /// Create a new snapshot
    pub fn new(date: DateTime<Utc>, meds: Vec<Medication>, reason: impl Into<String>) -> Self {
        Self {
            date,
            meds,
            reason: reason.into(),
        }
    }
}
