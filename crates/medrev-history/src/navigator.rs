//! Revision selection: pairs a navigable snapshot with the diff against
//! its predecessor.

use medrev_diff::{diff_med_lists, MedListDiff};
use serde::Serialize;

use crate::errors::{HistoryError, Result};
use crate::snapshot::Snapshot;
use crate::store::RevisionStore;
use crate::summary::render_summary;

/// The result of selecting one revision: the "after" snapshot (carrying
/// its own date and reason), the diff against the previous snapshot, and
/// a human-readable summary.
///
/// Owned by the call that produced it; consumed read-only by
/// presentation collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevisionView {
    /// Store index of the selected revision
    pub index: usize,
    /// The selected (after) snapshot
    pub snapshot: Snapshot,
    /// Structured diff against the previous snapshot
    pub diff: MedListDiff,
    /// Derived human-readable summary of the diff
    pub summary: String,
}

/// Select the revision at `index` and compute its diff against the
/// previous snapshot.
///
/// Idempotent: calling twice with the same index yields structurally
/// equal views. The valid index range is `1..store.len()`; index 0 is
/// the baseline and is never diffed against.
///
/// # Errors
///
/// - `IndexOutOfRange` — `index` is 0 or `>= store.len()`
/// - `Diff` — either snapshot's medication list violates the diff
///   engine's preconditions
pub fn select_revision(store: &RevisionStore, index: usize) -> Result<RevisionView> {
    let len = store.len();
    if index == 0 || index >= len {
        return Err(HistoryError::IndexOutOfRange { index, len });
    }

    let previous = store.get(index - 1)?;
    let current = store.get(index)?;

    let diff = diff_med_lists(&previous.meds, &current.meds)?;
    let summary = render_summary(&diff);

    tracing::debug!(index, summary = %summary, "revision selected");

    Ok(RevisionView {
        index,
        snapshot: current.clone(),
        diff,
        summary,
    })
}
