use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{HistoryError, Result};
use crate::snapshot::Snapshot;

/// The ordered history of snapshots.
///
/// A validated, read-only wrapper over the snapshot sequence supplied by
/// the external persistence collaborator. Index 0 is the baseline (no
/// diff is computed against it); indices `1..len` are navigable
/// revisions. Construction enforces the store invariants, so every
/// `RevisionStore` in existence is non-empty and date-ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct RevisionStore {
    snapshots: Vec<Snapshot>,
}

impl RevisionStore {
    /// Build a store from an externally supplied snapshot sequence.
    ///
    /// # Errors
    ///
    /// - `EmptyStore` — the sequence has zero snapshots
    /// - `SnapshotOutOfOrder` — a snapshot is dated earlier than its
    ///   predecessor (dates must be non-decreasing)
    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> Result<Self> {
        if snapshots.is_empty() {
            return Err(HistoryError::EmptyStore);
        }
        for index in 1..snapshots.len() {
            if snapshots[index].date < snapshots[index - 1].date {
                return Err(HistoryError::SnapshotOutOfOrder { index });
            }
        }
        tracing::debug!(len = snapshots.len(), "revision store constructed");
        Ok(Self { snapshots })
    }

    /// Number of snapshots, baseline included
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The baseline snapshot (index 0)
    pub fn baseline(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    /// Get a snapshot by index.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Snapshot> {
        self.snapshots
            .get(index)
            .ok_or(HistoryError::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            })
    }

    /// The full snapshot sequence, baseline first
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Lazily list the navigable revisions as `(index, date)` handles,
    /// in store order.
    ///
    /// Used by presentation collaborators to build a revision picker.
    /// The iterator is restartable (call again for a fresh pass) and
    /// computes no diffs; diffs are computed only on selection.
    pub fn revisions(&self) -> impl Iterator<Item = RevisionRef> + '_ {
        self.snapshots
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, snapshot)| RevisionRef {
                index,
                date: snapshot.date,
            })
    }
}

/// A lightweight handle to one navigable revision: its index and date.
///
/// Carries no diff; selection computes that on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevisionRef {
    /// Store index of the revision (always >= 1)
    pub index: usize,
    /// Date of the revision's snapshot
    pub date: DateTime<Utc>,
}
