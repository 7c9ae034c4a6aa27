//! Medication revision history navigator.
//!
//! This crate owns the history/version model built on top of the
//! `medrev-diff` engine:
//! - `Snapshot` and the validated, append-only `RevisionStore`
//! - Revision selection pairing a snapshot with its diff and summary
//! - Lazy listing of navigable revisions for picker construction
//! - The presentation capability seam (render/export traits) with a
//!   Markdown reference implementation
//!
//! The core is synchronous and stateless across calls: no I/O, no
//! shared mutable state, and the store is read-only once constructed.
//! Persistence of the snapshot sequence belongs to an external
//! collaborator; [`RevisionStore::from_snapshots`] is the injection
//! point.

pub mod errors;
pub mod logging;
pub mod navigator;
pub mod render;
pub mod snapshot;
pub mod store;
pub mod summary;

pub use errors::{HistoryError, Result};
pub use navigator::{select_revision, RevisionView};
pub use render::{
    MarkdownRenderer, PlainTextExporter, RenderedRevision, RevisionExporter, RevisionRenderer,
};
pub use snapshot::Snapshot;
pub use store::{RevisionRef, RevisionStore};
pub use summary::render_summary;

// Re-export the diff vocabulary so collaborators depend on one crate.
pub use medrev_diff::{ChangedField, ChangedMedication, MedListDiff, Medication};
