//! Medication list diff engine.
//!
//! Reconciles two medication lists by case-insensitive name and reports,
//! per medication, whether it was added, removed, or changed (and on
//! which fields). This crate depends on no other workspace crate; the
//! history navigator builds on top of it.
//!
//! ## Entry point
//!
//! ```
//! use medrev_diff::{diff_med_lists, Medication};
//!
//! let before = vec![Medication::new("par", "2", vec!["08:34".to_string()])];
//! let after = vec![
//!     Medication::new("par", "2", vec!["08:34".to_string()]),
//!     Medication::new("yu", "2", vec!["16:59".to_string(), "20:59".to_string()]),
//! ];
//! let diff = diff_med_lists(&before, &after)?;
//! assert_eq!(diff.added.len(), 1);
//! assert_eq!(diff.added[0].name, "yu");
//! # Ok::<(), medrev_diff::DiffError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical structured output,
//!   independent of input list order.
//! - **Partition**: a medication key appears in at most one of
//!   added/removed/changed.
//! - **Order-significant times**: the same intake times in a different
//!   order are reported as a change on `times`.
//! - **Strict identity**: duplicate case-insensitive names within one
//!   list are rejected, never silently resolved.

pub mod engine;
pub mod errors;
pub mod model;

pub use engine::diff_med_lists;
pub use errors::{DiffError, Result, Side};
pub use model::{ChangedField, ChangedMedication, MedListDiff, Medication};
