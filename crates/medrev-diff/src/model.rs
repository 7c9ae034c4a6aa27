//! Diff input and output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Diff collections are kept sorted by identity key for deterministic
//! serialization.

use serde::{Deserialize, Serialize};

/// A single medication entry within one snapshot's list.
///
/// Medications are value objects: the lower-cased `name` is the only
/// identity they carry, and only within a single list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    /// Display name; its lower-cased form is the identity key used to
    /// match entries across snapshots
    pub name: String,

    /// Dosage as free text (e.g. "2", "500mg")
    pub dosage: String,

    /// Intake times of day, in display order. Order is significant:
    /// the same times in a different order count as a change.
    #[serde(default)]
    pub times: Vec<String>,

    /// Free-text notes. Absent and empty are equivalent; deserialization
    /// defaults a missing field to the empty string.
    #[serde(default)]
    pub notes: String,
}

impl Medication {
    /// Create a new medication with empty notes
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        times: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            times,
            notes: String::new(),
        }
    }

    /// The case-insensitive identity key for this medication
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A field of [`Medication`] that can differ between two revisions.
///
/// Serializes to the verbatim lowercase field name (`dosage`, `times`,
/// `notes`) consumed by presentation collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangedField {
    Dosage,
    Times,
    Notes,
}

impl ChangedField {
    /// The serialized lowercase field name
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangedField::Dosage => "dosage",
            ChangedField::Times => "times",
            ChangedField::Notes => "notes",
        }
    }

    /// Title-cased label for human-readable summaries
    pub fn label(&self) -> &'static str {
        match self {
            ChangedField::Dosage => "Dosage",
            ChangedField::Times => "Times",
            ChangedField::Notes => "Notes",
        }
    }
}

/// A medication present in both lists whose fields differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedMedication {
    /// Display name, with the casing of the after side
    pub name: String,
    /// The full record from the before list
    pub before: Medication,
    /// The full record from the after list
    pub after: Medication,
    /// The non-empty set of fields that differ
    pub fields: Vec<ChangedField>,
}

/// The structured reconciliation of two medication lists.
///
/// Derived, never stored: a fresh value is computed for each
/// (before, after) pair and owned by the call that produced it.
/// A medication key never appears in more than one of the three
/// collections. All collections are sorted by lower-cased name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedListDiff {
    /// Medications present in after, absent in before
    pub added: Vec<Medication>,
    /// Medications present in before, absent in after
    pub removed: Vec<Medication>,
    /// Medications present in both with at least one differing field
    pub changed: Vec<ChangedMedication>,
}

impl MedListDiff {
    /// True if the two lists were identical under the diff semantics
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
