//! Medication list diff computation engine.
//!
//! The core entry point is [`diff_med_lists`], which reconciles two
//! medication lists by case-insensitive name and produces a
//! [`MedListDiff`].

use std::collections::BTreeMap;

use crate::errors::{DiffError, Result, Side};
use crate::model::{ChangedField, ChangedMedication, MedListDiff, Medication};

/// Index one list's medications by lower-cased name.
///
/// # Errors
///
/// - `InvalidMedication` — a record's name is missing or blank
/// - `DuplicateName` — two records share a case-insensitive name
fn index_by_key(side: Side, meds: &[Medication]) -> Result<BTreeMap<String, &Medication>> {
    let mut map: BTreeMap<String, &Medication> = BTreeMap::new();
    for (index, med) in meds.iter().enumerate() {
        if med.name.trim().is_empty() {
            return Err(DiffError::InvalidMedication {
                side,
                index,
                reason: "name is missing or blank".to_string(),
            });
        }
        let key = med.key();
        if map.insert(key.clone(), med).is_some() {
            return Err(DiffError::DuplicateName { side, name: key });
        }
    }
    Ok(map)
}

/// Compare a matched pair and name exactly the fields that differ.
///
/// `dosage` compares by exact string equality, `times` by element-wise
/// ordered equality (reordering counts as a change), `notes` by string
/// equality (absent and empty are already unified at the model layer).
fn changed_fields(before: &Medication, after: &Medication) -> Vec<ChangedField> {
    let mut fields = Vec::new();
    if before.dosage != after.dosage {
        fields.push(ChangedField::Dosage);
    }
    if before.times != after.times {
        fields.push(ChangedField::Times);
    }
    if before.notes != after.notes {
        fields.push(ChangedField::Notes);
    }
    fields
}

/// Compute the structured reconciliation of two medication lists.
///
/// Pure function of its inputs: no side effects, deterministic, and
/// insensitive to the order of either input list. Keys present only in
/// `before` land in `removed`, keys present only in `after` land in
/// `added`, and keys present in both with at least one differing field
/// land in `changed`. A key never appears in more than one collection.
///
/// # Errors
///
/// - `InvalidMedication` — either list contains a record without a name
/// - `DuplicateName` — either list contains two records with the same
///   case-insensitive name (strict mode, no last-wins resolution)
pub fn diff_med_lists(before: &[Medication], after: &[Medication]) -> Result<MedListDiff> {
    let before_map = index_by_key(Side::Before, before)?;
    let after_map = index_by_key(Side::After, after)?;

    let mut added: Vec<Medication> = Vec::new();
    let mut removed: Vec<Medication> = Vec::new();
    let mut changed: Vec<ChangedMedication> = Vec::new();

    // BTreeMap iteration is ordered by key, so each output collection
    // comes out sorted by lower-cased name.
    for (key, old) in &before_map {
        match after_map.get(key) {
            None => removed.push((*old).clone()),
            Some(new) => {
                let fields = changed_fields(old, new);
                if !fields.is_empty() {
                    changed.push(ChangedMedication {
                        name: new.name.clone(),
                        before: (*old).clone(),
                        after: (*new).clone(),
                        fields,
                    });
                }
            }
        }
    }

    for (key, new) in &after_map {
        if !before_map.contains_key(key) {
            added.push((*new).clone());
        }
    }

    tracing::debug!(
        added = added.len(),
        removed = removed.len(),
        changed = changed.len(),
        "computed medication list diff"
    );

    Ok(MedListDiff {
        added,
        removed,
        changed,
    })
}
