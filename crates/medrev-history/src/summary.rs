//! Human-readable summary renderer for medication list diffs.

use medrev_diff::{MedListDiff, Medication};

/// Render a human-readable summary of a [`MedListDiff`].
///
/// A pure projection of the diff: reproducible from it without
/// re-running the engine. One line per category: added names followed by
/// "was added", removed names followed by "was removed", and each
/// changed medication as "name: Field, Field" with title-cased field
/// labels.
pub fn render_summary(diff: &MedListDiff) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !diff.added.is_empty() {
        lines.push(format!("{} was added", names(&diff.added)));
    }
    if !diff.removed.is_empty() {
        lines.push(format!("{} was removed", names(&diff.removed)));
    }
    for change in &diff.changed {
        let fields: Vec<&str> = change.fields.iter().map(|f| f.label()).collect();
        lines.push(format!("{}: {}", change.name, fields.join(", ")));
    }

    if lines.is_empty() {
        return "No changes".to_string();
    }
    lines.join("\n")
}

/// Join display names with ", "
fn names(meds: &[Medication]) -> String {
    meds.iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
