//! Presentation capability seam.
//!
//! Table rendering, highlight styling, and document export are owned by
//! external presentation collaborators; they consume a [`RevisionView`]
//! read-only and feed nothing back into the core. The traits here are
//! the contract those collaborators implement. [`MarkdownRenderer`] and
//! [`PlainTextExporter`] are the in-tree reference implementations,
//! producing a plain Markdown artifact instead of a DOM table or PDF.

use std::collections::BTreeMap;

use medrev_diff::{ChangedField, ChangedMedication, Medication};

use crate::errors::Result;
use crate::navigator::RevisionView;

/// A rendered, presentation-ready view of one revision.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRevision {
    /// One-line heading for the revision
    pub title: String,
    /// The rendered body (format is the renderer's choice)
    pub body: String,
}

/// Renders a selected revision into a presentation artifact.
pub trait RevisionRenderer {
    /// Render the view.
    ///
    /// # Errors
    ///
    /// Implementations surface their own rendering failures as
    /// [`crate::HistoryError`]; the core never retries.
    fn render(&self, view: &RevisionView) -> Result<RenderedRevision>;
}

/// Exports a rendered revision as a document.
pub trait RevisionExporter {
    /// Produce the document bytes for a rendered revision.
    ///
    /// # Errors
    ///
    /// Implementations surface their own export failures as
    /// [`crate::HistoryError`].
    fn export(&self, rendered: &RenderedRevision) -> Result<Vec<u8>>;
}

/// Markdown renderer for revision views.
///
/// Produces a heading with the revision date, the reason and summary,
/// and a medication table. Rows are marked `+` (added), `-` (removed),
/// or `~` (changed); on changed rows the differing cells are bolded.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    fn row(marker: &str, med: &Medication, change: Option<&ChangedMedication>) -> String {
        let cell = |field: ChangedField, value: String| -> String {
            match change {
                Some(ch) if ch.fields.contains(&field) => format!("**{}**", value),
                _ => value,
            }
        };
        format!(
            "| {} | {} | {} | {} | {} |\n",
            marker,
            med.name,
            cell(ChangedField::Dosage, med.dosage.clone()),
            cell(ChangedField::Times, med.times.join(", ")),
            cell(ChangedField::Notes, med.notes.clone()),
        )
    }
}

impl RevisionRenderer for MarkdownRenderer {
    fn render(&self, view: &RevisionView) -> Result<RenderedRevision> {
        let title = format!(
            "Revision {} ({})",
            view.index,
            view.snapshot.date.format("%Y-%m-%d")
        );

        let added: BTreeMap<String, &Medication> =
            view.diff.added.iter().map(|m| (m.key(), m)).collect();
        let changed: BTreeMap<String, &ChangedMedication> = view
            .diff
            .changed
            .iter()
            .map(|c| (c.after.key(), c))
            .collect();

        let mut body = String::new();
        body.push_str(&format!("**Reason**: {}\n\n", view.snapshot.reason));
        for line in view.summary.lines() {
            body.push_str(&format!("> {}\n", line));
        }
        body.push('\n');

        body.push_str("| | Name | Dosage | Times | Notes |\n");
        body.push_str("|---|---|---|---|---|\n");
        for med in &view.snapshot.meds {
            let key = med.key();
            if added.contains_key(&key) {
                body.push_str(&Self::row("+", med, None));
            } else if let Some(change) = changed.get(&key) {
                body.push_str(&Self::row("~", med, Some(*change)));
            } else {
                body.push_str(&Self::row("", med, None));
            }
        }
        for med in &view.diff.removed {
            body.push_str(&Self::row("-", med, None));
        }

        Ok(RenderedRevision { title, body })
    }
}

/// Plain-text document exporter: title, blank line, body, as UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExporter;

impl RevisionExporter for PlainTextExporter {
    fn export(&self, rendered: &RenderedRevision) -> Result<Vec<u8>> {
        let doc = format!("{}\n\n{}", rendered.title, rendered.body);
        Ok(doc.into_bytes())
    }
}
