//! Bucket path construction.
//!
//! Two layouts exist in the bucket: submissions through March 2007 live
//! under their subject category, later ones under a unified `arxiv/arxiv`
//! prefix. The YYMM path component is always the identifier's original
//! token, never recomputed from the resolved year.

use crate::date::SubmissionDate;
use crate::ident::ParsedIdentifier;

/// Last (year, month) stored under the category layout.
const CATEGORY_LAYOUT_CUTOFF: (u16, u8) = (2007, 3);

/// Which of the two bucket layouts an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    /// Through March 2007: path includes the subject category.
    Categorized,
    /// April 2007 onward: fixed `arxiv/arxiv` prefix, no category needed.
    Unified,
}

/// Layout with the data the path actually needs; the unified branch never
/// requires a category, so callers can skip resolving one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Categorized(String),
    Unified,
}

/// Selects the era for an identifier.
///
/// Dotted identifiers from the 2007 transition window are a fixed exception:
/// the bucket stores them under the unified layout even for months at or
/// before the cutoff (observed for the `0703.NNNN` range).
pub fn era_for(parsed: &ParsedIdentifier, date: &SubmissionDate) -> Era {
    if in_transition_window(parsed) {
        return Era::Unified;
    }
    if (date.year, date.month) <= CATEGORY_LAYOUT_CUTOFF {
        Era::Categorized
    } else {
        Era::Unified
    }
}

/// Assembles the final `gs://` path. Output is lowercased to match stored
/// object naming.
pub fn build(bucket: &str, parsed: &ParsedIdentifier, layout: &Layout) -> String {
    let yymm = parsed.yymm();
    let id = object_id(parsed);
    let version = &parsed.version;
    let path = match layout {
        Layout::Categorized(category) => {
            format!("gs://{bucket}/arxiv/{category}/{yymm}/{id}{version}.pdf")
        }
        Layout::Unified => format!("gs://{bucket}/arxiv/arxiv/{yymm}/{id}{version}.pdf"),
    };
    path.to_ascii_lowercase()
}

/// The identifier as it appears in object names. Dotted identifiers keep
/// their dot, flat identifiers their raw digit run; the transition window is
/// the one exception, stored as a flat-style digit run with the dot dropped.
fn object_id(parsed: &ParsedIdentifier) -> String {
    if in_transition_window(parsed) {
        parsed.raw_id.replace('.', "")
    } else {
        parsed.raw_id.clone()
    }
}

/// True for dotted identifiers minted in 2007, the year the dotted scheme
/// replaced the legacy one. Their stored object names predate the final
/// naming convention. Fixed table entry, not a general rule.
fn in_transition_window(parsed: &ParsedIdentifier) -> bool {
    parsed.is_dotted() && parsed.raw_id.starts_with("07")
}
