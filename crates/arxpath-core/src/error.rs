//! Per-input error taxonomy for identifier conversion.

use thiserror::Error;

/// Errors a single input can fail with. Both are permanent for that input:
/// batch drivers report them and keep going, single-URL runs abort.
///
/// Category lookup failures are not represented here; the resolver always
/// degrades to the default category instead of surfacing them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Input matches none of the three known identifier shapes.
    #[error("unrecognized arXiv identifier format: {input}")]
    UnrecognizedFormat { input: String },

    /// The identifier's YYMM token names a month outside 1-12.
    #[error("invalid submission date in {id}: month {month} out of range")]
    InvalidDate { id: String, month: u32 },
}
