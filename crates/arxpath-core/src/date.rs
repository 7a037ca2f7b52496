//! Submission-date resolution from the identifier's YYMM token.

use crate::error::ConvertError;
use crate::ident::ParsedIdentifier;

/// Pivot for two-digit years in flat legacy identifiers: `YY >= 70` means
/// 19YY, otherwise 20YY. The flat scheme ran 1991-2007, so the boundary is a
/// fixed historical fact, not a tunable.
const LEGACY_CENTURY_PIVOT: u16 = 70;

/// Fully disambiguated submission date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionDate {
    /// Four-digit year, never a raw two-digit value.
    pub year: u16,
    /// Month 1-12.
    pub month: u8,
}

/// Derives the submission date from a parsed identifier.
///
/// Dotted identifiers only exist from 2007 onward, so their year is always
/// `2000 + YY`. Flat and categorized legacy identifiers use the century
/// pivot. Fails with [`ConvertError::InvalidDate`] when the month is out of
/// range.
pub fn resolve(parsed: &ParsedIdentifier) -> Result<SubmissionDate, ConvertError> {
    let yymm = parsed.yymm();
    // The shape matchers guarantee four leading digits.
    let yy: u16 = yymm[..2].parse().unwrap_or(0);
    let month: u32 = yymm[2..4].parse().unwrap_or(0);

    if !(1..=12).contains(&month) {
        return Err(ConvertError::InvalidDate {
            id: parsed.raw_id.clone(),
            month,
        });
    }

    let year = if parsed.is_dotted() || yy < LEGACY_CENTURY_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    };

    Ok(SubmissionDate {
        year,
        month: month as u8,
    })
}
