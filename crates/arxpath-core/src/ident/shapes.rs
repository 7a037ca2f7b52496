//! Pattern matchers for the three known identifier shapes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Modern dotted identifier: `2406.18629`, optional `v1` suffix.
pub(crate) static DOTTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4}\.[0-9]{4,5})(v[0-9]+)?$").unwrap());

/// Flat legacy identifier: `9507001`, optional `v2` suffix.
pub(crate) static FLAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{7})(v[0-9]+)?$").unwrap());

/// Categorized legacy identifier: `acc-phys/9507001`, optional version suffix.
/// The slug may carry a subclass dot (`math.AG/0601001`).
pub(crate) static CATEGORIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z.-]*)/([0-9]{7})(v[0-9]+)?$").unwrap());
