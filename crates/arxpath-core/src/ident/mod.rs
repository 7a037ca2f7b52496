//! Identifier parsing: classify an arXiv link or bare identifier into one of
//! the three known shapes and extract its parts.
//!
//! Shapes, tried in order:
//! - dotted modern (`2406.18629`), no embedded category
//! - flat legacy (`9507001`), no embedded category
//! - categorized legacy (`acc-phys/9507001`), category embedded in the slug

mod link;
mod shapes;

use crate::error::ConvertError;

/// Version suffix assumed when a link carries none.
const DEFAULT_VERSION: &str = "v1";

/// A recognized arXiv identifier.
///
/// `raw_id` keeps the exact digit/dot structure of the source (dotted ids keep
/// their dot, flat ids their digit run); the path builder relies on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier {
    /// Identifier without category prefix or version suffix, e.g. `2406.18629`.
    pub raw_id: String,
    /// Category slug embedded in the link, only for categorized legacy ids.
    pub category_hint: Option<String>,
    /// Version suffix including the `v`, defaulting to `v1`.
    pub version: String,
}

impl ParsedIdentifier {
    /// The 4-character year-month token the identifier starts with.
    pub fn yymm(&self) -> &str {
        &self.raw_id[..4]
    }

    /// True for dotted modern identifiers.
    pub fn is_dotted(&self) -> bool {
        self.raw_id.contains('.')
    }
}

/// Parses a PDF link or bare identifier into a [`ParsedIdentifier`].
///
/// Fails with [`ConvertError::UnrecognizedFormat`] when the input matches
/// none of the three shapes.
pub fn parse(input: &str) -> Result<ParsedIdentifier, ConvertError> {
    let unrecognized = || ConvertError::UnrecognizedFormat {
        input: input.to_string(),
    };
    let ident = link::identifier_from_input(input).ok_or_else(unrecognized)?;

    if let Some(caps) = shapes::DOTTED.captures(&ident) {
        return Ok(ParsedIdentifier {
            raw_id: caps[1].to_string(),
            category_hint: None,
            version: version_or_default(caps.get(2).map(|m| m.as_str())),
        });
    }
    if let Some(caps) = shapes::FLAT.captures(&ident) {
        return Ok(ParsedIdentifier {
            raw_id: caps[1].to_string(),
            category_hint: None,
            version: version_or_default(caps.get(2).map(|m| m.as_str())),
        });
    }
    if let Some(caps) = shapes::CATEGORIZED.captures(&ident) {
        let slug = caps[1].to_ascii_lowercase();
        // Subclassed slugs (math.AG) are not trusted as a category hint; the
        // resolution chain falls through to its later sources for those.
        let category_hint = if slug.contains('.') { None } else { Some(slug) };
        return Ok(ParsedIdentifier {
            raw_id: caps[2].to_string(),
            category_hint,
            version: version_or_default(caps.get(3).map(|m| m.as_str())),
        });
    }

    Err(unrecognized())
}

fn version_or_default(suffix: Option<&str>) -> String {
    suffix.unwrap_or(DEFAULT_VERSION).to_string()
}
