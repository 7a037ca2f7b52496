//! Subject-category resolution.
//!
//! A category is resolved through a strict priority chain: local metadata,
//! then the link-embedded slug, then the remote API, then a fixed default.
//! Each source is a probe returning `Option`; the first hit wins. Lookup
//! failures never escape this module: the chain always terminates with a
//! usable category.

mod local;
mod remote;

pub use local::SnapshotIndex;
pub use remote::{ArxivApi, RemoteDisabled};

use crate::ident::ParsedIdentifier;

/// Resolved category plus where it came from. Provenance is for diagnostics
/// only; path construction uses just the category value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySource {
    /// From a previously collected metadata snapshot.
    Local(String),
    /// From the category slug embedded in a legacy link.
    LinkEmbedded(String),
    /// From the arXiv metadata API.
    Remote(String),
    /// Fixed fallback when every other source misses.
    Default(String),
}

impl CategorySource {
    pub fn category(&self) -> &str {
        match self {
            CategorySource::Local(c)
            | CategorySource::LinkEmbedded(c)
            | CategorySource::Remote(c)
            | CategorySource::Default(c) => c,
        }
    }

    pub fn provenance(&self) -> &'static str {
        match self {
            CategorySource::Local(_) => "local",
            CategorySource::LinkEmbedded(_) => "link",
            CategorySource::Remote(_) => "remote",
            CategorySource::Default(_) => "default",
        }
    }
}

/// Local metadata capability: previously collected paper records keyed by
/// identifier. A miss is a normal negative result.
pub trait LocalMetadata {
    fn lookup(&self, identifier: &str) -> Option<String>;
}

/// Remote metadata capability. `Ok(None)` means the service answered but
/// knows no category; `Err` means transport or service failure. Both degrade
/// to the next source.
pub trait RemoteCategory {
    fn lookup(&self, identifier: &str) -> anyhow::Result<Option<String>>;
}

/// Runs the priority chain for one identifier.
pub fn resolve(
    parsed: &ParsedIdentifier,
    local: &dyn LocalMetadata,
    remote: &dyn RemoteCategory,
    default_category: &str,
) -> CategorySource {
    probe_local(parsed, local)
        .or_else(|| probe_link(parsed))
        .or_else(|| probe_remote(parsed, remote))
        .unwrap_or_else(|| CategorySource::Default(default_category.to_string()))
}

fn probe_local(parsed: &ParsedIdentifier, local: &dyn LocalMetadata) -> Option<CategorySource> {
    local.lookup(&parsed.raw_id).map(CategorySource::Local)
}

fn probe_link(parsed: &ParsedIdentifier) -> Option<CategorySource> {
    parsed
        .category_hint
        .clone()
        .map(CategorySource::LinkEmbedded)
}

fn probe_remote(parsed: &ParsedIdentifier, remote: &dyn RemoteCategory) -> Option<CategorySource> {
    match remote.lookup(&parsed.raw_id) {
        Ok(hit) => hit.map(CategorySource::Remote),
        Err(err) => {
            tracing::warn!("remote category lookup failed for {}: {:#}", parsed.raw_id, err);
            None
        }
    }
}
