//! Remote category lookup against the arXiv metadata API.
//!
//! One GET per identifier, no internal retries: callers degrade to the
//! default category on any failure, so a quick negative answer beats a slow
//! positive one.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

use super::RemoteCategory;

/// `<arxiv:primary_category term="hep-th" .../>` in the Atom response.
static PRIMARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<arxiv:primary_category[^>]*term="([^"]+)""#).unwrap());

/// Plain `<category term="..."/>` entries, used when no primary is present.
static CATEGORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<category[^>]*term="([^"]+)""#).unwrap());

/// Client for the arXiv query API (`export.arxiv.org/api/query`).
#[derive(Debug, Clone)]
pub struct ArxivApi {
    endpoint: String,
    timeout: Duration,
}

impl ArxivApi {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn fetch_feed(&self, identifier: &str) -> Result<String> {
        let url = format!("{}?id_list={}", self.endpoint, identifier);
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&url).context("invalid API URL")?;
        easy.follow_location(true)?;
        easy.useragent("arxpath/0.1 (arXiv-to-GCS path resolver)")?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform().context("category query failed")?;
        }

        let code = easy.response_code().context("no response code")?;
        if !(200..300).contains(&code) {
            anyhow::bail!("GET {} returned HTTP {}", url, code);
        }

        String::from_utf8(body).context("API response is not UTF-8")
    }
}

impl RemoteCategory for ArxivApi {
    fn lookup(&self, identifier: &str) -> Result<Option<String>> {
        let feed = self.fetch_feed(identifier)?;
        Ok(extract_category(&feed))
    }
}

/// Pulls the primary category out of an Atom feed body, if any entry carries
/// one.
fn extract_category(feed: &str) -> Option<String> {
    PRIMARY_RE
        .captures(feed)
        .or_else(|| CATEGORY_RE.captures(feed))
        .map(|caps| caps[1].to_string())
}

/// Remote capability that never answers, for offline runs. Misses are normal
/// results, so the chain simply moves on to the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteDisabled;

impl RemoteCategory for RemoteDisabled {
    fn lookup(&self, _identifier: &str) -> Result<Option<String>> {
        Ok(None)
    }
}
