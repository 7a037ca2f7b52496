//! Local metadata snapshots: line-delimited JSON paper records.
//!
//! Records come from two collectors with slightly different shapes: the OAI
//! snapshot stores `categories` as a space-separated string, the daily
//! collector as a list plus an explicit `primary_category`. Both are
//! tolerated.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::LocalMetadata;

#[derive(Debug, Deserialize)]
struct SnapshotRecord {
    id: String,
    #[serde(default)]
    primary_category: Option<String>,
    #[serde(default)]
    categories: Option<Categories>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Categories {
    Text(String),
    List(Vec<String>),
}

impl SnapshotRecord {
    fn primary(&self) -> Option<String> {
        if let Some(primary) = &self.primary_category {
            if !primary.is_empty() {
                return Some(primary.clone());
            }
        }
        match &self.categories {
            Some(Categories::Text(s)) => s.split_whitespace().next().map(str::to_string),
            Some(Categories::List(v)) => v.first().cloned(),
            None => None,
        }
    }
}

/// In-memory index over snapshot records, keyed by version-stripped
/// identifier.
#[derive(Debug, Default)]
pub struct SnapshotIndex {
    by_id: HashMap<String, String>,
}

impl SnapshotIndex {
    /// Builds an index from line-delimited JSON. Malformed lines and records
    /// without a category are skipped; a sparse snapshot is still usable.
    pub fn from_reader(reader: impl BufRead) -> Self {
        let mut by_id = HashMap::new();
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    tracing::warn!("skipping unreadable snapshot line: {}", err);
                    continue;
                }
            };
            let Ok(record) = serde_json::from_str::<SnapshotRecord>(&line) else {
                continue;
            };
            if let Some(category) = record.primary() {
                insert_record(&mut by_id, &record.id, category);
            }
        }
        SnapshotIndex { by_id }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("cannot open metadata snapshot {}", path.display()))?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Loads the first readable snapshot from an ordered candidate list.
    /// Missing files are normal (snapshots are optional); an empty index is
    /// returned when none can be read.
    pub fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths {
            match Self::load(path) {
                Ok(index) => {
                    tracing::debug!(
                        "loaded {} metadata records from {}",
                        index.len(),
                        path.display()
                    );
                    return index;
                }
                Err(err) => tracing::debug!("skipping metadata snapshot: {:#}", err),
            }
        }
        SnapshotIndex::default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl LocalMetadata for SnapshotIndex {
    fn lookup(&self, identifier: &str) -> Option<String> {
        self.by_id.get(strip_version(identifier)).cloned()
    }
}

/// Indexes one record. Legacy collectors keep the category slug in the id
/// (`hep-th/9601001`) while lookups come in by the bare numeric identifier,
/// so slug-prefixed ids are indexed under the numeric tail as well.
fn insert_record(by_id: &mut HashMap<String, String>, id: &str, category: String) {
    let key = strip_version(id);
    if let Some((_, tail)) = key.rsplit_once('/') {
        by_id.insert(tail.to_string(), category.clone());
    }
    by_id.insert(key.to_string(), category);
}

/// Drops a trailing `vN` version suffix so lookups match records stored with
/// or without one.
fn strip_version(id: &str) -> &str {
    if let Some(pos) = id.rfind('v') {
        let tail = &id[pos + 1..];
        if pos > 0 && !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
            return &id[..pos];
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SNAPSHOT: &str = r#"{"id":"2406.18629","categories":"cs.CL cs.AI","title":"x"}
{"id":"9507001v2","primary_category":"acc-phys","categories":["acc-phys"]}
{"id":"hep-th/9601001v3","primary_category":"hep-th"}
not json at all
{"id":"0703.0003","categories":[]}
"#;

    fn index() -> SnapshotIndex {
        SnapshotIndex::from_reader(Cursor::new(SNAPSHOT))
    }

    #[test]
    fn lookup_prefers_primary_category() {
        assert_eq!(index().lookup("9507001").as_deref(), Some("acc-phys"));
    }

    #[test]
    fn lookup_falls_back_to_first_of_categories_string() {
        assert_eq!(index().lookup("2406.18629").as_deref(), Some("cs.CL"));
    }

    #[test]
    fn lookup_ignores_version_suffix() {
        assert_eq!(index().lookup("2406.18629v1").as_deref(), Some("cs.CL"));
        assert_eq!(index().lookup("9507001v9").as_deref(), Some("acc-phys"));
    }

    #[test]
    fn slug_prefixed_record_found_by_bare_identifier() {
        // Daily-collector records keep the legacy slug in the id; lookups
        // arrive with the bare numeric identifier.
        assert_eq!(index().lookup("9601001").as_deref(), Some("hep-th"));
        assert_eq!(index().lookup("9601001v3").as_deref(), Some("hep-th"));
        assert_eq!(
            index().lookup("hep-th/9601001").as_deref(),
            Some("hep-th")
        );
    }

    #[test]
    fn malformed_lines_and_empty_categories_are_skipped() {
        let idx = index();
        // hep-th/9601001 is indexed under both its full and bare ids.
        assert_eq!(idx.len(), 4);
        assert_eq!(idx.lookup("0703.0003"), None);
    }

    #[test]
    fn unreadable_lines_are_skipped_not_fatal() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(br#"{"id":"9507001","primary_category":"acc-phys"}"#);
        bytes.push(b'\n');
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(br#"{"id":"2406.18629","primary_category":"cs.CL"}"#);
        bytes.push(b'\n');

        let idx = SnapshotIndex::from_reader(Cursor::new(bytes));
        assert_eq!(idx.lookup("9507001").as_deref(), Some("acc-phys"));
        assert_eq!(idx.lookup("2406.18629").as_deref(), Some("cs.CL"));
    }

    #[test]
    fn load_first_returns_empty_index_when_nothing_readable() {
        let idx = SnapshotIndex::load_first(&[PathBuf::from("/nonexistent/snapshot.json")]);
        assert!(idx.is_empty());
        assert_eq!(idx.lookup("9507001"), None);
    }

    #[test]
    fn load_first_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, SNAPSHOT).unwrap();
        let idx = SnapshotIndex::load_first(&[path]);
        assert_eq!(idx.lookup("9507001").as_deref(), Some("acc-phys"));
    }

    #[test]
    fn strip_version_edge_cases() {
        assert_eq!(strip_version("9507001v2"), "9507001");
        assert_eq!(strip_version("2406.18629"), "2406.18629");
        assert_eq!(strip_version("v2"), "v2");
        assert_eq!(strip_version("9507001v"), "9507001v");
    }
}
