use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Bucket the public arXiv dataset lives in.
const DEFAULT_BUCKET: &str = "arxiv-dataset";
/// Category used when every resolution source misses.
const DEFAULT_CATEGORY: &str = "cs.LG";
/// arXiv query API endpoint for the remote category lookup.
const DEFAULT_API_ENDPOINT: &str = "http://export.arxiv.org/api/query";

/// Global configuration loaded from `~/.config/arxpath/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// GCS bucket name used in emitted paths.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Fallback category when local metadata, link, and API all miss.
    #[serde(default = "default_category")]
    pub default_category: String,
    /// Ordered metadata snapshot candidates; the first readable one is used.
    #[serde(default = "default_metadata_files")]
    pub metadata_files: Vec<PathBuf>,
    /// arXiv query API endpoint.
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    /// Timeout for one API lookup, in seconds. Kept short: a miss just means
    /// the default category.
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_metadata_files() -> Vec<PathBuf> {
    vec![
        PathBuf::from("metadata/arxiv-metadata-oai-snapshot-202508.json"),
        PathBuf::from("metadata/arxiv-metadata-oai-snapshot.json"),
    ]
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_api_timeout_secs() -> u64 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            default_category: default_category(),
            metadata_files: default_metadata_files(),
            api_endpoint: default_api_endpoint(),
            api_timeout_secs: default_api_timeout_secs(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("arxpath")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AppConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bucket, "arxiv-dataset");
        assert_eq!(cfg.default_category, "cs.LG");
        assert_eq!(cfg.metadata_files.len(), 2);
        assert_eq!(cfg.api_endpoint, "http://export.arxiv.org/api/query");
        assert_eq!(cfg.api_timeout_secs, 5);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.bucket, cfg.bucket);
        assert_eq!(parsed.default_category, cfg.default_category);
        assert_eq!(parsed.metadata_files, cfg.metadata_files);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            bucket = "my-mirror"
            default_category = "hep-th"
            metadata_files = ["/data/snapshot.json"]
            api_timeout_secs = 2
        "#;
        let cfg: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.bucket, "my-mirror");
        assert_eq!(cfg.default_category, "hep-th");
        assert_eq!(
            cfg.metadata_files,
            vec![PathBuf::from("/data/snapshot.json")]
        );
        assert_eq!(cfg.api_timeout_secs, 2);
        assert_eq!(cfg.api_endpoint, "http://export.arxiv.org/api/query");
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.bucket, "arxiv-dataset");
        assert_eq!(cfg.default_category, "cs.LG");
    }
}
