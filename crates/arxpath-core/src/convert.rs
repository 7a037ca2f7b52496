//! Conversion façade: one URL (or bare identifier) in, one `gs://` path out.

use crate::category::{self, LocalMetadata, RemoteCategory};
use crate::error::ConvertError;
use crate::gcs_path::{self, Era, Layout};
use crate::{date, ident};

/// One batch entry: the original input paired with its outcome. Order in the
/// returned vector matches input order.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub input: String,
    pub result: Result<String, ConvertError>,
}

/// Stateless converter over a bucket and a pair of category collaborators.
/// Each conversion is independent; resolving the same input twice yields the
/// same path.
pub struct Converter<'a> {
    bucket: &'a str,
    default_category: &'a str,
    local: &'a dyn LocalMetadata,
    remote: &'a dyn RemoteCategory,
}

impl<'a> Converter<'a> {
    pub fn new(
        bucket: &'a str,
        default_category: &'a str,
        local: &'a dyn LocalMetadata,
        remote: &'a dyn RemoteCategory,
    ) -> Self {
        Self {
            bucket,
            default_category,
            local,
            remote,
        }
    }

    /// Resolves a single link or identifier to its bucket path.
    ///
    /// The category chain only runs when the era actually puts the category
    /// in the path; unified-layout inputs never touch the collaborators.
    pub fn convert(&self, input: &str) -> Result<String, ConvertError> {
        let parsed = ident::parse(input)?;
        let submitted = date::resolve(&parsed)?;

        let layout = match gcs_path::era_for(&parsed, &submitted) {
            Era::Unified => Layout::Unified,
            Era::Categorized => {
                let source =
                    category::resolve(&parsed, self.local, self.remote, self.default_category);
                tracing::debug!(
                    "category for {}: {} (via {})",
                    parsed.raw_id,
                    source.category(),
                    source.provenance()
                );
                Layout::Categorized(source.category().to_string())
            }
        };

        Ok(gcs_path::build(self.bucket, &parsed, &layout))
    }

    /// Converts a sequence of inputs, one result per input, in input order.
    /// Individual failures are recorded and never abort the rest.
    pub fn convert_batch<I, S>(&self, inputs: I) -> Vec<BatchItem>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|input| {
                let input = input.as_ref().to_string();
                let result = self.convert(&input);
                if let Err(err) = &result {
                    tracing::warn!("cannot convert {}: {}", input, err);
                }
                BatchItem { input, result }
            })
            .collect()
    }
}
