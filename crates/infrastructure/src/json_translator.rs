//! Translator backed by a JSON key-to-text catalog.

use std::collections::HashMap;
use std::path::Path;

use roster_core::{AppError, AppResult};
use roster_domain::Translator;

/// Translator reading `{ "source text": "translated text" }` catalogs.
///
/// Keys missing from the catalog are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct JsonTranslator {
    entries: HashMap<String, String>,
}

impl JsonTranslator {
    /// Creates a translator from catalog entries.
    #[must_use]
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parses a JSON catalog.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|error| AppError::Validation(format!("invalid translation catalog: {error}")))
    }

    /// Reads a JSON catalog from disk.
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|error| {
            AppError::Internal(format!(
                "failed to read translation catalog '{}': {error}",
                path.display()
            ))
        })?;

        Self::from_json(contents.as_str())
    }

    /// Returns the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for JsonTranslator {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}
