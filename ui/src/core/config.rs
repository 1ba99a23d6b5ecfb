//! Application configuration supplied by the platform shell.

use serde::{Deserialize, Serialize};

use super::selection::DedupePolicy;
use super::table::Category;

/// What happens to a selected name once the active dataset no longer has it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingNamePolicy {
    /// Keep it selected (blank pivot column, no chart line).
    #[default]
    Retain,
    /// Drop it from the selection.
    Purge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 360,
            padding: 48,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub categories: Vec<Category>,
    pub default_category: Category,
    /// URL prefix (web) or directory (desktop) holding the CSV files.
    pub data_source: String,
    pub dedupe: DedupePolicy,
    pub missing_names: MissingNamePolicy,
    pub chart: ChartConfig,
}

impl AppConfig {
    /// Canada / USA toggle.
    pub fn countries() -> Self {
        Self {
            categories: vec![Category::Canada, Category::Usa],
            default_category: Category::Canada,
            data_source: String::new(),
            dedupe: DedupePolicy::default(),
            missing_names: MissingNamePolicy::default(),
            chart: ChartConfig::default(),
        }
    }

    /// Ontario female / male toggle.
    pub fn ontario() -> Self {
        Self {
            categories: vec![Category::OntarioFemale, Category::OntarioMale],
            default_category: Category::OntarioFemale,
            ..Self::countries()
        }
    }

    /// Parses a (possibly partial) JSON document; absent fields take their
    /// defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_source = source.into();
        self
    }

    /// Location of `category`'s CSV under `data_source`.
    pub fn dataset_location(&self, category: Category) -> String {
        let base = self.data_source.trim_end_matches('/');
        if base.is_empty() {
            category.file_name().to_string()
        } else {
            format!("{base}/{}", category.file_name())
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::countries()
    }
}
