//! Field allow-list consulted by the clause renderer.
//!
//! The standard list permits `username` and `email`. It is built once on
//! first use and never written afterwards, so it can be read from any thread
//! without coordination.
//!
//! Custom lists can be built in code or loaded from a JSON document:
//!
//! ```
//! use reify_lang::AllowList;
//!
//! let list = AllowList::from_json(r#"{"fields": ["id", "email"]}"#).unwrap();
//! assert!(list.contains("id"));
//! assert!(!list.contains("username"));
//! ```

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

/// Field names permitted by [`AllowList::standard`].
pub const STANDARD_FIELDS: [&str; 2] = ["username", "email"];

static STANDARD: LazyLock<AllowList> = LazyLock::new(|| AllowList::new(STANDARD_FIELDS));

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid allow-list document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid field name in allow-list: {0:?}")]
    InvalidField(String),
}

/// An immutable set of permitted field names.
///
/// Deserializing goes through the same field-name checks as
/// [`AllowList::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "AllowListConfig")]
pub struct AllowList {
    fields: BTreeSet<String>,
}

/// On-disk shape of an allow-list document.
#[derive(Deserialize)]
struct AllowListConfig {
    fields: Vec<String>,
}

impl TryFrom<AllowListConfig> for AllowList {
    type Error = ConfigError;

    fn try_from(config: AllowListConfig) -> Result<Self, Self::Error> {
        if let Some(bad) = config
            .fields
            .iter()
            .find(|f| f.is_empty() || f.chars().any(char::is_whitespace))
        {
            return Err(ConfigError::InvalidField(bad.clone()));
        }
        Ok(AllowList::new(config.fields))
    }
}

impl AllowList {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AllowList {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The process-wide standard list: `username` and `email`.
    pub fn standard() -> &'static AllowList {
        &STANDARD
    }

    /// Loads a list from a document of the form `{"fields": [...]}`.
    ///
    /// Every field name must be non-empty and free of whitespace. An empty
    /// `fields` array is accepted and yields a list that permits nothing.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: AllowListConfig = serde_json::from_str(document)?;
        AllowList::try_from(config)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    /// Permitted fields in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        AllowList::standard().clone()
    }
}
