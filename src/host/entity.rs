//! Taxonomy-term entity record
//!
//! The host hands a mutable reference to the record to presave handlers
//! right before it persists the entity. Handlers may normalize fields in
//! place; persistence itself stays with the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::HelperResult;

/// A text value paired with its render format
///
/// An empty `format` means no text format has been assigned yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    /// Raw text content
    #[serde(default)]
    pub value: String,

    /// Text-format identifier (e.g. "plain_text")
    #[serde(default)]
    pub format: String,
}

impl TextItem {
    /// Create a text item with a value and format
    pub fn new(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: format.into(),
        }
    }
}

/// A taxonomy-term entity about to be persisted by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntity {
    /// Bundle (vocabulary) discriminator, e.g. "category"
    pub bundle: String,

    /// Term description field
    #[serde(default)]
    pub description: TextItem,
}

impl TermEntity {
    /// Create a term with an empty description
    pub fn new(bundle: impl Into<String>) -> Self {
        Self {
            bundle: bundle.into(),
            description: TextItem::default(),
        }
    }

    /// Set the description value and format
    pub fn with_description(
        mut self,
        value: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        self.description = TextItem::new(value, format);
        self
    }

    /// Build a typed term from the host's JSON representation
    pub fn from_value(value: Value) -> HelperResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Convert back to the host's JSON representation
    pub fn to_value(&self) -> HelperResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
