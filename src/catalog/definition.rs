//! Catalog definition document parsing and validation
//!
//! A definition document lists every entry of a catalog in source order.
//! Validation is all-or-nothing: the first violation rejects the whole
//! document.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::entry::{derive_id, Category, Entry, Example, Reference};
use crate::{PrimerError, Result};

/// Supported document API version
pub const API_VERSION: &str = "primer.dev/v1";

/// Expected document kind
pub const KIND: &str = "Catalog";

/// A catalog definition document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDefinition {
    /// API version (must be "primer.dev/v1")
    pub api_version: String,

    /// Kind (must be "Catalog")
    pub kind: String,

    /// Entry records in definition order
    #[serde(default)]
    pub entries: Vec<EntryDefinition>,
}

/// One record of a definition document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryDefinition {
    /// Derived from the title when absent
    #[serde(default)]
    pub id: Option<String>,

    pub title: String,

    /// Category slug or display name
    pub category: String,

    pub explanation: String,

    #[serde(default)]
    pub example: Option<Example>,

    /// Flat form of `example.label`
    #[serde(default)]
    pub example_label: Option<String>,

    /// Flat form of `example.text`
    #[serde(default)]
    pub example_text: Option<String>,

    #[serde(default)]
    pub references: Vec<Reference>,
}

impl CatalogDefinition {
    /// Parse a definition from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Load a definition from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PrimerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content).map_err(|e| {
            PrimerError::Definition(format!(
                "Failed to parse catalog definition {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Check the document header
    pub fn validate_header(&self) -> Result<()> {
        if self.api_version != API_VERSION {
            return Err(PrimerError::Definition(format!(
                "Unsupported apiVersion '{}'. Expected '{}'",
                self.api_version, API_VERSION
            )));
        }

        if self.kind != KIND {
            return Err(PrimerError::Definition(format!(
                "Invalid kind '{}'. Expected '{}'",
                self.kind, KIND
            )));
        }

        Ok(())
    }

    /// Validate every record and convert to entries, keeping definition order
    pub fn into_entries(self) -> Result<Vec<Entry>> {
        self.validate_header()?;

        let mut seen = HashSet::with_capacity(self.entries.len());
        let mut entries = Vec::with_capacity(self.entries.len());

        for (index, record) in self.entries.into_iter().enumerate() {
            let entry = record.into_entry(index)?;

            if !seen.insert(entry.id.clone()) {
                return Err(PrimerError::Definition(format!(
                    "Duplicate entry id '{}' at index {}",
                    entry.id, index
                )));
            }

            entries.push(entry);
        }

        Ok(entries)
    }
}

impl EntryDefinition {
    /// Validate this record and build an [`Entry`]
    ///
    /// `index` is the record's position in the document, used in messages.
    pub fn into_entry(self, index: usize) -> Result<Entry> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(PrimerError::Definition(format!(
                "Entry at index {} has empty title",
                index
            )));
        }

        let id = match self.id {
            Some(id) => id.trim().to_string(),
            None => derive_id(&title),
        };
        validate_id(&id, &title)?;

        let category: Category = self.category.parse().map_err(|_| {
            PrimerError::Definition(format!(
                "Entry '{}' has unknown category '{}'",
                id, self.category
            ))
        })?;

        if self.explanation.trim().is_empty() {
            return Err(PrimerError::Definition(format!(
                "Entry '{}' has empty explanation",
                id
            )));
        }

        let example = match (self.example, self.example_label, self.example_text) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(PrimerError::Definition(format!(
                    "Entry '{}' gives both 'example' and 'example_label'/'example_text'",
                    id
                )));
            }
            (Some(example), None, None) => Some(example),
            (None, Some(label), Some(text)) => Some(Example { label, text }),
            (None, None, None) => None,
            (None, _, _) => {
                return Err(PrimerError::Definition(format!(
                    "Entry '{}' must give 'example_label' and 'example_text' together",
                    id
                )));
            }
        };

        if let Some(ref example) = example {
            if example.label.trim().is_empty() {
                return Err(PrimerError::Definition(format!(
                    "Entry '{}' has an example without a label",
                    id
                )));
            }
        }

        for reference in &self.references {
            validate_reference(reference, &id)?;
        }

        Ok(Entry {
            id,
            title,
            category,
            explanation: self.explanation,
            example,
            references: self.references,
        })
    }
}

fn validate_id(id: &str, title: &str) -> Result<()> {
    if id.is_empty() {
        return Err(PrimerError::Definition(format!(
            "Entry '{}' has an empty id",
            title
        )));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c == '-' || c.is_ascii_digit())
    {
        return Err(PrimerError::Definition(format!(
            "Entry id '{}' must be lowercase alphanumeric with hyphens",
            id
        )));
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(PrimerError::Definition(format!(
            "Entry id '{}' cannot start or end with a hyphen",
            id
        )));
    }

    Ok(())
}

fn validate_reference(reference: &Reference, id: &str) -> Result<()> {
    if reference.label.trim().is_empty() {
        return Err(PrimerError::Definition(format!(
            "Entry '{}' has a reference without a label",
            id
        )));
    }

    if !(reference.url.starts_with("https://") || reference.url.starts_with("http://")) {
        return Err(PrimerError::Definition(format!(
            "Entry '{}' reference '{}' has invalid url '{}'",
            id, reference.label, reference.url
        )));
    }

    Ok(())
}
