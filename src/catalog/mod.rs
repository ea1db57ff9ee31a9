//! Primer Catalog - immutable collection of design topics
//!
//! The catalog is built once from a definition document and is read-only
//! afterwards. It can be shared by reference (or behind an `Arc`) across
//! any number of reader threads.
//!
//! # Ordering
//!
//! ```text
//! definition document          catalog traversal
//!   observer   (behavioral)      solid:       srp, ocp
//!   srp        (solid)      ─▶   creational:  singleton
//!   singleton  (creational)      behavioral:  observer
//!   ocp        (solid)
//! ```
//!
//! Entries are category-major in [`Category::ALL`] order, and keep their
//! definition order within a category.

mod definition;
mod entry;

pub use definition::{CatalogDefinition, EntryDefinition, API_VERSION, KIND};
pub use entry::{derive_id, Category, Entry, Example, Reference};

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;
use std::path::Path;

use tracing::{debug, trace};

use crate::{PrimerError, Result};

/// Definition document compiled into the binary
pub const BUILTIN_DEFINITION: &str = include_str!("builtin.yaml");

/// The immutable, queryable collection of all entries
#[derive(Debug, Clone)]
pub struct Catalog {
    api_version: String,

    /// Category-major, definition order within each category
    entries: Vec<Entry>,

    by_id: HashMap<String, usize>,

    /// Contiguous slice of `entries` for each populated category
    ranges: BTreeMap<Category, Range<usize>>,
}

impl Catalog {
    /// Build a catalog from a parsed definition
    ///
    /// Fails without producing a catalog if any record is invalid.
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self> {
        let api_version = definition.api_version.clone();
        let mut entries = definition.into_entries()?;

        // Stable: keeps definition order inside each category
        entries.sort_by_key(|entry| entry.category);

        let by_id = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.id.clone(), index))
            .collect();

        let mut ranges: BTreeMap<Category, Range<usize>> = BTreeMap::new();
        for (index, entry) in entries.iter().enumerate() {
            ranges
                .entry(entry.category)
                .and_modify(|range| range.end = index + 1)
                .or_insert(index..index + 1);
        }

        debug!(
            entries = entries.len(),
            categories = ranges.len(),
            api_version = %api_version,
            "Catalog built"
        );

        Ok(Self {
            api_version,
            entries,
            by_id,
            ranges,
        })
    }

    /// Parse and build a catalog from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        Self::from_definition(CatalogDefinition::from_yaml(content)?)
    }

    /// Load a catalog from a definition file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading catalog definition");
        Self::from_definition(CatalogDefinition::from_file(path)?)
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_DEFINITION)
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Result<&Entry> {
        self.by_id
            .get(id)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| PrimerError::NotFound { id: id.to_string() })
    }

    /// Whether an entry with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Entries of a category given by slug or display name
    pub fn list_by_category(&self, category: &str) -> Result<Entries<'_>> {
        let category: Category = category.parse()?;
        trace!(category = category.slug(), "Listing category");
        Ok(self.entries_in(category))
    }

    /// Entries of a category, in definition order
    pub fn entries_in(&self, category: Category) -> Entries<'_> {
        let slice: &[Entry] = match self.ranges.get(&category) {
            Some(range) => &self.entries[range.clone()],
            None => &[],
        };
        Entries::new(slice)
    }

    /// Every entry, category-major then definition order
    pub fn all(&self) -> Entries<'_> {
        Entries::new(&self.entries)
    }

    /// Entries whose title or explanation contains `keyword`, ignoring case
    ///
    /// Results follow [`Catalog::all`] order. No match yields an empty vector.
    pub fn search(&self, keyword: &str) -> Vec<&Entry> {
        let needle = keyword.trim().to_lowercase();
        let results: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.matches_lowercase(&needle))
            .collect();

        trace!(keyword = %needle, matches = results.len(), "Searched catalog");
        results
    }

    /// Populated categories with their entry counts, in canonical order
    pub fn categories(&self) -> Vec<(Category, usize)> {
        self.ranges
            .iter()
            .map(|(category, range)| (*category, range.len()))
            .collect()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// API version of the definition document this catalog was built from
    pub fn definition_version(&self) -> &str {
        &self.api_version
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}

/// Ordered, finite traversal over catalog entries
///
/// A clone advances independently of the original. Clone before consuming,
/// or call the producing operation again, to traverse more than once.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: std::slice::Iter<'a, Entry>,
}

impl<'a> Entries<'a> {
    fn new(slice: &'a [Entry]) -> Self {
        Self { inner: slice.iter() }
    }

    /// Remaining entries as a slice
    pub fn as_slice(&self) -> &'a [Entry] {
        self.inner.as_slice()
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl std::iter::FusedIterator for Entries<'_> {}
