//! Catalog entry types
//!
//! An [`Entry`] is one documented principle, pattern or practice. Every entry
//! belongs to exactly one [`Category`] from a fixed set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PrimerError;

/// Classification bucket for an entry
///
/// Declaration order is the canonical traversal order of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DesignPrinciples,
    Solid,
    ParadigmsAndPractices,
    Testing,
    DatabaseDesign,
    ArchitecturalPatterns,
    FundamentalConcepts,
    ComprehensivePrinciples,
    CreationalPattern,
    StructuralPattern,
    BehavioralPattern,
}

impl Category {
    /// Every category, in canonical order
    pub const ALL: [Category; 11] = [
        Category::DesignPrinciples,
        Category::Solid,
        Category::ParadigmsAndPractices,
        Category::Testing,
        Category::DatabaseDesign,
        Category::ArchitecturalPatterns,
        Category::FundamentalConcepts,
        Category::ComprehensivePrinciples,
        Category::CreationalPattern,
        Category::StructuralPattern,
        Category::BehavioralPattern,
    ];

    /// Kebab-case identifier used in definition documents
    pub fn slug(&self) -> &'static str {
        match self {
            Category::DesignPrinciples => "design-principles",
            Category::Solid => "solid",
            Category::ParadigmsAndPractices => "paradigms-and-practices",
            Category::Testing => "testing",
            Category::DatabaseDesign => "database-design",
            Category::ArchitecturalPatterns => "architectural-patterns",
            Category::FundamentalConcepts => "fundamental-concepts",
            Category::ComprehensivePrinciples => "comprehensive-principles",
            Category::CreationalPattern => "creational-pattern",
            Category::StructuralPattern => "structural-pattern",
            Category::BehavioralPattern => "behavioral-pattern",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::DesignPrinciples => "Design Principles",
            Category::Solid => "SOLID",
            Category::ParadigmsAndPractices => "Paradigms & Practices",
            Category::Testing => "Testing",
            Category::DatabaseDesign => "Database Design",
            Category::ArchitecturalPatterns => "Architectural Patterns",
            Category::FundamentalConcepts => "Fundamental Concepts",
            Category::ComprehensivePrinciples => "Comprehensive Principles",
            Category::CreationalPattern => "Creational Pattern",
            Category::StructuralPattern => "Structural Pattern",
            Category::BehavioralPattern => "Behavioral Pattern",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = PrimerError;

    /// Accepts the slug or the display name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| {
                c.slug().eq_ignore_ascii_case(wanted) || c.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| PrimerError::InvalidCategory(s.to_string()))
    }
}

/// Illustrative snippet attached to an entry. Never executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Notional language of the snippet (e.g., "java", "sql")
    pub label: String,

    /// Snippet text, stored verbatim
    pub text: String,
}

/// External reading for an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub label: String,
    pub url: String,
}

/// One documented principle, pattern or practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Unique, stable identifier
    pub id: String,

    pub title: String,

    pub category: Category,

    /// Free-form explanation body
    pub explanation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Example>,

    pub references: Vec<Reference>,
}

impl Entry {
    /// Case-insensitive substring match against title and explanation.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.explanation.to_lowercase().contains(needle)
    }

    /// First line of the explanation, trimmed
    pub fn summary(&self) -> &str {
        self.explanation
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

/// Derive an identifier from a title
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single hyphen: "Open/Closed Principle" becomes
/// `open-closed-principle`.
pub fn derive_id(title: &str) -> String {
    let mut id = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    id
}
