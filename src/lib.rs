//! primer - an immutable, queryable catalog of software-design topics
//!
//! Build a [`Catalog`] once from a definition document, then share it by
//! reference for lookups, category listings and keyword search.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;

pub use catalog::{Catalog, Category, Entry};
pub use error::{PrimerError, Result};
