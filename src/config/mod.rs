//! Catalog source configuration
//!
//! Decides which definition document a process loads. This is the only
//! behaviour the environment can influence.

pub mod loader;

pub use loader::{CatalogSource, SourceResolver, CATALOG_ENV_VAR, PROJECT_FILE, USER_FILE};
