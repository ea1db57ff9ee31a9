use super::CommandHandler;
use crate::catalog::Catalog;
use crate::config::SourceResolver;
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// Handler for the `validate` command
pub struct ValidateCommand {
    pub path: Option<PathBuf>,
}

impl CommandHandler for ValidateCommand {
    fn execute(&self, resolver: &SourceResolver) -> Result<()> {
        let (catalog, label) = self.load(resolver)?;
        info!(source = %label, entries = catalog.len(), "Definition is valid");
        println!("{}", summary(&catalog, &label));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}

impl ValidateCommand {
    /// Create new validate command
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Load the explicit path if given, else the resolved source
    ///
    /// The resolver is not consulted when a path is given.
    fn load(&self, resolver: &SourceResolver) -> Result<(Catalog, String)> {
        match self.path {
            Some(ref path) => Ok((Catalog::from_file(path)?, path.display().to_string())),
            None => {
                let source = resolver.resolve()?;
                Ok((source.load()?, source.to_string()))
            }
        }
    }
}

fn summary(catalog: &Catalog, label: &str) -> String {
    let entries = catalog.len();
    let categories = catalog.categories().len();
    format!(
        "{}: OK ({} entr{} in {} categor{}, {})",
        label,
        entries,
        if entries == 1 { "y" } else { "ies" },
        categories,
        if categories == 1 { "y" } else { "ies" },
        catalog.definition_version()
    )
}
