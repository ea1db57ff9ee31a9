use super::{entries_json, entries_table, CommandHandler};
use crate::catalog::Catalog;
use crate::config::SourceResolver;
use crate::Result;

/// Handler for the `search` command
pub struct SearchCommand {
    pub keyword: String,
    pub json: bool,
}

impl CommandHandler for SearchCommand {
    fn execute(&self, resolver: &SourceResolver) -> Result<()> {
        let catalog = resolver.resolve()?.load()?;
        println!("{}", self.render(&catalog)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

impl SearchCommand {
    /// Create new search command
    pub fn new(keyword: String, json: bool) -> Self {
        Self { keyword, json }
    }

    /// Render matching entries; no match is not an error
    pub fn render(&self, catalog: &Catalog) -> Result<String> {
        let results = catalog.search(&self.keyword);

        if self.json {
            return entries_json(results);
        }

        if results.is_empty() {
            return Ok("No entries found.".to_string());
        }

        let count = results.len();
        Ok(format!(
            "Found {} entr{}:\n\n{}",
            count,
            if count == 1 { "y" } else { "ies" },
            entries_table(results)
        ))
    }
}
