use super::{entries_json, entries_table, CommandHandler};
use crate::catalog::Catalog;
use crate::config::SourceResolver;
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    pub category: Option<String>,
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, resolver: &SourceResolver) -> Result<()> {
        let catalog = resolver.resolve()?.load()?;
        println!("{}", self.render(&catalog)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    /// Create new list command
    pub fn new(category: Option<String>, json: bool) -> Self {
        Self { category, json }
    }

    /// Render all entries, or one category's, in catalog order
    pub fn render(&self, catalog: &Catalog) -> Result<String> {
        let entries = match self.category {
            Some(ref category) => catalog.list_by_category(category)?,
            None => catalog.all(),
        };

        if self.json {
            return entries_json(entries);
        }

        if entries.as_slice().is_empty() {
            return Ok("No entries found.".to_string());
        }

        Ok(entries_table(entries))
    }
}
