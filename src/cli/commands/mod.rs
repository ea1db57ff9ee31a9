pub mod categories;
pub mod list;
pub mod search;
pub mod show;
pub mod validate;

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use super::app::Commands;
use crate::catalog::Entry;
use crate::config::SourceResolver;
use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command, resolving the catalog source only if it is needed
    fn execute(&self, resolver: &SourceResolver) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Build the handler for a parsed subcommand
pub fn handler_for(command: Commands) -> Box<dyn CommandHandler> {
    match command {
        Commands::Show { id, json } => Box::new(show::ShowCommand::new(id, json)),
        Commands::List { category, json } => Box::new(list::ListCommand::new(category, json)),
        Commands::Search { keyword, json } => Box::new(search::SearchCommand::new(keyword, json)),
        Commands::Categories { json } => Box::new(categories::CategoriesCommand::new(json)),
        Commands::Validate { path } => Box::new(validate::ValidateCommand::new(path)),
    }
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Render entries as a table, in the order given
pub(crate) fn entries_table<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> String {
    let rows: Vec<EntryRow> = entries
        .into_iter()
        .map(|entry| EntryRow {
            id: entry.id.clone(),
            title: entry.title.clone(),
            category: entry.category.display_name().to_string(),
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// Render entries as a pretty JSON array
pub(crate) fn entries_json<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Result<String> {
    let entries: Vec<&Entry> = entries.into_iter().collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
