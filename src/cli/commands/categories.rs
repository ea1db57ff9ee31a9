use super::CommandHandler;
use crate::catalog::Catalog;
use crate::config::SourceResolver;
use crate::Result;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Handler for the `categories` command
pub struct CategoriesCommand {
    pub json: bool,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Entries")]
    count: usize,
}

impl CommandHandler for CategoriesCommand {
    fn execute(&self, resolver: &SourceResolver) -> Result<()> {
        let catalog = resolver.resolve()?.load()?;
        println!("{}", self.render(&catalog)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "categories"
    }
}

impl CategoriesCommand {
    /// Create new categories command
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Render populated categories with counts
    pub fn render(&self, catalog: &Catalog) -> Result<String> {
        let categories = catalog.categories();

        if self.json {
            let json: Vec<serde_json::Value> = categories
                .iter()
                .map(|(category, count)| {
                    serde_json::json!({
                        "category": category.slug(),
                        "name": category.display_name(),
                        "entries": count,
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&json)?);
        }

        if categories.is_empty() {
            return Ok("Catalog is empty.".to_string());
        }

        let rows: Vec<CategoryRow> = categories
            .into_iter()
            .map(|(category, count)| CategoryRow {
                name: category.display_name().to_string(),
                slug: category.slug().to_string(),
                count,
            })
            .collect();

        Ok(Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string())
    }
}
