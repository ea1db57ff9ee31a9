use super::CommandHandler;
use crate::catalog::{Catalog, Entry};
use crate::config::SourceResolver;
use crate::Result;

/// Handler for the `show` command
pub struct ShowCommand {
    pub id: String,
    pub json: bool,
}

impl CommandHandler for ShowCommand {
    fn execute(&self, resolver: &SourceResolver) -> Result<()> {
        let catalog = resolver.resolve()?.load()?;
        println!("{}", self.render(&catalog)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    /// Create new show command
    pub fn new(id: String, json: bool) -> Self {
        Self { id, json }
    }

    /// Render the entry, or fail with `NotFound`
    pub fn render(&self, catalog: &Catalog) -> Result<String> {
        let entry = catalog.get(&self.id)?;

        if self.json {
            return Ok(serde_json::to_string_pretty(entry)?);
        }

        Ok(describe(entry))
    }
}

fn describe(entry: &Entry) -> String {
    let mut lines = vec![
        entry.title.clone(),
        format!("Id:       {}", entry.id),
        format!("Category: {}", entry.category),
        String::new(),
    ];
    lines.extend(
        entry
            .explanation
            .trim_end()
            .lines()
            .map(|line| format!("  {line}")),
    );

    if let Some(ref example) = entry.example {
        lines.push(String::new());
        lines.push(format!("Example ({}):", example.label));
        lines.extend(
            example
                .text
                .trim_end()
                .lines()
                .map(|line| format!("    {line}")),
        );
    }

    if !entry.references.is_empty() {
        lines.push(String::new());
        lines.push("References:".to_string());
        for reference in &entry.references {
            lines.push(format!("  - {}: {}", reference.label, reference.url));
        }
    }

    lines.join("\n")
}
