use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// primer: a reference catalog of software-design principles and patterns
#[derive(Parser, Debug)]
#[command(name = "primer")]
#[command(version)]
#[command(about = "Query a catalog of software-design principles and patterns")]
#[command(
    long_about = "primer loads a catalog of design principles, patterns and practices from a definition document and answers lookups, category listings and keyword searches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog definition file (defaults to $PRIMER_CATALOG, ./primer.yaml, the user config file, then the built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Set log level
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one entry by id
    Show {
        /// Entry id (e.g., singleton)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List entries, optionally restricted to one category
    List {
        /// Category slug or name (e.g., solid, "Behavioral Pattern")
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search titles and explanations (case-insensitive)
    Search {
        /// Keyword to look for
        keyword: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with entry counts
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog definition file
    Validate {
        /// Definition file (defaults to the resolved catalog source)
        path: Option<PathBuf>,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Show { .. } => "show",
            Commands::List { .. } => "list",
            Commands::Search { .. } => "search",
            Commands::Categories { .. } => "categories",
            Commands::Validate { .. } => "validate",
        }
    }
}
