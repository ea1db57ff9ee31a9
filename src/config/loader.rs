use crate::catalog::Catalog;
use crate::{PrimerError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a definition file
pub const CATALOG_ENV_VAR: &str = "PRIMER_CATALOG";

/// Definition file looked up in the working directory
pub const PROJECT_FILE: &str = "primer.yaml";

/// Definition file looked up in the user config directory
pub const USER_FILE: &str = "catalog.yaml";

/// Where a catalog definition comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Path given on the command line
    Explicit(PathBuf),
    /// Path from `PRIMER_CATALOG`
    Environment(PathBuf),
    /// `primer.yaml` in the working directory
    Project(PathBuf),
    /// `catalog.yaml` in the user config directory
    User(PathBuf),
    /// Definition compiled into the binary
    Builtin,
}

impl CatalogSource {
    /// Definition file path, if the source is a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            CatalogSource::Explicit(path)
            | CatalogSource::Environment(path)
            | CatalogSource::Project(path)
            | CatalogSource::User(path) => Some(path),
            CatalogSource::Builtin => None,
        }
    }

    /// Build the catalog this source describes
    pub fn load(&self) -> Result<Catalog> {
        debug!(source = %self, "Loading catalog");
        match self.path() {
            Some(path) => Catalog::from_file(path),
            None => Catalog::builtin(),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Explicit(path) => write!(f, "{} (command line)", path.display()),
            CatalogSource::Environment(path) => {
                write!(f, "{} (${})", path.display(), CATALOG_ENV_VAR)
            }
            CatalogSource::Project(path) => write!(f, "{} (project)", path.display()),
            CatalogSource::User(path) => write!(f, "{} (user config)", path.display()),
            CatalogSource::Builtin => f.write_str("built-in catalog"),
        }
    }
}

/// Chooses the definition source
///
/// Precedence: explicit path, `PRIMER_CATALOG`, project file, user config
/// file, built-in. Explicit and environment paths must exist; the project
/// and user files are only used when present.
#[derive(Debug, Clone, Default)]
pub struct SourceResolver {
    explicit: Option<PathBuf>,
    env_value: Option<String>,
    working_dir: Option<PathBuf>,
    user_config_dir: Option<PathBuf>,
}

impl SourceResolver {
    /// Resolver with no candidates; resolves to the built-in catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver seeded from the process environment, working directory and
    /// platform config directory
    pub fn from_environment() -> Self {
        let user_config_dir = directories::ProjectDirs::from("dev", "primer", "primer")
            .map(|dirs| dirs.config_dir().to_path_buf());

        Self {
            explicit: None,
            env_value: std::env::var(CATALOG_ENV_VAR).ok(),
            working_dir: std::env::current_dir().ok(),
            user_config_dir,
        }
    }

    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn with_env_value(mut self, value: Option<String>) -> Self {
        self.env_value = value;
        self
    }

    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn with_user_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_config_dir = dir;
        self
    }

    /// Pick the highest-precedence available source
    pub fn resolve(&self) -> Result<CatalogSource> {
        if let Some(ref path) = self.explicit {
            if !path.is_file() {
                return Err(PrimerError::Config(format!(
                    "Catalog definition not found: {}",
                    path.display()
                )));
            }
            return Ok(CatalogSource::Explicit(path.clone()));
        }

        if let Some(value) = self.env_value.as_deref().map(str::trim) {
            if !value.is_empty() {
                let path = PathBuf::from(value);
                if !path.is_file() {
                    return Err(PrimerError::Config(format!(
                        "{} points to a missing file: {}",
                        CATALOG_ENV_VAR,
                        path.display()
                    )));
                }
                return Ok(CatalogSource::Environment(path));
            }
        }

        if let Some(ref dir) = self.working_dir {
            let path = dir.join(PROJECT_FILE);
            if path.is_file() {
                return Ok(CatalogSource::Project(path));
            }
        }

        if let Some(ref dir) = self.user_config_dir {
            let path = dir.join(USER_FILE);
            if path.is_file() {
                return Ok(CatalogSource::User(path));
            }
        }

        Ok(CatalogSource::Builtin)
    }
}
