//! File-based option discovery
//!
//! Handles finding and loading webp-swap options from a project directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::WebpOptions;

/// Name of the dedicated options file
pub const CONFIG_FILE: &str = "webp-swap.toml";

/// Field read from `package.json` when no dedicated file exists
pub const PACKAGE_JSON_FIELD: &str = "webpSwap";

/// File-based option discovery
///
/// Searches for options in conventional locations and loads them.
/// Library users can call `WebpOptions::from_value()` directly instead.
///
/// # Example
///
/// ```no_run
/// use webp_swap_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let options = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new discovery rooted at a directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find an options file in the root directory
    ///
    /// Searches in this order:
    /// 1. webp-swap.toml
    /// 2. package.json (webpSwap field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load options from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no options file is found.
    pub fn load(&self) -> Result<WebpOptions> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load options, falling back to defaults when nothing is found
    pub fn load_or_default(&self) -> Result<WebpOptions> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                tracing::debug!(root = %self.root.display(), "no webp-swap options found, using defaults");
                Ok(WebpOptions::default())
            }
        }
    }

    fn load_from(&self, path: &Path) -> Result<WebpOptions> {
        tracing::debug!(path = %path.display(), "loading webp-swap options");

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;
        WebpOptions::from_toml_str(&content)
    }

    fn load_from_package_json(&self, path: &Path) -> Result<WebpOptions> {
        let content = fs::read_to_string(path)?;

        let parsed: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::invalid_value("package.json", format!("Invalid JSON: {}", e)))?;

        let field = parsed.get(PACKAGE_JSON_FIELD).ok_or_else(|| {
            ConfigError::invalid_value(
                PACKAGE_JSON_FIELD,
                "Add a 'webpSwap' field to your package.json",
            )
        })?;

        if field.is_null() {
            return Err(ConfigError::invalid_value(
                PACKAGE_JSON_FIELD,
                "The 'webpSwap' field cannot be null",
            ));
        }

        WebpOptions::from_value(field.clone())
    }
}

/// Discover and load options from the current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use webp_swap_config::discover;
///
/// let options = discover().unwrap();
/// ```
pub fn discover() -> Result<WebpOptions> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load()
}
