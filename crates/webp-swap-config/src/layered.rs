//! Layered option loading.
//!
//! Priority: environment variables > options file > defaults.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Toml},
};

use crate::error::{ConfigError, Result};
use crate::options::WebpOptions;

/// Prefix for environment overrides, e.g. `WEBP_SWAP_IGNORE_MARKER`
pub const ENV_PREFIX: &str = "WEBP_SWAP_";

impl WebpOptions {
    /// Load options from an optional file plus `WEBP_SWAP_*` environment variables.
    ///
    /// `.json` files are read as JSON, anything else as TOML. Keys missing from
    /// every layer keep their defaults.
    pub fn load_layered(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(path) = file {
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            figment = if is_json {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(format!(
                "{e}; check the options file syntax and {ENV_PREFIX}* variables"
            )),
        })
    }
}
