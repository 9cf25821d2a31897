//! Caller-facing options for the `require()` image rewriter.
//!
//! Every field has a default, so any subset of keys can be supplied and the
//! rest falls back to the defaults below. Keys are snake_case; camelCase
//! spellings and the option names of the Babel-era plugin (`supportExt`,
//! `childNodeType`, `ignoreComment`) are accepted as aliases.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::helpers::{
    default_extensions, default_ignore_marker, default_inline_marker, default_loader,
    default_support_predicate, default_target_extension, default_true,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebpOptions {
    /// Source extensions eligible for rewriting, checked in order
    #[serde(default = "default_extensions")]
    #[serde(alias = "recognizedExtensions", alias = "supportExt")]
    pub recognized_extensions: Vec<String>,

    /// Extension substituted for the first recognized one
    #[serde(default = "default_target_extension")]
    #[serde(alias = "targetExtension")]
    pub target_extension: String,

    /// Trailing-comment marker that leaves a call argument untouched
    #[serde(default = "default_ignore_marker")]
    #[serde(alias = "ignoreMarker", alias = "ignoreComment")]
    pub ignore_marker: String,

    /// Literal fragment that marks an asset as inlined by the bundler
    #[serde(default = "default_inline_marker")]
    #[serde(alias = "inlineMarker")]
    pub inline_marker: String,

    /// Node shapes the rewriter may touch
    #[serde(default)]
    #[serde(alias = "rewritableShapes", alias = "childNodeType")]
    pub rewritable_shapes: RewritableShapes,

    /// Callee identifier whose single argument is rewritten
    #[serde(default = "default_loader")]
    pub loader: String,

    /// Dotted member path evaluated at runtime to pick the webp branch
    #[serde(default = "default_support_predicate")]
    #[serde(alias = "supportPredicate")]
    pub support_predicate: String,
}

impl Default for WebpOptions {
    fn default() -> Self {
        Self {
            recognized_extensions: default_extensions(),
            target_extension: default_target_extension(),
            ignore_marker: default_ignore_marker(),
            inline_marker: default_inline_marker(),
            rewritable_shapes: RewritableShapes::default(),
            loader: default_loader(),
            support_predicate: default_support_predicate(),
        }
    }
}

/// Per-shape switches, keyed by the AST node type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewritableShapes {
    #[serde(rename = "StringLiteral", alias = "string_literal")]
    #[serde(default = "default_true")]
    pub string_literal: bool,

    #[serde(rename = "TemplateLiteral", alias = "template_literal")]
    #[serde(default = "default_true")]
    pub template_literal: bool,

    #[serde(rename = "ConditionalExpression", alias = "conditional_expression")]
    #[serde(default = "default_true")]
    pub conditional_expression: bool,
}

impl Default for RewritableShapes {
    fn default() -> Self {
        Self {
            string_literal: true,
            template_literal: true,
            conditional_expression: true,
        }
    }
}

impl RewritableShapes {
    /// Every shape disabled; nothing is ever rewritten.
    pub fn none() -> Self {
        Self {
            string_literal: false,
            template_literal: false,
            conditional_expression: false,
        }
    }
}

impl WebpOptions {
    /// Create from serde_json::Value (plugin options passed programmatically)
    ///
    /// Missing keys take their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use webp_swap_config::WebpOptions;
    /// use serde_json::json;
    ///
    /// let options = WebpOptions::from_value(json!({
    ///     "supportExt": [".png"],
    ///     "childNodeType": { "TemplateLiteral": false }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(options.recognized_extensions, vec![".png".to_string()]);
    /// assert!(!options.rewritable_shapes.template_literal);
    /// assert!(options.rewritable_shapes.string_literal);
    /// assert_eq!(options.ignore_marker, "webp-ignore");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| ConfigError::invalid_value("options", e))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid_value("options", e))
    }

    /// Parse options from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let toml_val: toml::Value = toml::from_str(content).map_err(|e| {
            ConfigError::invalid_value("toml", format!("Invalid TOML syntax: {}", e))
        })?;

        let value = serde_json::to_value(toml_val).map_err(|e| {
            ConfigError::invalid_value("toml", format!("TOML to JSON conversion failed: {}", e))
        })?;

        Self::from_value(value)
    }

    /// Segments of the support predicate, e.g. `["window", "isSupportWebp"]`
    pub fn support_predicate_path(&self) -> Vec<&str> {
        self.support_predicate.split('.').collect()
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recognized_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_target_extension(mut self, target: impl Into<String>) -> Self {
        self.target_extension = target.into();
        self
    }

    pub fn with_ignore_marker(mut self, marker: impl Into<String>) -> Self {
        self.ignore_marker = marker.into();
        self
    }

    pub fn with_inline_marker(mut self, marker: impl Into<String>) -> Self {
        self.inline_marker = marker.into();
        self
    }

    pub fn with_shapes(mut self, shapes: RewritableShapes) -> Self {
        self.rewritable_shapes = shapes;
        self
    }

    pub fn with_loader(mut self, loader: impl Into<String>) -> Self {
        self.loader = loader.into();
        self
    }

    pub fn with_support_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.support_predicate = predicate.into();
        self
    }
}
