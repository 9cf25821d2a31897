//! Resolved, immutable configuration for one compilation unit.

use webp_swap_config::{RewritableShapes, WebpOptions, validate_schema};

use crate::error::Result;
use crate::extensions::ExtensionSet;
use crate::rewriter::Shape;

/// Everything the rewriter and the host pass read, validated once.
///
/// Built from [`WebpOptions`] and never mutated afterwards; share it by
/// reference (or clone it) across compilation units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    extensions: ExtensionSet,
    ignore_marker: String,
    inline_marker: String,
    shapes: RewritableShapes,
    loader: String,
    predicate_root: String,
    predicate_members: Vec<String>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            extensions: ExtensionSet::default(),
            ignore_marker: "webp-ignore".to_string(),
            inline_marker: "?inline".to_string(),
            shapes: RewritableShapes::default(),
            loader: "require".to_string(),
            predicate_root: "window".to_string(),
            predicate_members: vec!["isSupportWebp".to_string()],
        }
    }
}

impl RewriteConfig {
    /// Validate `options` and resolve them.
    ///
    /// # Example
    ///
    /// ```
    /// use webp_swap::RewriteConfig;
    /// use webp_swap_config::WebpOptions;
    ///
    /// let config = RewriteConfig::from_options(&WebpOptions::default()).unwrap();
    /// assert_eq!(config, RewriteConfig::default());
    /// ```
    pub fn from_options(options: &WebpOptions) -> Result<Self> {
        validate_schema(options)?;

        let mut path = options.support_predicate_path().into_iter().map(str::to_string);
        // validation guarantees at least one identifier segment
        let predicate_root = path.next().unwrap_or_default();
        let predicate_members = path.collect();

        Ok(Self {
            extensions: ExtensionSet::new(
                options.recognized_extensions.iter().cloned(),
                options.target_extension.clone(),
            ),
            ignore_marker: options.ignore_marker.clone(),
            inline_marker: options.inline_marker.clone(),
            shapes: options.rewritable_shapes,
            loader: options.loader.clone(),
            predicate_root,
            predicate_members,
        })
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    pub fn ignore_marker(&self) -> &str {
        &self.ignore_marker
    }

    pub fn inline_marker(&self) -> &str {
        &self.inline_marker
    }

    pub fn shapes(&self) -> RewritableShapes {
        self.shapes
    }

    pub fn loader(&self) -> &str {
        &self.loader
    }

    /// Root identifier of the support predicate (`window`)
    pub fn predicate_root(&self) -> &str {
        &self.predicate_root
    }

    /// Member names chained onto the root (`["isSupportWebp"]`)
    pub fn predicate_members(&self) -> &[String] {
        &self.predicate_members
    }

    /// Whether the rewriter may touch nodes of `shape`.
    pub fn allows(&self, shape: Shape) -> bool {
        match shape {
            Shape::PlainLiteral => self.shapes.string_literal,
            Shape::TemplatedLiteral => self.shapes.template_literal,
            Shape::Conditional => self.shapes.conditional_expression,
            Shape::Other => false,
        }
    }
}

impl TryFrom<&WebpOptions> for RewriteConfig {
    type Error = crate::error::WebpError;

    fn try_from(options: &WebpOptions) -> Result<Self> {
        Self::from_options(options)
    }
}
