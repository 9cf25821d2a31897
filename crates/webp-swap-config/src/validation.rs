//! Pluggable option validation strategies

use crate::error::{ConfigError, Result};
use crate::options::WebpOptions;

/// Trait for pluggable option validation strategies
pub trait ConfigValidator {
    /// Validate rewriter options
    fn validate(&self, options: &WebpOptions) -> Result<()>;
}

/// Schema-only validation
///
/// # Example
///
/// ```
/// use webp_swap_config::{ConfigValidator, SchemaValidator, WebpOptions};
///
/// let options = WebpOptions::default().with_extensions([".png", ".gif"]);
/// SchemaValidator.validate(&options).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, options: &WebpOptions) -> Result<()> {
        // An empty list is allowed (nothing gets rewritten), empty entries are not:
        // "" is a substring of every path.
        for ext in &options.recognized_extensions {
            if ext.is_empty() {
                return Err(ConfigError::schema(
                    "recognized extensions cannot be empty strings",
                    "Remove empty strings from 'recognized_extensions'",
                ));
            }
        }

        if options.target_extension.is_empty() {
            return Err(ConfigError::schema(
                "target extension cannot be empty",
                "Set 'target_extension' to something like \".webp\"",
            ));
        }

        if options.ignore_marker.trim().is_empty() {
            return Err(ConfigError::schema(
                "ignore marker cannot be empty",
                "An empty marker would match every trailing comment",
            ));
        }

        if options.inline_marker.is_empty() {
            return Err(ConfigError::schema(
                "inline marker cannot be empty",
                "An empty marker would make every literal ineligible",
            ));
        }

        if !is_identifier(&options.loader) {
            return Err(ConfigError::schema(
                format!("loader '{}' is not a valid identifier", options.loader),
                "Use a plain callee name such as \"require\"",
            ));
        }

        if !options.support_predicate_path().into_iter().all(is_identifier) {
            return Err(ConfigError::schema(
                format!(
                    "support predicate '{}' is not a dotted identifier path",
                    options.support_predicate
                ),
                "Use a member path such as \"window.isSupportWebp\"",
            ));
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(options: &WebpOptions) -> Result<()> {
    SchemaValidator.validate(options)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("require"));
        assert!(is_identifier("$load_2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2x"));
        assert!(!is_identifier("a.b"));
    }
}
