//! Rewrite `require()` image paths into runtime webp/original conditionals.
//!
//! Given a loader call with a single argument, every image-path literal in
//! that argument is replaced by a conditional on a runtime support flag:
//!
//! ```text
//! require("./a.png")
//!   → require(window.isSupportWebp ? "./a.webp" : "./a.png")
//!
//! require(dark ? "./bg-dark.jpg" : "./bg.jpg")
//!   → require(dark ? (window.isSupportWebp ? "./bg-dark.webp" : "./bg-dark.jpg")
//!                  : (window.isSupportWebp ? "./bg.webp" : "./bg.jpg"))
//!
//! require(`./icons/${name}.png`)
//!   → require(window.isSupportWebp ? `./icons/${name}.webp` : `./icons/${name}.png`)
//! ```
//!
//! Only path strings are rewritten; nothing checks that the `.webp` file
//! exists. Paths carrying `?inline` are left alone, as are arguments followed
//! by a `/* webp-ignore */` comment.
//!
//! # Examples
//!
//! ## From source text
//!
//! ```rust
//! use webp_swap::{SourceType, WebpTransformer};
//!
//! let transformer = WebpTransformer::default();
//! let out = transformer.transform(
//!     "const logo = require(`./img/${theme}.png`);",
//!     SourceType::mjs(),
//! )?;
//! assert!(out.code.contains("window.isSupportWebp ?"));
//! assert!(out.code.contains("${theme}.webp"));
//! # Ok::<(), webp_swap::WebpError>(())
//! ```
//!
//! ## On an existing AST
//!
//! ```rust
//! use webp_swap::{Allocator, RewriteConfig, WebpTransformer};
//! use oxc_parser::Parser;
//! use oxc_span::SourceType;
//!
//! let allocator = Allocator::default();
//! let source = r#"require("./a.jpg" /* webp-ignore */); require("./b.jpg");"#;
//! let mut program = Parser::new(&allocator, source, SourceType::mjs()).parse().program;
//!
//! let transformer = WebpTransformer::new(RewriteConfig::default());
//! let report = transformer.transform_program(&allocator, &mut program)?;
//! assert_eq!(report.loader_calls, 2);
//! assert_eq!(report.skipped_by_annotation, 1);
//! assert_eq!(report.rewritten, 1);
//! # Ok::<(), webp_swap::WebpError>(())
//! ```

mod annotations;
mod config;
mod eligibility;
mod error;
mod extensions;
mod pass;
mod rewriter;
mod transform;
mod visited;

#[cfg(feature = "logging")]
pub mod logging;

pub use annotations::{Annotation, TrailingComments, has_skip_annotation};
pub use config::RewriteConfig;
pub use eligibility::is_eligible;
pub use error::{Result, WebpError};
pub use extensions::ExtensionSet;
pub use pass::{RequirePass, RewriteReport};
pub use rewriter::{NodeRewriter, Shape, ensure_well_formed};
pub use transform::{TransformOutput, WebpTransformer, transform};
pub use visited::{NodeId, VisitedTracker};

// Re-export commonly used OXC types for convenience
pub use oxc_allocator::Allocator;
pub use oxc_span::SourceType;
