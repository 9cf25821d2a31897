//! Parse → rewrite → print, for callers that hold source text rather than an AST.

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_codegen::Codegen;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use webp_swap_config::WebpOptions;

use crate::config::RewriteConfig;
use crate::error::{Result, WebpError};
use crate::pass::{RequirePass, RewriteReport};

/// Output from [`WebpTransformer::transform`]
#[derive(Debug)]
pub struct TransformOutput {
    /// Generated code
    pub code: String,
    /// What the pass did
    pub report: RewriteReport,
}

/// Runs the rewriting pass with one resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct WebpTransformer {
    config: RewriteConfig,
}

impl WebpTransformer {
    pub fn new(config: RewriteConfig) -> Self {
        Self { config }
    }

    /// Validate and resolve `options`
    pub fn from_options(options: &WebpOptions) -> Result<Self> {
        Ok(Self::new(RewriteConfig::from_options(options)?))
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    /// Rewrite an already parsed program in place.
    pub fn transform_program<'a>(
        &self,
        allocator: &'a Allocator,
        program: &mut Program<'a>,
    ) -> Result<RewriteReport> {
        let mut pass = RequirePass::new(allocator, &self.config, program);
        pass.run(program)
    }

    /// Parse `source`, rewrite it and print the result.
    pub fn transform(&self, source: &str, source_type: SourceType) -> Result<TransformOutput> {
        let allocator = Allocator::default();
        // Parenthesized branches must reach the rewriter as plain nodes
        let parse_options = ParseOptions {
            preserve_parens: false,
            ..ParseOptions::default()
        };
        let parsed = Parser::new(&allocator, source, source_type)
            .with_options(parse_options)
            .parse();

        if !parsed.errors.is_empty() {
            let reason = parsed
                .errors
                .iter()
                .map(|err| format!("{:?}", err))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(WebpError::parse_failed(reason));
        }

        let mut program = parsed.program;
        let report = self.transform_program(&allocator, &mut program)?;

        tracing::info!(
            loader_calls = report.loader_calls,
            rewritten = report.rewritten,
            skipped = report.skipped_by_annotation,
            "webp rewrite finished"
        );

        let code = Codegen::new().build(&program).code;
        Ok(TransformOutput { code, report })
    }
}

/// Transform `source` with `options` (convenience function)
///
/// # Example
///
/// ```
/// use webp_swap::{SourceType, transform};
/// use webp_swap_config::WebpOptions;
///
/// let out = transform(r#"require("./a.png");"#, SourceType::mjs(), &WebpOptions::default())?;
/// assert!(out.code.contains(r#"window.isSupportWebp ? "./a.webp" : "./a.png""#));
/// assert_eq!(out.report.rewritten, 1);
/// # Ok::<(), webp_swap::WebpError>(())
/// ```
pub fn transform(
    source: &str,
    source_type: SourceType,
    options: &WebpOptions,
) -> Result<TransformOutput> {
    WebpTransformer::from_options(options)?.transform(source, source_type)
}
