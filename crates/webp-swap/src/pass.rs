//! Host traversal: find `require(<arg>)` calls and rewrite their argument.

use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast_visit::{VisitMut, walk_mut};
use oxc_span::GetSpan;

use crate::annotations::{TrailingComments, has_skip_annotation};
use crate::config::RewriteConfig;
use crate::error::{Result, WebpError};
use crate::rewriter::NodeRewriter;

/// Counters for one pass over a compilation unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Loader calls with exactly one argument
    pub loader_calls: usize,
    /// Arguments that gained at least one support conditional
    pub rewritten: usize,
    /// Arguments left untouched because of the ignore marker
    pub skipped_by_annotation: usize,
}

/// `VisitMut` pass that hands loader-call arguments to a [`NodeRewriter`].
///
/// The pass keeps walking into each call after handling it, so loader calls
/// nested in tests, branches or other arguments are found too, and the
/// synthesized argument itself is revisited (and recognised as final).
/// Running the pass again over the same program is a no-op.
pub struct RequirePass<'a, 'c> {
    rewriter: NodeRewriter<'a, 'c>,
    comments: TrailingComments,
    report: RewriteReport,
    error: Option<WebpError>,
}

impl<'a, 'c> RequirePass<'a, 'c> {
    pub fn new(allocator: &'a Allocator, config: &'c RewriteConfig, program: &Program<'a>) -> Self {
        Self {
            rewriter: NodeRewriter::new(allocator, config),
            comments: TrailingComments::from_program(program),
            report: RewriteReport::default(),
            error: None,
        }
    }

    /// Walk `program`, rewriting in place.
    ///
    /// Returns the cumulative report of every run of this pass.
    pub fn run(&mut self, program: &mut Program<'a>) -> Result<RewriteReport> {
        self.visit_program(program);
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(self.report),
        }
    }

    pub fn report(&self) -> RewriteReport {
        self.report
    }

    fn handle_call(&mut self, call: &mut CallExpression<'a>) {
        if self.error.is_some() {
            return;
        }

        let config = self.rewriter.config();
        let is_loader = matches!(
            &call.callee,
            Expression::Identifier(ident) if ident.name.as_str() == config.loader()
        );
        if !is_loader || call.arguments.len() != 1 {
            return;
        }

        let call_end = call.span.end;
        let Some(argument) = call.arguments[0].as_expression_mut() else {
            return;
        };
        self.report.loader_calls += 1;

        if self.rewriter.visited().contains(argument) {
            return;
        }

        let trailing = self.comments.between(argument.span().end, call_end);
        if has_skip_annotation(trailing, config.ignore_marker()) {
            tracing::debug!(
                start = call.span.start,
                marker = config.ignore_marker(),
                "loader argument skipped by annotation"
            );
            self.report.skipped_by_annotation += 1;
            return;
        }

        let before = self.rewriter.synthesized();
        if let Err(err) = self.rewriter.rewrite_in_place(argument) {
            self.error = Some(err);
            return;
        }
        if self.rewriter.synthesized() > before {
            self.report.rewritten += 1;
        }
    }
}

impl<'a> VisitMut<'a> for RequirePass<'a, '_> {
    fn visit_call_expression(&mut self, call: &mut CallExpression<'a>) {
        self.handle_call(call);
        walk_mut::walk_call_expression(self, call);
    }
}
