//! The recursive node rewriter.
//!
//! A rewritten literal becomes a two-way conditional on the runtime support
//! predicate:
//!
//! ```text
//! "./a.png"              →  window.isSupportWebp ? "./a.webp" : "./a.png"
//! `./png_${i}.png`       →  window.isSupportWebp ? `./png_${i}.webp` : `./png_${i}.png`
//! c ? "./a.png" : "./b.jpg"
//!                        →  c ? (window.isSupportWebp ? "./a.webp" : "./a.png")
//!                             : (window.isSupportWebp ? "./b.webp" : "./b.jpg")
//! ```

use oxc_allocator::{Allocator, Box, CloneIn};
use oxc_ast::AstBuilder;
use oxc_ast::ast::*;
use oxc_span::{SPAN, Span};

use crate::config::RewriteConfig;
use crate::eligibility::is_eligible;
use crate::error::{Result, WebpError};
use crate::visited::VisitedTracker;

/// The closed set of node shapes the rewriter distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    PlainLiteral,
    TemplatedLiteral,
    Conditional,
    Other,
}

impl Shape {
    pub fn of(expr: &Expression<'_>) -> Self {
        match expr {
            Expression::StringLiteral(_) => Shape::PlainLiteral,
            Expression::TemplateLiteral(_) => Shape::TemplatedLiteral,
            Expression::ConditionalExpression(_) => Shape::Conditional,
            Expression::ParenthesizedExpression(paren) => Shape::of(&paren.expression),
            _ => Shape::Other,
        }
    }
}

/// Fail fast on nodes whose fields contradict their shape.
///
/// Only the parts the rewriter descends into are checked: template literals
/// and the branches of conditionals.
pub fn ensure_well_formed(expr: &Expression<'_>) -> Result<()> {
    match expr {
        Expression::TemplateLiteral(tpl) if tpl.quasis.len() != tpl.expressions.len() + 1 => {
            Err(WebpError::invariant(
                "TemplateLiteral",
                format!(
                    "{} quasis for {} expressions",
                    tpl.quasis.len(),
                    tpl.expressions.len()
                ),
            ))
        }
        Expression::ConditionalExpression(cond) => {
            ensure_well_formed(&cond.consequent)?;
            ensure_well_formed(&cond.alternate)
        }
        Expression::ParenthesizedExpression(paren) => ensure_well_formed(&paren.expression),
        _ => Ok(()),
    }
}

/// Rewrites one expression tree at a time, remembering what it produced.
///
/// One rewriter serves one compilation unit: its [`VisitedTracker`] is what
/// keeps a revisited node from being wrapped twice.
pub struct NodeRewriter<'a, 'c> {
    ast: AstBuilder<'a>,
    config: &'c RewriteConfig,
    visited: VisitedTracker,
    synthesized: usize,
}

impl<'a, 'c> NodeRewriter<'a, 'c> {
    pub fn new(allocator: &'a Allocator, config: &'c RewriteConfig) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
            config,
            visited: VisitedTracker::new(),
            synthesized: 0,
        }
    }

    pub fn ast(&self) -> AstBuilder<'a> {
        self.ast
    }

    pub fn config(&self) -> &'c RewriteConfig {
        self.config
    }

    pub fn visited(&self) -> &VisitedTracker {
        &self.visited
    }

    /// Number of support conditionals built so far.
    pub fn synthesized(&self) -> usize {
        self.synthesized
    }

    /// Rewrite `expr`, returning either the same node or a new one.
    ///
    /// Nodes this rewriter produced earlier come back untouched.
    pub fn rewrite(&mut self, expr: Expression<'a>) -> Expression<'a> {
        if self.visited.contains(&expr) {
            return expr;
        }

        // Parentheses around a rewritable shape are dropped; codegen adds
        // back whatever the printed precedence needs.
        let expr = match expr {
            Expression::ParenthesizedExpression(paren)
                if Shape::of(&paren.expression) != Shape::Other =>
            {
                return self.rewrite(paren.unbox().expression);
            }
            other => other,
        };

        let result = if self.config.allows(Shape::of(&expr)) {
            match expr {
                Expression::StringLiteral(lit) => self.rewrite_string(lit),
                Expression::TemplateLiteral(tpl) => self.rewrite_template(tpl),
                Expression::ConditionalExpression(cond) => self.rewrite_conditional(cond),
                other => other,
            }
        } else {
            expr
        };

        self.visited.mark(&result);
        result
    }

    /// Rewrite the expression stored in `slot`, replacing it in place.
    pub fn rewrite_in_place(&mut self, slot: &mut Expression<'a>) -> Result<()> {
        ensure_well_formed(slot)?;
        let placeholder = self.ast.expression_null_literal(SPAN);
        let original = std::mem::replace(slot, placeholder);
        *slot = self.rewrite(original);
        Ok(())
    }

    fn rewrite_string(&mut self, lit: Box<'a, StringLiteral<'a>>) -> Expression<'a> {
        let config = self.config;
        let path = lit.value.as_str();

        if !is_eligible([path], config.extensions(), config.inline_marker()) {
            tracing::trace!(path, "string literal left as is");
            return Expression::StringLiteral(lit);
        }

        let rewritten = config.extensions().rewrite_path(path);
        tracing::debug!(from = path, to = %rewritten, "rewriting string literal");

        let span = lit.span;
        let consequent = self
            .ast
            .expression_string_literal(span, self.ast.atom(&rewritten), None);
        self.support_conditional(span, consequent, Expression::StringLiteral(lit))
    }

    fn rewrite_template(&mut self, tpl: Box<'a, TemplateLiteral<'a>>) -> Expression<'a> {
        let config = self.config;
        let extensions = config.extensions();

        let fragments = tpl.quasis.iter().map(|quasi| quasi.value.raw.as_str());
        if !is_eligible(fragments, extensions, config.inline_marker()) {
            tracing::trace!(quasis = tpl.quasis.len(), "template literal left as is");
            return Expression::TemplateLiteral(tpl);
        }

        let ast = self.ast;
        let mut rewritten = tpl.clone_in(ast.allocator);
        for quasi in rewritten.quasis.iter_mut() {
            let raw = ast.atom(&extensions.rewrite_path(quasi.value.raw.as_str()));
            let cooked = quasi
                .value
                .cooked
                .map(|cooked| ast.atom(&extensions.rewrite_path(cooked.as_str())));
            quasi.value = TemplateElementValue { raw, cooked };
        }
        tracing::debug!(
            quasis = rewritten.quasis.len(),
            expressions = rewritten.expressions.len(),
            "rewriting template literal"
        );

        self.support_conditional(
            tpl.span,
            Expression::TemplateLiteral(rewritten),
            Expression::TemplateLiteral(tpl),
        )
    }

    fn rewrite_conditional(&mut self, cond: Box<'a, ConditionalExpression<'a>>) -> Expression<'a> {
        let ConditionalExpression {
            span,
            test,
            consequent,
            alternate,
            ..
        } = cond.unbox();

        // `test` is never inspected
        let consequent = self.rewrite(consequent);
        let alternate = self.rewrite(alternate);
        self.ast
            .expression_conditional(span, test, consequent, alternate)
    }

    /// The conditional and its rewritten branch take the original literal's `span`.
    fn support_conditional(
        &mut self,
        span: Span,
        consequent: Expression<'a>,
        alternate: Expression<'a>,
    ) -> Expression<'a> {
        self.visited.mark(&consequent);
        self.visited.mark(&alternate);
        self.synthesized += 1;

        let test = self.support_predicate();
        self.ast
            .expression_conditional(span, test, consequent, alternate)
    }

    /// `window.isSupportWebp`, or whatever member chain is configured.
    fn support_predicate(&self) -> Expression<'a> {
        let ast = self.ast;
        let root = ast.expression_identifier(SPAN, ast.atom(self.config.predicate_root()));
        self.config
            .predicate_members()
            .iter()
            .fold(root, |object, member| {
                let property = ast.identifier_name(SPAN, ast.atom(member));
                Expression::StaticMemberExpression(
                    ast.alloc_static_member_expression(SPAN, object, property, false),
                )
            })
    }
}
