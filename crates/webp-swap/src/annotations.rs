//! Trailing annotations (comments) and the ignore-marker guard.
//!
//! OXC keeps comments in a flat list on the program instead of attaching them
//! to nodes, so the trailing annotations of a call argument are recovered by
//! position: every comment that sits between the end of the argument and the
//! end of the enclosing call, i.e. before the closing parenthesis.

use oxc_ast::ast::Program;
use oxc_span::Span;

/// A comment's span and its body with the delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub span: Span,
    pub text: String,
}

/// Comment bodies of one program, in source order.
#[derive(Debug, Clone, Default)]
pub struct TrailingComments {
    annotations: Vec<Annotation>,
}

impl TrailingComments {
    /// Collect every comment of `program`.
    pub fn from_program(program: &Program<'_>) -> Self {
        let source = program.source_text;
        let annotations = program
            .comments
            .iter()
            .filter_map(|comment| {
                let raw = source.get(comment.span.start as usize..comment.span.end as usize)?;
                Some(Annotation {
                    span: comment.span,
                    text: comment_body(raw).to_string(),
                })
            })
            .collect();
        Self { annotations }
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Bodies of the comments lying entirely within `start..end`.
    pub fn between(&self, start: u32, end: u32) -> impl Iterator<Item = &str> {
        self.annotations
            .iter()
            .filter(move |a| a.span.start >= start && a.span.end <= end)
            .map(|a| a.text.as_str())
    }
}

/// Whether any annotation equals `ignore_marker` or contains it.
///
/// Zero annotations never skip.
pub fn has_skip_annotation<'t, I>(annotations: I, ignore_marker: &str) -> bool
where
    I: IntoIterator<Item = &'t str>,
{
    annotations
        .into_iter()
        .any(|text| text == ignore_marker || text.contains(ignore_marker))
}

fn comment_body(raw: &str) -> &str {
    if let Some(block) = raw.strip_prefix("/*") {
        block.strip_suffix("*/").unwrap_or(block)
    } else if let Some(line) = raw.strip_prefix("//") {
        line
    } else {
        raw
    }
}
