//! Identity set of nodes already produced by the rewriter.
//!
//! Nodes live in the compilation unit's arena and are never freed or moved
//! while the unit is processed, so the address of a node's allocation is a
//! stable identity. Two literals with equal text are still distinct entries.

use oxc_ast::ast::Expression;
use rustc_hash::FxHashSet;

/// Identity of one arena-allocated expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Identity of the shapes the rewriter can produce or touch.
    ///
    /// Other shapes are always returned unchanged, so they carry no identity.
    pub fn of(expr: &Expression<'_>) -> Option<Self> {
        match expr {
            Expression::StringLiteral(lit) => Some(Self::from_ref(&**lit)),
            Expression::TemplateLiteral(tpl) => Some(Self::from_ref(&**tpl)),
            Expression::ConditionalExpression(cond) => Some(Self::from_ref(&**cond)),
            _ => None,
        }
    }

    fn from_ref<T>(node: &T) -> Self {
        Self(std::ptr::from_ref(node) as usize)
    }
}

/// Nodes produced by one pass over one compilation unit.
///
/// Starts empty, only grows, and is dropped with the pass.
#[derive(Debug, Default)]
pub struct VisitedTracker {
    nodes: FxHashSet<NodeId>,
}

impl VisitedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, expr: &Expression<'_>) -> bool {
        NodeId::of(expr).is_some_and(|id| self.nodes.contains(&id))
    }

    /// Record `expr` as final. Returns `true` if it was not recorded before.
    pub fn mark(&mut self, expr: &Expression<'_>) -> bool {
        match NodeId::of(expr) {
            Some(id) => self.nodes.insert(id),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
