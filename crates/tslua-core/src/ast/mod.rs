pub mod expression;
pub mod statement;

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Identity of an AST node, minted by the front-end. The type checker is
/// queried by node id, so any node the emitter may ask about carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Wrapper for AST leaves with span information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Spanned { node, span }
    }
}

/// Identifier
pub type Ident = Spanned<String>;

/// Top-level source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<statement::Statement>,
    pub span: Span,
}

impl Program {
    pub fn new(statements: Vec<statement::Statement>, span: Span) -> Self {
        Program { statements, span }
    }
}
