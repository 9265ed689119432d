//! AST-to-Lua lowering engine for the tslua compiler.
//!
//! The front-end (lexer, parser, type checker) hands over a type-annotated
//! AST; this crate walks it once and emits Lua 5.x source text, bridging
//! the semantic gaps between the two languages (1-based indexing, the
//! metatable class model, goto-simulated switch fallthrough, thunked
//! conditionals, the `TS_*` runtime helper family).

pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod span;
pub mod types;

pub use codegen::LuaEmitter;
pub use diagnostics::{ErrorKind, TranspileError};
pub use types::{TypeChecker, TypeFacts, UntypedChecker};

/// Translate one source file with the given type oracle.
pub fn transpile(
    program: &ast::Program,
    checker: &dyn TypeChecker,
) -> Result<String, TranspileError> {
    LuaEmitter::new(checker).generate(program)
}
