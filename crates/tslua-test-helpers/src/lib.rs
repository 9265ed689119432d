//! Shared test support for the tslua workspace: a programmable mock type
//! checker and AST-building helpers, so tests can state inputs without a
//! front-end.

pub mod ast;
pub mod emit;
pub mod mocks;

pub use ast::AstBuilder;
pub use emit::{emit, emit_err, emit_with};
pub use mocks::{MockType, MockTypeChecker};
