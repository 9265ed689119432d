//! Runtime support code for the tslua compiler.
//! Provides Lua snippets embedded as string constants for codegen; the
//! generated code references these helpers by global name.

pub mod bitwise;
pub mod prelude;
