//! One-call emission wrappers for tests.

use tslua_core::ast::Program;
use tslua_core::types::{TypeChecker, UntypedChecker};
use tslua_core::{LuaEmitter, TranspileError};

/// Emit with no type information.
pub fn emit(program: &Program) -> Result<String, TranspileError> {
    LuaEmitter::new(&UntypedChecker).generate(program)
}

/// Emit with the given checker.
pub fn emit_with(program: &Program, checker: &dyn TypeChecker) -> Result<String, TranspileError> {
    LuaEmitter::new(checker).generate(program)
}

/// Emit expecting failure; panics if the translation succeeds.
pub fn emit_err(program: &Program) -> TranspileError {
    match emit(program) {
        Ok(output) => panic!("expected a translation error, got output:\n{}", output),
        Err(err) => err,
    }
}
