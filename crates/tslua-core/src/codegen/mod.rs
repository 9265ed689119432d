mod classes;
mod enums;
mod expressions;
mod loops;
mod rewrites;
mod statements;

use crate::ast::expression::{Expression, ExpressionKind, Literal};
use crate::ast::statement::{Block, Statement};
use crate::ast::{NodeId, Program};
use crate::diagnostics::TranspileError;
use crate::types::{TypeChecker, TypeFacts};

pub(crate) type Result<T = ()> = std::result::Result<T, TranspileError>;

const INDENT: &str = "    ";

/// Lowers a type-checked AST to Lua source text.
///
/// One emitter translates one source file; `generate` resets all mutable
/// state on entry, so translating the same AST twice yields byte-identical
/// output.
pub struct LuaEmitter<'a> {
    output: String,
    indent_level: usize,
    /// Mints unique numbers for switch labels and destructuring
    /// temporaries. Strictly increasing across one translation.
    gen_counter: u32,
    /// True while emitting the statements of a switch clause; turns
    /// `break` into a `goto` at the post-switch label.
    in_switch: bool,
    checker: &'a dyn TypeChecker,
    include_prelude: bool,
}

impl<'a> LuaEmitter<'a> {
    pub fn new(checker: &'a dyn TypeChecker) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            gen_counter: 0,
            in_switch: false,
            checker,
            include_prelude: false,
        }
    }

    /// Prepend the runtime helper library so the output runs standalone.
    pub fn with_prelude(mut self) -> Self {
        self.include_prelude = true;
        self
    }

    /// Translate a whole source file. The first unsupported construct
    /// aborts the translation.
    pub fn generate(&mut self, program: &Program) -> Result<String> {
        self.output.clear();
        self.indent_level = 0;
        self.gen_counter = 0;
        self.in_switch = false;

        tracing::debug!(statements = program.statements.len(), "emitting program");

        if self.include_prelude {
            self.write(tslua_runtime::prelude::PRELUDE);
            self.write("\n");
            self.write(tslua_runtime::bitwise::BIT_LIBRARY);
            self.write("\n");
        }

        for statement in &program.statements {
            self.generate_statement(statement)?;
        }

        tracing::debug!(bytes = self.output.len(), "emission finished");
        Ok(self.output.clone())
    }

    pub(crate) fn generate_statement(&mut self, stmt: &Statement) -> Result {
        match stmt {
            Statement::Variable(decl) => self.generate_variable_statement(decl),
            Statement::Expression(expr) => {
                self.write_indent();
                self.generate_expression(expr, false)?;
                self.writeln("");
                Ok(())
            }
            Statement::Function(decl) => self.generate_function_declaration(decl),
            Statement::Return(ret) => self.generate_return_statement(ret),
            Statement::If(if_stmt) => self.generate_if_statement(if_stmt),
            Statement::While(while_stmt) => self.generate_while_statement(while_stmt),
            Statement::For(for_stmt) => self.generate_for_statement(for_stmt),
            Statement::ForOf(for_of) => self.generate_for_of_statement(for_of),
            Statement::ForIn(for_in) => self.generate_for_in_statement(for_in),
            Statement::Switch(switch) => self.generate_switch_statement(switch),
            Statement::Break(span) => self.generate_break(*span),
            Statement::Continue(span) => {
                Err(TranspileError::unsupported("continue is not supported", *span))
            }
            Statement::Class(decl) => self.generate_class_declaration(decl),
            Statement::Enum(decl) => self.generate_enum_declaration(decl),
            Statement::Import(import) => self.generate_import(import),
            // Type-only declarations are erased
            Statement::Interface(_) | Statement::TypeAlias(_) => Ok(()),
            Statement::Block(block) => self.generate_block(block),
        }
    }

    pub(crate) fn generate_block(&mut self, block: &Block) -> Result {
        for statement in &block.statements {
            self.generate_statement(statement)?;
        }
        Ok(())
    }

    /// Loop and branch bodies may be a block or a single statement.
    pub(crate) fn generate_body(&mut self, body: &Statement) -> Result {
        match body {
            Statement::Block(block) => self.generate_block(block),
            other => self.generate_statement(other),
        }
    }

    pub(crate) fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub(crate) fn writeln(&mut self, s: &str) {
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub(crate) fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
    }

    pub(crate) fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Emit through `f` into a detached string instead of the output
    /// buffer. Used where a subexpression's text is reused, e.g. the
    /// switch scrutinee compared in every clause.
    pub(crate) fn capture<F>(&mut self, f: F) -> Result<String>
    where
        F: FnOnce(&mut Self) -> Result,
    {
        let mark = self.output.len();
        f(self)?;
        Ok(self.output.split_off(mark))
    }

    pub(crate) fn next_gen(&mut self) -> u32 {
        let n = self.gen_counter;
        self.gen_counter += 1;
        n
    }

    pub(crate) fn current_gen(&self) -> u32 {
        self.gen_counter
    }

    pub(crate) fn advance_gen(&mut self, by: u32) {
        self.gen_counter += by;
    }

    pub(crate) fn in_switch(&self) -> bool {
        self.in_switch
    }

    pub(crate) fn set_in_switch(&mut self, value: bool) {
        self.in_switch = value;
    }

    pub(crate) fn facts(&self, node: NodeId) -> Option<&'a dyn TypeFacts> {
        self.checker.type_of(node)
    }

    /// String-typed per the checker, or a string/template literal
    /// syntactically.
    pub(crate) fn is_stringish(&self, expr: &Expression) -> bool {
        if matches!(
            expr.kind,
            ExpressionKind::Literal(Literal::Str(_)) | ExpressionKind::Template(_)
        ) {
            return true;
        }
        self.facts(expr.id)
            .map_or(false, |t| t.is_string() || t.is_string_literal())
    }

    pub(crate) fn is_array(&self, expr: &Expression) -> bool {
        self.facts(expr.id).map_or(false, |t| t.is_array())
    }

    pub(crate) fn is_array_or_tuple(&self, expr: &Expression) -> bool {
        self.facts(expr.id)
            .map_or(false, |t| t.is_array() || t.is_tuple())
    }
}
