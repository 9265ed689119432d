use super::{LuaEmitter, Result};
use crate::ast::statement::{
    ArrayBinding, ArrayBindingElement, BindingTarget, FunctionDeclaration, IfStatement,
    ImportClause, ImportDeclaration, ReturnStatement, SwitchStatement, VariableStatement,
    WhileStatement,
};
use crate::diagnostics::{ErrorKind, TranspileError};
use crate::span::Span;

impl<'a> LuaEmitter<'a> {
    pub(crate) fn generate_variable_statement(&mut self, stmt: &VariableStatement) -> Result {
        if stmt.declare {
            return Ok(());
        }
        for decl in &stmt.declarations {
            match &decl.target {
                BindingTarget::Identifier(name) => {
                    self.write_indent();
                    self.write("local ");
                    self.write(&name.node);
                    self.write(" = ");
                    match &decl.initializer {
                        Some(init) => self.generate_expression(init, false)?,
                        None => self.write("nil"),
                    }
                    self.writeln("");
                }
                BindingTarget::Array(pattern) => {
                    self.generate_array_destructuring(pattern, decl.initializer.as_ref(), decl.span)?;
                }
                BindingTarget::Object(span) => {
                    return Err(TranspileError::unsupported(
                        "object destructuring in a declaration is not supported",
                        *span,
                    ));
                }
            }
        }
        Ok(())
    }

    /// `let [a, b, ...rest] = xs` binds each element off a fresh
    /// temporary; the rest element collects the tail with `TS_slice`.
    fn generate_array_destructuring(
        &mut self,
        pattern: &ArrayBinding,
        initializer: Option<&crate::ast::expression::Expression>,
        span: Span,
    ) -> Result {
        let initializer = initializer.ok_or_else(|| {
            TranspileError::unsupported("destructuring declaration without initializer", span)
        })?;

        let temp = format!("__destr{}", self.next_gen());
        self.write_indent();
        self.write("local ");
        self.write(&temp);
        self.write(" = ");
        self.generate_expression(initializer, false)?;
        self.writeln("");

        for (i, element) in pattern.elements.iter().enumerate() {
            match element {
                ArrayBindingElement::Binding(name) => {
                    self.write_indent();
                    self.writeln(&format!("local {} = {}[{}]", name.node, temp, i + 1));
                }
                ArrayBindingElement::Rest(name) => {
                    self.write_indent();
                    self.writeln(&format!("local {} = TS_slice({}, {})", name.node, temp, i));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn generate_function_declaration(&mut self, decl: &FunctionDeclaration) -> Result {
        if decl.declare {
            return Ok(());
        }
        self.write_indent();
        self.write("function ");
        self.write(&decl.name.node);
        self.write_parameter_list(&decl.parameters, false);
        self.writeln("");
        self.indent();
        self.generate_block(&decl.body)?;
        self.dedent();
        self.write_indent();
        self.writeln("end");
        Ok(())
    }

    pub(crate) fn generate_return_statement(&mut self, stmt: &ReturnStatement) -> Result {
        self.write_indent();
        self.write("return");
        if let Some(value) = &stmt.value {
            self.write(" ");
            self.generate_expression(value, false)?;
        }
        self.writeln("");
        Ok(())
    }

    pub(crate) fn generate_if_statement(&mut self, stmt: &IfStatement) -> Result {
        self.write_indent();
        self.write("if ");
        self.generate_expression(&stmt.condition, false)?;
        self.writeln(" then");
        self.indent();
        self.generate_body(&stmt.then_branch)?;
        self.dedent();
        if let Some(else_branch) = &stmt.else_branch {
            self.write_indent();
            self.writeln("else");
            self.indent();
            self.generate_body(else_branch)?;
            self.dedent();
        }
        self.write_indent();
        self.writeln("end");
        Ok(())
    }

    pub(crate) fn generate_while_statement(&mut self, stmt: &WhileStatement) -> Result {
        self.write_indent();
        self.write("while ");
        self.generate_expression(&stmt.condition, false)?;
        self.writeln(" do");
        self.indent();
        self.generate_body(&stmt.body)?;
        self.dedent();
        self.write_indent();
        self.writeln("end");
        Ok(())
    }

    pub(crate) fn generate_break(&mut self, _span: Span) -> Result {
        self.write_indent();
        if self.in_switch() {
            self.writeln(&format!("goto switchDone{}", self.current_gen()));
        } else {
            self.writeln("break");
        }
        Ok(())
    }

    /// Switch lowers to an `if/elseif/else` chain with goto labels bridging
    /// consecutive clauses so a clause that does not `break` falls through.
    ///
    /// Layout for clause `i` of `n`, with `N` the counter value at entry:
    ///   - head: `if S == V0 then` / `elseif S == Vi then` / `else`
    ///   - `::switchCase<N+i>::`
    ///   - the clause statements (`break` becomes `goto switchDone<N>`)
    ///   - `goto switchCase<N+i+1>` unless `i` is last
    /// then `end` and `::switchDone<N>::`, and the counter advances by `n`.
    pub(crate) fn generate_switch_statement(&mut self, stmt: &SwitchStatement) -> Result {
        let base = self.current_gen();
        let scrutinee = self.capture(|e| e.generate_expression(&stmt.discriminant, true))?;
        let clause_count = stmt.clauses.len();

        for (i, clause) in stmt.clauses.iter().enumerate() {
            match &clause.test {
                Some(test) => {
                    let value = self.capture(|e| e.generate_expression(test, true))?;
                    self.write_indent();
                    self.write(if i == 0 { "if " } else { "elseif " });
                    self.write(&scrutinee);
                    self.write("==");
                    self.write(&value);
                    self.writeln(" then");
                }
                None => {
                    self.write_indent();
                    self.writeln("else");
                }
            }

            self.indent();
            self.write_indent();
            self.writeln(&format!("::switchCase{}::", base + i as u32));

            self.set_in_switch(true);
            for inner in &clause.statements {
                self.generate_statement(inner)?;
            }
            self.set_in_switch(false);

            if i + 1 < clause_count {
                self.write_indent();
                self.writeln(&format!("goto switchCase{}", base + i as u32 + 1));
            }
            self.dedent();
        }

        self.write_indent();
        self.writeln("end");
        self.write_indent();
        self.writeln(&format!("::switchDone{}::", base));
        self.advance_gen(clause_count as u32);
        Ok(())
    }

    pub(crate) fn generate_import(&mut self, import: &ImportDeclaration) -> Result {
        match &import.clause {
            ImportClause::Namespace(name) => {
                self.write_indent();
                self.writeln(&format!("{} = require(\"{}\")", name.node, import.source));
            }
            ImportClause::Named(specifiers) => {
                if let Some(renamed) = specifiers.iter().find(|s| s.property_name.is_some()) {
                    return Err(TranspileError::new(
                        ErrorKind::RenamedImport,
                        format!("renamed import `{}` is not supported", renamed.name.node),
                        renamed.span,
                    ));
                }
                // Named members are expected to be globals set by the module.
                self.write_indent();
                self.writeln(&format!("require(\"{}\")", import.source));
            }
        }
        Ok(())
    }
}
