use super::{LuaEmitter, Result};
use crate::ast::expression::{
    ArrowBody, ArrowFunction, BinaryOp, Expression, ExpressionKind, FunctionExpression, Literal,
    ObjectProperty, Parameter, PostfixOp, PrefixOp, PropertyKey, TemplateLiteral,
};
use crate::ast::Ident;
use crate::diagnostics::{ErrorKind, TranspileError};

impl<'a> LuaEmitter<'a> {
    /// Emit one expression. With `brackets` the whole result is wrapped in
    /// parentheses; binary operands and template spans are always emitted
    /// bracketed so the output parses with the source's precedence.
    pub(crate) fn generate_expression(&mut self, expr: &Expression, brackets: bool) -> Result {
        if brackets {
            self.write("(");
            self.generate_expression_kind(expr)?;
            self.write(")");
            return Ok(());
        }
        self.generate_expression_kind(expr)
    }

    fn generate_expression_kind(&mut self, expr: &Expression) -> Result {
        match &expr.kind {
            ExpressionKind::Identifier(name) => {
                self.write(name);
                Ok(())
            }
            ExpressionKind::Literal(lit) => {
                self.generate_literal(lit);
                Ok(())
            }
            ExpressionKind::This => {
                self.write("self");
                Ok(())
            }
            ExpressionKind::Super => {
                self.write("self.__base");
                Ok(())
            }
            ExpressionKind::Template(template) => self.generate_template(template),
            ExpressionKind::Binary(op, left, right) => {
                self.generate_binary_expression(*op, left, right)
            }
            ExpressionKind::Prefix(op, operand) => self.generate_prefix(*op, operand),
            ExpressionKind::Postfix(op, operand) => self.generate_postfix(*op, operand),
            ExpressionKind::Conditional(cond, then_expr, else_expr) => {
                self.generate_conditional(cond, then_expr, else_expr)
            }
            ExpressionKind::Call(callee, args) => self.generate_call(callee, args),
            ExpressionKind::New(callee, args) => self.generate_new(callee, args),
            ExpressionKind::Member(object, name) => self.generate_member(object, name),
            ExpressionKind::Index(object, index) => self.generate_index(object, index),
            ExpressionKind::Array(elements) => self.generate_array_literal(elements),
            ExpressionKind::Object(properties) => self.generate_object_literal(properties),
            ExpressionKind::Function(func) => self.generate_function_expression(func),
            ExpressionKind::Arrow(arrow) => self.generate_arrow_function(arrow),
            ExpressionKind::Parenthesized(inner) => {
                self.write("(");
                self.generate_expression(inner, false)?;
                self.write(")");
                Ok(())
            }
            // Type-only wrappers pass the inner expression through
            ExpressionKind::TypeAssertion(inner) | ExpressionKind::AsCast(inner) => {
                self.generate_expression(inner, false)
            }
        }
    }

    fn generate_literal(&mut self, lit: &Literal) {
        match lit {
            Literal::Null => self.write("nil"),
            Literal::True => self.write("true"),
            Literal::False => self.write("false"),
            Literal::Number(text) => self.write(text),
            Literal::Str(text) => {
                self.write("\"");
                self.write(text);
                self.write("\"");
            }
        }
    }

    /// Interpolation joins with `..`; quoted texts keep the operands in
    /// string context, so only non-empty texts are emitted.
    fn generate_template(&mut self, template: &TemplateLiteral) -> Result {
        self.write("\"");
        self.write(&template.head);
        self.write("\"");
        for span in &template.spans {
            self.write(" .. ");
            self.generate_expression(&span.expression, true)?;
            if !span.text.is_empty() {
                self.write(" .. \"");
                self.write(&span.text);
                self.write("\"");
            }
        }
        Ok(())
    }

    fn generate_binary_expression(
        &mut self,
        op: BinaryOp,
        left: &Expression,
        right: &Expression,
    ) -> Result {
        match op {
            BinaryOp::Assign => {
                self.generate_expression(left, false)?;
                self.write(" = ");
                self.generate_expression(right, false)
            }
            // Compound assignment duplicates the target textually
            BinaryOp::AddAssign => self.generate_compound_assign(left, right, " + "),
            BinaryOp::SubtractAssign => self.generate_compound_assign(left, right, " - "),
            BinaryOp::BitwiseAnd => self.generate_bit_call("bit.band", left, right),
            BinaryOp::BitwiseOr => self.generate_bit_call("bit.bor", left, right),
            BinaryOp::Add => {
                let concat = self.is_stringish(left) || self.is_stringish(right);
                self.generate_expression(left, true)?;
                self.write(if concat { ".." } else { "+" });
                self.generate_expression(right, true)
            }
            _ => {
                self.generate_expression(left, true)?;
                self.write(op.lua_text());
                self.generate_expression(right, true)
            }
        }
    }

    fn generate_compound_assign(
        &mut self,
        target: &Expression,
        value: &Expression,
        op: &str,
    ) -> Result {
        self.generate_expression(target, false)?;
        self.write(" = ");
        self.generate_expression(target, false)?;
        self.write(op);
        self.generate_expression(value, true)
    }

    fn generate_bit_call(&mut self, func: &str, left: &Expression, right: &Expression) -> Result {
        self.write(func);
        self.write("(");
        self.generate_expression(left, true)?;
        self.write(", ");
        self.generate_expression(right, true)?;
        self.write(")");
        Ok(())
    }

    fn generate_prefix(&mut self, op: PrefixOp, operand: &Expression) -> Result {
        match op {
            PrefixOp::Not => {
                self.write("not ");
                self.generate_expression(operand, true)
            }
            PrefixOp::Negate => {
                self.write("-");
                self.generate_expression(operand, true)
            }
            PrefixOp::Increment => self.generate_step_assign(operand, " + 1"),
            PrefixOp::Decrement => self.generate_step_assign(operand, " - 1"),
        }
    }

    fn generate_postfix(&mut self, op: PostfixOp, operand: &Expression) -> Result {
        match op {
            PostfixOp::Increment => self.generate_step_assign(operand, " + 1"),
            PostfixOp::Decrement => self.generate_step_assign(operand, " - 1"),
        }
    }

    /// `x++` and friends lower to an assignment statement. When one is
    /// nested inside a larger expression the assignment is still emitted
    /// as-is, and Lua rejects it, matching the source program's fate.
    fn generate_step_assign(&mut self, operand: &Expression, step: &str) -> Result {
        self.generate_expression(operand, false)?;
        self.write(" = ");
        self.generate_expression(operand, false)?;
        self.write(step);
        Ok(())
    }

    /// Lua has no ternary, and `cond and a or b` breaks when `a` is falsy,
    /// so both branches are thunked and `TS_ITE` picks one.
    fn generate_conditional(
        &mut self,
        cond: &Expression,
        then_expr: &Expression,
        else_expr: &Expression,
    ) -> Result {
        self.write("TS_ITE(");
        self.generate_expression(cond, false)?;
        self.write(", function() return ");
        self.generate_expression(then_expr, false)?;
        self.write(" end, function() return ");
        self.generate_expression(else_expr, false)?;
        self.write(" end)");
        Ok(())
    }

    fn generate_call(&mut self, callee: &Expression, args: &[Expression]) -> Result {
        // super(...) chains to the parent constructor
        if matches!(callee.kind, ExpressionKind::Super) {
            self.write("self.__base.constructor(self");
            for arg in args {
                self.write(",");
                self.generate_expression(arg, false)?;
            }
            self.write(")");
            return Ok(());
        }

        if let ExpressionKind::Member(object, name) = &callee.kind {
            if self.is_stringish(object) {
                return self.generate_string_method_call(object, name, args);
            }
            if self.is_array(object) {
                return self.generate_array_method_call(object, name, args);
            }
            // Method call: the receiver rides along as the context argument
            self.generate_expression(callee, false)?;
            self.write("(");
            self.generate_expression(object, false)?;
            for arg in args {
                self.write(", ");
                self.generate_expression(arg, false)?;
            }
            self.write(")");
            return Ok(());
        }

        self.generate_expression(callee, false)?;
        self.write("(");
        self.write_argument_list(args)?;
        self.write(")");
        Ok(())
    }

    /// `new C(...)` calls the generated `new` with a leading `true` so the
    /// constructor runs; `new` without the flag only allocates.
    fn generate_new(&mut self, callee: &Expression, args: &[Expression]) -> Result {
        self.generate_expression(callee, false)?;
        self.write(".new(true");
        for arg in args {
            self.write(", ");
            self.generate_expression(arg, false)?;
        }
        self.write(")");
        Ok(())
    }

    fn generate_member(&mut self, object: &Expression, name: &Ident) -> Result {
        if self.is_stringish(object) {
            if name.node == "length" {
                self.write("#");
                return self.generate_expression(object, false);
            }
            return Err(TranspileError::new(
                ErrorKind::UnsupportedStringProperty,
                format!("unsupported string property `{}`", name.node),
                name.span,
            ));
        }
        if self.is_array(object) {
            if name.node == "length" {
                self.write("#");
                return self.generate_expression(object, false);
            }
            return Err(TranspileError::new(
                ErrorKind::UnsupportedArrayProperty,
                format!("unsupported array property `{}`", name.node),
                name.span,
            ));
        }
        // Members of a members-only enum exist as free constants
        if self
            .facts(object.id)
            .map_or(false, |t| t.is_members_only_enum())
        {
            self.write(&name.node);
            return Ok(());
        }
        self.generate_expression(object, false)?;
        self.write(".");
        self.write(&name.node);
        Ok(())
    }

    /// Zero-based containers shift by one; map-like tables keep their keys.
    fn generate_index(&mut self, object: &Expression, index: &Expression) -> Result {
        if self.is_stringish(object) {
            self.write("string.sub(");
            self.generate_expression(object, false)?;
            self.write(", ");
            self.generate_expression(index, false)?;
            self.write("+1, ");
            self.generate_expression(index, false)?;
            self.write("+1)");
            return Ok(());
        }
        self.generate_expression(object, false)?;
        self.write("[");
        self.generate_expression(index, false)?;
        if self.is_array_or_tuple(object) {
            self.write("+1");
        }
        self.write("]");
        Ok(())
    }

    fn generate_array_literal(&mut self, elements: &[Expression]) -> Result {
        self.write("{");
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.generate_expression(element, false)?;
        }
        self.write("}");
        Ok(())
    }

    fn generate_object_literal(&mut self, properties: &[ObjectProperty]) -> Result {
        self.write("{");
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match &property.key {
                PropertyKey::Identifier(name) => {
                    self.write(&name.node);
                    self.write(" = ");
                }
                PropertyKey::Str(text) => {
                    self.write("[\"");
                    self.write(text);
                    self.write("\"] = ");
                }
                PropertyKey::Number(text) => {
                    self.write("[");
                    self.write(text);
                    self.write("] = ");
                }
                PropertyKey::Computed(key) => {
                    self.write("[");
                    self.generate_expression(key, false)?;
                    self.write("] = ");
                }
            }
            self.generate_expression(&property.value, false)?;
        }
        self.write("}");
        Ok(())
    }

    fn generate_function_expression(&mut self, func: &FunctionExpression) -> Result {
        self.write("function");
        self.write_parameter_list(&func.parameters, false);
        self.write("\n");
        self.indent();
        self.generate_block(&func.body)?;
        self.dedent();
        self.write_indent();
        self.write("end");
        Ok(())
    }

    fn generate_arrow_function(&mut self, arrow: &ArrowFunction) -> Result {
        match &arrow.body {
            ArrowBody::Expression(value) => {
                self.write("function");
                self.write_parameter_list(&arrow.parameters, false);
                self.write(" return ");
                self.generate_expression(value, false)?;
                self.write(" end");
                Ok(())
            }
            ArrowBody::Block(block) => {
                self.write("function");
                self.write_parameter_list(&arrow.parameters, false);
                self.write("\n");
                self.indent();
                self.generate_block(block)?;
                self.dedent();
                self.write_indent();
                self.write("end");
                Ok(())
            }
        }
    }

    pub(crate) fn write_parameter_list(&mut self, params: &[Parameter], leading_self: bool) {
        self.write("(");
        let mut first = true;
        if leading_self {
            self.write("self");
            first = false;
        }
        for param in params {
            if !first {
                self.write(",");
            }
            first = false;
            self.write(&param.name.node);
        }
        self.write(")");
    }

    pub(crate) fn write_argument_list(&mut self, args: &[Expression]) -> Result {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.generate_expression(arg, false)?;
        }
        Ok(())
    }
}
