//! Loop lowering. Three-clause `for` headers are only accepted when they
//! match Lua's numeric `for i = start, end, step`; the analyzer extracts
//! the bounds or rejects the shape.

use super::{LuaEmitter, Result};
use crate::ast::expression::{BinaryOp, Expression, ExpressionKind, PostfixOp, PrefixOp};
use crate::ast::statement::{
    BindingTarget, ForInStatement, ForOfStatement, ForStatement, Statement,
};
use crate::diagnostics::{ErrorKind, TranspileError};

/// Lua's `for` bound is inclusive; strict comparisons adjust by one.
enum BoundAdjust {
    AsIs,
    MinusOne,
    PlusOne,
}

enum StepSize<'p> {
    One,
    MinusOne,
    By(&'p Expression),
    ByNegated(&'p Expression),
}

struct NumericForPlan<'p> {
    variable: &'p str,
    start: &'p Expression,
    end: &'p Expression,
    adjust: BoundAdjust,
    step: StepSize<'p>,
}

impl<'a> LuaEmitter<'a> {
    pub(crate) fn generate_for_statement(&mut self, stmt: &ForStatement) -> Result {
        let plan = analyze_numeric_for(stmt)?;

        self.write_indent();
        self.write("for ");
        self.write(plan.variable);
        self.write("=");
        self.generate_expression(plan.start, false)?;
        self.write(",");
        self.generate_expression(plan.end, false)?;
        match plan.adjust {
            BoundAdjust::AsIs => {}
            BoundAdjust::MinusOne => self.write("-1"),
            BoundAdjust::PlusOne => self.write("+1"),
        }
        self.write(",");
        match plan.step {
            StepSize::One => self.write("1"),
            StepSize::MinusOne => self.write("-1"),
            StepSize::By(amount) => self.generate_expression(amount, false)?,
            StepSize::ByNegated(amount) => {
                self.write("-");
                self.generate_expression(amount, false)?;
            }
        }
        self.writeln(" do");
        self.indent();
        self.generate_body(&stmt.body)?;
        self.dedent();
        self.write_indent();
        self.writeln("end");
        Ok(())
    }

    /// `for (x of xs)` iterates values; arrays get `ipairs`, everything
    /// else `pairs`.
    pub(crate) fn generate_for_of_statement(&mut self, stmt: &ForOfStatement) -> Result {
        let iter_fn = if self.is_array(&stmt.iterable) {
            "ipairs"
        } else {
            "pairs"
        };
        self.write_indent();
        self.write("for _, ");
        self.write(&stmt.binding.node);
        self.write(" in ");
        self.write(iter_fn);
        self.write("(");
        self.generate_expression(&stmt.iterable, false)?;
        self.writeln(") do");
        self.indent();
        self.generate_body(&stmt.body)?;
        self.dedent();
        self.write_indent();
        self.writeln("end");
        Ok(())
    }

    /// `for (k in xs)` yields keys, which both `pairs` and `ipairs` put in
    /// the first slot.
    pub(crate) fn generate_for_in_statement(&mut self, stmt: &ForInStatement) -> Result {
        let iter_fn = if self.is_array(&stmt.iterable) {
            "ipairs"
        } else {
            "pairs"
        };
        self.write_indent();
        self.write("for ");
        self.write(&stmt.binding.node);
        self.write(", _ in ");
        self.write(iter_fn);
        self.write("(");
        self.generate_expression(&stmt.iterable, false)?;
        self.writeln(") do");
        self.indent();
        self.generate_body(&stmt.body)?;
        self.dedent();
        self.write_indent();
        self.writeln("end");
        Ok(())
    }
}

fn unsupported(message: &str, span: crate::span::Span) -> TranspileError {
    TranspileError::new(ErrorKind::UnsupportedForShape, message, span)
}

fn analyze_numeric_for(stmt: &ForStatement) -> std::result::Result<NumericForPlan<'_>, TranspileError> {
    // init: exactly `let i = START`
    let (variable, start) = match &stmt.init {
        Some(Statement::Variable(var_stmt)) if var_stmt.declarations.len() == 1 => {
            let decl = &var_stmt.declarations[0];
            match (&decl.target, &decl.initializer) {
                (BindingTarget::Identifier(name), Some(init)) => (name.node.as_str(), init),
                _ => {
                    return Err(unsupported(
                        "for initializer must declare a single counter with a value",
                        decl.span,
                    ));
                }
            }
        }
        _ => {
            return Err(unsupported(
                "for initializer must be a single variable declaration",
                stmt.span,
            ));
        }
    };

    // cond: a relational comparison with the counter on the left
    let condition = stmt
        .condition
        .as_ref()
        .ok_or_else(|| unsupported("for loop has no condition", stmt.span))?;
    let (end, adjust) = match &condition.kind {
        ExpressionKind::Binary(op, left, right) if is_counter(left, variable) => match op {
            BinaryOp::LessThan => (right.as_ref(), BoundAdjust::MinusOne),
            BinaryOp::LessThanOrEqual => (right.as_ref(), BoundAdjust::AsIs),
            BinaryOp::GreaterThan => (right.as_ref(), BoundAdjust::PlusOne),
            BinaryOp::GreaterThanOrEqual => (right.as_ref(), BoundAdjust::AsIs),
            _ => {
                return Err(unsupported(
                    "for condition must compare the counter with <, <=, > or >=",
                    condition.span,
                ));
            }
        },
        _ => {
            return Err(unsupported(
                "for condition must be a comparison on the loop counter",
                condition.span,
            ));
        }
    };

    // inc: i++, i--, i += k, i -= k
    let increment = stmt
        .increment
        .as_ref()
        .ok_or_else(|| unsupported("for loop has no increment", stmt.span))?;
    let step = match &increment.kind {
        ExpressionKind::Postfix(PostfixOp::Increment, target)
        | ExpressionKind::Prefix(PrefixOp::Increment, target)
            if is_counter(target, variable) =>
        {
            StepSize::One
        }
        ExpressionKind::Postfix(PostfixOp::Decrement, target)
        | ExpressionKind::Prefix(PrefixOp::Decrement, target)
            if is_counter(target, variable) =>
        {
            StepSize::MinusOne
        }
        ExpressionKind::Binary(BinaryOp::AddAssign, target, amount)
            if is_counter(target, variable) =>
        {
            StepSize::By(amount)
        }
        ExpressionKind::Binary(BinaryOp::SubtractAssign, target, amount)
            if is_counter(target, variable) =>
        {
            StepSize::ByNegated(amount)
        }
        _ => {
            return Err(unsupported(
                "for increment must step the loop counter",
                increment.span,
            ));
        }
    };

    Ok(NumericForPlan {
        variable,
        start,
        end,
        adjust,
        step,
    })
}

fn is_counter(expr: &Expression, variable: &str) -> bool {
    matches!(&expr.kind, ExpressionKind::Identifier(name) if name == variable)
}
