//! Type-aware call rewriters: method calls on string- and array-typed
//! receivers map onto `string.*`, `table.*`, and the `TS_*` runtime
//! helpers instead of the context-argument convention.

use super::{LuaEmitter, Result};
use crate::ast::expression::Expression;
use crate::ast::Ident;
use crate::diagnostics::{ErrorKind, TranspileError};

impl<'a> LuaEmitter<'a> {
    pub(crate) fn generate_string_method_call(
        &mut self,
        object: &Expression,
        name: &Ident,
        args: &[Expression],
    ) -> Result {
        match name.node.as_str() {
            // TODO: replace lowers to string.sub, which extracts a substring
            // instead of substituting; needs a string.gsub-based rewrite
            // with pattern escaping.
            "replace" => {
                self.write("string.sub(");
                self.generate_expression(object, false)?;
                for arg in args {
                    self.write(", ");
                    self.generate_expression(arg, false)?;
                }
                self.write(")");
                Ok(())
            }
            "indexOf" => match args {
                [needle] => {
                    self.write("(string.find(");
                    self.generate_expression(object, false)?;
                    self.write(", ");
                    self.generate_expression(needle, false)?;
                    self.write(", 1, true) or 0) - 1");
                    Ok(())
                }
                [needle, from] => {
                    self.write("(string.find(");
                    self.generate_expression(object, false)?;
                    self.write(", ");
                    self.generate_expression(needle, false)?;
                    self.write(", ");
                    self.generate_expression(from, false)?;
                    self.write("+1, true) or 0) - 1");
                    Ok(())
                }
                _ => Err(TranspileError::new(
                    ErrorKind::UnsupportedStringCall,
                    format!("indexOf expects 1 or 2 arguments, got {}", args.len()),
                    name.span,
                )),
            },
            other => Err(TranspileError::new(
                ErrorKind::UnsupportedStringCall,
                format!("unsupported string method `{}`", other),
                name.span,
            )),
        }
    }

    pub(crate) fn generate_array_method_call(
        &mut self,
        object: &Expression,
        name: &Ident,
        args: &[Expression],
    ) -> Result {
        match name.node.as_str() {
            "push" => {
                self.write("table.insert(");
                self.generate_expression(object, false)?;
                for arg in args {
                    self.write(", ");
                    self.generate_expression(arg, false)?;
                }
                self.write(")");
                Ok(())
            }
            "forEach" | "map" | "filter" | "some" | "every" | "slice" => {
                self.write("TS_");
                self.write(&name.node);
                self.write("(");
                self.generate_expression(object, false)?;
                for arg in args {
                    self.write(", ");
                    self.generate_expression(arg, false)?;
                }
                self.write(")");
                Ok(())
            }
            other => Err(TranspileError::new(
                ErrorKind::UnsupportedArrayCall,
                format!("unsupported array method `{}`", other),
                name.span,
            )),
        }
    }
}
