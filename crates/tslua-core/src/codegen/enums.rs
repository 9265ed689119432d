use super::{LuaEmitter, Result};
use crate::ast::expression::{ExpressionKind, Literal};
use crate::ast::statement::EnumDeclaration;
use crate::diagnostics::{ErrorKind, TranspileError};

impl<'a> LuaEmitter<'a> {
    /// Table-backed enums assign each member into `E`; a members-only enum
    /// has no runtime table and its members become free constants.
    /// Member values auto-increment from the last numeric initializer,
    /// starting at 0.
    pub(crate) fn generate_enum_declaration(&mut self, decl: &EnumDeclaration) -> Result {
        if decl.declare {
            return Ok(());
        }

        let members_only = self
            .facts(decl.id)
            .map_or(false, |t| t.is_members_only_enum());

        if !members_only {
            self.write_indent();
            self.writeln(&format!("{} = {{}}", decl.name.node));
        }

        let mut next_value: f64 = 0.0;
        for member in &decl.members {
            let value_text = match &member.initializer {
                Some(init) => match &init.kind {
                    ExpressionKind::Literal(Literal::Number(text)) => {
                        let parsed: f64 = text.parse().map_err(|_| {
                            TranspileError::new(
                                ErrorKind::UnsupportedEnumInit,
                                format!(
                                    "enum member `{}` has a non-numeric initializer",
                                    member.name.node
                                ),
                                init.span,
                            )
                        })?;
                        next_value = parsed + 1.0;
                        text.clone()
                    }
                    _ => {
                        return Err(TranspileError::new(
                            ErrorKind::UnsupportedEnumInit,
                            format!(
                                "enum member `{}` has a non-numeric initializer",
                                member.name.node
                            ),
                            init.span,
                        ));
                    }
                },
                None => {
                    let value = next_value;
                    next_value += 1.0;
                    format_enum_value(value)
                }
            };

            self.write_indent();
            if members_only {
                self.writeln(&format!("{} = {}", member.name.node, value_text));
            } else {
                self.writeln(&format!("{}.{} = {}", decl.name.node, member.name.node, value_text));
            }
        }
        Ok(())
    }
}

fn format_enum_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
