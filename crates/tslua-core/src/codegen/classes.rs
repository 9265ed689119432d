use super::{LuaEmitter, Result};
use crate::ast::statement::{
    ClassDeclaration, ClassMember, ConstructorDeclaration, FieldDeclaration, HeritageClause,
    MethodDeclaration,
};
use crate::types::NO_CLASS_OR;

impl<'a> LuaEmitter<'a> {
    /// Classes lower onto metatables:
    ///
    /// ```lua
    /// C = C or B.new()        -- or `{}` without a parent
    /// C.__index = C
    /// C.__base = B            -- only with a parent
    /// function C.new(construct, ...)
    ///     local instance = setmetatable({}, C)
    ///     if construct and C.constructor then C.constructor(instance, ...) end
    ///     return instance
    /// end
    /// ```
    ///
    /// A parent created as `B.new()` (no `construct` flag) contributes its
    /// method table without running its constructor. An extension class
    /// skips the header entirely and adds members to the extended class.
    pub(crate) fn generate_class_declaration(&mut self, decl: &ClassDeclaration) -> Result {
        if decl.declare {
            return Ok(());
        }

        let is_extension = self
            .facts(decl.id)
            .map_or(false, |t| t.is_extension_class());

        // A pure-abstract parent has no runtime table to inherit from
        let parent: Option<&HeritageClause> = decl.heritage.as_ref().filter(|h| {
            !self
                .facts(h.id)
                .map_or(false, |t| t.is_pure_abstract_class())
        });

        let target = if is_extension {
            decl.heritage
                .as_ref()
                .map(|h| h.name.node.clone())
                .unwrap_or_else(|| decl.name.node.clone())
        } else {
            decl.name.node.clone()
        };

        if !is_extension {
            self.generate_class_header(&decl.name.node, parent);
        }

        for member in &decl.members {
            if let ClassMember::Field(field) = member {
                if field.is_static {
                    self.generate_static_field(&target, field)?;
                }
            }
        }

        let constructor = decl.members.iter().find_map(|m| match m {
            ClassMember::Constructor(ctor) => Some(ctor),
            _ => None,
        });
        let initialized_fields: Vec<&FieldDeclaration> = decl
            .members
            .iter()
            .filter_map(|m| match m {
                ClassMember::Field(f) if !f.is_static && f.initializer.is_some() => Some(f),
                _ => None,
            })
            .collect();

        if let Some(ctor) = constructor {
            self.generate_class_constructor(&target, ctor, &initialized_fields)?;
        } else if !initialized_fields.is_empty() {
            // No written constructor: synthesize one to run field initializers
            self.write_indent();
            self.writeln(&format!("function {}.constructor(self)", target));
            self.indent();
            self.generate_field_initializers(&initialized_fields)?;
            self.dedent();
            self.write_indent();
            self.writeln("end");
        }

        for member in &decl.members {
            if let ClassMember::Method(method) = member {
                self.generate_class_method(&target, method)?;
            }
        }

        Ok(())
    }

    fn generate_class_header(&mut self, class_name: &str, parent: Option<&HeritageClause>) {
        // The reopen guard keeps an already-populated table; a parent
        // decorated NoClassOr forbids reopening its subclasses
        let reopen = match parent {
            Some(h) => !self
                .facts(h.id)
                .map_or(false, |t| t.has_decorator(NO_CLASS_OR)),
            None => true,
        };

        self.write_indent();
        self.write(class_name);
        self.write(" = ");
        if reopen {
            self.write(class_name);
            self.write(" or ");
        }
        match parent {
            Some(h) => {
                self.write(&h.name.node);
                self.write(".new()");
            }
            None => self.write("{}"),
        }
        self.writeln("");

        self.write_indent();
        self.writeln(&format!("{}.__index = {}", class_name, class_name));

        if let Some(h) = parent {
            self.write_indent();
            self.writeln(&format!("{}.__base = {}", class_name, h.name.node));
        }

        self.write_indent();
        self.writeln(&format!("function {}.new(construct, ...)", class_name));
        self.indent();
        self.write_indent();
        self.writeln(&format!("local instance = setmetatable({{}}, {})", class_name));
        self.write_indent();
        self.writeln(&format!(
            "if construct and {}.constructor then {}.constructor(instance, ...) end",
            class_name, class_name
        ));
        self.write_indent();
        self.writeln("return instance");
        self.dedent();
        self.write_indent();
        self.writeln("end");
    }

    fn generate_static_field(&mut self, class_name: &str, field: &FieldDeclaration) -> Result {
        // A static without an initializer has no value to assign
        let Some(init) = &field.initializer else {
            return Ok(());
        };
        self.write_indent();
        self.write(class_name);
        self.write(".");
        self.write(&field.name.node);
        self.write(" = ");
        self.generate_expression(init, false)?;
        self.writeln("");
        Ok(())
    }

    /// Constructor body order: parameter properties first, then field
    /// initializers, then the written body.
    fn generate_class_constructor(
        &mut self,
        class_name: &str,
        ctor: &ConstructorDeclaration,
        initialized_fields: &[&FieldDeclaration],
    ) -> Result {
        self.write_indent();
        self.write("function ");
        self.write(class_name);
        self.write(".constructor");
        self.write_parameter_list(&ctor.parameters, true);
        self.writeln("");
        self.indent();

        for param in ctor.parameters.iter().filter(|p| p.visibility.is_some()) {
            self.write_indent();
            self.writeln(&format!("self.{} = {}", param.name.node, param.name.node));
        }
        self.generate_field_initializers(initialized_fields)?;
        self.generate_block(&ctor.body)?;

        self.dedent();
        self.write_indent();
        self.writeln("end");
        Ok(())
    }

    fn generate_field_initializers(&mut self, fields: &[&FieldDeclaration]) -> Result {
        for field in fields {
            let Some(init) = &field.initializer else {
                continue;
            };
            self.write_indent();
            self.write("self.");
            self.write(&field.name.node);
            self.write(" = ");
            self.generate_expression(init, false)?;
            self.writeln("");
        }
        Ok(())
    }

    fn generate_class_method(&mut self, class_name: &str, method: &MethodDeclaration) -> Result {
        self.write_indent();
        self.write("function ");
        self.write(class_name);
        self.write(".");
        self.write(&method.name.node);
        self.write_parameter_list(&method.parameters, true);
        self.writeln("");
        self.indent();
        self.generate_block(&method.body)?;
        self.dedent();
        self.write_indent();
        self.writeln("end");
        Ok(())
    }
}
