//! Metatable class lowering.

use tslua_core::types::NO_CLASS_OR;
use tslua_test_helpers::{emit, emit_with, AstBuilder, MockType, MockTypeChecker};

#[test]
fn derived_class_with_parameter_property_and_method() {
    let mut b = AstBuilder::new();
    let heritage = b.heritage("B");

    let sup = b.super_();
    let x = b.ident("x");
    let super_call = b.call(sup, vec![x]);
    let ctor_body_stmt = b.expr_stmt(super_call);
    let ctor_body = b.block(vec![ctor_body_stmt]);
    let ctor = b.constructor(vec![b.field_param("x")], ctor_body);

    let this = b.this();
    let this_x = b.member(this, "x");
    let ret = b.return_stmt(Some(this_x));
    let m_body = b.block(vec![ret]);
    let method = b.method("m", vec![], m_body);

    let (_, class) = b.class("C", Some(heritage), vec![ctor, method]);
    let program = b.program(vec![class]);
    let output = emit(&program).unwrap();

    assert!(output.contains("C = C or B.new()"));
    assert!(output.contains("C.__index = C"));
    assert!(output.contains("C.__base = B"));
    assert!(output.contains("function C.new(construct, ...)"));
    assert!(output.contains("function C.constructor(self,x)"));
    assert!(output.contains("self.x = x"));
    assert!(output.contains("self.__base.constructor(self,x)"));
    assert!(output.contains("function C.m(self)"));
    assert!(output.contains("return self.x"));
}

#[test]
fn base_class_header() {
    let mut b = AstBuilder::new();
    let (_, class) = b.class("C", None, vec![]);
    let program = b.program(vec![class]);
    assert_eq!(
        emit(&program).unwrap(),
        "C = C or {}\n\
         C.__index = C\n\
         function C.new(construct, ...)\n\
         \x20   local instance = setmetatable({}, C)\n\
         \x20   if construct and C.constructor then C.constructor(instance, ...) end\n\
         \x20   return instance\n\
         end\n"
    );
}

#[test]
fn pure_abstract_parent_drops_inheritance() {
    let mut b = AstBuilder::new();
    let heritage = b.heritage("Shape");
    let heritage_id = heritage.id;
    let (_, class) = b.class("Circle", Some(heritage), vec![]);
    let program = b.program(vec![class]);
    let checker = MockTypeChecker::new().with(heritage_id, MockType::pure_abstract_class());
    let output = emit_with(&program, &checker).unwrap();

    assert!(output.contains("Circle = Circle or {}"));
    assert!(!output.contains("__base"));
    assert!(!output.contains("Shape.new()"));
}

#[test]
fn no_class_or_parent_drops_the_reopen_guard() {
    let mut b = AstBuilder::new();
    let heritage = b.heritage("B");
    let heritage_id = heritage.id;
    let (_, class) = b.class("C", Some(heritage), vec![]);
    let program = b.program(vec![class]);
    let checker =
        MockTypeChecker::new().with(heritage_id, MockType::default().with_decorator(NO_CLASS_OR));
    let output = emit_with(&program, &checker).unwrap();

    assert!(output.contains("C = B.new()\n"));
    assert!(!output.contains("C = C or"));
}

#[test]
fn extension_class_adds_members_to_the_extended_class() {
    let mut b = AstBuilder::new();
    let heritage = b.heritage("Existing");
    let one = b.num("1");
    let ret = b.return_stmt(Some(one));
    let body = b.block(vec![ret]);
    let method = b.method("extra", vec![], body);
    let (class_id, class) = b.class("ExistingPatch", Some(heritage), vec![method]);
    let program = b.program(vec![class]);
    let checker = MockTypeChecker::new().with(class_id, MockType::extension_class());
    let output = emit_with(&program, &checker).unwrap();

    assert!(!output.contains("ExistingPatch"));
    assert!(!output.contains(".new(construct"));
    assert!(output.contains("function Existing.extra(self)"));
}

#[test]
fn static_fields_assign_at_class_emission_time() {
    let mut b = AstBuilder::new();
    let one = b.num("1");
    let version = b.static_field("VERSION", Some(one));
    let uninitialized = b.static_field("cache", None);
    let (_, class) = b.class("C", None, vec![version, uninitialized]);
    let program = b.program(vec![class]);
    let output = emit(&program).unwrap();

    assert!(output.contains("C.VERSION = 1\n"));
    assert!(!output.contains("cache"));
}

#[test]
fn field_initializers_without_constructor_synthesize_one() {
    let mut b = AstBuilder::new();
    let zero = b.num("0");
    let count = b.field("count", Some(zero));
    let bare = b.field("label", None);
    let (_, class) = b.class("Counter", None, vec![count, bare]);
    let program = b.program(vec![class]);
    let output = emit(&program).unwrap();

    assert!(output.contains(
        "function Counter.constructor(self)\n    self.count = 0\nend\n"
    ));
    assert!(!output.contains("self.label"));
}

#[test]
fn class_without_constructor_or_fields_has_no_constructor() {
    let mut b = AstBuilder::new();
    let (_, class) = b.class("Empty", None, vec![]);
    let program = b.program(vec![class]);
    let output = emit(&program).unwrap();
    assert!(!output.contains(".constructor"));
}

#[test]
fn constructor_orders_parameter_properties_then_fields_then_body() {
    let mut b = AstBuilder::new();
    let zero = b.num("0");
    let count = b.field("count", Some(zero));

    let ready = b.ident("ready");
    let ready_call = b.call(ready, vec![]);
    let body_stmt = b.expr_stmt(ready_call);
    let ctor_body = b.block(vec![body_stmt]);
    let ctor = b.constructor(vec![b.field_param("x")], ctor_body);

    let (_, class) = b.class("C", None, vec![count, ctor]);
    let program = b.program(vec![class]);
    let output = emit(&program).unwrap();

    let param_at = output.find("self.x = x").unwrap();
    let field_at = output.find("self.count = 0").unwrap();
    let body_at = output.find("ready()").unwrap();
    assert!(param_at < field_at && field_at < body_at);
}

#[test]
fn declare_class_is_erased() {
    let mut b = AstBuilder::new();
    let (_, mut class) = b.class("Ambient", None, vec![]);
    if let tslua_core::ast::statement::Statement::Class(ref mut decl) = class {
        decl.declare = true;
    }
    let program = b.program(vec![class]);
    assert_eq!(emit(&program).unwrap(), "");
}

#[test]
fn methods_indent_their_bodies() {
    let mut b = AstBuilder::new();
    let nothing = b.null();
    let ret = b.return_stmt(Some(nothing));
    let body = b.block(vec![ret]);
    let method = b.method("get", vec![b.param("k")], body);
    let (_, class) = b.class("Store", None, vec![method]);
    let program = b.program(vec![class]);
    let output = emit(&program).unwrap();

    assert!(output.contains("function Store.get(self,k)\n    return nil\nend\n"));
}
