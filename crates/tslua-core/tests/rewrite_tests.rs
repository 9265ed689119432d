//! Type-driven string/array method and property rewrites.

use tslua_core::ErrorKind;
use tslua_test_helpers::{emit_with, AstBuilder, MockType, MockTypeChecker};

fn expect_err(
    program: &tslua_core::ast::Program,
    checker: &MockTypeChecker,
) -> tslua_core::TranspileError {
    match emit_with(program, checker) {
        Ok(output) => panic!("expected a translation error, got output:\n{}", output),
        Err(err) => err,
    }
}

#[test]
fn string_replace_maps_to_sub() {
    let mut b = AstBuilder::new();
    let s = b.ident("s");
    let s_id = s.id;
    let callee = b.member(s, "replace");
    let from = b.num("1");
    let to = b.num("3");
    let call = b.call(callee, vec![from, to]);
    let stmt = b.expr_stmt(call);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(s_id, MockType::string());
    assert_eq!(
        emit_with(&program, &checker).unwrap(),
        "string.sub(s, 1, 3)\n"
    );
}

#[test]
fn string_index_of_single_argument() {
    let mut b = AstBuilder::new();
    let s = b.ident("s");
    let s_id = s.id;
    let callee = b.member(s, "indexOf");
    let needle = b.ident("x");
    let call = b.call(callee, vec![needle]);
    let stmt = b.expr_stmt(call);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(s_id, MockType::string());
    assert_eq!(
        emit_with(&program, &checker).unwrap(),
        "(string.find(s, x, 1, true) or 0) - 1\n"
    );
}

#[test]
fn string_index_of_with_start_offset() {
    let mut b = AstBuilder::new();
    let s = b.ident("s");
    let s_id = s.id;
    let callee = b.member(s, "indexOf");
    let needle = b.ident("x");
    let from = b.ident("from");
    let call = b.call(callee, vec![needle, from]);
    let stmt = b.expr_stmt(call);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(s_id, MockType::string());
    assert_eq!(
        emit_with(&program, &checker).unwrap(),
        "(string.find(s, x, from+1, true) or 0) - 1\n"
    );
}

#[test]
fn string_literal_receiver_needs_no_checker() {
    let mut b = AstBuilder::new();
    let s = b.str_lit("haystack");
    let callee = b.member(s, "indexOf");
    let needle = b.str_lit("st");
    let call = b.call(callee, vec![needle]);
    let stmt = b.expr_stmt(call);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new();
    assert_eq!(
        emit_with(&program, &checker).unwrap(),
        "(string.find(\"haystack\", \"st\", 1, true) or 0) - 1\n"
    );
}

#[test]
fn unknown_string_method_is_rejected() {
    let mut b = AstBuilder::new();
    let s = b.ident("s");
    let s_id = s.id;
    let callee = b.member(s, "toUpperCase");
    let call = b.call(callee, vec![]);
    let stmt = b.expr_stmt(call);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(s_id, MockType::string());
    let err = expect_err(&program, &checker);
    assert_eq!(err.kind, ErrorKind::UnsupportedStringCall);
    assert!(err.message.contains("toUpperCase"));
}

#[test]
fn string_length_is_the_length_operator() {
    let mut b = AstBuilder::new();
    let s = b.ident("s");
    let s_id = s.id;
    let expr = b.member(s, "length");
    let stmt = b.expr_stmt(expr);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(s_id, MockType::string());
    assert_eq!(emit_with(&program, &checker).unwrap(), "#s\n");
}

#[test]
fn unknown_string_property_is_rejected() {
    let mut b = AstBuilder::new();
    let s = b.ident("s");
    let s_id = s.id;
    let expr = b.member(s, "size");
    let stmt = b.expr_stmt(expr);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(s_id, MockType::string());
    assert_eq!(
        expect_err(&program, &checker).kind,
        ErrorKind::UnsupportedStringProperty
    );
}

#[test]
fn array_push_maps_to_table_insert() {
    let mut b = AstBuilder::new();
    let a = b.ident("a");
    let a_id = a.id;
    let callee = b.member(a, "push");
    let x = b.ident("x");
    let call = b.call(callee, vec![x]);
    let stmt = b.expr_stmt(call);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(a_id, MockType::array());
    assert_eq!(emit_with(&program, &checker).unwrap(), "table.insert(a, x)\n");
}

#[test]
fn array_helpers_map_to_the_runtime_family() {
    for method in ["forEach", "map", "filter", "some", "every", "slice"] {
        let mut b = AstBuilder::new();
        let a = b.ident("a");
        let a_id = a.id;
        let callee = b.member(a, method);
        let f = b.ident("f");
        let call = b.call(callee, vec![f]);
        let stmt = b.expr_stmt(call);
        let program = b.program(vec![stmt]);
        let checker = MockTypeChecker::new().with(a_id, MockType::array());
        assert_eq!(
            emit_with(&program, &checker).unwrap(),
            format!("TS_{}(a, f)\n", method)
        );
    }
}

#[test]
fn unknown_array_method_is_rejected() {
    let mut b = AstBuilder::new();
    let a = b.ident("a");
    let a_id = a.id;
    let callee = b.member(a, "pop");
    let call = b.call(callee, vec![]);
    let stmt = b.expr_stmt(call);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(a_id, MockType::array());
    let err = expect_err(&program, &checker);
    assert_eq!(err.kind, ErrorKind::UnsupportedArrayCall);
    assert!(err.message.contains("pop"));
}

#[test]
fn array_length_is_the_length_operator() {
    let mut b = AstBuilder::new();
    let a = b.ident("a");
    let a_id = a.id;
    let expr = b.member(a, "length");
    let stmt = b.expr_stmt(expr);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(a_id, MockType::array());
    assert_eq!(emit_with(&program, &checker).unwrap(), "#a\n");
}

#[test]
fn unknown_array_property_is_rejected() {
    let mut b = AstBuilder::new();
    let a = b.ident("a");
    let a_id = a.id;
    let expr = b.member(a, "size");
    let stmt = b.expr_stmt(expr);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(a_id, MockType::array());
    assert_eq!(
        expect_err(&program, &checker).kind,
        ErrorKind::UnsupportedArrayProperty
    );
}

#[test]
fn members_only_enum_access_drops_the_enum_name() {
    let mut b = AstBuilder::new();
    let e = b.ident("Color");
    let e_id = e.id;
    let expr = b.member(e, "Red");
    let stmt = b.expr_stmt(expr);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(e_id, MockType::members_only_enum());
    assert_eq!(emit_with(&program, &checker).unwrap(), "Red\n");
}

#[test]
fn plain_enum_access_stays_qualified() {
    let mut b = AstBuilder::new();
    let e = b.ident("Color");
    let expr = b.member(e, "Red");
    let stmt = b.expr_stmt(expr);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new();
    assert_eq!(emit_with(&program, &checker).unwrap(), "Color.Red\n");
}

#[test]
fn method_call_on_object_typed_receiver_uses_context_argument() {
    let mut b = AstBuilder::new();
    let o = b.ident("o");
    let o_id = o.id;
    let callee = b.member(o, "update");
    let x = b.ident("x");
    let call = b.call(callee, vec![x]);
    let stmt = b.expr_stmt(call);
    let program = b.program(vec![stmt]);
    let checker = MockTypeChecker::new().with(o_id, MockType::object());
    assert_eq!(emit_with(&program, &checker).unwrap(), "o.update(o, x)\n");
}
