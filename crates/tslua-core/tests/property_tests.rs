//! Property-based checks for the structural output invariants: emission is
//! deterministic, parentheses stay balanced, indentation is a multiple of
//! four spaces, and switch labels never collide.

use proptest::prelude::*;
use tslua_core::ast::expression::{BinaryOp, Expression};
use tslua_core::ast::Program;
use tslua_test_helpers::{emit, AstBuilder};

#[derive(Debug, Clone)]
enum ExprRecipe {
    Num(u32),
    Ident(String),
    Bin(usize, Box<ExprRecipe>, Box<ExprRecipe>),
}

const OPS: [BinaryOp; 8] = [
    BinaryOp::Add,
    BinaryOp::Subtract,
    BinaryOp::Multiply,
    BinaryOp::Divide,
    BinaryOp::Modulo,
    BinaryOp::LessThan,
    BinaryOp::Equal,
    BinaryOp::Or,
];

fn build_expr(b: &mut AstBuilder, recipe: &ExprRecipe) -> Expression {
    match recipe {
        ExprRecipe::Num(n) => b.num(&n.to_string()),
        ExprRecipe::Ident(name) => b.ident(name),
        ExprRecipe::Bin(op, left, right) => {
            let left = build_expr(b, left);
            let right = build_expr(b, right);
            b.bin(OPS[op % OPS.len()], left, right)
        }
    }
}

fn expr_recipe() -> impl Strategy<Value = ExprRecipe> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(ExprRecipe::Num),
        "[a-z][a-z0-9]{0,5}".prop_map(ExprRecipe::Ident),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        (any::<usize>(), inner.clone(), inner)
            .prop_map(|(op, left, right)| ExprRecipe::Bin(op, Box::new(left), Box::new(right)))
    })
}

fn expr_program(recipe: &ExprRecipe) -> Program {
    let mut b = AstBuilder::new();
    let expr = build_expr(&mut b, recipe);
    let stmt = b.expr_stmt(expr);
    b.program(vec![stmt])
}

fn nested_program(depth_kinds: &[bool]) -> Program {
    let mut b = AstBuilder::new();
    let f = b.ident("f");
    let call = b.call(f, vec![]);
    let mut body = b.expr_stmt(call);
    for &use_if in depth_kinds.iter().rev() {
        let cond = b.ident("c");
        body = if use_if {
            b.if_stmt(cond, body, None)
        } else {
            b.while_stmt(cond, body)
        };
    }
    b.program(vec![body])
}

fn switch_program(clause_counts: &[usize]) -> Program {
    let mut b = AstBuilder::new();
    let mut statements = Vec::new();
    for &count in clause_counts {
        let k = b.ident("k");
        let mut clauses = Vec::new();
        for i in 0..count {
            let test = b.num(&i.to_string());
            let f = b.ident("f");
            let call = b.call(f, vec![]);
            let body = b.expr_stmt(call);
            let brk = b.break_stmt();
            clauses.push(b.case(test, vec![body, brk]));
        }
        statements.push(b.switch(k, clauses));
    }
    b.program(statements)
}

fn collect_labels(output: &str) -> Vec<&str> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("::") && line.ends_with("::"))
        .collect()
}

proptest! {
    #[test]
    fn emission_is_deterministic(recipe in expr_recipe()) {
        let program = expr_program(&recipe);
        let first = emit(&program).unwrap();
        let second = emit(&program).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parentheses_stay_balanced(recipe in expr_recipe()) {
        let program = expr_program(&recipe);
        let output = emit(&program).unwrap();
        prop_assert_eq!(output.matches('(').count(), output.matches(')').count());
        prop_assert!(output.ends_with('\n'));
    }

    #[test]
    fn indentation_is_a_multiple_of_four(kinds in proptest::collection::vec(any::<bool>(), 0..6)) {
        let program = nested_program(&kinds);
        let output = emit(&program).unwrap();
        for line in output.lines() {
            let leading = line.len() - line.trim_start_matches(' ').len();
            prop_assert_eq!(leading % 4, 0, "line {:?}", line);
        }
        prop_assert!(output.ends_with('\n'));
    }

    #[test]
    fn switch_labels_are_unique(counts in proptest::collection::vec(1usize..4, 1..5)) {
        let program = switch_program(&counts);
        let output = emit(&program).unwrap();
        let labels = collect_labels(&output);
        let expected: usize = counts.iter().map(|c| c + 1).sum();
        prop_assert_eq!(labels.len(), expected);
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        prop_assert_eq!(unique.len(), labels.len(), "duplicate label in:\n{}", output);
    }
}
