use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tslua_core::ast::expression::{BinaryOp, PostfixOp};
use tslua_core::ast::Program;
use tslua_core::transpile;
use tslua_core::types::UntypedChecker;
use tslua_test_helpers::AstBuilder;

fn build_program(blocks: usize) -> Program {
    let mut b = AstBuilder::new();
    let mut statements = Vec::new();

    for i in 0..blocks {
        let one = b.num("1");
        let two = b.num("2");
        let sum = b.bin(BinaryOp::Add, one, two);
        statements.push(b.var(&format!("x{}", i), sum));

        let cond_left = b.ident(&format!("x{}", i));
        let three = b.num("3");
        let cond = b.bin(BinaryOp::LessThan, cond_left, three);
        let f = b.ident("f");
        let call = b.call(f, vec![]);
        let then_branch = b.expr_stmt(call);
        statements.push(b.if_stmt(cond, then_branch, None));

        let zero = b.num("0");
        let init = b.var("i", zero);
        let counter = b.ident("i");
        let limit = b.num("100");
        let loop_cond = b.bin(BinaryOp::LessThan, counter, limit);
        let counter2 = b.ident("i");
        let inc = b.postfix(PostfixOp::Increment, counter2);
        let g = b.ident("g");
        let i_arg = b.ident("i");
        let g_call = b.call(g, vec![i_arg]);
        let body = b.expr_stmt(g_call);
        statements.push(b.for_stmt(Some(init), Some(loop_cond), Some(inc), body));

        let k = b.ident("k");
        let case_value = b.num("1");
        let h = b.ident("h");
        let h_call = b.call(h, vec![]);
        let case_body = b.expr_stmt(h_call);
        let brk = b.break_stmt();
        let case = b.case(case_value, vec![case_body, brk]);
        let d = b.ident("d");
        let d_call = b.call(d, vec![]);
        let default_body = b.expr_stmt(d_call);
        let default = b.default_case(vec![default_body]);
        statements.push(b.switch(k, vec![case, default]));
    }

    b.program(statements)
}

fn emitter_benchmark(c: &mut Criterion) {
    let program = build_program(64);
    c.bench_function("emit_program_64_blocks", |bench| {
        bench.iter(|| transpile(black_box(&program), &UntypedChecker).unwrap())
    });
}

criterion_group!(benches, emitter_benchmark);
criterion_main!(benches);
