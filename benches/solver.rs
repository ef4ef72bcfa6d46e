use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tseitin_dpll::clause::{Clause, Cnf};
use tseitin_dpll::solver::dpll::is_satisfiable;
use tseitin_dpll::types::VarTable;
use tseitin_dpll::{lexer, parser, tseitin};

fn create_simple_sat() -> (VarTable, Cnf) {
    // (x1 ∨ x2) ∧ (¬x1 ∨ x3) ∧ (¬x2 ∨ ¬x3)
    let mut t = VarTable::new();
    let x1 = t.intern("x1") as i32;
    let x2 = t.intern("x2") as i32;
    let x3 = t.intern("x3") as i32;
    let mut cnf = Cnf::new();
    cnf.push(Clause::new(x1, x2, 0).unwrap());
    cnf.push(Clause::new(-x1, x3, 0).unwrap());
    cnf.push(Clause::new(-x2, -x3, 0).unwrap());
    (t, cnf)
}

fn create_chain_sat(n: usize) -> (VarTable, Cnf) {
    // (x0 ∨ x1) ∧ (¬x0 ∨ x2) ∧ (¬x1 ∨ x2) ∧ ... - chain of implications
    let mut t = VarTable::new();
    let vars: Vec<i32> = (0..n).map(|i| t.intern(&format!("x{i}")) as i32).collect();
    let mut cnf = Cnf::new();

    cnf.push(Clause::new(vars[0], vars[1], 0).unwrap());
    for i in 0..(n - 2) {
        cnf.push(Clause::new(-vars[i], vars[i + 2], 0).unwrap());
        cnf.push(Clause::new(-vars[i + 1], vars[i + 2], 0).unwrap());
    }

    (t, cnf)
}

fn create_tseitin_formula(depth: usize) -> (VarTable, Cnf) {
    // A right-leaning chain of && over `depth` variables, Tseitin-encoded:
    // a0 a1 && a2 && a3 && ...
    let mut src = String::from("a0");
    for i in 1..depth {
        src.push_str(&format!(" a{i} &&"));
    }
    let mut t = VarTable::new();
    let formula = parser::parse_formula(&mut t, lexer::tokens(&src)).unwrap();
    let cnf = tseitin::get_cnf(&mut t, &formula);
    (t, cnf)
}

fn bench_simple_sat(c: &mut Criterion) {
    c.bench_function("simple_3var_sat", |b| {
        b.iter(|| {
            let (mut t, cnf) = create_simple_sat();
            is_satisfiable(black_box(&mut t), black_box(&cnf))
        })
    });
}

fn bench_chain_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    for n in [10, 20, 30].iter() {
        group.bench_with_input(format!("chain_{n}"), n, |b, &n| {
            b.iter(|| {
                let (mut t, cnf) = create_chain_sat(n);
                is_satisfiable(black_box(&mut t), black_box(&cnf))
            })
        });
    }

    group.finish();
}

fn bench_tseitin_conjunction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tseitin_conjunction");

    for depth in [5, 10, 20].iter() {
        group.bench_with_input(format!("depth_{depth}"), depth, |b, &depth| {
            b.iter(|| {
                let (mut t, cnf) = create_tseitin_formula(depth);
                is_satisfiable(black_box(&mut t), black_box(&cnf))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simple_sat, bench_chain_sat, bench_tseitin_conjunction);
criterion_main!(benches);
