//! The Tseitin encoder: recursively rewrites a formula tree into 3-CNF
//! using fresh variables.
//!
//! Recursion into children happens before a compound's own clauses are
//! emitted, so a child's clauses always precede its parent's in the
//! resulting CNF.

use crate::clause::{Clause, Cnf};
use crate::formula::Formula;
use crate::types::{Literal, VarId, VarTable};

fn neg(v: VarId) -> Literal {
    -(v as Literal)
}

fn pos(v: VarId) -> Literal {
    v as Literal
}

fn push2(cnf: &mut Cnf, a: Literal, b: Literal) {
    cnf.push(Clause::new(a, b, 0).expect("binary clause never all-zero"));
}

fn push3(cnf: &mut Cnf, a: Literal, b: Literal, c: Literal) {
    cnf.push(Clause::new(a, b, c).expect("ternary clause never all-zero"));
}

fn push1(cnf: &mut Cnf, a: Literal) {
    cnf.push(Clause::new(a, 0, 0).expect("unit clause never all-zero"));
}

/// Recurses over `formula`, emitting clauses for every compound
/// subformula it visits, and returns the variable standing for the truth
/// value of `formula` itself.
///
/// `VAR(v)` is the base case: it returns `v` directly and emits nothing.
///
/// # Arguments
///
/// * `table` - allocates one fresh variable per compound subformula
/// * `cnf` - accumulates the clauses emitted during recursion
/// * `formula` - the subformula currently being encoded
///
/// # Returns
///
/// The variable whose truth value tracks `formula`'s truth value under
/// any assignment satisfying the clauses emitted so far.
fn encode(table: &mut VarTable, cnf: &mut Cnf, formula: &Formula) -> VarId {
    match formula {
        Formula::Var(v) => {
            log::trace!("encode: VAR({v})");
            *v
        }
        Formula::And(l, r) => {
            let c = encode(table, cnf, l);
            let d = encode(table, cnf, r);
            let x = table.fresh();
            log::trace!("encode: AND({c}, {d}) -> {x}");
            push2(cnf, neg(x), pos(c));
            push2(cnf, neg(x), pos(d));
            push3(cnf, neg(c), neg(d), pos(x));
            x
        }
        Formula::Or(l, r) => {
            let c = encode(table, cnf, l);
            let d = encode(table, cnf, r);
            let x = table.fresh();
            log::trace!("encode: OR({c}, {d}) -> {x}");
            push3(cnf, neg(x), pos(c), pos(d));
            push2(cnf, neg(c), pos(x));
            push2(cnf, neg(d), pos(x));
            x
        }
        Formula::Implies(l, r) => {
            let c = encode(table, cnf, l);
            let d = encode(table, cnf, r);
            let x = table.fresh();
            log::trace!("encode: IMPLIES({c}, {d}) -> {x}");
            push3(cnf, neg(x), neg(c), pos(d));
            push2(cnf, pos(c), pos(x));
            push2(cnf, neg(d), pos(x));
            x
        }
        Formula::Equiv(l, r) => {
            let a = encode(table, cnf, l);
            let b = encode(table, cnf, r);
            let x = table.fresh();
            log::trace!("encode: EQUIV({a}, {b}) -> {x}");
            push3(cnf, neg(x), neg(a), pos(b));
            push3(cnf, neg(x), neg(b), pos(a));
            push3(cnf, pos(x), neg(a), neg(b));
            push3(cnf, pos(x), pos(a), pos(b));
            x
        }
        Formula::Not(inner) => {
            let a = encode(table, cnf, inner);
            let x = table.fresh();
            log::trace!("encode: NOT({a}) -> {x}");
            push2(cnf, neg(x), neg(a));
            push2(cnf, pos(a), pos(x));
            x
        }
    }
}

/// Encodes `formula` as an equisatisfiable CNF: `x <=> formula` for a
/// fresh `x`, plus a final unit clause asserting `x`.
///
/// The resulting CNF is satisfiable exactly when `formula` is satisfiable
/// over its original variables.
///
/// # Arguments
///
/// * `table` - the variable table to allocate auxiliary variables from
/// * `formula` - the formula tree to encode
///
/// # Returns
///
/// A `Cnf` equisatisfiable with `formula`.
///
/// # Examples
///
/// ```
/// use tseitin_dpll::formula::Formula;
/// use tseitin_dpll::tseitin::get_cnf;
/// use tseitin_dpll::types::VarTable;
///
/// let mut table = VarTable::new();
/// let a = table.intern("a");
/// let cnf = get_cnf(&mut table, &Formula::Var(a));
/// assert_eq!(cnf.len(), 1);
/// ```
pub fn get_cnf(table: &mut VarTable, formula: &Formula) -> Cnf {
    log::debug!("tseitin encoding started");
    let mut cnf = Cnf::new();
    let x = encode(table, &mut cnf, formula);
    push1(&mut cnf, pos(x));
    log::debug!("tseitin encoding finished: {} clauses, root variable {x}", cnf.len());
    cnf
}
