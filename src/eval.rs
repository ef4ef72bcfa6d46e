//! Classifies clauses and CNFs under a partial assignment, and locates
//! unit literals.
//!
//! Every function here is a pure read of the [`VarTable`]; none of them
//! mutate it, so repeated calls under the same assignment always agree
//! (idempotence).

use crate::clause::{Clause, Cnf};
use crate::types::{Literal, TruthValue, VarTable};

/// Evaluates a single literal: positive literals read the variable's value
/// directly, negative literals read its complement. `0` (absent) is never
/// passed in here - callers filter it out first.
fn evaluate_literal(table: &VarTable, lit: Literal) -> TruthValue {
    let value = table.value(lit.unsigned_abs());
    match (lit > 0, value) {
        (_, TruthValue::Undefined) => TruthValue::Undefined,
        (true, TruthValue::True) | (false, TruthValue::False) => TruthValue::True,
        (true, TruthValue::False) | (false, TruthValue::True) => TruthValue::False,
    }
}

/// Classifies a clause under the current assignment.
///
/// TRUE if any contained literal is TRUE; else FALSE if every contained
/// literal is FALSE; else UNDEFINED. Absent slots are ignored.
///
/// # Arguments
///
/// * `table` - the variable table giving each variable's current value
/// * `clause` - the clause to classify
///
/// # Returns
///
/// The clause's `TruthValue` under `table`'s current assignment.
///
/// # Examples
///
/// ```
/// use tseitin_dpll::clause::Clause;
/// use tseitin_dpll::eval::evaluate_clause;
/// use tseitin_dpll::types::{TruthValue, VarTable};
///
/// let mut table = VarTable::new();
/// let a = table.intern("a");
/// table.set_value(a, TruthValue::True);
/// let clause = Clause::new(a as i32, 0, 0).unwrap();
/// assert_eq!(evaluate_clause(&table, &clause), TruthValue::True);
/// ```
pub fn evaluate_clause(table: &VarTable, clause: &Clause) -> TruthValue {
    let mut any_undefined = false;
    for lit in clause.literals() {
        match evaluate_literal(table, lit) {
            TruthValue::True => return TruthValue::True,
            TruthValue::Undefined => any_undefined = true,
            TruthValue::False => {}
        }
    }
    if any_undefined {
        TruthValue::Undefined
    } else {
        TruthValue::False
    }
}

/// Classifies a CNF under the current assignment.
///
/// FALSE takes precedence over TRUE: a conjunction with any false conjunct
/// is false regardless of clause order. An empty CNF is TRUE.
///
/// # Arguments
///
/// * `table` - the variable table giving each variable's current value
/// * `cnf` - the conjunction to classify
///
/// # Returns
///
/// The CNF's `TruthValue` under `table`'s current assignment.
///
/// # Examples
///
/// ```
/// use tseitin_dpll::clause::{Clause, Cnf};
/// use tseitin_dpll::eval::evaluate_cnf;
/// use tseitin_dpll::types::{TruthValue, VarTable};
///
/// let table = VarTable::new();
/// assert_eq!(evaluate_cnf(&table, &Cnf::new()), TruthValue::True);
/// ```
pub fn evaluate_cnf(table: &VarTable, cnf: &Cnf) -> TruthValue {
    let mut any_undefined = false;
    for clause in cnf.clauses() {
        match evaluate_clause(table, clause) {
            TruthValue::False => return TruthValue::False,
            TruthValue::Undefined => any_undefined = true,
            TruthValue::True => {}
        }
    }
    if any_undefined {
        TruthValue::Undefined
    } else {
        TruthValue::True
    }
}

/// The unit literal of a clause: the sole literal whose variable is
/// UNDEFINED when every other present literal is FALSE.
///
/// Returns `None` if the clause is not a unit clause under the current
/// assignment.
///
/// # Arguments
///
/// * `table` - the variable table giving each variable's current value
/// * `clause` - the clause to scan
///
/// # Returns
///
/// * `Some(literal)` - the clause's sole undefined literal, every other
///   present literal being FALSE
/// * `None` - the clause is already TRUE, already FALSE, or has more than
///   one undefined literal
///
/// # Examples
///
/// ```
/// use tseitin_dpll::clause::Clause;
/// use tseitin_dpll::eval::unit_literal;
/// use tseitin_dpll::types::{TruthValue, VarTable};
///
/// let mut table = VarTable::new();
/// let a = table.intern("a");
/// let b = table.intern("b");
/// table.set_value(a, TruthValue::False);
/// let clause = Clause::new(a as i32, b as i32, 0).unwrap();
/// assert_eq!(unit_literal(&table, &clause), Some(b as i32));
/// ```
pub fn unit_literal(table: &VarTable, clause: &Clause) -> Option<Literal> {
    let mut candidate = None;
    for lit in clause.literals() {
        match evaluate_literal(table, lit) {
            TruthValue::True => return None,
            TruthValue::Undefined => {
                if candidate.is_some() {
                    return None;
                }
                candidate = Some(lit);
            }
            TruthValue::False => {}
        }
    }
    candidate
}
