//! DPLL (Davis-Putnam-Logemann-Loveland) algorithm implementation.
//!
//! The DPLL algorithm is a complete, sound, and terminating algorithm for
//! deciding the satisfiability of propositional logic formulas in CNF.
//! This engine holds one mutable [`VarTable`] and one explicit assignment
//! stack for the whole search, backtracking in place rather than by
//! restoring a cloned model: the assignment stack records `Chosen` vs
//! `Implied` reasons, and `backtrack` flips a chosen literal to its other
//! polarity instead of re-deciding from scratch.
//!
//! # Examples
//!
//! ```
//! use tseitin_dpll::clause::{Clause, Cnf};
//! use tseitin_dpll::solver::dpll::is_satisfiable;
//! use tseitin_dpll::types::VarTable;
//!
//! let mut table = VarTable::new();
//! let a = table.intern("a");
//! let mut cnf = Cnf::new();
//! cnf.push(Clause::new(a as i32, 0, 0).unwrap());
//!
//! assert_eq!(is_satisfiable(&mut table, &cnf).unwrap(), true);
//! ```

use crate::clause::Cnf;
use crate::error::SolverError;
use crate::eval::{evaluate_cnf, unit_literal};
use crate::types::{TruthValue, VarId, VarTable};

/// Why a variable carries its current assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// A free decision made by the search.
    Chosen,
    /// Forced by unit propagation (or a `Chosen` entry whose `True`
    /// branch has been fully explored and failed).
    Implied,
}

#[derive(Debug, Clone, Copy)]
struct AssignmentEntry {
    var: VarId,
    reason: Reason,
}

/// The chronological stack of decisions and propagations made so far.
#[derive(Debug, Default)]
struct AssignmentStack {
    entries: Vec<AssignmentEntry>,
}

impl AssignmentStack {
    fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn push(&mut self, var: VarId, reason: Reason) {
        self.entries.push(AssignmentEntry { var, reason });
    }

    fn has_chosen(&self) -> bool {
        self.entries.iter().any(|e| e.reason == Reason::Chosen)
    }
}

/// The outcome of one [`iterate_step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepResult {
    Sat,
    Unsat,
    Continue,
}

/// Pops `Implied` entries from the top of the stack, undoing their
/// assignments, until the top is a `Chosen` entry; then flips that
/// entry's variable from `True` to `False` and rewrites its reason to
/// `Implied` (it is no longer a free choice - both polarities have now
/// been explored beneath the parent context). Does not pop the flipped
/// entry.
///
/// Requires a `Chosen` entry to exist on the stack; the caller
/// (`iterate_step`) only invokes this once it has confirmed one is
/// present, so `evaluate_cnf` must have already signalled UNSAT on any
/// empty-stack path - this is an in-core invariant, not a recoverable
/// condition.
///
/// # Arguments
///
/// * `table` - the variable table to undo/flip assignments in
/// * `stack` - the assignment stack to unwind
///
/// # Returns
///
/// * `Ok(())` - the stack's top entry is now the flipped `Chosen` (now
///   `Implied`) entry
/// * `Err(SolverError::NoChosenEntry)` - the stack held no `Chosen` entry
///   at all, which the caller is required to have already ruled out
fn backtrack(table: &mut VarTable, stack: &mut AssignmentStack) -> Result<(), SolverError> {
    loop {
        let top = stack.entries.last().ok_or(SolverError::NoChosenEntry)?;
        match top.reason {
            Reason::Chosen => {
                let var = top.var;
                table.set_value(var, TruthValue::False);
                stack.entries.last_mut().unwrap().reason = Reason::Implied;
                log::debug!("backtrack: flip var {var} to False, now Implied");
                return Ok(());
            }
            Reason::Implied => {
                let var = top.var;
                table.set_value(var, TruthValue::Undefined);
                stack.entries.pop();
                log::trace!("backtrack: undo var {var}, now Undefined");
            }
        }
    }
}

/// Consults `evaluate(cnf)` and advances the search by exactly one step:
/// a single propagation, a single decision, or a full backtrack.
///
/// # Arguments
///
/// * `table` - the variable table holding the current partial assignment
/// * `stack` - the assignment stack recording decisions and propagations
/// * `cnf` - the formula being decided
///
/// # Returns
///
/// * `Ok(StepResult::Sat)` - `cnf` is satisfied by `table`'s assignment
/// * `Ok(StepResult::Unsat)` - `cnf` is false with no `Chosen` entry left
///   to backtrack from
/// * `Ok(StepResult::Continue)` - one propagation, decision, or backtrack
///   was performed; the caller should call again
///
/// # Algorithm
///
/// 1. If `cnf` evaluates TRUE, signal SAT.
/// 2. If `cnf` evaluates FALSE, backtrack if a `Chosen` entry exists,
///    else signal UNSAT.
/// 3. If `cnf` evaluates UNDEFINED, propagate the first unit literal
///    found; if none exists, decide the smallest undefined variable
///    `True`.
fn iterate_step(
    table: &mut VarTable,
    stack: &mut AssignmentStack,
    cnf: &Cnf,
) -> Result<StepResult, SolverError> {
    match evaluate_cnf(table, cnf) {
        TruthValue::True => {
            log::debug!("iterate_step: cnf is True, SAT");
            Ok(StepResult::Sat)
        }
        TruthValue::False => {
            if stack.has_chosen() {
                log::trace!("iterate_step: cnf is False, backtracking");
                backtrack(table, stack)?;
                Ok(StepResult::Continue)
            } else {
                log::debug!("iterate_step: cnf is False with no Chosen entry, UNSAT");
                Ok(StepResult::Unsat)
            }
        }
        TruthValue::Undefined => {
            for clause in cnf.clauses() {
                if let Some(lit) = unit_literal(table, clause) {
                    let var = lit.unsigned_abs();
                    let value = if lit > 0 { TruthValue::True } else { TruthValue::False };
                    table.set_value(var, value);
                    stack.push(var, Reason::Implied);
                    log::trace!("iterate_step: propagate var {var} to {value:?}");
                    return Ok(StepResult::Continue);
                }
            }

            match table.next_undefined() {
                Some(var) => {
                    table.set_value(var, TruthValue::True);
                    stack.push(var, Reason::Chosen);
                    log::trace!("iterate_step: decide var {var} = True");
                    Ok(StepResult::Continue)
                }
                // Defensive: every variable assigned but CNF undefined
                // cannot happen - evaluate_cnf would have returned True.
                None => Ok(StepResult::Sat),
            }
        }
    }
}

/// Decides satisfiability of `cnf` under `table`'s current (typically
/// all-`Undefined`) assignment, by repeatedly stepping until SAT or
/// UNSAT. On return, the assignment stack has been fully drained; on
/// SAT, `table` holds a satisfying assignment for the variables `cnf`
/// mentions.
///
/// # Arguments
///
/// * `table` - the variable table to search over
/// * `cnf` - the formula to decide
///
/// # Returns
///
/// * `Ok(true)` - `cnf` is satisfiable; `table` holds a model
/// * `Ok(false)` - `cnf` is unsatisfiable
///
/// # Algorithm
///
/// Repeatedly calls [`iterate_step`] until it signals `Sat` or `Unsat`.
/// Each call performs exactly one propagation, decision, or backtrack, so
/// this loop is the entire DPLL search: chronological backtracking with
/// unit propagation, no clause learning, no restarts.
///
/// # Examples
///
/// ```
/// use tseitin_dpll::clause::{Clause, Cnf};
/// use tseitin_dpll::solver::dpll::is_satisfiable;
/// use tseitin_dpll::types::VarTable;
///
/// let mut table = VarTable::new();
/// let a = table.intern("a");
/// let mut cnf = Cnf::new();
/// cnf.push(Clause::new(a as i32, 0, 0).unwrap());
///
/// assert_eq!(is_satisfiable(&mut table, &cnf).unwrap(), true);
/// ```
pub fn is_satisfiable(table: &mut VarTable, cnf: &Cnf) -> Result<bool, SolverError> {
    log::debug!("is_satisfiable: starting search over {} variable(s)", table.len());
    let mut stack = AssignmentStack::new();
    loop {
        match iterate_step(table, &mut stack, cnf)? {
            StepResult::Sat => {
                log::debug!("is_satisfiable: SAT");
                return Ok(true);
            }
            StepResult::Unsat => {
                log::debug!("is_satisfiable: UNSAT");
                return Ok(false);
            }
            StepResult::Continue => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Clause;

    fn lit(v: VarId, neg: bool) -> i32 {
        if neg { -(v as i32) } else { v as i32 }
    }

    #[test]
    fn single_positive_unit_is_sat() {
        let mut t = VarTable::new();
        let a = t.intern("a");
        let mut cnf = Cnf::new();
        cnf.push(Clause::new(lit(a, false), 0, 0).unwrap());
        assert!(is_satisfiable(&mut t, &cnf).unwrap());
        assert_eq!(t.value(a), TruthValue::True);
    }

    #[test]
    fn contradiction_is_unsat() {
        let mut t = VarTable::new();
        let a = t.intern("a");
        let mut cnf = Cnf::new();
        cnf.push(Clause::new(lit(a, false), 0, 0).unwrap());
        cnf.push(Clause::new(lit(a, true), 0, 0).unwrap());
        assert!(!is_satisfiable(&mut t, &cnf).unwrap());
    }

    #[test]
    fn empty_cnf_is_sat() {
        let mut t = VarTable::new();
        assert!(is_satisfiable(&mut t, &Cnf::new()).unwrap());
    }

    #[test]
    fn decision_polarity_is_true_first() {
        // A lone free variable with no constraints: DPLL must decide it
        // True on the first (and only) decision, per the fixed policy.
        let mut t = VarTable::new();
        let a = t.intern("a");
        let b = t.intern("b");
        let mut cnf = Cnf::new();
        cnf.push(Clause::new(lit(a, false), lit(b, false), 0).unwrap());
        assert!(is_satisfiable(&mut t, &cnf).unwrap());
        assert_eq!(t.value(a), TruthValue::True);
    }

    #[test]
    fn three_variable_chain_is_sat() {
        let mut t = VarTable::new();
        let a = t.intern("a");
        let b = t.intern("b");
        let c = t.intern("c");
        let mut cnf = Cnf::new();
        cnf.push(Clause::new(lit(a, false), lit(b, false), 0).unwrap());
        cnf.push(Clause::new(lit(a, true), lit(c, false), 0).unwrap());
        cnf.push(Clause::new(lit(b, true), lit(c, false), 0).unwrap());
        assert!(is_satisfiable(&mut t, &cnf).unwrap());
        for clause in cnf.clauses() {
            assert_eq!(
                crate::eval::evaluate_clause(&t, clause),
                TruthValue::True
            );
        }
    }

    #[test]
    fn backtrack_requires_a_chosen_entry() {
        let mut t = VarTable::new();
        let mut stack = AssignmentStack::new();
        assert!(matches!(
            backtrack(&mut t, &mut stack),
            Err(SolverError::NoChosenEntry)
        ));
    }
}
