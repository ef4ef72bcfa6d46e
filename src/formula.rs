//! The propositional formula tree built by the postfix parser and consumed
//! by the Tseitin encoder.

use crate::types::VarId;

/// A propositional formula. Children are exclusively owned by their
/// parent; the whole tree is owned top-down from the root.
#[derive(Debug)]
pub enum Formula {
    Var(VarId),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Equiv(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn not(f: Formula) -> Formula {
        Formula::Not(Box::new(f))
    }

    pub fn and(l: Formula, r: Formula) -> Formula {
        Formula::And(Box::new(l), Box::new(r))
    }

    pub fn or(l: Formula, r: Formula) -> Formula {
        Formula::Or(Box::new(l), Box::new(r))
    }

    pub fn implies(l: Formula, r: Formula) -> Formula {
        Formula::Implies(Box::new(l), Box::new(r))
    }

    pub fn equiv(l: Formula, r: Formula) -> Formula {
        Formula::Equiv(Box::new(l), Box::new(r))
    }
}
