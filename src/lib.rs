//! # tseitin_dpll
//!
//! A propositional satisfiability checker. It accepts a propositional
//! formula in postfix notation, converts it to conjunctive normal form
//! (CNF) via a Tseitin-style transformation, and decides satisfiability
//! with the Davis-Putnam-Logemann-Loveland (DPLL) procedure. A second
//! input mode accepts a CNF directly, one clause of up to three literals
//! per line.
//!
//! ## Architecture overview
//!
//! - **Data types** ([`types`]): variable identifiers, literals, truth
//!   values, and the variable table.
//! - **Clauses and CNF** ([`clause`]): the clause/CNF containers.
//! - **Evaluator** ([`eval`]): classifies a clause/CNF under a partial
//!   assignment and locates unit literals.
//! - **Formula tree** ([`formula`]): the recursive propositional formula
//!   built by the postfix parser.
//! - **Lexer** ([`lexer`]) and **parser** ([`parser`]): tokenize and
//!   assemble a postfix formula into a [`formula::Formula`] tree.
//! - **CNF reader** ([`cnf_parser`]): reads a CNF directly, one clause per
//!   line.
//! - **Tseitin encoder** ([`tseitin`]): rewrites a formula tree into
//!   3-CNF, introducing one fresh variable per subformula.
//! - **Solver** ([`solver`]): the DPLL search over an explicit assignment
//!   stack with unit propagation and chronological backtracking.
//!
//! ## Quick start
//!
//! ```rust
//! use tseitin_dpll::{formula::Formula, lexer, parser, solver::dpll::is_satisfiable, tseitin, types::VarTable};
//!
//! let mut table = VarTable::new();
//! let formula = parser::parse_formula(&mut table, lexer::tokens("a a &&")).unwrap();
//! let cnf = tseitin::get_cnf(&mut table, &formula);
//! assert!(is_satisfiable(&mut table, &cnf).unwrap());
//! ```

pub mod clause;
pub mod cnf_parser;
pub mod error;
pub mod eval;
pub mod formula;
pub mod lexer;
pub mod parser;
pub mod solver;
pub mod tseitin;
pub mod types;

pub use error::SolverError;
