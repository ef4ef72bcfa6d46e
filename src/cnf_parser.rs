//! Reads a CNF directly: one clause of up to three literals per line.
//!
//! A line's tokens beyond the third are ignored (truncation). Blank
//! lines are skipped rather than producing a vacuous clause: `Clause::new`
//! rejects an all-zero triple by construction, so a blank line is simply
//! not a clause at all. See DESIGN.md for the full reasoning.

use std::io::BufRead;

use crate::clause::{Clause, Cnf};
use crate::error::SolverError;
use crate::types::{Literal, VarTable};

/// Parses a single CNF line into a clause, or `None` for a blank line.
///
/// # Arguments
///
/// * `table` - interns variable names encountered on the line
/// * `line` - up to three whitespace-separated `NAME`/`-NAME` tokens;
///   tokens past the third are ignored
///
/// # Returns
///
/// * `Ok(Some(clause))` - the line held one to three literals
/// * `Ok(None)` - the line was blank
/// * `Err(_)` - a token was empty or not alphanumeric
fn parse_line(table: &mut VarTable, line: &str) -> Result<Option<Clause>, SolverError> {
    let mut literals: [Literal; 3] = [0, 0, 0];
    let mut count = 0usize;

    for tok in line.split_whitespace().take(3) {
        let (neg, name) = match tok.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, tok),
        };
        if name.is_empty() {
            return Err(SolverError::EmptyToken);
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SolverError::InvalidVariableName(tok.to_owned()));
        }
        let var = table.intern(name);
        let lit = if neg { -(var as Literal) } else { var as Literal };
        literals[count] = lit;
        count += 1;
    }

    if count == 0 {
        return Ok(None);
    }
    Clause::new(literals[0], literals[1], literals[2]).map(Some)
}

/// Reads a CNF from `input`, one clause per line.
///
/// # Arguments
///
/// * `table` - interns variable names encountered while reading
/// * `input` - a `BufRead` source, one clause-line at a time
///
/// # Returns
///
/// * `Ok(cnf)` - every non-blank line parsed as a clause
/// * `Err(_)` - an I/O error, or a malformed line (see [`parse_line`])
///
/// # Examples
///
/// ```
/// use tseitin_dpll::cnf_parser::parse_cnf;
/// use tseitin_dpll::types::VarTable;
///
/// let mut table = VarTable::new();
/// let cnf = parse_cnf(&mut table, "a b\n-a c\n".as_bytes()).unwrap();
/// assert_eq!(cnf.len(), 2);
/// ```
pub fn parse_cnf(table: &mut VarTable, input: impl BufRead) -> Result<Cnf, SolverError> {
    let mut cnf = Cnf::new();
    for line in input.lines() {
        let line = line?;
        if let Some(clause) = parse_line(table, &line)? {
            cnf.push(clause);
        }
    }
    Ok(cnf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let mut t = VarTable::new();
        let cnf = parse_cnf(&mut t, "a\n\nb\n".as_bytes()).unwrap();
        assert_eq!(cnf.len(), 2);
    }

    #[test]
    fn negative_literal_prefix() {
        let mut t = VarTable::new();
        let cnf = parse_cnf(&mut t, "-a b\n".as_bytes()).unwrap();
        let slots = cnf.clauses()[0].slots();
        assert_eq!(slots[0], -1);
        assert_eq!(slots[1], 2);
    }

    #[test]
    fn lines_with_more_than_three_tokens_truncate() {
        let mut t = VarTable::new();
        let cnf = parse_cnf(&mut t, "a b c d\n".as_bytes()).unwrap();
        assert_eq!(cnf.clauses()[0].slots(), [1, 2, 3]);
    }

    #[test]
    fn repeated_names_share_a_variable() {
        let mut t = VarTable::new();
        let cnf = parse_cnf(&mut t, "a b\n-a c\n".as_bytes()).unwrap();
        assert_eq!(cnf.clauses()[0].slots()[0], 1);
        assert_eq!(cnf.clauses()[1].slots()[0], -1);
    }
}
