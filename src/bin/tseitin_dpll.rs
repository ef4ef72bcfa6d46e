use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;

use clap::{Parser, Subcommand};

use tseitin_dpll::{cnf_parser, lexer, parser, solver::dpll::is_satisfiable, tseitin, types::VarTable, SolverError};

/// Decide satisfiability of a propositional formula or a direct CNF.
#[derive(Parser)]
#[command(name = "tseitin_dpll")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Print the satisfying assignment (DIMACS-style `v ...` line) on SAT.
    #[arg(long, global = true)]
    model: bool,

    /// Raise the log level to debug.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Parse a postfix formula, Tseitin-transform it, and solve.
    Formula { path: String },
    /// Parse a CNF directly (one clause of up to three literals per line) and solve.
    Cnf { path: String },
}

fn open(path: &str) -> io::Result<Box<dyn BufRead>> {
    if path == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn run(cli: &Cli) -> Result<bool, SolverError> {
    let mut table = VarTable::new();

    let result = match &cli.mode {
        Mode::Formula { path } => {
            let mut reader = open(path)?;
            let mut contents = String::new();
            io::Read::read_to_string(&mut reader, &mut contents)?;
            log::debug!("parsing postfix formula from {path}");
            let formula = parser::parse_formula(&mut table, lexer::tokens(&contents))?;
            log::debug!("tseitin-encoding formula");
            let cnf = tseitin::get_cnf(&mut table, &formula);
            is_satisfiable(&mut table, &cnf)?
        }
        Mode::Cnf { path } => {
            let reader = open(path)?;
            log::debug!("parsing direct CNF from {path}");
            let cnf = cnf_parser::parse_cnf(&mut table, reader)?;
            is_satisfiable(&mut table, &cnf)?
        }
    };

    if result {
        println!("SAT");
        if cli.model {
            print!("v ");
            for id in 1..=table.len() as u32 {
                match table.value(id) {
                    tseitin_dpll::types::TruthValue::True => print!("{id} "),
                    tseitin_dpll::types::TruthValue::False => print!("-{id} "),
                    tseitin_dpll::types::TruthValue::Undefined => print!("{id} "),
                }
            }
            println!("0");
        }
    } else {
        println!("UNSAT");
    }
    Ok(result)
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).init();

    match run(&cli) {
        Ok(_) => process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
