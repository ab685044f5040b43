use std::path::PathBuf;

use clap::Parser;

use dpll_proof::{
    config::Config,
    context::Context,
    procedures::core::core,
    reports::{dot::ProofGraph, trace::trace_lines, SolveResult},
    structures::clause::Clause,
    types::err::ErrorKind,
};

mod misc;

use misc::{examine_parser_report, load_dimacs};

/// Determine the satisfiability of a DIMACS formula, with a resolution proof of unsatisfiability.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The DIMACS file to solve.
    file: PathBuf,

    /// Display the proof of unsatisfiability as a tree.
    #[arg(short, long)]
    proof: bool,

    /// Display the proof of unsatisfiability as a trace.
    #[arg(short, long)]
    trace: bool,

    /// Display the proof of unsatisfiability as a graph in the DOT language.
    #[arg(short, long)]
    dot: bool,

    /// Display the clauses used in the proof of unsatisfiability.
    #[arg(short, long)]
    core: bool,

    /// Check the result of the solve.
    #[arg(long)]
    check: bool,

    /// Assume atoms are false before true.
    #[arg(long)]
    negative_first: bool,

    /// Display proofs wider than this as a trace.
    #[arg(long)]
    tree_width: Option<usize>,

    /// Display proofs whose trees have more clauses than this as a trace.
    #[arg(long)]
    tree_size: Option<u64>,

    /// Display counts from the solve.
    #[arg(short, long)]
    stats: bool,
}

fn config_from_args(args: &Args) -> Config {
    let mut config = Config::default();

    config.check_proofs.value = args.check;
    config.first_polarity.value = !args.negative_first;

    if let Some(width) = args.tree_width {
        if !config.tree_width_limit.set(width) {
            let (min, max) = config.tree_width_limit.min_max();
            println!("c Ignored {} of {width}, as outside [{min}, {max}]", config.tree_width_limit.name);
        }
    }

    if let Some(size) = args.tree_size {
        if !config.tree_size_limit.set(size) {
            let (min, max) = config.tree_size_limit.min_max();
            println!("c Ignored {} of {size}, as outside [{min}, {max}]", config.tree_size_limit.name);
        }
    }

    config
}

/// The `s` line of the answer, followed by the `v` line of the assignment for a satisfiable answer.
fn answer_lines(result: &SolveResult) -> Vec<String> {
    let mut lines = vec![format!("s {}", result.report())];
    if let SolveResult::Satisfiable(valuation) = result {
        lines.push(format!("v {valuation}"));
    }
    lines
}

/// The lines of the proof as a tree, or as a trace if the tree is too large or too wide.
fn proof_lines(proof: &Clause, config: &Config) -> Vec<String> {
    let size = proof.tree_size();
    if size > config.tree_size_limit.value {
        println!("c Proof tree of {size} clauses written as a trace");
        return trace_lines(proof);
    }

    let lines = proof.tree_lines();
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    match width <= config.tree_width_limit.value {
        true => lines,
        false => {
            println!("c Proof of width {width} written as a trace");
            trace_lines(proof)
        }
    }
}

fn display_proof(proof: &Clause, config: &Config, args: &Args) {
    if args.proof {
        proof_lines(proof, config).iter().for_each(|line| println!("{line}"));
    }

    if args.trace {
        trace_lines(proof).iter().for_each(|line| println!("{line}"));
    }

    if args.dot {
        println!("{}", ProofGraph::from_proof(proof).to_dot());
    }

    if args.core {
        for clause in core(proof) {
            println!("{}", clause.as_dimacs(true));
        }
    }
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();
    let config = config_from_args(&args);

    println!("c Reading DIMACS file from {:?}", args.file);
    let (formula, info) = match load_dimacs(&args.file) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };
    examine_parser_report(&formula, &info);

    let mut the_context = Context::from_config(config);
    let result = match the_context.solve(&formula) {
        Ok(result) => result,

        Err(ErrorKind::Check(e)) => {
            println!("c Check failed: {e:?}");
            std::process::exit(3);
        }

        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    if args.check {
        println!("c Result checked");
    }

    if args.stats {
        for line in the_context.counters.report_lines() {
            println!("c {line}");
        }
    }

    answer_lines(&result).iter().for_each(|line| println!("{line}"));

    if let SolveResult::Unsatisfiable(proof) = &result {
        display_proof(proof, &the_context.config, &args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpll_proof::structures::literal::Literal;

    fn chain(depth: u32) -> Clause {
        let mut current = Clause::axiom([Literal::new(1, true)]);
        for atom in 1..depth {
            let step = Clause::axiom([Literal::new(atom, false), Literal::new(atom + 1, true)]);
            current = Clause::derived([Literal::new(atom + 1, true)], step, current);
        }
        current
    }

    #[test]
    fn assignments_are_always_written() {
        use dpll_proof::{procedures::solve::solve, structures::formula::Formula};

        let formula = Formula::from_ints([vec![1], vec![-2]]).expect("formula");
        let result = solve(&formula).expect("solve");
        assert_eq!(answer_lines(&result), vec!["s SATISFIABLE", "v 1 -2"]);

        let formula = Formula::from_ints([vec![1], vec![-1]]).expect("formula");
        let result = solve(&formula).expect("solve");
        assert_eq!(answer_lines(&result), vec!["s UNSATISFIABLE"]);
    }

    #[test]
    fn small_proofs_are_trees() {
        let proof = chain(3);
        let lines = proof_lines(&proof, &Config::default());
        assert_eq!(lines, proof.tree_lines());
    }

    #[test]
    fn deep_proofs_are_traces() {
        let proof = chain(50_000);
        let lines = proof_lines(&proof, &Config::default());
        assert_eq!(lines, trace_lines(&proof));
    }

    #[test]
    fn wide_proofs_are_traces() {
        let proof = chain(3);
        let mut config = Config::default();
        config.tree_width_limit.value = 1;
        assert_eq!(proof_lines(&proof, &config), trace_lines(&proof));
    }
}
