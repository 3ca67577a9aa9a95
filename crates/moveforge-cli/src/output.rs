//! Console and JSON rendering of solver results.

use std::cmp::Reverse;

use moveforge::{MoveSequence, Signature, SolveOutcome, Strategy, SymmetryReport};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SolutionJson<'a> {
    signature: Signature,
    stations: Vec<i64>,
    moves: &'a MoveSequence,
}

#[derive(Debug, Serialize)]
pub struct OutcomeJson<'a> {
    n: i64,
    distance: i64,
    strategy: Strategy,
    moves: u32,
    nodes_expanded: u64,
    elapsed_ms: u64,
    solutions: Vec<SolutionJson<'a>>,
}

impl<'a> From<&'a SolveOutcome> for OutcomeJson<'a> {
    fn from(outcome: &'a SolveOutcome) -> Self {
        Self {
            n: outcome.n(),
            distance: outcome.problem.distance(),
            strategy: outcome.strategy,
            moves: outcome.moves,
            nodes_expanded: outcome.stats.nodes_expanded,
            elapsed_ms: outcome.stats.elapsed().as_millis() as u64,
            solutions: by_farthest_station(outcome)
                .into_iter()
                .map(|(stations, moves)| SolutionJson {
                    signature: moves.signature(),
                    stations,
                    moves,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SymmetryJson<'a> {
    n: i64,
    agrees: bool,
    narrow: OutcomeJson<'a>,
    wide: OutcomeJson<'a>,
}

impl<'a> From<&'a SymmetryReport> for SymmetryJson<'a> {
    fn from(report: &'a SymmetryReport) -> Self {
        Self {
            n: report.n,
            agrees: report.agrees(),
            narrow: OutcomeJson::from(&report.narrow),
            wide: OutcomeJson::from(&report.wide),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One solution per signature with its stations, farthest-reaching first.
fn by_farthest_station(outcome: &SolveOutcome) -> Vec<(Vec<i64>, &MoveSequence)> {
    let problem = &outcome.problem;
    let mut rows: Vec<_> = outcome
        .distinct_by_signature()
        .into_iter()
        .map(|s| (s.stations(problem.source(), problem.sink()), s))
        .collect();
    rows.sort_by_key(|(stations, _)| Reverse(stations.first().map_or(0, |p| p.abs())));
    rows
}

pub fn print_outcome(outcome: &SolveOutcome) {
    println!(
        "{} units over distance {}: {} moves, {} solutions, {} signatures",
        outcome.n().bright_yellow(),
        outcome.problem.distance().bright_yellow(),
        outcome.moves.bright_green().bold(),
        outcome.solutions.len(),
        outcome.signatures().len()
    );
    for (stations, solution) in by_farthest_station(outcome) {
        println!("  {}", solution.signature().bright_magenta());
        println!("    moves    {}", solution);
        if !stations.is_empty() {
            let stations: Vec<String> = stations.iter().map(i64::to_string).collect();
            println!("    stations {}", stations.join(" ").bright_black());
        }
    }
}

pub fn print_sweep(outcomes: &[SolveOutcome]) {
    println!("{:>6} {:>6} {:>10} {:>10}", "n", "moves", "solutions", "signatures");
    for outcome in outcomes {
        println!(
            "{:>6} {:>6} {:>10} {:>10}",
            outcome.n(),
            outcome.moves,
            outcome.solutions.len(),
            outcome.signatures().len()
        );
    }
}

pub fn print_symmetry(report: &SymmetryReport) {
    print_outcome(&report.narrow);
    print_outcome(&report.wide);

    if report.agrees() {
        println!("{}", "signatures agree".bright_green().bold());
        return;
    }
    let (only_narrow, only_wide) = report.differences();
    println!("{}", "signatures differ".bright_red().bold());
    for signature in only_narrow {
        println!("  only {} over {}: {}", report.n, report.n + 1, signature);
    }
    for signature in only_wide {
        println!("  only {} over {}: {}", report.n + 1, report.n, signature);
    }
}
