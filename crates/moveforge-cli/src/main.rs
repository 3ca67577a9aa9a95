use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use moveforge::{
    sweep, symmetry, ConfigError, PruningMode, SolveError, Solver, SolverConfig, Strategy,
};
use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

mod output;

#[derive(Parser, Debug)]
#[command(name = "moveforge", version)]
#[command(about = "Minimum-move search for units on a line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the minimum move count for N units and list its solutions
    Solve {
        /// Number of units
        n: i64,

        #[command(flatten)]
        settings: Settings,
    },

    /// Solve every size from FROM to TO with one shared solver
    Sweep {
        from: i64,
        to: i64,

        #[command(flatten)]
        settings: Settings,
    },

    /// Compare N units over N+1 with N+1 units over N
    Symmetry {
        n: i64,

        #[command(flatten)]
        settings: Settings,
    },
}

#[derive(Args, Debug)]
struct Settings {
    /// TOML or YAML configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Distance from the source to the sink
    #[arg(short, long)]
    distance: Option<i64>,

    /// First move count to try
    #[arg(short = 'k', long)]
    start_k: Option<u32>,

    /// Search strategy: auto, reduction or multiset
    #[arg(short, long, value_parser = parse_strategy)]
    strategy: Option<Strategy>,

    /// Use the strict partner ranges in the base search
    #[arg(long)]
    strict: bool,

    /// Stop each level at its first solution
    #[arg(long)]
    first_only: bool,

    /// Give up after this many seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Print machine-readable JSON instead of the console report
    #[arg(long)]
    json: bool,

    /// Show per-level and progress events
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("cannot write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty range {from}..={to}")]
    EmptyRange { from: i64, to: i64 },
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    match s.to_ascii_lowercase().as_str() {
        "auto" => Ok(Strategy::Auto),
        "reduction" => Ok(Strategy::Reduction),
        "multiset" => Ok(Strategy::Multiset),
        other => Err(format!(
            "unknown strategy '{}', expected auto, reduction or multiset",
            other
        )),
    }
}

impl Settings {
    fn load(&self) -> Result<SolverConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml") | Some("yml") => SolverConfig::from_yaml_file(path)?,
                _ => SolverConfig::from_toml_file(path)?,
            },
            None => SolverConfig::default(),
        };

        if let Some(distance) = self.distance {
            config = config.with_distance(distance);
        }
        if let Some(start_k) = self.start_k {
            config = config.with_start_k(start_k);
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        if self.strict {
            config = config.with_pruning(PruningMode::Strict);
        }
        if self.first_only {
            config = config.with_first_only(true);
        }
        if let Some(seconds) = self.time_limit {
            config = config.with_termination_seconds(seconds);
        }
        config.validate()?;
        Ok(config)
    }

    fn init_console(&self) {
        if self.json {
            return;
        }
        let level = if self.trace {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        moveforge::console::init_with_level(level);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Solve { n, settings } => {
            let config = settings.load()?;
            settings.init_console();
            let outcome = Solver::new(config).solve(n)?;
            if settings.json {
                output::print_json(&output::OutcomeJson::from(&outcome))?;
            } else {
                output::print_outcome(&outcome);
            }
        }
        Command::Sweep { from, to, settings } => {
            if from > to {
                return Err(CliError::EmptyRange { from, to });
            }
            let config = settings.load()?;
            settings.init_console();
            let outcomes = sweep(config, from..=to)?;
            if settings.json {
                let rows: Vec<_> = outcomes.iter().map(output::OutcomeJson::from).collect();
                output::print_json(&rows)?;
            } else {
                output::print_sweep(&outcomes);
            }
        }
        Command::Symmetry { n, settings } => {
            let config = settings.load()?;
            settings.init_console();
            let report = symmetry(config, n)?;
            if settings.json {
                output::print_json(&output::SymmetryJson::from(&report))?;
            } else {
                output::print_symmetry(&report);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "moveforge",
            "solve",
            "5",
            "--distance",
            "3",
            "-k",
            "2",
            "--strategy",
            "multiset",
            "--strict",
            "--first-only",
        ]);
        let Command::Solve { n, settings } = cli.command else {
            panic!("expected solve");
        };
        let config = settings.load().unwrap();
        assert_eq!(n, 5);
        assert_eq!(config.distance, 3);
        assert_eq!(config.start_k, 2);
        assert_eq!(config.strategy, Strategy::Multiset);
        assert_eq!(config.pruning, PruningMode::Strict);
        assert!(config.first_only);
    }

    #[test]
    fn test_reduction_needs_unit_distance() {
        let cli = Cli::parse_from([
            "moveforge",
            "sweep",
            "1",
            "4",
            "--distance",
            "2",
            "--strategy",
            "reduction",
        ]);
        let Command::Sweep { settings, .. } = cli.command else {
            panic!("expected sweep");
        };
        assert!(matches!(settings.load(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_strategy() {
        assert!(parse_strategy("greedy").is_err());
        assert_eq!(parse_strategy("Reduction"), Ok(Strategy::Reduction));
    }
}
