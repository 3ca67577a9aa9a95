//! Colorful console output for solver runs.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solving start/end, failed move counts)
//! - **DEBUG**: Finished levels, throttled progress, rejected candidates

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the MoveForge banner and sets up tracing. `RUST_LOG` overrides
/// the default `moveforge=info` filter.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Like [`init`], with `level` as the default for MoveForge targets.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(directive("moveforge", level))
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(MoveForgeConsoleLayer)
            .try_init();
    });
}

fn directive(target: &str, level: LevelFilter) -> tracing_subscriber::filter::Directive {
    match format!("{}={}", target, level).parse() {
        Ok(directive) => directive,
        Err(_) => level.into(),
    }
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 __  __                 _____
|  \/  | _____   _____ |  ___|__  _ __ __ _  ___
| |\/| |/ _ \ \ / / _ \| |_ / _ \| '__/ _` |/ _ \
| |  | | (_) \ V /  __/|  _| (_) | | | (_| |  __/
|_|  |_|\___/ \_/ \___||_|  \___/|_|  \__, |\___|
                                      |___/
"#;

    let version_line = format!("               v{} - Minimum-Move Search\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct MoveForgeConsoleLayer;

impl<S: Subscriber> Layer<S> for MoveForgeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        // Accept events from solver modules
        if !target.starts_with("moveforge_solver") && !target.starts_with("moveforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    n: Option<i64>,
    k: Option<u64>,
    distance: Option<i64>,
    strategy: Option<String>,
    pruning: Option<String>,
    first_only: Option<bool>,
    moves: Option<u64>,
    solutions: Option<u64>,
    nodes: Option<u64>,
    depth: Option<u64>,
    duration_ms: Option<u64>,
    error: Option<String>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "strategy" => self.strategy = Some(value),
            "pruning" => self.pruning = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "n" => self.n = Some(value as i64),
            "distance" => self.distance = Some(value as i64),
            "k" => self.k = Some(value),
            "moves" => self.moves = Some(value),
            "solutions" => self.solutions = Some(value),
            "nodes" => self.nodes = Some(value),
            "depth" => self.depth = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "n" => self.n = Some(value),
            "distance" => self.distance = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "first_only" {
            self.first_only = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "level_end" => format_level_end(v),
        "level_failed" => format_level_failed(v),
        "progress" => format_progress(v),
        "candidate_rejected" => format_candidate_rejected(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let n = v.n.unwrap_or(0);
    let distance = v.distance.unwrap_or(1);
    let strategy = v.strategy.as_deref().unwrap_or("auto");

    let mut output = format!(
        "{} {} Solving │ {} units │ distance {} │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        n.to_formatted_string(&Locale::en).bright_yellow(),
        distance.to_formatted_string(&Locale::en).bright_yellow(),
        strategy.bright_magenta()
    );

    if let Some(pruning) = v.pruning.as_deref() {
        output.push_str(&format!(" │ {} pruning", pruning.white()));
    }
    if v.first_only == Some(true) {
        output.push_str(&format!(" │ {}", "first only".white()));
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let duration = format_duration_ms(v.duration_ms.unwrap_or(0));
    let nodes = format_count(v.nodes.unwrap_or(0));

    if let Some(error) = v.error.as_deref() {
        return format!(
            "{} {} Gave up │ {} │ {} nodes │ {}",
            format_elapsed(),
            "■".bright_red().bold(),
            duration.yellow(),
            nodes.white(),
            error.bright_red()
        );
    }

    let moves = v.moves.unwrap_or(0);
    let solutions = v.solutions.unwrap_or(0);
    let mut output = format!(
        "{} {} Solving complete │ {} │ {} nodes",
        format_elapsed(),
        "■".bright_cyan().bold(),
        duration.yellow(),
        nodes.white()
    );

    // Summary box
    let inner_width: usize = 58;
    let border = "═".repeat(inner_width);
    output.push_str("\n\n");
    output.push_str(&format!("╔{}╗", border).bright_cyan().to_string());
    output.push('\n');

    let headline = format!("{} UNITS SOLVED IN {} MOVES", v.n.unwrap_or(0), moves);
    let total_pad = inner_width.saturating_sub(headline.len());
    let left_pad = total_pad / 2;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        headline.bright_green().bold(),
        " ".repeat(total_pad - left_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&format!("╠{}╣", border).bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Minimal solutions:",
        format_count(solutions),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╚{}╝", border).bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_level_end(v: &EventVisitor) -> String {
    let solutions = v.solutions.unwrap_or(0);
    let found = if solutions > 0 {
        format!("{} found", format_count(solutions))
            .bright_green()
            .to_string()
    } else {
        "none".bright_black().to_string()
    };

    format!(
        "{} {} n={} k={} │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        v.n.unwrap_or(0),
        v.k.unwrap_or(0),
        found
    )
}

fn format_level_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} No solution with {} moves",
        format_elapsed(),
        "✗".bright_red(),
        format_count(v.k.unwrap_or(0)).white().bold()
    )
}

fn format_progress(v: &EventVisitor) -> String {
    format!(
        "{} {} n={} k={} │ {:>12} nodes │ depth {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        v.n.unwrap_or(0),
        v.k.unwrap_or(0),
        format_count(v.nodes.unwrap_or(0)).bright_magenta().bold(),
        v.depth.unwrap_or(0)
    )
}

fn format_candidate_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} n={} k={} │ {} moves balance but cannot be ordered",
        format_elapsed(),
        "↺".bright_yellow(),
        v.n.unwrap_or(0),
        v.k.unwrap_or(0),
        v.moves.unwrap_or(0)
    )
    .bright_black()
    .to_string()
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            n: Some(12),
            k: Some(7),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        assert!(format_event(&visitor("step")).is_empty());
        assert!(format_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_solve_end_summary() {
        let mut v = visitor("solve_end");
        v.moves = Some(7);
        v.solutions = Some(1234);
        let output = format_event(&v);
        assert!(output.contains("12 UNITS SOLVED IN 7 MOVES"));
        assert!(output.contains("1,234"));
    }

    #[test]
    fn test_solve_end_error() {
        let mut v = visitor("solve_end");
        v.error = Some("time limit reached".to_string());
        let output = format_event(&v);
        assert!(output.contains("Gave up"));
        assert!(output.contains("time limit reached"));
    }

    #[test]
    fn test_level_lines() {
        let mut v = visitor("level_end");
        v.solutions = Some(3);
        assert!(format_event(&v).contains("3 found"));
        assert!(format_event(&visitor("level_failed")).contains("No solution with"));
    }

    #[test]
    fn test_progress_groups_digits() {
        let mut v = visitor("progress");
        v.nodes = Some(1_048_576);
        assert!(format_event(&v).contains("1,048,576"));
    }
}
