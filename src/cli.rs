use std::time::{SystemTime, UNIX_EPOCH};

use crate::parallel::{run_sweep_batches, Progress, WorkerPool};
use crate::report::{render_report, write_chart_html, write_sweep_csv};
use crate::sim::{
    default_fractions, optimal_point, run_sweep_with_progress, run_trial, skip_count_for, Rng,
    SweepConfig, THEORETICAL_OPTIMUM_FRACTION,
};

const DEFAULT_POOL_SIZE: usize = 100;
const DEFAULT_ITERATIONS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Sweep,
    Trial,
}

/// A bare invocation runs the full sweep with built-in constants; the
/// explicit subcommands allow overrides and side outputs.
pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        None => Some(Command::Sweep),
        Some("sweep") => Some(Command::Sweep),
        Some("trial") => Some(Command::Trial),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Sweep) => handle_sweep(args),
        Some(Command::Trial) => handle_trial(args),
        None => {
            eprintln!(
                "usage: secretary [sweep [n] [iterations] [seed] [--json] [--quiet] \
                 [--csv <path>] [--chart <path>] [--workers <k>]] | trial [n] [skip] [seed]"
            );
            2
        }
    }
}

fn handle_sweep(args: &[String]) -> i32 {
    let positionals = positional_args(args);
    let n = parse_usize_arg(positionals.first().copied(), "n", DEFAULT_POOL_SIZE);
    let iterations = parse_usize_arg(positionals.get(1).copied(), "iterations", DEFAULT_ITERATIONS);
    let seed = parse_u64_arg(positionals.get(2).copied(), "seed", entropy_seed());
    let as_json = args.iter().any(|arg| arg == "--json");
    let quiet = as_json || args.iter().any(|arg| arg == "--quiet");
    let workers = flag_value(args, "--workers").and_then(|value| value.parse::<usize>().ok());

    let config = SweepConfig {
        n,
        iterations,
        fractions: default_fractions(),
        seed,
    };

    let sweep = if let Some(workers) = workers {
        run_sweep_batches(&config, &WorkerPool::with_workers(workers))
    } else {
        let mut progress = Progress::new(quiet);
        run_sweep_with_progress(&config, |update| progress.observe(update))
    };
    let points = match sweep {
        Ok(points) => points,
        Err(err) => {
            eprintln!("sweep failed: {err}");
            return 1;
        }
    };

    if let Some(path) = flag_value(args, "--csv") {
        if let Err(err) = write_sweep_csv(path, &points) {
            eprintln!("failed to write csv '{path}': {err}");
            return 1;
        }
    }
    if let Some(path) = flag_value(args, "--chart") {
        if let Err(err) = write_chart_html(path, &points) {
            eprintln!("failed to write chart '{path}': {err}");
            return 1;
        }
    }

    if as_json {
        let payload = serde_json::json!({
            "seed": seed,
            "points": points,
            "optimal": optimal_point(&points),
            "theoretical_fraction": THEORETICAL_OPTIMUM_FRACTION,
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("failed to serialize sweep result: {err}");
                return 1;
            }
        }
    } else {
        print!("\n{}", render_report(&points));
    }

    0
}

fn handle_trial(args: &[String]) -> i32 {
    let positionals = positional_args(args);
    let n = parse_usize_arg(positionals.first().copied(), "n", DEFAULT_POOL_SIZE);
    let skip = parse_usize_arg(
        positionals.get(1).copied(),
        "skip",
        skip_count_for(DEFAULT_POOL_SIZE, THEORETICAL_OPTIMUM_FRACTION),
    );
    let seed = parse_u64_arg(positionals.get(2).copied(), "seed", entropy_seed());

    let mut rng = Rng::new(seed);
    match run_trial(n, skip, &mut rng) {
        Ok(outcome) => {
            let payload = serde_json::json!({
                "n": n,
                "skip": skip,
                "seed": seed,
                "outcome": outcome,
                "best_selected": outcome == n - 1,
            });
            match serde_json::to_string_pretty(&payload) {
                Ok(text) => {
                    println!("{text}");
                    0
                }
                Err(err) => {
                    eprintln!("failed to serialize trial result: {err}");
                    1
                }
            }
        }
        Err(err) => {
            eprintln!("trial failed: {err}");
            1
        }
    }
}

/// Arguments after the subcommand that are not flags or flag values.
fn positional_args(args: &[String]) -> Vec<&String> {
    let mut positionals = Vec::new();
    let mut skip_next = false;
    for arg in args.iter().skip(2) {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--csv" || arg == "--chart" || arg == "--workers" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        positionals.push(arg);
    }
    positionals
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
}

fn parse_usize_arg(raw: Option<&String>, name: &str, default: usize) -> usize {
    raw.and_then(|value| value.parse::<usize>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_u64_arg(raw: Option<&String>, name: &str, default: u64) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

/// Seed for runs where the caller did not pin one. OS entropy, with a
/// clock fallback so the sweep still runs on exotic targets.
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    if getrandom::getrandom(&mut buf).is_ok() {
        return u64::from_le_bytes(buf);
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| (*part).to_string()).collect()
    }

    #[test]
    fn bare_invocation_maps_to_sweep() {
        assert_eq!(parse_command(&args(&["secretary"])), Some(Command::Sweep));
    }

    #[test]
    fn subcommands_map_and_unknown_commands_reject() {
        assert_eq!(
            parse_command(&args(&["secretary", "sweep"])),
            Some(Command::Sweep)
        );
        assert_eq!(
            parse_command(&args(&["secretary", "trial"])),
            Some(Command::Trial)
        );
        assert_eq!(parse_command(&args(&["secretary", "serve"])), None);
    }

    #[test]
    fn positional_args_skip_flags_and_their_values() {
        let all = args(&[
            "secretary", "sweep", "50", "--csv", "out.csv", "1000", "--json", "7",
        ]);
        let positionals = positional_args(&all);
        let values: Vec<&str> = positionals.iter().map(|s| s.as_str()).collect();
        assert_eq!(values, vec!["50", "1000", "7"]);
    }

    #[test]
    fn flag_value_finds_the_following_argument() {
        let all = args(&["secretary", "sweep", "--chart", "chart.html"]);
        assert_eq!(
            flag_value(&all, "--chart").map(String::as_str),
            Some("chart.html")
        );
        assert_eq!(flag_value(&all, "--csv"), None);
    }

    #[test]
    fn invalid_numeric_arguments_fall_back_to_defaults() {
        let bad = "not-a-number".to_string();
        assert_eq!(parse_usize_arg(Some(&bad), "n", 100), 100);
        assert_eq!(parse_u64_arg(Some(&bad), "seed", 7), 7);
        assert_eq!(parse_usize_arg(None, "n", 100), 100);
    }
}
