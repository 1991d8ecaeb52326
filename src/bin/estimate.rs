use std::f64::consts::PI;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use pilab::env_config;
use pilab::estimator::{estimate_with, parse_iterations};
use pilab::ledger::{LedgerStore, MemoryLedger};
use pilab::scoring::calculator_run_award;
use pilab::types::{EstimationRequest, Method};

struct Args {
    method: String,
    iterations: String,
    seed: Option<u64>,
    trace: bool,
    json: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut method = "monte-carlo".to_string();
    let mut iterations = "1000000".to_string();
    let mut seed: Option<u64> = None;
    let mut trace = false;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--method" => {
                i += 1;
                if i < args.len() {
                    method = args[i].clone();
                }
            }
            "--iterations" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].clone();
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = Some(args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--trace" => {
                trace = true;
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                println!(
                    "Usage: pilab-estimate [--method M] [--iterations N] [--seed S] [--trace] [--json]"
                );
                println!();
                println!("Options:");
                println!("  --method M      monte-carlo | leibniz | nilakantha (default: monte-carlo)");
                println!("  --iterations N  Iteration count (default: 1000000)");
                println!("  --seed S        Fix the RNG seed for a reproducible Monte Carlo run");
                println!("  --trace         Retain the bounded sample trace (Monte Carlo only)");
                println!("  --json          Print the result as JSON instead of a summary");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: pilab-estimate [--method M] [--iterations N] [--seed S] [--trace] [--json]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        method,
        iterations,
        seed,
        trace,
        json,
    }
}

fn main() {
    let args = parse_args();
    let limits = env_config::limits_from_env();

    let method: Method = args.method.parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let iterations = parse_iterations(&args.iterations, &limits).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let request = if args.trace {
        EstimationRequest::with_trace(method, iterations)
    } else {
        EstimationRequest::new(method, iterations)
    };

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let t0 = Instant::now();
    let result = estimate_with(&request, &limits, &mut rng).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("Failed to serialize result")
        );
        return;
    }

    println!("Pi Estimation ({}, {} iterations)", method, iterations);
    println!("  Elapsed:     {:.1} ms", elapsed_ms);
    println!("  Estimate:    {:.10}", result.value);
    println!("  Actual π:    {:.10}", PI);
    println!("  Abs error:   {:.2e}", result.abs_error());
    if args.trace {
        println!("  Trace:       {} points retained", result.trace.len());
    }

    let mut ledger = MemoryLedger::new();
    let award = calculator_run_award();
    let total = ledger.apply(award);
    println!();
    println!(
        "  Points:      {:+} to \"{}\" (total: {})",
        award.delta, award.activity, total
    );
}
