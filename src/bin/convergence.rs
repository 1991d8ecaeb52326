use std::time::Instant;

use pilab::convergence::{save_report, sweep_all_methods, DEFAULT_LADDER};
use pilab::env_config;

fn parse_args() -> (usize, u64, Option<String>) {
    let args: Vec<String> = std::env::args().collect();
    let mut runs = 32usize;
    let mut seed = 42u64;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    runs = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --runs value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Usage: pilab-convergence [--runs N] [--seed S] [--output FILE]");
                println!();
                println!("Options:");
                println!("  --runs N       Monte Carlo runs per spread rung (default: 32)");
                println!("  --seed S       RNG seed (default: 42)");
                println!("  --output FILE  Write the full report as JSON to FILE");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: pilab-convergence [--runs N] [--seed S] [--output FILE]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (runs, seed, output)
}

fn main() {
    let (runs, seed, output) = parse_args();
    let num_threads = env_config::init_rayon_threads();

    println!(
        "Convergence sweep (ladder {:?}, {} spread runs, {} threads)",
        DEFAULT_LADDER, runs, num_threads
    );
    println!();

    let t0 = Instant::now();
    let report = sweep_all_methods(&DEFAULT_LADDER, runs, seed).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    for method in &report.methods {
        println!("{}:", method.method);
        println!("  {:>12}  {:>14}  {:>12}", "iterations", "value", "abs error");
        for rung in &method.rungs {
            println!(
                "  {:>12}  {:>14.10}  {:>12.2e}",
                rung.iterations, rung.value, rung.abs_error
            );
        }
        println!();
    }

    println!("Monte Carlo spread ({} runs per rung):", runs);
    println!(
        "  {:>12}  {:>10}  {:>10}  {:>10}  {:>10}",
        "iterations", "mean", "std dev", "min", "max"
    );
    for spread in &report.monte_carlo_spread {
        println!(
            "  {:>12}  {:>10.6}  {:>10.6}  {:>10.6}  {:>10.6}",
            spread.iterations, spread.mean, spread.std_dev, spread.min, spread.max
        );
    }
    println!();
    println!("  Elapsed:  {:.1} ms", elapsed_ms);

    if let Some(ref path) = output {
        save_report(&report, path);
        println!("  Report saved: {}", path);
    }
}
