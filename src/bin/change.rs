use std::env;
use std::process::ExitCode;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sphere_change::{generate, generate_with, Combination, Constraints};

const USAGE: &str = "usage: change <amount> [min-types] [max-types] [--seed <n>]";

fn main() -> ExitCode {
    let mut positionals = Vec::new();
    let mut seed = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            seed = match args.next().map(|s| s.parse::<u64>()) {
                Some(Ok(n)) => Some(n),
                _ => {
                    eprintln!("{USAGE}");
                    return ExitCode::FAILURE;
                }
            };
        } else {
            positionals.push(arg);
        }
    }

    let (amount, min_types, max_types) = match parse_positionals(&positionals) {
        Some(parsed) => parsed,
        None => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let constraints = match Constraints::new(amount, min_types, max_types) {
        Ok(constraints) => constraints,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match seed {
        Some(seed) => generate_with(&constraints, &mut ChaCha20Rng::seed_from_u64(seed)),
        None => generate(&constraints),
    };

    match result {
        Ok(combination) => {
            render(&combination);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_positionals(positionals: &[String]) -> Option<(f64, Option<u32>, Option<u32>)> {
    if positionals.is_empty() || positionals.len() > 3 {
        return None;
    }
    let amount = positionals[0].parse::<f64>().ok()?;
    let min_types = match positionals.get(1) {
        Some(raw) => Some(raw.parse::<u32>().ok()?),
        None => None,
    };
    let max_types = match positionals.get(2) {
        Some(raw) => Some(raw.parse::<u32>().ok()?),
        None => None,
    };
    Some((amount, min_types, max_types))
}

fn render(combination: &Combination) {
    for piece in &combination.pieces {
        let plural = if piece.quantity > 1 { "s" } else { "" };
        println!(
            "{:>4}x {} {}{}  {:>8.2}",
            piece.quantity,
            piece.denomination.gemstone,
            piece.denomination.tier,
            plural,
            piece.total_value
        );
    }
    println!("Total: {:.2}", combination.total());
}
