//! Metron CLI
//!
//! Thin front end over the metron conversion core: parse the command
//! line into a conversion request, print the result or the error.
//!
//! Usage:
//!   metron [--json] <dimension> <value> <from_unit> <to_unit>

use std::env;
use std::io;
use std::process::ExitCode;

use metron::{ConversionRequest, Dimension};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if args.iter().any(|arg| arg == "--version") {
        println!("metron {}", VERSION);
        return ExitCode::SUCCESS;
    }

    let (json, rest) = match args.split_first() {
        Some((first, rest)) if first == "--json" => (true, rest),
        _ => (false, args.as_slice()),
    };

    let (dimension, value, from_unit, to_unit) = match rest {
        [dimension, value, from_unit, to_unit] => (dimension, value, from_unit, to_unit),
        _ => {
            eprintln!("error: expected <dimension> <value> <from_unit> <to_unit>");
            eprintln!("run 'metron --help' for usage");
            return ExitCode::FAILURE;
        }
    };

    let dimension = match Dimension::from_name(dimension) {
        Some(dimension) => dimension,
        None => {
            eprintln!(
                "error: unknown dimension {:?}, expected one of: length, weight, temperature",
                dimension
            );
            return ExitCode::FAILURE;
        }
    };

    let request = ConversionRequest::new(dimension, value.as_str(), from_unit.as_str(), to_unit.as_str());
    tracing::debug!(%dimension, %from_unit, %to_unit, "converting");

    match request.convert() {
        Ok(conversion) if json => match serde_json::to_string(&conversion) {
            Ok(line) => {
                println!("{}", line);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {}", err);
                ExitCode::FAILURE
            }
        },
        Ok(conversion) => {
            println!("{}", conversion);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("metron {} - convert between units of length, weight, and temperature", VERSION);
    println!();
    println!("usage: metron [--json] <dimension> <value> <from_unit> <to_unit>");
    println!();
    println!("dimensions and their units:");
    for dimension in Dimension::ALL {
        println!("  {:<12} {}", dimension.name(), dimension.units().join(", "));
    }
    println!();
    println!("examples:");
    println!("  metron length 5 meter centimeter");
    println!("  metron temperature 100 Celsius Fahrenheit");
    println!("  metron --json weight 2.5 pound gram");
}
