use std::str::FromStr;

use docopt::{ArgvMap, Docopt, Value};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use mcpi::utils::checked_num_points;

const USAGE: &str = "
Estimate Pi using Monte Carlo simulation.

Usage:
  pi [options]

Options:

  -h --help
    Show this screen.

  --num-points=<num-points>
    Number of random points to generate.
    [default: 100000]

  --seed=<seed>
    Random seed for reproducibility.  Without one every run differs.

";

#[derive(Debug, PartialEq)]
struct Args {
    num_points: i64,
    seed: Option<u64>,
}

fn usage_error(msg: String) -> docopt::Error {
    docopt::Error::WithProgramUsage(
        Box::new(docopt::Error::Deserialize(msg)),
        "Usage:\n  pi [options]".to_string(),
    )
}

/// Read an integer option.  `Plain(None)` means the flag was not given; an
/// empty value (`--seed=`) is rejected like any other non-integer.
fn int_flag<T: FromStr>(argv: &ArgvMap, flag: &str) -> Result<Option<T>, docopt::Error> {
    match argv.find(flag) {
        Some(Value::Plain(Some(raw))) => raw.parse().map(Some).map_err(|_| {
            usage_error(format!(
                "invalid value {:?} for {}: expected an integer",
                raw, flag
            ))
        }),
        _ => Ok(None),
    }
}

impl Args {
    fn from_argv(argv: &ArgvMap) -> Result<Args, docopt::Error> {
        let num_points = int_flag(argv, "--num-points")?
            .ok_or_else(|| usage_error("--num-points requires a value".to_string()))?;
        let seed = int_flag(argv, "--seed")?;
        Ok(Args { num_points, seed })
    }
}

/// Log to stderr so stdout carries only the report.  `MCPI_LOG_FORMAT=json`
/// switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var("MCPI_LOG_FORMAT").is_ok_and(|f| f == "json");
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(args: &Args) -> mcpi::Result<()> {
    let num_points = checked_num_points(args.num_points)?;
    let estimate = mcpi::estimate_pi(num_points, args.seed)?;
    println!("{}", estimate);
    Ok(())
}

fn main() {
    let args = Docopt::new(USAGE)
        .and_then(|d| d.parse())
        .and_then(|argv| Args::from_argv(&argv))
        .unwrap_or_else(|e| e.exit());

    init_tracing();
    tracing::debug!(?args, "parsed arguments");

    if let Err(e) = run(&args) {
        eprintln!("pi: {}", e);
        std::process::exit(1);
    }
}
