use std::time::Instant;

use clap::{Parser, Subcommand};
use combtable::verify::check_row;
use combtable::{parse_index, Coefficient, CombinationTable, U64_EXACT_MAX_N};
use eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Binomial coefficients from a precomputed Pascal table")]
struct Args {
    /// Largest n the table is built for
    #[arg(
        long,
        env = "COMBTABLE_MAX_N",
        default_value_t = U64_EXACT_MAX_N as i64,
        value_parser = parse_index,
        allow_hyphen_values = true
    )]
    max_n: i64,

    /// Store u128 coefficients (max_n up to 131) instead of u64 (up to 67)
    #[arg(long)]
    wide: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print C(n,k)
    Query {
        #[arg(value_parser = parse_index, allow_hyphen_values = true)]
        n: i64,
        #[arg(value_parser = parse_index, allow_hyphen_values = true)]
        k: i64,
    },
    /// Print row n of Pascal's triangle
    Row {
        #[arg(value_parser = parse_index, allow_hyphen_values = true)]
        n: i64,
    },
    /// Check endpoints, symmetry, Pascal's identity and row sums over the whole table
    Verify,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.wide {
        run(&build::<u128>(args.max_n)?, &args.command)
    } else {
        run(&build::<u64>(args.max_n)?, &args.command)
    }
}

fn build<T: Coefficient>(max_n: i64) -> Result<CombinationTable<T>> {
    let start = Instant::now();
    let table = CombinationTable::<T>::new(max_n)
        .wrap_err_with(|| format!("Failed to build combination table for max_n = {max_n}"))?;
    info!(
        max_n,
        entries = table.entry_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Table ready"
    );
    Ok(table)
}

fn run<T: Coefficient>(table: &CombinationTable<T>, command: &Command) -> Result<()> {
    match *command {
        Command::Query { n, k } => {
            let value = table
                .combination(n, k)
                .wrap_err_with(|| format!("Error in combination({n},{k})"))?;
            println!("C({},{}) = {}", n, k, value);
        }
        Command::Row { n } => {
            // row n shares the lookup domain of combination(n, 0)
            table
                .combination(n, 0)
                .wrap_err_with(|| format!("Error in row({n})"))?;
            let row = table.row(n as usize).unwrap_or_default();
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
        }
        Command::Verify => verify(table)?,
    }
    Ok(())
}

fn verify<T: Coefficient>(table: &CombinationTable<T>) -> Result<()> {
    let pb = ProgressBar::new(table.max_n() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows")
            .wrap_err("Invalid progress template")?
            .progress_chars("#>-"),
    );

    for n in 0..=table.max_n() {
        if let Err(violation) = check_row(table, n) {
            pb.abandon();
            warn!(row = n, %violation, "Table invariant violated");
            return Err(violation).wrap_err("Verification failed");
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(rows = table.max_n() + 1, "All invariants hold");
    Ok(())
}
