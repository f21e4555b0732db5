//! Benchmark table lookups against direct computation
//!
//! Times three things for a given max_n:
//! 1. Building the Pascal table once
//! 2. `trials` random lookups C(n,k) from the table
//! 3. The same random (n,k) pairs computed directly (multiplicative formula)
//!
//! Pairs are drawn with n, k uniform in 0..=max_n and swapped so that n >= k.
//!
//! Run: cargo build --release -p combtable --bin bench_lookup
//!      ./target/release/bench_lookup [--max-n N] [--trials T]

use clap::Parser;
use eyre::WrapErr;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use combtable::direct::binomial;
use combtable::{CombinationTable, U128_EXACT_MAX_N};

#[derive(Parser, Debug)]
#[command(author, version, about = "Benchmark combination table lookups vs direct computation")]
struct Args {
    /// Largest n in the table (u128 entries, so at most 131)
    #[arg(long, default_value_t = U128_EXACT_MAX_N as i64)]
    max_n: i64,

    /// Number of random C(n,k) queries per benchmark
    #[arg(long, default_value_t = 10000)]
    trials: usize,

    /// RNG seed for the query pairs
    #[arg(long, default_value_t = 0x9E3779B97F4A7C15)]
    seed: u64,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();

    println!("=== Combination Table Benchmark ===");
    println!("max_n: {}", args.max_n);
    println!("Trials: {}", args.trials);
    println!();

    let start = Instant::now();
    let table = CombinationTable::<u128>::new(args.max_n)
        .wrap_err_with(|| format!("building table for max_n = {}", args.max_n))?;
    let build = start.elapsed();
    println!(
        "Table build:        {:>10.3} ms  ({} entries)",
        build.as_secs_f64() * 1000.0,
        table.entry_count()
    );

    let pairs = random_pairs(&args);

    let lookup_us = bench_table(&table, &pairs)?;
    let direct_us = bench_direct(&pairs)?;

    println!();
    println!("=== Summary ===");
    println!("Table lookup: {:.4} us/op", lookup_us);
    println!("Direct:       {:.4} us/op", direct_us);
    if lookup_us > 0.0 {
        println!("Speedup: {:.1}x", direct_us / lookup_us);
    }

    Ok(())
}

fn random_pairs(args: &Args) -> Vec<(i64, i64)> {
    let mut rng = SmallRng::seed_from_u64(args.seed);
    (0..args.trials)
        .map(|_| {
            let n = rng.gen_range(0..=args.max_n);
            let k = rng.gen_range(0..=args.max_n);
            if n >= k {
                (n, k)
            } else {
                (k, n)
            }
        })
        .collect()
}

fn bench_table(table: &CombinationTable<u128>, pairs: &[(i64, i64)]) -> eyre::Result<f64> {
    let start = Instant::now();
    let mut dummy = 0u128;
    for &(n, k) in pairs {
        dummy = dummy.wrapping_add(std::hint::black_box(table.combination(n, k)?));
    }
    let elapsed = start.elapsed();
    let per_op = elapsed.as_secs_f64() * 1_000_000.0 / pairs.len().max(1) as f64;
    println!(
        "Table lookups:      {:>10.3} ms  (dummy={})",
        elapsed.as_secs_f64() * 1000.0,
        dummy % 1000
    );
    Ok(per_op)
}

fn bench_direct(pairs: &[(i64, i64)]) -> eyre::Result<f64> {
    let start = Instant::now();
    let mut dummy = 0u128;
    for &(n, k) in pairs {
        let value = binomial(n as u64, k as u64)
            .ok_or_else(|| eyre::eyre!("C({},{}) does not fit u128", n, k))?;
        dummy = dummy.wrapping_add(std::hint::black_box(value));
    }
    let elapsed = start.elapsed();
    let per_op = elapsed.as_secs_f64() * 1_000_000.0 / pairs.len().max(1) as f64;
    println!(
        "Direct computation: {:>10.3} ms  (dummy={})",
        elapsed.as_secs_f64() * 1000.0,
        dummy % 1000
    );
    Ok(per_op)
}
