//! kzg-demo - commit to a polynomial and prove one evaluation
//!
//! Usage:
//!   kzg-demo [--z <Z>] [--deg <D>] [--seed <S>] [--json]
//!   kzg-demo --coeffs 5,1,0,1 --z 3 --log-level debug

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::{Level, info};
use tracing_subscriber::fmt;

use kzg_commit::{
    BackendConfig, DensePolynomial, Fr, KZG, PairingEngine, Polynomial, SetupParameters,
    TrustedSetup, display_scalar, scalar_from_i64,
};

#[derive(Debug, Parser)]
#[command(name = "kzg-demo")]
#[command(about = "Commit to a polynomial, prove its value at one point and verify the proof", long_about = None)]
struct Args {
    /// Evaluation point z (negative values are taken modulo the field order)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    z: i64,

    /// Degree of the random polynomial and of the trusted setup
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    deg: i64,

    /// Seed for the polynomial coefficients (defaults to the current Unix time)
    #[arg(long)]
    seed: Option<u64>,

    /// Explicit coefficients, constant term first (e.g. `5,1,0,1`)
    #[arg(long, value_delimiter = ',')]
    coeffs: Option<Vec<u64>>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log verbosity written to stderr
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

#[derive(Debug, Serialize)]
struct Output {
    z: String,
    y: String,
    polynomial: String,
    commitment: String,
    proof: String,
    verified: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let params = SetupParameters::new(args.deg, BackendConfig::active(), None)?;

    let polynomial = match &args.coeffs {
        Some(coeffs) => DensePolynomial::<Fr>::from_u64_coeffs(coeffs)?,
        None => {
            let seed = args.seed.unwrap_or_else(unix_time);
            info!(seed, degree = params.max_degree, "sampling coefficients");
            let mut rng = StdRng::seed_from_u64(seed);
            let coeffs: Vec<u64> = (0..=params.max_degree)
                .map(|_| rng.gen_range(0..10))
                .collect();
            DensePolynomial::from_u64_coeffs(&coeffs)?
        }
    };
    let max_degree = params.max_degree.max(polynomial.degree());
    let params = SetupParameters { max_degree, ..params };

    let mut rng = StdRng::from_entropy();
    let setup = TrustedSetup::<PairingEngine>::from_parameters(&params, &mut rng)?;

    let z: Fr = scalar_from_i64(args.z);
    let opening = KZG::open_and_verify(&setup, &polynomial, &z)?;
    info!(verified = opening.verified, "opening checked");

    let out = Output {
        z: args.z.to_string(),
        y: display_scalar(&opening.value),
        polynomial: polynomial.to_string(),
        commitment: opening.commitment.to_string(),
        proof: opening.proof.to_string(),
        verified: opening.verified,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("==== KZG Polynomial Commitment Proof ====");
        println!("Polynomial: {}", out.polynomial);
        println!("Evaluation Point z: {}", out.z);
        println!("Expected y = p(z): {}", out.y);
        println!("Commitment: {}", out.commitment);
        println!("Proof: {}", out.proof);
        println!("Verification Passed? {}", out.verified);
    }
    Ok(())
}

fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
