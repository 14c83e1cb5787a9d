use std::process::ExitCode;

use clap::Parser;
use rds_keygen::{facade, license};
use tracing::error;

/// Generate and verify Remote Desktop Services license keys (SPK / LKP).
#[derive(Parser)]
#[command(name = "rds-keygen", author, about)]
struct Cli {
    /// Product ID, e.g. "00490-92005-99454-AT527".
    #[arg(long)]
    pid: Option<String>,

    /// Existing License Server ID (SPK); validate it instead of generating
    /// a fresh one.
    #[arg(long)]
    spk: Option<String>,

    /// License count (1-9999); generates an LKP when given with `--license`.
    #[arg(long)]
    count: Option<u32>,

    /// License version and type, e.g. "029_10_2"; generates an LKP when
    /// given with `--count`.
    #[arg(long)]
    license: Option<String>,

    /// List all recognised license types and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.list {
        print_license_catalogue();
        return ExitCode::SUCCESS;
    }

    let Some(pid) = cli.pid else {
        error!("--pid is required for key generation");
        return ExitCode::from(1);
    };

    if cli.spk.is_some() && (cli.count.is_none() || cli.license.is_none()) {
        error!("when using --spk, both --count and --license must be provided");
        return ExitCode::from(1);
    }

    let request = facade::Request {
        pid,
        existing_spk: cli.spk,
        count: cli.count,
        license_triple: cli.license,
    };

    match facade::process(&request) {
        Ok(outcome) => {
            println!("License Server ID (SPK):\n{}", outcome.spk);
            if let Some(lkp) = outcome.lkp {
                println!("License Key Pack (LKP):\n{lkp}");
            }
            ExitCode::SUCCESS
        }
        Err(err @ (rds_keygen::Error::SpkMismatch | rds_keygen::Error::KeyGenExhausted)) => {
            error!(%err, "algorithmic failure");
            ExitCode::from(2)
        }
        Err(err) => {
            error!(%err, "request rejected");
            ExitCode::from(1)
        }
    }
}

fn print_license_catalogue() {
    println!("Supported License Version and Type:\n");
    for entry in license::LICENSE_TYPES {
        println!("  {:12} - {}", entry.code, entry.description);
    }
}
