mod batch;
mod iban;
mod logging;
mod models;
mod reference;

use batch::validate_csv;
use clap::{Parser, Subcommand};
use iban::validate;
use models::IbanOutcome;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "iban-check")]
#[command(about = "IBAN structural and MOD-97 checksum validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one or more IBANs given on the command line
    Check(CheckArgs),
    /// Validate a CSV of candidates and write the verdicts
    Batch(BatchArgs),
}

#[derive(Parser)]
struct CheckArgs {
    /// Candidate IBANs, embedded spaces allowed when quoted
    #[arg(required = true)]
    ibans: Vec<String>,
    /// Also write the verdicts as CSV
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct BatchArgs {
    #[arg(long, default_value = "data/candidates.csv")]
    input: PathBuf,
    #[arg(long, default_value = "data/verdicts.csv")]
    output: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("iban-check")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Batch(args) => run_batch(args),
    }
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let outcomes: Vec<IbanOutcome> = args
        .ibans
        .into_iter()
        .map(|iban| {
            let valid = validate(&iban);
            IbanOutcome { iban, valid }
        })
        .collect();

    // Always a normal verdict per candidate; an invalid IBAN is a result,
    // not a failure, so the exit code stays 0 either way.
    for outcome in &outcomes {
        println!("{},{}", outcome.iban, outcome.valid);
    }

    if let Some(output) = args.output {
        write_outcomes(&output, &outcomes)?;
        emit_info_line(&format!("Verdicts written to {}", output.display()));
    }
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<(), String> {
    ensure_parent_dir(&args.output)?;

    let start = Instant::now();
    let report = validate_csv(&args.input, &args.output)?;
    let elapsed = start.elapsed();

    emit_info_line(&format!(
        "Validated {} candidates: {} valid, {} invalid",
        report.total, report.valid, report.invalid
    ));
    emit_info_line(&format!("Verdicts written to {}", args.output.display()));
    emit_info_line(&format!("Validation time: {} ms", elapsed.as_millis()));
    Ok(())
}

fn write_outcomes(output: &Path, outcomes: &[IbanOutcome]) -> Result<(), String> {
    ensure_parent_dir(output)?;
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;
    for outcome in outcomes {
        writer.serialize(outcome).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

fn ensure_parent_dir(output: &Path) -> Result<(), String> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            create_dir_all(parent).map_err(|err| err.to_string())
        }
        _ => Ok(()),
    }
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        println!("{message}");
    }
}
