//! `off-report`: writes a surface area and bounding box report for OFF files.

use std::process::ExitCode;

use clap::Parser;
use off_report::cli::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&cli) {
        Ok(outcome) => {
            println!(
                "{} object(s) reported, {} file(s) failed",
                outcome.objects.len(),
                outcome.errors.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("off-report: {err}");
            ExitCode::FAILURE
        }
    }
}
