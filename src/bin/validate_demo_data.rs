// ABOUTME: Import-format validator for fitness export files
// ABOUTME: Prints a pass/fail line per section and exits non-zero when any section fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness export validator.
//!
//! Checks any JSON file, generated or hand-edited, against the format the
//! mobile app imports.
//!
//! Usage:
//! ```bash
//! cargo run --bin validate-demo-data -- fitness_demo_data.json
//! ```
//!
//! Exits 0 when every section passes and 1 otherwise, including when the
//! file is missing, unreadable, or not JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use fitness_demo_data::validation::validate_file;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "validate-demo-data",
    about = "Fitness export validator",
    long_about = "Check a JSON export against the mobile app's import format"
)]
struct ValidateArgs {
    /// Export file to validate
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = match ValidateArgs::try_parse() {
        Ok(args) => args,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            err.exit()
        }
        Err(err) => {
            // Usage errors exit 1; if stderr is gone there is nowhere left to report
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    // A bad RUST_LOG never blocks validation
    if let Err(err) = fitness_demo_data::logging::init_from_env(false) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    debug!(file = %args.file.display(), "validating export");
    let report = match validate_file(&args.file) {
        Ok(report) => report,
        Err(err) => {
            warn!(file = %args.file.display(), error = %err, "export could not be loaded");
            println!("✗ {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Validating {}", args.file.display());
    print!("{report}");
    if report.is_valid() {
        println!("Export is valid for import");
        ExitCode::SUCCESS
    } else {
        println!("Export is NOT valid for import");
        ExitCode::FAILURE
    }
}
