// ABOUTME: Demo data generator for testing the mobile app's data import
// ABOUTME: Writes a synthetic export of weights, body fat, workouts, and nutrition to JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness demo data generator.
//!
//! This binary produces a complete export file the mobile app can import,
//! covering a configurable number of days ending today.
//!
//! Usage:
//! ```bash
//! # 90 days of Chinese-labelled data in fitness_demo_data.json
//! cargo run --bin generate-demo-data
//!
//! # 30 days of English data, validated after writing
//! cargo run --bin generate-demo-data -- --days 30 --english --validate
//!
//! # Custom starting point and output file
//! cargo run --bin generate-demo-data -- --initial-weight 82.5 --initial-body-fat 24 --output demo.json
//!
//! # Reproducible output
//! cargo run --bin generate-demo-data -- --seed 42
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fitness_demo_data::config::GeneratorConfig;
use fitness_demo_data::constants::{body_fat, defaults, weight};
use fitness_demo_data::export::{write_bundle, DatasetStatistics};
use fitness_demo_data::generators::DemoDataGenerator;
use fitness_demo_data::validation::validate_file;
use fitness_demo_data::{logging, Language};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "generate-demo-data",
    about = "Fitness demo data generator",
    long_about = "Generate a synthetic fitness export for testing the mobile app's data import"
)]
struct GenerateArgs {
    /// Number of days to generate, ending today
    #[arg(
        long,
        default_value_t = defaults::DAYS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    days: u32,

    /// Output file path
    #[arg(long, default_value = defaults::OUTPUT_FILE)]
    output: PathBuf,

    /// Starting weight in kilograms
    #[arg(long, default_value_t = weight::DEFAULT_INITIAL_KG)]
    initial_weight: f64,

    /// Starting body fat percentage
    #[arg(long, default_value_t = body_fat::DEFAULT_INITIAL_PERCENT)]
    initial_body_fat: f64,

    /// Validate the export after writing it
    #[arg(long)]
    validate: bool,

    /// Use English workout names, meal labels, and user name
    #[arg(long)]
    english: bool,

    /// Random seed for reproducible data (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl GenerateArgs {
    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        config.days = self.days;
        config.initial_weight = self.initial_weight;
        config.initial_body_fat = self.initial_body_fat;
        config.language = Language::from_english_flag(self.english);
        config
    }
}

fn run(args: &GenerateArgs) -> Result<ExitCode> {
    logging::init_from_env(args.verbose)?;

    info!("=== Fitness Demo Data Generator ===");

    let config = args.apply(GeneratorConfig::from_env().context("loading generator settings")?);
    let mut generator = DemoDataGenerator::seeded(config, args.seed)?;
    let bundle = generator.generate();

    write_bundle(&args.output, &bundle)?;

    let stats = DatasetStatistics::from_bundle(&bundle);
    info!(
        output = %args.output.display(),
        weights = stats.weight_records,
        body_fat = stats.body_fat_records,
        workout_days = stats.workout_days,
        nutrition_days = stats.nutrition_days,
        "export written"
    );
    println!("Wrote {}", args.output.display());
    println!("{stats}");

    if !args.validate {
        return Ok(ExitCode::SUCCESS);
    }

    let report = validate_file(&args.output)?;
    print!("{report}");
    if report.is_valid() {
        println!("Export is valid for import");
        Ok(ExitCode::SUCCESS)
    } else {
        error!(failures = report.failures().count(), "export failed validation");
        println!("Export is NOT valid for import");
        Ok(ExitCode::FAILURE)
    }
}

fn main() -> ExitCode {
    let args = GenerateArgs::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
