// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # spanner-fixtures
//!
//! Prints backup test fixtures as JSON, e.g. to seed a mock monitoring API:
//!
//! ```text
//! spanner-fixtures --table Singers=42 --table Albums=7
//! spanner-fixtures --fixture mutations --compact
//! ```

use clap::Parser;
use log::{error, info};
use serde::Serialize;
use spanner_backup_fixtures::config::{AppConfig, CliArgs, FixtureKind};
use spanner_backup_fixtures::fixtures::rows;
use spanner_backup_fixtures::{JobMetricsFixture, Result};
use std::io::Write;
use std::process;

fn main() {
    // 1. Initialize Logging
    env_logger::init();

    // 2. Parse Arguments
    let args = CliArgs::parse();

    // 3. Load Config
    let mut config = if let Some(config_path) = &args.config {
        match AppConfig::from_file(config_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to load config: {}", e);
                process::exit(1);
            }
        }
    } else {
        AppConfig::default()
    };

    // Merge CLI overrides
    config.merge_cli(&args);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        process::exit(1);
    }

    // 4. Build and print the requested fixture
    let written = match args.fixture {
        FixtureKind::Metrics => {
            info!(
                "Building job metrics for {} tables (delimiter '{}')",
                args.tables.len(),
                config.delimiter()
            );
            let report = JobMetricsFixture::new(config.delimiter()).build(args.tables.clone());
            print_json(&report, config.pretty())
        }
        FixtureKind::Rows => print_json(&rows::all_rows(), config.pretty()),
        FixtureKind::Mutations => print_json(&rows::all_mutations(), config.pretty()),
    };

    if let Err(e) = written {
        error!("Failed to write fixture: {}", e);
        process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}
