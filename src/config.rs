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

use crate::domain::errors::{FixtureError, Result};
use crate::util::TRANSFORM_NODE_NAME_DELIMITER;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MetricsConfig {
    /// Falls back to `util::TRANSFORM_NODE_NAME_DELIMITER` when unset.
    pub transform_delimiter: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// Pretty-printed JSON unless set to false.
    pub pretty: Option<bool>,
}

/// Which fixture to print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixtureKind {
    #[default]
    Metrics,
    Rows,
    Mutations,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Table row count as NAME=COUNT. Repeat for more tables; order is kept.
    #[arg(short, long = "table", value_parser = parse_table_row_count)]
    pub tables: Vec<(String, i64)>,

    #[arg(short, long, value_enum, default_value_t = FixtureKind::Metrics)]
    pub fixture: FixtureKind,

    // Overrides for ad-hoc runs
    #[arg(long)]
    pub delimiter: Option<String>,
    #[arg(long)]
    pub compact: bool,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: AppConfig = if path.ends_with(".json") {
            serde_json::from_str(&contents)?
        } else {
            serde_yaml::from_str(&contents)?
        };

        Ok(config)
    }

    pub fn merge_cli(&mut self, args: &CliArgs) {
        if let Some(d) = &args.delimiter { self.metrics.transform_delimiter = Some(d.clone()); }
        if args.compact { self.output.pretty = Some(false); }
    }

    pub fn validate(&self) -> Result<()> {
        if self.metrics.transform_delimiter.as_deref() == Some("") {
            return Err(FixtureError::ConfigError(
                "metrics.transform_delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn delimiter(&self) -> &str {
        self.metrics
            .transform_delimiter
            .as_deref()
            .unwrap_or(TRANSFORM_NODE_NAME_DELIMITER)
    }

    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(true)
    }
}

/// Parses `NAME=COUNT`. Splits on the last `=` so table names may contain one.
pub fn parse_table_row_count(arg: &str) -> Result<(String, i64)> {
    let (table, count) = arg.rsplit_once('=').ok_or_else(|| {
        FixtureError::ParseError(format!("expected NAME=COUNT, got '{}'", arg))
    })?;
    if table.is_empty() {
        return Err(FixtureError::ParseError(format!("missing table name in '{}'", arg)));
    }
    let count = count.trim().parse::<i64>().map_err(|e| {
        FixtureError::ParseError(format!("invalid row count in '{}': {}", arg, e))
    })?;
    Ok((table.to_string(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_yaml_config() {
        let yaml = r#"
metrics:
  transform_delimiter: "::"
output:
  pretty: false
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", yaml).unwrap();
        let path = file.path().to_str().unwrap();

        let config = AppConfig::from_file(path).expect("Failed to parse config");

        assert_eq!(config.delimiter(), "::");
        assert!(!config.pretty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_json_config_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{}}").unwrap();
        let path = file.path().to_str().unwrap();

        let config = AppConfig::from_file(path).unwrap();

        assert_eq!(config.delimiter(), TRANSFORM_NODE_NAME_DELIMITER);
        assert!(config.pretty());
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("/nonexistent/fixtures.yaml").unwrap_err();
        assert!(matches!(err, FixtureError::IoError(_)));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let mut config = AppConfig::default();
        config.metrics.transform_delimiter = Some(String::new());
        assert!(matches!(config.validate(), Err(FixtureError::ConfigError(_))));
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::parse_from([
            "spanner-fixtures",
            "--table",
            "Singers=42",
            "-t",
            "Albums=0",
            "--delimiter",
            "|",
            "--compact",
        ]);
        let mut config = AppConfig::default();
        config.merge_cli(&args);

        assert_eq!(
            args.tables,
            vec![("Singers".to_string(), 42), ("Albums".to_string(), 0)]
        );
        assert_eq!(args.fixture, FixtureKind::Metrics);
        assert_eq!(config.delimiter(), "|");
        assert!(!config.pretty());
    }

    #[test]
    fn test_parse_table_row_count() {
        assert_eq!(parse_table_row_count("a=b=3").unwrap(), ("a=b".to_string(), 3));
        assert!(parse_table_row_count("Singers").is_err());
        assert!(parse_table_row_count("=3").is_err());
        assert!(parse_table_row_count("Singers=many").is_err());
    }
}
