use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use parsi_calendar::Variant;

use crate::cli::EventArgs;

/// Used when `--config` is not given; silently skipped if absent.
pub const DEFAULT_CONFIG_PATH: &str = "parsi-calendar.toml";

/// Defaults for every subcommand, overridable per run on the command line.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_occasion")]
    pub occasion: String,
    #[serde(default = "default_variant")]
    pub variant: Variant,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            occasion: default_occasion(),
            variant: default_variant(),
            count: default_count(),
            preview_count: default_preview_count(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_subject() -> String {
    "Hoshi's".to_string()
}
fn default_occasion() -> String {
    "Birthday".to_string()
}
fn default_variant() -> Variant {
    Variant::Shahenshahi
}
fn default_count() -> usize {
    100
}
fn default_preview_count() -> usize {
    3
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Fully resolved inputs for one anniversary series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSettings {
    pub subject: String,
    pub occasion: String,
    pub date: NaiveDate,
    pub variant: Variant,
}

impl AppConfig {
    /// Loads `path`, or the default file if none is given.
    ///
    /// A missing default file yields built-in defaults; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&toml_str)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Command-line values win; blank text falls back to the configured value.
    pub fn resolve(&self, args: &EventArgs, today: NaiveDate) -> EventSettings {
        EventSettings {
            subject: self.subject_or(args.subject.as_deref()).to_string(),
            occasion: self.occasion_or(args.occasion.as_deref()).to_string(),
            date: args.date.unwrap_or(today),
            variant: args.variant.unwrap_or(self.variant),
        }
    }

    pub fn subject_or<'a>(&'a self, arg: Option<&'a str>) -> &'a str {
        non_blank(arg).unwrap_or(self.subject.as_str())
    }

    pub fn occasion_or<'a>(&'a self, arg: Option<&'a str>) -> &'a str {
        non_blank(arg).unwrap_or(self.occasion.as_str())
    }

    /// `output` if given, else `file_name` inside the configured output directory.
    pub fn output_path(&self, output: Option<&Path>, file_name: &str) -> PathBuf {
        output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output_dir.join(file_name))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
