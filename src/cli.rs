use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use parsi_calendar::date_utils::parse_gregorian;
use parsi_calendar::Variant;

/// Parsi calendar anniversaries as iCalendar files.
#[derive(Parser)]
#[command(
    name = "parsi-calendar",
    version,
    about = "Convert dates to the Parsi calendar and export yearly anniversaries"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: parsi-calendar.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the Parsi date of a Gregorian date.
    Convert(ConvertArgs),
    /// Print the first few anniversaries without writing a file.
    Preview(EventArgs),
    /// Write the anniversaries of a date to an .ics file.
    Generate(GenerateArgs),
    /// Write an .ics file cancelling previously generated anniversaries.
    Cancel(CancelArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date (YYYY-MM-DD).
    #[arg(value_parser = parse_gregorian)]
    pub date: NaiveDate,

    /// Only show this variant (shahenshahi, kadmi, fasli).
    #[arg(long)]
    pub variant: Option<Variant>,
}

/// Who and what the anniversaries are for.
#[derive(clap::Args)]
pub struct EventArgs {
    /// Whose anniversary, e.g. "Hoshi's".
    #[arg(short = 'S', long)]
    pub subject: Option<String>,

    /// What is being remembered, e.g. "Birthday".
    #[arg(short = 'O', long)]
    pub occasion: Option<String>,

    /// Gregorian base date (YYYY-MM-DD) [default: today].
    #[arg(short, long, value_parser = parse_gregorian)]
    pub date: Option<NaiveDate>,

    /// Calendar variant (shahenshahi, kadmi, fasli).
    #[arg(long)]
    pub variant: Option<Variant>,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub event: EventArgs,

    /// Number of anniversaries to export.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output .ics path [default: <output_dir>/<subject>-<occasion>.ics].
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `cancel` subcommand.
#[derive(clap::Args)]
pub struct CancelArgs {
    /// Subject used when the events were generated.
    #[arg(short = 'S', long)]
    pub subject: Option<String>,

    /// Occasion used when the events were generated.
    #[arg(short = 'O', long)]
    pub occasion: Option<String>,

    /// Number of anniversaries to cancel.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output .ics path [default: <output_dir>/<subject>-<occasion>-cancel.ics].
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
