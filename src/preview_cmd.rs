use std::fmt::{self, Write};

use anyhow::Result;
use tracing::{info, info_span};

use parsi_calendar::ics::event_summary;
use parsi_calendar::{generate_anniversaries, Anniversary};

use crate::cli::EventArgs;
use crate::config::{AppConfig, EventSettings};

/// Print the first `preview_count` anniversaries.
pub fn run(args: EventArgs, config: &AppConfig) -> Result<()> {
    let _cmd = info_span!("preview").entered();
    let settings = config.resolve(&args, chrono::Local::now().date_naive());
    info!(
        date = %settings.date,
        variant = settings.variant.key(),
        count = config.preview_count,
        "previewing anniversaries"
    );

    let list = generate_anniversaries(settings.date, settings.variant, config.preview_count);
    print!("{}", render(&list, &settings)?);
    Ok(())
}

/// Title, Gregorian date and Parsi date of each anniversary, blank-line separated.
fn render(list: &[Anniversary], settings: &EventSettings) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (i, ann) in list.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(
            out,
            "{}",
            event_summary(&settings.subject, &settings.occasion, ann.number())
        )?;
        writeln!(out, "  {}", ann.gregorian_date().format("%-d %B %Y"))?;
        writeln!(out, "  {} ({})", ann.parsi_date(), settings.variant.label())?;
    }
    Ok(out)
}
