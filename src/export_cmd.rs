use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use parsi_calendar::{
    cancel_filename, generate_anniversaries, generate_cancel_ics, generate_ics, ics_filename,
};

use crate::cli::{CancelArgs, GenerateArgs};
use crate::config::AppConfig;

/// Write the anniversary calendar.
pub fn run_generate(args: GenerateArgs, config: &AppConfig) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let settings = config.resolve(&args.event, chrono::Local::now().date_naive());
    let count = args.count.unwrap_or(config.count);

    let list = generate_anniversaries(settings.date, settings.variant, count);
    info!(
        base = %settings.date,
        variant = settings.variant.key(),
        requested = count,
        generated = list.len(),
        "generated anniversaries"
    );

    let ics = generate_ics(&list, &settings.subject, &settings.occasion, settings.variant);
    let path = config.output_path(
        args.output.as_deref(),
        &ics_filename(&settings.subject, &settings.occasion),
    );
    write_document(&path, &ics)?;
    println!("Wrote {} events to {}", list.len(), path.display());
    Ok(())
}

/// Write the cancellation calendar.
pub fn run_cancel(args: CancelArgs, config: &AppConfig) -> Result<()> {
    let _cmd = info_span!("cancel").entered();
    let subject = config.subject_or(args.subject.as_deref());
    let occasion = config.occasion_or(args.occasion.as_deref());
    let count = args.count.unwrap_or(config.count);

    let ics = generate_cancel_ics(subject, occasion, count);
    let path = config.output_path(args.output.as_deref(), &cancel_filename(subject, occasion));
    write_document(&path, &ics)?;
    println!("Wrote {count} cancellations to {}", path.display());
    Ok(())
}

fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write calendar file: {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote calendar file");
    Ok(())
}
