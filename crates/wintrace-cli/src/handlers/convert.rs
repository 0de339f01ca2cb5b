use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use uuid::Uuid;
use wintrace_capture::CaptureReader;
use wintrace_wdat::{EventOutcome, WdatWriter};

use crate::config::Settings;
use crate::output;

/// Tally of one conversion run, reported exactly once on completion.
#[derive(Debug, Default)]
struct ConvertSummary {
    written: u64,
    rejected: u64,
    skipped: u64,
}

pub fn handle(
    input: &Path,
    output_path: &Path,
    dump_all: bool,
    explore: Option<Uuid>,
    settings_path: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let settings = match settings_path.or_else(Settings::default_path) {
        Some(path) => Settings::load_from(&path),
        None => Settings::default(),
    };

    // Command-line flags override the settings file for this run.
    let mut config = settings.into_config();
    if dump_all {
        config.dump_all = true;
    }
    if explore.is_some() {
        config.explore = explore;
    }

    if verbose {
        for selector in &config.providers {
            match selector.resolve() {
                Some(known) => output::detail(&format!("enabled provider {}", known.name)),
                None => output::detail(&format!("enabled selector {:?}", selector)),
            }
        }
    }

    let reader = CaptureReader::open(input)?;
    let context = reader.context().clone();

    output::status(&format!(
        "Processing events into {}",
        output_path.display()
    ));

    let mut writer = WdatWriter::create(output_path, config)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    writer.write_header()?;
    writer.write_context(&context)?;

    let mut summary = ConvertSummary::default();
    for event in reader {
        let event = event?;
        match writer.write_event(&event)? {
            EventOutcome::Written(_) => summary.written += 1,
            EventOutcome::Rejected => {
                summary.rejected += 1;
                if verbose {
                    output::detail(&format!(
                        "rejected event from {} (task {})",
                        event.provider_id, event.task
                    ));
                }
            }
            EventOutcome::Skipped(err) => {
                summary.skipped += 1;
                output::warn(&format!(
                    "skipping event from {}: {}",
                    event.provider_id, err
                ));
            }
        }
    }

    writer
        .close()
        .with_context(|| format!("failed to finish {}", output_path.display()))?;

    output::success(&format!(
        "Finished processing wdat events: {} written, {} rejected, {} skipped",
        summary.written, summary.rejected, summary.skipped
    ));

    Ok(())
}
