use crate::cli::{OutputFormat, ReplayArgs};
use crate::output::output_success;
use journal_domain::{Entry, EntryFormController, SubmitOutcome};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

#[derive(Debug, Serialize)]
pub struct ReplaySummary<'a> {
    pub items: &'a [Entry],
    pub count: usize,
    pub ignored: usize,
}

pub fn handle(args: ReplayArgs) -> anyhow::Result<()> {
    let mut controller = EntryFormController::default();

    let ignored = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                anyhow::anyhow!("Failed to open {}: {}", path.display(), e)
            })?;
            replay_lines(&mut controller, BufReader::new(file))?
        }
        None => replay_lines(&mut controller, io::stdin().lock())?,
    };

    tracing::info!(
        "Replayed {} entries ({} blank submissions ignored)",
        controller.entries().len(),
        ignored
    );

    match args.format {
        OutputFormat::Text => {
            for entry in controller.entries() {
                println!("{}", entry.text());
            }
        }
        OutputFormat::Json => {
            let entries = controller.entries();
            output_success(ReplaySummary {
                items: entries.as_slice(),
                count: entries.len(),
                ignored,
            })?;
        }
    }

    Ok(())
}

/// Submits every line of `reader` and returns how many were ignored.
pub fn replay_lines<R: BufRead>(
    controller: &mut EntryFormController,
    reader: R,
) -> anyhow::Result<usize> {
    let mut ignored = 0;
    for line in reader.lines() {
        let line = line?;
        if controller.submit_text(&line)? == SubmitOutcome::Ignored {
            ignored += 1;
        }
    }
    Ok(ignored)
}
