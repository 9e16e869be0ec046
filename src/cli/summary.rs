//! Summary command handler.
//!
//! Implements the `summary` subcommand: many documents parsed in parallel,
//! one line each, followed by totals.

use crate::config::SummaryConfig;
use crate::pipeline::{
    exit_codes, parse_many, should_use_color, write_output, OutputTarget, ParsedDocument,
};
use crate::reports::SummaryReporter;
use anyhow::Result;
use std::path::PathBuf;

/// Run the summary command
#[allow(clippy::needless_pass_by_value)]
pub fn run_summary(config: SummaryConfig) -> Result<i32> {
    let results = parse_many(&config.paths, config.quiet);

    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = if should_use_color(config.output.no_color)
        && matches!(target, OutputTarget::Stdout)
    {
        SummaryReporter::new()
    } else {
        SummaryReporter::new().no_color()
    };

    let (lines, failed) = summary_lines(&reporter, &results);
    write_output(&lines.join("\n"), &target, config.quiet)?;

    if failed > 0 {
        return Ok(exit_codes::ERROR);
    }
    Ok(exit_codes::SUCCESS)
}

/// Per-file lines plus a totals line, and the number of failed files.
fn summary_lines(
    reporter: &SummaryReporter,
    results: &[(PathBuf, Result<ParsedDocument>)],
) -> (Vec<String>, usize) {
    let mut lines = Vec::with_capacity(results.len() + 1);
    let mut documents = Vec::new();
    let mut failed = 0;

    for (path, result) in results {
        let name = path.display().to_string();
        match result {
            Ok(parsed) => {
                lines.push(reporter.file_line(&name, parsed.document(), parsed.diagnostics()));
                documents.push(parsed.document());
            }
            Err(e) => {
                failed += 1;
                lines.push(reporter.error_line(&name, &format!("{e:#}")));
            }
        }
    }

    lines.push(reporter.totals_line(&documents, failed));
    (lines, failed)
}
