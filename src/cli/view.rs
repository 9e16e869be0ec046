//! View command handler.
//!
//! Implements the `view` subcommand for showing a single AAS document.

use crate::config::ViewConfig;
use crate::pipeline::{
    auto_detect_format, exit_codes, parse_document_with_context, should_use_color, write_output,
    OutputTarget,
};
use crate::reports::{
    create_reporter_with_options, JsonReporter, ParsedView, ReportConfig, ReportFormat,
    ReportGenerator,
};
use crate::tree::build_tree;
use anyhow::Result;

/// Run the view command
#[allow(clippy::needless_pass_by_value)]
pub fn run_view(config: ViewConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let mut parsed = parse_document_with_context(&config.path, quiet)?;
    parsed.drop_raw_content();

    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);
    let use_color = should_use_color(config.output.no_color)
        && matches!(output_target, OutputTarget::Stdout);

    let tree = build_tree(parsed.document());
    let view = ParsedView::new(parsed.document(), &tree, parsed.diagnostics());
    let report_config = ReportConfig {
        include_tree: config.tree.include_in_json,
        ..ReportConfig::for_source(&config.path)
    };

    let reporter = view_reporter(&config, effective_output, use_color);
    let report = reporter.generate_view_report(&view, &report_config)?;
    write_output(&report, &output_target, quiet)?;

    if config.behavior.strict && !parsed.diagnostics().is_clean() {
        return Ok(exit_codes::DIAGNOSTICS_FOUND);
    }
    Ok(exit_codes::SUCCESS)
}

fn view_reporter(
    config: &ViewConfig,
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new().pretty(!config.output.compact_json)),
        other => create_reporter_with_options(other, use_color, config.tree.render_options(use_color)),
    }
}
