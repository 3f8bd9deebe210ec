//! `promptsite classify`: show what the classifier extracts from a prompt.

use promptsite_core::domain::{Classification, classify};
use tracing::instrument;

use crate::{
    cli::ClassifyArgs,
    commands::require_prompt,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ClassifyArgs, output: OutputManager) -> CliResult<()> {
    let prompt = require_prompt(&args.prompt)?;
    let result = classify(prompt);

    if output.is_json() {
        output.json(&result)?;
        return Ok(());
    }

    output.header("Classification")?;
    for (label, value) in summary_rows(&result) {
        output.field(label, &value)?;
    }
    Ok(())
}

fn summary_rows(result: &Classification) -> [(&'static str, String); 4] {
    let detected = if result.detected_colors.is_empty() {
        "none (using default)".to_string()
    } else {
        result
            .detected_colors
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    [
        ("Category", result.category.label().to_string()),
        ("Name", result.name.clone()),
        ("Color", result.color.to_string()),
        ("Detected", detected),
    ]
}
