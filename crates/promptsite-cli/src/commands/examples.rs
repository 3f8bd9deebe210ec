//! `promptsite examples`: print the sample prompts.

use promptsite_core::application::EXAMPLE_PROMPTS;

use crate::{error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&EXAMPLE_PROMPTS)?;
        return Ok(());
    }

    output.header("Example prompts")?;
    for (i, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
        output.print(&format!("  {}. {prompt}", i + 1))?;
    }
    output.print("")?;
    output.info("Try one with: promptsite generate \"<prompt>\"")?;
    Ok(())
}
