//! Command handlers, one module per subcommand.

pub mod categories;
pub mod classify;
pub mod completions;
pub mod config;
pub mod examples;
pub mod generate;
pub mod init;

use promptsite_adapters::{InMemoryStore, TemplateOverrideLoader, resolve_templates_dir};
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Built-in templates plus any overrides from the configured directory.
///
/// A missing or unreadable override directory is reported as a warning and
/// the built-ins are used as-is.
pub(crate) fn template_store(config: &AppConfig, output: &OutputManager) -> CliResult<InMemoryStore> {
    let store = InMemoryStore::with_builtin()?;

    if let Some(dir) = resolve_templates_dir(config.templates.local_path.as_deref()) {
        match TemplateOverrideLoader::new(&dir).apply_to(&store) {
            Ok(count) => debug!(count, dir = %dir.display(), "overrides applied"),
            Err(e) => output.warning(&format!(
                "Ignoring template overrides in {}: {e}",
                dir.display()
            ))?,
        }
    }

    Ok(store)
}

/// Reject empty or whitespace-only prompts.
pub(crate) fn require_prompt(prompt: &str) -> CliResult<&str> {
    if prompt.trim().is_empty() {
        return Err(CliError::EmptyPrompt);
    }
    Ok(prompt)
}
