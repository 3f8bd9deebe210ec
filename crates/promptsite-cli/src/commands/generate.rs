//! Implementation of the `promptsite generate` command.
//!
//! Responsibility: resolve the prompt and export options, call the core
//! generation and export services, and display results. No business logic
//! lives here.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{debug, info, instrument};

use promptsite_adapters::{LocalFilesystem, SimpleRenderer, SystemClock};
use promptsite_core::{
    application::{ExportService, GenerationOptions, GenerationService, PageSelection},
    domain::Site,
};

use crate::{
    cli::GenerateArgs,
    commands::{require_prompt, template_store},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON shape of a generate run.
#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    site: &'a Site,
    files: &'a [PathBuf],
    dry_run: bool,
}

/// Execute the `promptsite generate` command.
///
/// 1. Resolve the prompt (argument, else interactive pick on a TTY)
/// 2. Build the template store, applying overrides
/// 3. Generate the site, with a spinner while any delay runs
/// 4. Export the selected pages unless `--dry-run`
/// 5. Print a summary or the JSON report
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let prompt = match args.prompt {
        Some(prompt) => prompt,
        None => ask_prompt(&output)?,
    };
    let prompt = require_prompt(&prompt)?;

    let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.generation.delay_ms));
    let out_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.directory.clone());
    // A configured default page is only a preference; `--page` is strict.
    let selection = PageSelection::from_flags(args.page.as_deref(), args.all_pages)
        .or_preferred(config.generation.default_page.as_deref());

    debug!(?delay, dir = %out_dir.display(), ?selection, "generate options resolved");

    // 1. Generate
    let store = template_store(config, &output)?;
    let service = GenerationService::new(
        Box::new(store),
        Box::new(SimpleRenderer::new()),
        Box::new(SystemClock::new()),
    )
    .with_options(GenerationOptions::with_delay(delay));

    let spinner = (!delay.is_zero() && output.is_interactive()).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_message("Generating website...");
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    });
    let generated = service.generate(prompt);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let site = generated?;

    info!(
        site = %site.name(),
        category = %site.category(),
        pages = site.pages().len(),
        "Site generated"
    );

    // 2. Export
    let export = ExportService::new(Box::new(LocalFilesystem::new()));
    let docs = export.documents(&site, &selection)?;
    let files: Vec<PathBuf> = if args.dry_run {
        docs.iter().map(|d| out_dir.join(&d.file_name)).collect()
    } else {
        export.write_documents(&docs, &out_dir, args.force)?
    };

    // 3. Report
    if output.is_json() {
        output.json(&GenerateReport {
            site: &site,
            files: &files,
            dry_run: args.dry_run,
        })?;
        return Ok(());
    }

    show_summary(&site, &output)?;
    output.print("")?;
    for file in &files {
        if args.dry_run {
            output.info(&format!("Dry run: would write {}", file.display()))?;
        } else {
            output.success(&format!("Wrote {}", file.display()))?;
        }
    }

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_summary(site: &Site, out: &OutputManager) -> CliResult<()> {
    out.header(&format!("Generated '{}'", site.name()))?;
    out.field("Category", site.category().label())?;
    out.field(
        "Colors",
        &format!("{} / {}", site.colors().primary, site.colors().secondary),
    )?;
    out.field("Id", site.id().as_str())?;
    out.field("Created", &site.created_at_iso())?;
    out.field("Pages", &site.pages().len().to_string())?;
    for page in site.pages() {
        out.print(&format!(
            "    {:<10} {:<10} {}",
            page.id,
            page.name,
            site.preview_url(page)
        ))?;
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn ask_prompt(output: &OutputManager) -> CliResult<String> {
    use dialoguer::{FuzzySelect, Input, theme::ColorfulTheme};
    use promptsite_core::application::EXAMPLE_PROMPTS;

    if !output.is_interactive() {
        return Err(CliError::EmptyPrompt);
    }

    let theme = ColorfulTheme::default();
    let mut items = vec!["Write my own..."];
    items.extend(EXAMPLE_PROMPTS);

    let choice = FuzzySelect::with_theme(&theme)
        .with_prompt("Describe your website")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "prompt selection failed".into(),
            source: Some(Box::new(e)),
        })?;

    if choice > 0 {
        return Ok(items[choice].to_string());
    }

    Input::<String>::with_theme(&theme)
        .with_prompt("Prompt")
        .interact_text()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read prompt".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn ask_prompt(_output: &OutputManager) -> CliResult<String> {
    Err(CliError::EmptyPrompt)
}
