//! Implementation of the `promptsite categories` command.

use promptsite_core::application::{CatalogService, CategoryInfo};

use crate::{
    cli::{CategoriesArgs, ListFormat},
    commands::template_store,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: CategoriesArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let store = template_store(config, &output)?;
    let catalog = CatalogService::new(Box::new(store));
    let categories = catalog.categories()?;

    // The global `--output-format json` implies JSON here too.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Template categories:")?;
            for info in &categories {
                output.print(&table_row(info))?;
            }
            output.print("")?;
            output.info("Earlier rank wins when a prompt matches several categories.")?;
        }
        ListFormat::Json => output.json(&categories)?,
        ListFormat::List => {
            for info in &categories {
                println!("{}", info.slug);
            }
        }
        ListFormat::Csv => {
            println!("slug,label,precedence,pages,secondary_color,keywords");
            for info in &categories {
                println!("{}", csv_row(info));
            }
        }
    }

    Ok(())
}

fn rank(info: &CategoryInfo) -> String {
    info.precedence
        .map(|p| format!("#{p}"))
        .unwrap_or_else(|| "fallback".into())
}

fn table_row(info: &CategoryInfo) -> String {
    format!(
        "  {:<12} {:<9} pages: {:<40} secondary: {}",
        info.label,
        rank(info),
        info.pages.join(", "),
        info.secondary_color
    )
}

fn csv_row(info: &CategoryInfo) -> String {
    format!(
        "{},{},{},{},{},{}",
        info.slug,
        info.label,
        info.precedence.map(|p| p.to_string()).unwrap_or_default(),
        info.pages.join(";"),
        info.secondary_color,
        info.keywords.join(";")
    )
}
