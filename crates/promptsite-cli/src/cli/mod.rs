//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "promptsite",
    bin_name = "promptsite",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Describe a website, get a website",
    long_about = "promptsite turns a one-line description into a multi-page \
                  Tailwind site built from a fixed family of templates.",
    after_help = "EXAMPLES:\n\
        \x20 promptsite generate \"a cafe called Blue Door with a teal theme\"\n\
        \x20 promptsite generate \"Create a blog called TechInsights\" --all-pages -o site\n\
        \x20 promptsite classify \"business software platform\"\n\
        \x20 promptsite completions bash > /usr/share/bash-completion/completions/promptsite",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a website from a prompt.
    #[command(
        visible_alias = "g",
        about = "Generate a website from a prompt",
        after_help = "EXAMPLES:\n\
            \x20 promptsite generate \"Make a restaurant website for Bella Cucina with a warm red color scheme\"\n\
            \x20 promptsite generate \"a shop named Night Market\" --page shop -o out\n\
            \x20 promptsite generate \"Create a blog called TechInsights\" --all-pages --force\n\
            \x20 promptsite generate \"a portfolio for Sarah Chen\" --dry-run"
    )]
    Generate(GenerateArgs),

    /// Show how a prompt would be classified.
    #[command(
        about = "Classify a prompt without generating",
        after_help = "EXAMPLES:\n\
            \x20 promptsite classify \"Build a site for Acme Corp that sells widgets\"\n\
            \x20 promptsite --output-format json classify \"a purple SaaS for CloudSync\""
    )]
    Classify(ClassifyArgs),

    /// List template families.
    #[command(
        visible_alias = "ls",
        about = "List template categories",
        after_help = "EXAMPLES:\n\
            \x20 promptsite categories\n\
            \x20 promptsite categories --format json\n\
            \x20 promptsite ls --format csv"
    )]
    Categories(CategoriesArgs),

    /// Print the sample prompts.
    #[command(about = "Show example prompts")]
    Examples,

    /// Initialise a promptsite configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 promptsite init           # platform config location\n\
            \x20 promptsite init --local   # .promptsite.toml in CWD\n\
            \x20 promptsite init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 promptsite completions bash > ~/.local/share/bash-completion/completions/promptsite\n\
            \x20 promptsite completions zsh  > ~/.zfunc/_promptsite\n\
            \x20 promptsite completions fish > ~/.config/fish/completions/promptsite.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the promptsite configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 promptsite config get generation.delay_ms\n\
            \x20 promptsite config list\n\
            \x20 promptsite config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `promptsite generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Free-text description of the site.  Asked for interactively when
    /// omitted on a terminal.
    #[arg(value_name = "PROMPT", help = "Description of the website")]
    pub prompt: Option<String>,

    /// Directory the HTML files are written to.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default from config, else current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Export one page by id instead of the first.
    #[arg(
        short = 'p',
        long = "page",
        value_name = "ID",
        conflicts_with = "all_pages",
        help = "Page to export (default: first page)"
    )]
    pub page: Option<String>,

    /// Export every page, one file each.
    #[arg(short = 'a', long = "all-pages", help = "Export every page")]
    pub all_pages: bool,

    /// Overwrite existing files.
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Show what would be written without writing.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Simulated processing delay.
    #[arg(
        long = "delay-ms",
        value_name = "MILLIS",
        help = "Artificial delay before generating (default from config)"
    )]
    pub delay_ms: Option<u64>,
}

// ── classify ──────────────────────────────────────────────────────────────────

/// Arguments for `promptsite classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Prompt to classify.
    #[arg(value_name = "PROMPT", help = "Description of the website")]
    pub prompt: String,
}

// ── categories ────────────────────────────────────────────────────────────────

/// Arguments for `promptsite categories`.
#[derive(Debug, Args)]
pub struct CategoriesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `categories` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One slug per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `promptsite init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.promptsite.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `promptsite completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `promptsite config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.delay_ms`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "promptsite",
            "generate",
            "a shop named Night Market",
            "--all-pages",
            "-o",
            "out",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.prompt.as_deref(), Some("a shop named Night Market"));
        assert!(args.all_pages);
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(!args.force);
    }

    #[test]
    fn page_and_all_pages_conflict() {
        let result = Cli::try_parse_from([
            "promptsite",
            "generate",
            "x",
            "--page",
            "shop",
            "--all-pages",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn categories_alias() {
        let cli = Cli::parse_from(["promptsite", "ls", "--format", "csv"]);
        let Commands::Categories(args) = cli.command else {
            panic!("expected Categories command");
        };
        assert_eq!(args.format, ListFormat::Csv);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["promptsite", "examples", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["promptsite", "--quiet", "--verbose", "examples"]);
        assert!(result.is_err());
    }
}
