//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PROMPTSITE_<SECTION>__<KEY>`,
//!    e.g. `PROMPTSITE_GENERATION__DELAY_MS=250`
//! 3. `--config FILE`, or else `.promptsite.toml` in the current directory
//!    layered over the platform config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name of a project-local configuration.
pub const LOCAL_CONFIG_FILE: &str = ".promptsite.toml";

const ENV_PREFIX: &str = "PROMPTSITE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation settings.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Simulated processing delay in milliseconds.
    pub delay_ms: u64,
    /// Page exported when neither `--page` nor `--all-pages` is given.
    /// Sites without it export their first page.
    pub default_page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
    /// Where exported pages go when `--output` is not given.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of template overrides.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file(s) and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "loading explicit config file");
                builder = builder.add_source(toml_file(path).required(true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(&Self::config_path()).required(false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        settings
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path to the platform configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.promptsite.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "promptsite", "promptsite")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key for `config get`. `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "generation.delay_ms" => self.generation.delay_ms.to_string(),
            "generation.default_page" => self.generation.default_page.clone().unwrap_or_default(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "output.directory" => self.output.directory.display().to_string(),
            "templates.local_path" => self
                .templates
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key understood by [`Self::get`].
    pub const KEYS: [&'static str; 6] = [
        "generation.delay_ms",
        "generation.default_page",
        "output.no_color",
        "output.format",
        "output.directory",
        "templates.local_path",
    ];
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generation.delay_ms, 0);
        assert_eq!(cfg.generation.default_page, None);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
        assert_eq!(cfg.output.directory, PathBuf::from("."));
        assert_eq!(cfg.templates.local_path, None);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(
            &path,
            "[generation]\ndelay_ms = 1500\n\n[output]\ndirectory = \"site\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.generation.delay_ms, 1500);
        assert_eq!(cfg.output.directory, PathBuf::from("site"));
        // untouched sections keep their defaults
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "[generation]\ndelay_ms = \"soon\"\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn serialised_defaults_round_trip_through_loader() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, toml::to_string_pretty(&AppConfig::default()).unwrap()).unwrap();
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("generation.delay_ms").as_deref(), Some("0"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("templates.local_path").as_deref(), Some(""));
        assert_eq!(cfg.get("does.not.exist"), None);
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
