//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the resolved
//! [`RenameConfiguration`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`NAMEWRIGHT_NAMING__FILE_NAMING_STYLE=kebab`)
//! 3. Project file `<root>/.namewright.toml`
//! 4. Global file (`config.toml` in the platform config directory)
//! 5. Built-in defaults (always present)
//!
//! `--config FILE` replaces both files (3 and 4).

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use namewright_core::domain::{NamingStyle, RenameConfiguration};

use crate::cli::OutputFormat;

/// File name of the per-project configuration.
pub const PROJECT_CONFIG_FILE: &str = ".namewright.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "NAMEWRIGHT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Naming rules applied by `rename`.
    pub naming: RenameConfiguration,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

/// What a single source may set. Every field is optional so that a source
/// only overrides the keys it mentions.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialAppConfig {
    naming: PartialNamingConfig,
    output: PartialOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialNamingConfig {
    file_naming_style: Option<NamingStyle>,
    folder_naming_style: Option<NamingStyle>,
    use_setup_service: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialOutputConfig {
    no_color: Option<bool>,
    format: Option<OutputFormat>,
}

impl PartialAppConfig {
    fn resolve(self, defaults: AppConfig) -> AppConfig {
        let naming = RenameConfiguration {
            file_naming_style: self
                .naming
                .file_naming_style
                .unwrap_or(defaults.naming.file_naming_style),
            folder_naming_style: self
                .naming
                .folder_naming_style
                .unwrap_or(defaults.naming.folder_naming_style),
            use_setup_service: self
                .naming
                .use_setup_service
                .unwrap_or(defaults.naming.use_setup_service),
        };

        AppConfig {
            naming,
            output: OutputConfig {
                no_color: self.output.no_color.unwrap_or(defaults.output.no_color),
                format: self.output.format.unwrap_or(defaults.output.format),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration for the project at `project_root`.
    ///
    /// `config_file` is the path the user passed via `--config`; when set,
    /// it must exist and no other file is read.
    pub fn load(project_root: &Path, config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                anyhow::ensure!(
                    path.is_file(),
                    "Config file '{}' does not exist",
                    path.display()
                );
                builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
            }
            None => {
                if let Some(global) = Self::global_config_path() {
                    builder = builder.add_source(
                        File::from(global.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
                builder = builder.add_source(
                    File::from(Self::project_config_path(project_root).as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let partial: PartialAppConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration value")?;

        Ok(partial.resolve(Self::default()))
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "namewright", "namewright")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Path to the project configuration file under `root`.
    pub fn project_config_path(root: &Path) -> PathBuf {
        root.join(PROJECT_CONFIG_FILE)
    }

    /// Serialise as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_project_convention() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.naming.file_naming_style, NamingStyle::PascalCase);
        assert_eq!(cfg.naming.folder_naming_style, NamingStyle::KebabCase);
        assert!(cfg.naming.use_setup_service);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_only_the_keys_it_sets() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(&path, "[naming]\nfile_naming_style = \"camelCase\"\n").unwrap();

        let cfg = AppConfig::load(tmp.path(), Some(&path)).unwrap();
        assert_eq!(cfg.naming.file_naming_style, NamingStyle::CamelCase);
        assert_eq!(cfg.naming.folder_naming_style, NamingStyle::KebabCase);
        assert!(cfg.naming.use_setup_service);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        assert!(AppConfig::load(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn invalid_style_in_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, "[naming]\nfolder_naming_style = \"snake_case\"\n").unwrap();
        assert!(AppConfig::load(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn partial_resolution_falls_back_field_by_field() {
        let partial = PartialAppConfig {
            naming: PartialNamingConfig {
                use_setup_service: Some(false),
                ..Default::default()
            },
            output: PartialOutputConfig {
                format: Some(OutputFormat::Json),
                ..Default::default()
            },
        };

        let cfg = partial.resolve(AppConfig::default());
        assert!(!cfg.naming.use_setup_service);
        assert_eq!(cfg.naming.file_naming_style, NamingStyle::PascalCase);
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn toml_round_trips_through_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("written.toml");
        let mut cfg = AppConfig::default();
        cfg.naming.folder_naming_style = NamingStyle::CamelCase;
        std::fs::write(&path, cfg.to_toml().unwrap()).unwrap();

        assert_eq!(AppConfig::load(tmp.path(), Some(&path)).unwrap(), cfg);
    }

    #[test]
    fn project_config_lives_in_root() {
        assert_eq!(
            AppConfig::project_config_path(Path::new("/app")),
            PathBuf::from("/app/.namewright.toml")
        );
    }
}
