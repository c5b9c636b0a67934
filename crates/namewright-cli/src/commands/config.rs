//! `namewright config`: read and write configuration values.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use namewright_core::domain::NamingStyle;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.print(&value)?;
            }
        }

        ConfigCommands::Set { key, value } => {
            let path = writable_path(&global)?;
            let stored = set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {stored} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => match &global.config {
            Some(path) => output.print(&path.display().to_string())?,
            None => {
                if let Some(path) = AppConfig::global_config_path() {
                    output.print(&format!("global:  {}", path.display()))?;
                }
                output.print(&format!(
                    "project: {}",
                    AppConfig::project_config_path(Path::new(".")).display()
                ))?;
            }
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "naming.file_naming_style" => Ok(config.naming.file_naming_style.to_string()),
        "naming.folder_naming_style" => Ok(config.naming.folder_naming_style.to_string()),
        "naming.use_setup_service" => Ok(config.naming.use_setup_service.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.to_string()),
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

/// `--config FILE` when given, the global file otherwise.
fn writable_path(global: &GlobalArgs) -> CliResult<PathBuf> {
    match &global.config {
        Some(path) => Ok(path.clone()),
        None => AppConfig::global_config_path().ok_or_else(|| CliError::ConfigError {
            message: "Could not determine the global configuration directory".into(),
            source: None,
        }),
    }
}

/// Validate `value` for `key` and turn it into the TOML value stored on disk.
fn parse_config_value(key: &str, value: &str) -> CliResult<toml::Value> {
    let invalid = |e: Box<dyn std::error::Error + Send + Sync>| CliError::InvalidInput {
        message: format!("'{value}' is not a valid value for {key}"),
        source: Some(e),
    };

    match key {
        "naming.file_naming_style" | "naming.folder_naming_style" => value
            .parse::<NamingStyle>()
            .map(|style| toml::Value::String(style.as_str().into()))
            .map_err(|e| invalid(Box::new(e))),
        "naming.use_setup_service" | "output.no_color" => value
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|e| invalid(Box::new(e))),
        "output.format" => <OutputFormat as ValueEnum>::from_str(value, true)
            .map(|format| toml::Value::String(format.to_string()))
            .map_err(|e| invalid(e.into())),
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

/// Write `key = value` into the TOML file at `path`, keeping every other key.
/// Returns the value as stored.
fn set_config_value(path: &Path, key: &str, value: &str) -> CliResult<toml::Value> {
    let parsed = parse_config_value(key, value)?;
    let Some((section, field)) = key.split_once('.') else {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    };

    let mut table = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read config '{}'", path.display()))?;
        content
            .parse::<toml::Table>()
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to parse '{}'", path.display()),
                source: Some(Box::new(e)),
            })?
    } else {
        toml::Table::new()
    };

    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(section_table) = entry.as_table_mut() else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    section_table.insert(field.to_string(), parsed.clone());

    let serialised = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, serialised)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(parsed)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "naming.file_naming_style").unwrap(),
            "PascalCase"
        );
        assert_eq!(
            get_config_value(&cfg, "naming.folder_naming_style").unwrap(),
            "kebab-case"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn style_values_are_normalised() {
        assert_eq!(
            parse_config_value("naming.file_naming_style", "camel").unwrap(),
            toml::Value::String("camelCase".into())
        );
        assert!(matches!(
            parse_config_value("naming.file_naming_style", "snake"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn bool_and_format_values() {
        assert_eq!(
            parse_config_value("naming.use_setup_service", "false").unwrap(),
            toml::Value::Boolean(false)
        );
        assert_eq!(
            parse_config_value("output.format", "JSON").unwrap(),
            toml::Value::String("json".into())
        );
        assert!(parse_config_value("output.no_color", "maybe").is_err());
    }

    #[test]
    fn set_keeps_other_keys_and_loads_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[naming]\nfile_naming_style = \"camelCase\"\n").unwrap();

        set_config_value(&path, "naming.folder_naming_style", "pascal").unwrap();
        set_config_value(&path, "output.no_color", "true").unwrap();

        let cfg = AppConfig::load(tmp.path(), Some(&path)).unwrap();
        assert_eq!(cfg.naming.file_naming_style, NamingStyle::CamelCase);
        assert_eq!(cfg.naming.folder_naming_style, NamingStyle::PascalCase);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn set_creates_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        set_config_value(&path, "naming.use_setup_service", "false").unwrap();

        let cfg = AppConfig::load(tmp.path(), Some(&path)).unwrap();
        assert!(!cfg.naming.use_setup_service);
    }
}
