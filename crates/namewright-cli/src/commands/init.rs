//! `namewright init`: write a configuration file.

use std::path::{Path, PathBuf};

use namewright_core::domain::RenameConfiguration;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt,
};

/// Create a Namewright configuration file.
///
/// Values start from the configuration loaded at startup; naming flags
/// override them. When no naming flag is given and stdin is a terminal the
/// styles are asked for interactively.
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = target_path(&args)?;

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let naming = if !args.has_naming_flags() && !global.quiet && prompt::can_prompt() {
        ask_naming(config.naming)?
    } else {
        naming_from_flags(&args, config.naming)
    };

    let new_config = AppConfig { naming, ..config };
    let toml = new_config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    // Ensure parent directory exists.
    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn target_path(args: &InitArgs) -> CliResult<PathBuf> {
    if args.global {
        AppConfig::global_config_path().ok_or_else(|| CliError::ConfigError {
            message: "Could not determine the global configuration directory".into(),
            source: None,
        })
    } else {
        Ok(AppConfig::project_config_path(Path::new(".")))
    }
}

fn naming_from_flags(args: &InitArgs, base: RenameConfiguration) -> RenameConfiguration {
    RenameConfiguration {
        file_naming_style: args.file_style.unwrap_or(base.file_naming_style),
        folder_naming_style: args.folder_style.unwrap_or(base.folder_naming_style),
        use_setup_service: args
            .setup_service_override()
            .unwrap_or(base.use_setup_service),
    }
}

fn ask_naming(base: RenameConfiguration) -> CliResult<RenameConfiguration> {
    Ok(RenameConfiguration {
        file_naming_style: prompt::select_style("File naming style", base.file_naming_style)?,
        folder_naming_style: prompt::select_style(
            "Folder naming style",
            base.folder_naming_style,
        )?,
        use_setup_service: prompt::confirm(
            "Do you use setup services (src/setup)?",
            base.use_setup_service,
        )?,
    })
}
