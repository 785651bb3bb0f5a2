use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use kdrama_config::Config;
use serde_json::json;
use std::path::Path;

pub fn run_config(cmd: ConfigCommands, config: &Config, config_path: &Path, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(config, config_path, output),
        ConfigCommands::Path => {
            if output.is_human() {
                output.println(config_path.display().to_string());
            } else {
                output.json(&json!({
                    "type": "config_path",
                    "path": config_path.display().to_string(),
                    "exists": config_path.exists(),
                }));
            }
            Ok(())
        }
        ConfigCommands::Init { force } => init_config(config_path, force, output),
    }
}

fn show_config(config: &Config, config_path: &Path, output: &Output) -> Result<()> {
    if !output.is_human() {
        output.json(&json!({
            "type": "config",
            "path": config_path.display().to_string(),
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    if config_path.exists() {
        output.heading(format!("Configuration ({})", config_path.display()));
    } else {
        output.heading("Configuration (defaults, no config file)");
    }
    output.println(config.to_toml().map_err(|e| eyre!("{}", e))?);

    if let Err(e) = config.validate() {
        output.warn(format!("Configuration is invalid: {}", e));
    }
    Ok(())
}

fn init_config(config_path: &Path, force: bool, output: &Output) -> Result<()> {
    if config_path.exists() && !force {
        return Err(eyre!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }

    Config::default()
        .save_to_file(config_path)
        .map_err(|e| eyre!("Failed to write {}: {}", config_path.display(), e))?;
    tracing::info!(path = %config_path.display(), "Wrote default configuration");
    output.success(format!("Wrote default configuration to {}", config_path.display()));
    Ok(())
}
