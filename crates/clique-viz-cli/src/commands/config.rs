//! Config command implementation.
//!
//! Manages CLI configuration.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("cliqueviz Configuration");
    println!("{:-<40}", "");

    println!("Server URL:   {}", config.server_url);
    println!("Solver URL:   {}", config.solver_url);
    println!("Port:         {}", config.port);
    println!(
        "Assets Dir:   {}",
        config
            .assets_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "server-url" | "server" => config.server_url = value.to_string(),
        "solver-url" | "solver" => config.solver_url = value.to_string(),
        "port" => config.port = value.parse()?,
        "assets-dir" | "assets" => config.assets_dir = Some(PathBuf::from(value)),
        _ => {
            anyhow::bail!(
                "Unknown config key: {}. Valid keys: server-url, solver-url, port, assets-dir",
                key
            );
        }
    }
    println!("Set {} to: {}", key, value);

    config.save()?;
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = match key {
        "server-url" | "server" => config.server_url.clone(),
        "solver-url" | "solver" => config.solver_url.clone(),
        "port" => config.port.to_string(),
        "assets-dir" | "assets" => config
            .assets_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
        _ => {
            anyhow::bail!("Unknown config key: {}", key);
        }
    };

    println!("{}", value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
