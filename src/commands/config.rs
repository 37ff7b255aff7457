//! Configuration commands (`roost config`)
//!
//! - `config show`: display configuration and its file path
//! - `config get`: print a single value
//! - `config set`: set a value

use owo_colors::OwoColorize;
use serde_json::json;

use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(json_output: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    if json_output {
        let output = json!({
            "api": { "base_url": config.api.base_url },
            "auth": { "domain": config.auth.domain },
            "config_file": path.to_string_lossy(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", "Configuration:".cyan().bold());
    println!("{}: {}", "api.base_url".cyan(), config.api.base_url);
    println!("{}: {}", "auth.domain".cyan(), config.auth.domain);
    println!("\n{}: {}", "config file".dimmed(), path.display());

    Ok(())
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value and persist it
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} {} = {}", "✓".green().bold(), key.cyan(), config.get(key)?);
    Ok(())
}
