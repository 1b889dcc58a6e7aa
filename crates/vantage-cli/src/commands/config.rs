//! Config command implementation.
//!
//! Manages the settings file. Shows what the file holds; command-line
//! overrides apply to other commands only.

use anyhow::Result;
use clap::{Args, Subcommand};

use vantage_config::{ConfigKey, DashboardConfig};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::output::{
    print_header, print_info, print_json_value, print_output, print_success, print_warning,
    KeyValue,
};
use crate::session::config_path;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value (empty clears optional keys)
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

fn shown(value: String) -> String {
    if value.is_empty() {
        "(unset)".to_string()
    } else {
        value
    }
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, global: &GlobalArgs) -> Result<()> {
    let format = global.format.unwrap_or_default();
    match args.command {
        ConfigCommand::Show => execute_show(global, format),
        ConfigCommand::Get(get_args) => execute_get(get_args, global, format),
        ConfigCommand::Set(set_args) => execute_set(set_args, global),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, global),
        ConfigCommand::Path => execute_path(global),
    }
}

fn load(global: &GlobalArgs) -> Result<DashboardConfig> {
    Ok(DashboardConfig::load_or_default(config_path(global)?)?)
}

/// Show current configuration.
fn execute_show(global: &GlobalArgs, format: OutputFormat) -> Result<()> {
    let config = load(global)?;

    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), shown(config.get(*key))))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            print_output(&results, format)?;
        }
        OutputFormat::Json => print_json_value(&config)?,
        OutputFormat::Csv => print_output(&results, format)?,
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key, config.get(*key));
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, global: &GlobalArgs, format: OutputFormat) -> Result<()> {
    let key = ConfigKey::from_name(&args.key)?;
    let value = load(global)?.get(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key, shown(value));
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            print_json_value(&output)?;
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, global: &GlobalArgs) -> Result<()> {
    let key = ConfigKey::from_name(&args.key)?;
    let path = config_path(global)?;

    let mut config = DashboardConfig::load_or_default(&path)?;
    config.set(key, &args.value)?;
    config.save(&path)?;

    print_success(&format!("Set {} = {}", key, shown(config.get(key))));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| {
            KeyValue::new(
                key.as_str(),
                format!("{} (default: {})", key.description(), shown(key.default_value())),
            )
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Available Configuration Keys");
            print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            print_json_value(&output)?;
        }
        OutputFormat::Csv => print_output(&results, format)?,
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key);
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, global: &GlobalArgs) -> Result<()> {
    let path = config_path(global)?;

    if args.all {
        DashboardConfig::default().save(&path)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = ConfigKey::from_name(&key_str)?;
        let mut config = DashboardConfig::load_or_default(&path)?;
        config.reset(key);
        config.save(&path)?;
        print_success(&format!(
            "Reset {} to default ({})",
            key,
            shown(key.default_value())
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(global: &GlobalArgs) -> Result<()> {
    let path = config_path(global)?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
