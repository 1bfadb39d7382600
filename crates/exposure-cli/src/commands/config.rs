//! Config command implementation.
//!
//! Manages the saved dashboard settings.

use anyhow::Result;
use clap::{Args, Subcommand};
use exposure_config::{ConfigKey, DashboardConfig};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_info, print_json_value, print_output, print_success, print_warning, KeyValue};

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

    /// Configuration value
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

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Get(get_args) => execute_get(get_args, ctx),
        ConfigCommand::Set(set_args) => execute_set(set_args, ctx),
        ConfigCommand::List => execute_list(ctx.format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, ctx),
        ConfigCommand::Path => execute_path(ctx),
    }
}

/// Show current configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;

    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<_> = ConfigKey::ALL
                .iter()
                .map(|&key| KeyValue::new(key.as_str(), config.get(key)))
                .collect();
            if ctx.format == OutputFormat::Table {
                print_header("Current Configuration");
            }
            print_output(&results, ctx.format)?;
        }
        OutputFormat::Json => print_json_value(&config)?,
        OutputFormat::Minimal => {
            for key in ConfigKey::ALL {
                println!("{}={}", key, config.get(key));
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let key: ConfigKey = args.key.parse()?;
    let value = config.get(key);

    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => println!("{}: {}", key, value),
        OutputFormat::Json => print_json_value(&json!({
            "key": key.as_str(),
            "value": value
        }))?,
        OutputFormat::Minimal => println!("{}", value),
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, ctx: &Context) -> Result<()> {
    let key: ConfigKey = args.key.parse()?;

    let mut config = ctx.load_config()?;
    config.set(key, &args.value)?;
    config.save(ctx.config_path()?)?;

    if !ctx.quiet {
        print_success(&format!("Set {} = {}", key, config.get(key)));
    }
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    let defaults = DashboardConfig::default();
    let results: Vec<_> = ConfigKey::ALL
        .iter()
        .map(|&key| {
            KeyValue::new(
                key.as_str(),
                format!("{} (default: {})", key.description(), defaults.get(key)),
            )
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Available Configuration Keys");
            print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::ALL
                .iter()
                .map(|&key| {
                    json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": defaults.get(key)
                    })
                })
                .collect();
            print_json_value(&output)?;
        }
        OutputFormat::Csv => print_output(&results, format)?,
        OutputFormat::Minimal => {
            for key in ConfigKey::ALL {
                println!("{}", key);
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, ctx: &Context) -> Result<()> {
    let path = ctx.config_path()?;

    if args.all {
        DashboardConfig::default().save(&path)?;
        if !ctx.quiet {
            print_success("Reset all configuration to defaults");
        }
    } else if let Some(key_str) = args.key {
        let key: ConfigKey = key_str.parse()?;
        let mut config = ctx.load_config()?;
        config.reset(key);
        config.save(&path)?;
        if !ctx.quiet {
            print_success(&format!("Reset {} to default ({})", key, config.get(key)));
        }
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(ctx: &Context) -> Result<()> {
    let path = ctx.config_path()?;
    if ctx.format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
