//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default horizontal spacing in mm per key unit
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    h_spacing: Option<f64>,

    /// Default vertical spacing in mm per key unit
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    v_spacing: Option<f64>,

    /// Default group name for placed footprints
    #[arg(long, value_name = "NAME")]
    group: Option<String>,

    /// Whether to hide the original footprint after placing (true/false)
    #[arg(long, value_name = "BOOL")]
    hide_template: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.h_spacing.is_none()
            && self.v_spacing.is_none()
            && self.group.is_none()
            && self.hide_template.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --h-spacing, --v-spacing, --group, or --hide-template",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(h) = self.h_spacing {
            config.spacing.horizontal = h;
        }
        if let Some(v) = self.v_spacing {
            config.spacing.vertical = v;
        }
        if let Some(group) = &self.group {
            config.output.group_name.clone_from(group);
        }
        if let Some(hide) = self.hide_template {
            config.output.hide_template = hide;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("========================");
    println!();

    println!("Spacing (mm per unit):");
    println!("  Horizontal: {}", config.spacing.horizontal);
    println!("  Vertical:   {}", config.spacing.vertical);
    println!();

    println!("Output:");
    println!("  Group Name:    {}", config.output.group_name);
    println!("  Hide Template: {}", config.output.hide_template);
    println!();
}
