//! Place command: computes footprint transforms for every key.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::Spacing;
use crate::services::{LayoutService, PlacementPlan};
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

/// Compute footprint placements for a KLE layout
#[derive(Debug, Clone, Args)]
pub struct PlaceArgs {
    /// Path to KLE layout (.json download or raw data)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Horizontal spacing in mm per key unit (default from config, 19.05)
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub h_spacing: Option<f64>,

    /// Vertical spacing in mm per key unit (default from config, 19.05)
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub v_spacing: Option<f64>,

    /// Name of the group holding the placed footprints
    #[arg(long, value_name = "NAME")]
    pub group: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlaceArgs {
    /// Execute the place command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_else(|e| {
            warn!("Ignoring unreadable configuration: {e:#}");
            Config::default()
        });

        let spacing = self.spacing(&config)?;
        let group = self
            .group
            .clone()
            .unwrap_or_else(|| config.output.group_name.clone());

        let layout = LayoutService::load(&self.layout)?;
        let mut plan = PlacementPlan::build(&layout, spacing, group);
        plan.hide_template = config.output.hide_template;

        if self.json {
            print_json(&plan)
        } else {
            print_plan(&plan);
            Ok(())
        }
    }

    /// Resolves spacing: command line first, then config.
    fn spacing(&self, config: &Config) -> CliResult<Spacing> {
        let defaults = config.spacing();
        let spacing = Spacing::new(
            self.h_spacing.unwrap_or(defaults.horizontal),
            self.v_spacing.unwrap_or(defaults.vertical),
        );

        if !spacing.horizontal.is_finite() || !spacing.vertical.is_finite() {
            return Err(CliError::validation("Spacing must be a finite number"));
        }

        Ok(spacing)
    }
}

fn print_plan(plan: &PlacementPlan) {
    println!(
        "Placing {} footprints in group '{}' ({} x {} per unit):",
        plan.len(),
        plan.group_name,
        plan.spacing.horizontal,
        plan.spacing.vertical
    );
    for placement in &plan.placements {
        let [tx, ty, _] = placement.transform.translation;
        let [cx, cy, _] = placement.transform.rotation_center;
        let label = placement.key.primary_label();
        if placement.transform.is_rotated() {
            println!(
                "  {:>4}  translate ({:.3}, {:.3})  rotate {:.2}° about ({:.3}, {:.3})  {}",
                placement.index,
                tx,
                ty,
                placement.transform.rotation_angle_radians.to_degrees(),
                cx,
                cy,
                label
            );
        } else {
            println!("  {:>4}  translate ({:.3}, {:.3})  {}", placement.index, tx, ty, label);
        }
    }
    if plan.hide_template {
        println!("Original footprint will be hidden.");
    }
}
