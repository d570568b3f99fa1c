//! Decode command: prints the keys of a KLE layout.

use crate::cli::common::{print_json, CliResult};
use crate::models::{Key, Layout};
use crate::services::LayoutService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Decode a KLE layout into absolute key positions
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Path to KLE layout (.json download or raw data)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the decode command
#[derive(Debug, Serialize)]
struct DecodeResponse<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    count: usize,
    keys: &'a [Key],
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let layout = LayoutService::load(&self.layout)?;

        if self.json {
            print_json(&DecodeResponse {
                name: layout.name(),
                count: layout.key_count(),
                keys: &layout.keys,
            })
        } else {
            print_table(&layout);
            Ok(())
        }
    }
}

fn print_table(layout: &Layout) {
    if let Some(name) = layout.name() {
        println!("{name}");
    }
    println!("Decoded {} keys:", layout.key_count());
    println!(
        "  {:>4}  {:>7} {:>7}  {:>5} {:>5}  {:>7}  label",
        "#", "x", "y", "w", "h", "angle"
    );
    for (index, key) in layout.keys.iter().enumerate() {
        println!(
            "  {:>4}  {:>7.3} {:>7.3}  {:>5.2} {:>5.2}  {:>7.2}  {}",
            index,
            key.x,
            key.y,
            key.width,
            key.height,
            key.rotation_angle,
            key.primary_label()
        );
    }
}
