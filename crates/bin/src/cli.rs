//! CLI argument definitions for the Galleria binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Galleria ordered image collections
#[derive(Parser, Debug)]
#[command(name = "galleria")]
#[command(about = "Galleria: ordered image collections from the command line")]
#[command(version)]
pub struct Cli {
    /// Path of the JSON data file
    #[arg(
        short = 'D',
        long,
        default_value = "galleria.json",
        env = "GALLERIA_DATA_FILE"
    )]
    pub data_file: PathBuf,

    /// Owner whose collection to operate on
    #[arg(short, long, default_value = "default", env = "GALLERIA_OWNER")]
    pub owner: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append images at the end of the collection
    Add(AddArgs),
    /// List the collection in display order
    List,
    /// Move an image to a new position
    Move(MoveArgs),
    /// Remove an image
    Rm(RmArgs),
}

/// Arguments for the add command
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Titles of the images to append
    #[arg(required = true)]
    pub titles: Vec<String>,

    /// Base URL the stored blobs live under
    #[arg(long, default_value = "https://images.localhost", env = "GALLERIA_BASE_URL")]
    pub base_url: String,
}

/// Arguments for the move command
#[derive(clap::Args, Debug)]
pub struct MoveArgs {
    /// ID (or unique ID prefix) of the image to move
    pub item: String,

    /// Target position in the listing, starting at 1
    #[arg(short, long)]
    pub to: usize,
}

/// Arguments for the rm command
#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// ID (or unique ID prefix) of the image to remove
    pub item: String,
}
