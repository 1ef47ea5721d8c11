use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "geist-scan", version, about = "Read blocks out of Anvil world saves")]
pub struct Cli {
    /// TOML config file (defaults to ./geist-scan.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// World save folder containing `region/`
    #[arg(long, global = true)]
    pub world: Option<PathBuf>,
    /// Directory for exported position files
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export every non-air block between two corners
    #[command(allow_negative_numbers = true)]
    Scan {
        x1: i32,
        y1: i32,
        z1: i32,
        x2: i32,
        y2: i32,
        z2: i32,
    },
    /// Print the block at each X Y Z triple
    #[command(allow_negative_numbers = true)]
    Get {
        #[arg(required = true, num_args = 3.., value_name = "X Y Z")]
        coords: Vec<i32>,
    },
    /// List region files of the world
    Regions,
}
