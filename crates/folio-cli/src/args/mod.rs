mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse, filter and check a localized project catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "folio.toml", global = true)]
    pub config: PathBuf,

    #[arg(
        long,
        global = true,
        help = "Content root (overrides FOLIO_CONTENT_DIR and the config file)"
    )]
    pub content_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
