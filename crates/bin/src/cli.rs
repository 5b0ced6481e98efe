//! CLI argument definitions for the boardrank binary.

use std::path::PathBuf;

use boardrank::RankKey;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Ordering keys for task boards
#[derive(Parser, Debug)]
#[command(name = "boardrank")]
#[command(about = "boardrank: fractional ordering keys for boards, lists and cards")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", env = "BOARDRANK_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a key that sorts strictly between two keys
    Between(BetweenArgs),
    /// Move an item on a board file
    Move(MoveArgs),
    /// Evenly respace the keys of one container
    Rebalance(RebalanceArgs),
    /// Report ties and overlong keys per container
    Audit(AuditArgs),
}

/// Arguments for the between command
#[derive(clap::Args, Debug)]
pub struct BetweenArgs {
    /// Key of the item above; omit for the top of a container
    #[arg(long)]
    pub prev: Option<RankKey>,

    /// Key of the item below; omit for the bottom of a container
    #[arg(long)]
    pub next: Option<RankKey>,
}

/// Board file shared by commands that read or rewrite items
#[derive(clap::Args, Debug)]
pub struct BoardArgs {
    /// JSON file holding an array of items
    #[arg(short, long, env = "BOARDRANK_BOARD")]
    pub board: PathBuf,

    /// Save the changed keys back to the board file
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for the move command
#[derive(clap::Args, Debug)]
pub struct MoveArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Id of the item to move
    #[arg(short, long)]
    pub item: String,

    /// Destination container; defaults to the item's current container
    #[arg(long)]
    pub to: Option<String>,

    /// Destination index among the destination's remaining items
    #[arg(long)]
    pub index: usize,

    /// Fail instead of respacing when no key fits between the neighbors
    #[arg(long, env = "BOARDRANK_NO_REBALANCE")]
    pub no_rebalance: bool,
}

/// Arguments for the rebalance command
#[derive(clap::Args, Debug)]
pub struct RebalanceArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Container whose items are respaced
    #[arg(short, long)]
    pub container: String,
}

/// Arguments for the audit command
#[derive(clap::Args, Debug)]
pub struct AuditArgs {
    /// JSON file holding an array of items
    #[arg(short, long, env = "BOARDRANK_BOARD")]
    pub board: PathBuf,

    /// Key length above which a container is due for a rebalance
    #[arg(long, default_value_t = boardrank::constants::DEFAULT_MAX_KEY_LEN, env = "BOARDRANK_MAX_KEY_LEN")]
    pub max_key_len: usize,
}
