use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cp-portal")]
#[command(about = "Citizen portal session gate and profile administration")]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
