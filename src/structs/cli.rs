use clap::Parser;

use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "visaid")]
#[clap(about = "Visual aid recommendation service for educational passages", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
