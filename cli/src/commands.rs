pub mod greet;
pub mod info;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "A small greeting tool.")]
pub struct CommandLine {
    /// Suppress headers and decorations
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about this tool
    #[command(alias = "i")]
    Info,
    /// Produce the greeting
    #[command(alias = "g")]
    Greet {
        /// Request payload, accepted for call-shape compatibility and ignored
        #[arg(default_value = "")]
        request: String,
        /// Invocation context, accepted for call-shape compatibility and ignored
        #[arg(default_value = "")]
        context: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
