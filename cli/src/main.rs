mod commands;
mod terminal;

use commands::{CommandLine, Commands, greet, info};
use greeter_core::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Info => {
            print::header("about the tool", &cfg);
            info::info(&cfg)
        }
        Commands::Greet { request, context } => {
            print::header("producing greeting", &cfg);
            greet::greet(request, context, &cfg)
        }
    }
}
