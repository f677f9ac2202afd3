use greeter_core::config::Config;
use greeter_core::greeting;
use tracing::debug;

use crate::terminal::print;

pub fn greet(request: String, context: String, cfg: &Config) -> anyhow::Result<()> {
    debug!(target: "greeter::cli", "invoking entry point");

    let greeting: String = greeting::entry_point(&request, &context);

    // The greeting is the tool's output and goes to stdout even when quiet.
    print::value(&greeting);

    if !cfg.quiet {
        print::end_of_program();
    }

    Ok(())
}
