use colored::*;
use greeter_core::config::Config;

use crate::terminal::print;

/// Prints static information about the tool itself.
pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::aligned_line("Name", env!("CARGO_PKG_NAME"));
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Greeting", greeter_core::greeting::GREETING.bright_green());

    if !cfg.quiet {
        print::end_of_program();
    }

    Ok(())
}
