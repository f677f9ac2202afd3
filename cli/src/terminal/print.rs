use std::fmt::Display;

use colored::*;
use greeter_core::config::Config;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 8;

/// Prints a section header like `────⟦ PRODUCING GREETING ⟧────`.
pub fn header(msg: &str, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

/// Prints a result value plainly. This is the tool's actual output
/// channel and is never decorated or suppressed.
pub fn value(msg: &str) {
    println!("{}", msg);
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".bright_black();
    println!("{} {}", prefix, msg.as_ref());
}

/// Prints `Key....: value` with dots padding the key to a fixed width.
pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.bright_green(),
        dots.bright_black(),
        ":".bright_black(),
        value
    ));
}

pub fn end_of_program() {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}
