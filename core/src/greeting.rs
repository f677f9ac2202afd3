//! # Greeter
//!
//! The single operation this tool exposes: produce the greeting.
//!
//! `entry_point` keeps the two-argument call shape of a hosted function
//! handler. Neither argument influences the result; they are accepted so
//! that any caller using that convention can invoke the greeter unchanged.

use tracing::debug;

/// The one value the greeter ever produces.
pub const GREETING: &str = "Hello World";

/// Produces the greeting.
///
/// Accepts a `(request, context)` pair and ignores both. Pure and
/// infallible; safe to call from any number of threads.
pub fn entry_point(request: &str, context: &str) -> String {
    debug!(
        target: "greeter::core",
        request_len = request.len(),
        context_len = context.len(),
        "producing greeting"
    );

    GREETING.to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
