//! Match command - test one pattern against one path.

use std::process::ExitCode;
use tracing::debug;
use trawl_core::Pattern;

/// Run the match command.
///
/// The exit status carries the result: 0 for a match, 1 otherwise.
pub fn run(pattern: &str, path: &str) -> anyhow::Result<ExitCode> {
    let pattern = Pattern::new(pattern);
    let matched = pattern.matches(path);

    debug!(pattern = %pattern, path, matched, "evaluated pattern");

    if matched {
        println!("{}", path);
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
