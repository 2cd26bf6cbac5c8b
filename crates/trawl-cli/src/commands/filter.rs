//! Filter command - keep the names that match a pattern set.

use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::debug;
use trawl_core::PatternSet;

/// Run the filter command.
///
/// Names come from the command line, or from stdin (one per line) when none
/// are given. Matching names are printed in input order.
pub fn run(patterns: Vec<String>, names: Vec<String>) -> anyhow::Result<ExitCode> {
    let set = PatternSet::new(patterns);

    let names = if names.is_empty() {
        read_stdin_names()?
    } else {
        names
    };

    debug!(patterns = set.len(), names = names.len(), "filtering names");

    for name in set.filter(names) {
        println!("{}", name);
    }

    Ok(ExitCode::SUCCESS)
}

fn read_stdin_names() -> io::Result<Vec<String>> {
    io::stdin().lock().lines().collect()
}
