//! Find command - enumerate matching paths under a base directory.

use crate::OutputFormat;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info};
use trawl_core::{Config, PatternSet};

/// Run the find command.
pub fn run(
    config: Config,
    base: &Path,
    patterns: Vec<String>,
    sort: bool,
    absolute: bool,
    output: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let set = if patterns.is_empty() {
        debug!("no patterns given, using configured defaults");
        config.pattern_set()
    } else {
        PatternSet::new(patterns)
    };

    let start = Instant::now();
    let paths = collect_paths(&config, set, base, sort, absolute)?;
    let elapsed = start.elapsed();

    info!(
        base = %base.display(),
        matches = paths.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "walk finished"
    );

    match output {
        OutputFormat::Text => {
            for path in &paths {
                println!("{}", path.display());
            }
        }
        OutputFormat::Json => {
            let json_paths: Vec<_> = paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
            println!("{}", serde_json::to_string_pretty(&json_paths)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Walk `base` and collect the paths the set matches.
///
/// In absolute mode the base is resolved against the working directory
/// alongside the patterns: absolute patterns can only ever match absolute
/// walked paths, so both sides have to agree on the form.
fn collect_paths(
    config: &Config,
    set: PatternSet,
    base: &Path,
    sort: bool,
    absolute: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    // A pattern that cannot be made absolute is a configuration problem the
    // user has to see; matching errors during the walk stay silent
    // non-matches.
    let (set, base) = if absolute || config.output.absolute {
        (set.abs()?, resolve_base(base)?)
    } else {
        (set, base.to_path_buf())
    };

    let mut paths = set.glob(&base);
    if sort || config.output.sort {
        paths.sort();
    }
    Ok(paths)
}

/// Resolve a base directory against the working directory, dropping `.`
/// components so the joined form lines up segment-for-segment with
/// patterns resolved by [`PatternSet::abs`].
fn resolve_base(base: &Path) -> io::Result<PathBuf> {
    if base.is_absolute() {
        return Ok(base.to_path_buf());
    }
    Ok(env::current_dir()?.join(base).components().collect())
}
