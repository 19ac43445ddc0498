use crate::name::split_numbered_name;
use crate::plan::{Action, MatchedFile, SkipReason, decide};
use eyre::Result;
use std::fs;
use std::path::Path;

/// Collect every regular file in `dir` whose name fits `NUMBER.EXTENSION`.
/// Digit runs too large to represent are warned about and left out; names
/// that do not fit the shape are ignored.
pub fn scan_dir(dir: &Path) -> Result<Vec<MatchedFile>> {
    let mut matched = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        match split_numbered_name(file_name) {
            Some(Ok((number, extension))) => {
                tracing::trace!(file = file_name, number, "matched");
                matched.push(MatchedFile {
                    number,
                    extension,
                    path: entry.path(),
                });
            }
            Some(Err(e)) => tracing::warn!("skipping '{file_name}': {e}"),
            None => {}
        }
    }
    Ok(matched)
}

/// Outcome counts for one rename pass.
#[derive(Debug, Default)]
pub struct PassSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Apply `offset` to every matched file, in the order given. Skips are
/// reported per file; individual failures do not stop the pass.
pub fn rename_all(files: &[MatchedFile], offset: i64, minimum: i64) -> PassSummary {
    let mut summary = PassSummary::default();
    for file in files {
        let current = file
            .path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.path.display().to_string());

        match decide(file, offset, minimum) {
            Action::Skip(reason) => {
                summary.skipped += 1;
                match reason {
                    SkipReason::BelowMinimum => tracing::info!(
                        "skipping '{current}': original number {} is below the minimum {minimum}",
                        file.number
                    ),
                    SkipReason::Overflow => {
                        tracing::warn!("skipping '{current}': new number would not fit")
                    }
                    SkipReason::NegativeTarget { target } => tracing::info!(
                        "skipping '{current}': new number {target} would be negative"
                    ),
                    SkipReason::Unchanged => {
                        tracing::info!("skipping '{current}': new name is identical")
                    }
                }
            }
            Action::Rename { new_name } => {
                let new_path = file.path.with_file_name(&new_name);
                // Refuse to clobber an existing entry; platforms disagree on
                // whether rename overwrites silently.
                if new_path.symlink_metadata().is_ok() {
                    tracing::error!("cannot rename '{current}' to '{new_name}': target already exists");
                    summary.failed += 1;
                    continue;
                }
                match fs::rename(&file.path, &new_path) {
                    Ok(()) => {
                        tracing::info!("renamed '{current}' -> '{new_name}'");
                        summary.renamed += 1;
                    }
                    Err(e) => {
                        tracing::error!("failed to rename '{current}' to '{new_name}': {e}");
                        summary.failed += 1;
                    }
                }
            }
        }
    }
    summary
}
