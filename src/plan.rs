use crate::name::numbered_name;
use std::path::PathBuf;

/// A directory entry whose name fits `NUMBER.EXTENSION`.
#[derive(Debug, Clone)]
pub struct MatchedFile {
    pub number: i64,
    pub extension: String,
    pub path: PathBuf,
}

/// Order files so a rename never lands on a not-yet-processed original.
/// Shifting up processes the highest numbers first, shifting down the lowest;
/// equal numbers keep their discovery order.
pub fn sort_for_pass(files: &mut [MatchedFile], offset: i64) {
    if offset >= 0 {
        files.sort_by(|a, b| b.number.cmp(&a.number));
    } else {
        files.sort_by(|a, b| a.number.cmp(&b.number));
    }
}

/// What to do with a single matched file.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Rename { new_name: String },
    Skip(SkipReason),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SkipReason {
    BelowMinimum,
    Overflow,
    NegativeTarget { target: i64 },
    Unchanged,
}

/// Apply the skip rules in order and compute the target name.
pub fn decide(file: &MatchedFile, offset: i64, minimum: i64) -> Action {
    if file.number < minimum {
        return Action::Skip(SkipReason::BelowMinimum);
    }
    let Some(target) = file.number.checked_add(offset) else {
        return Action::Skip(SkipReason::Overflow);
    };
    if target < 0 {
        return Action::Skip(SkipReason::NegativeTarget { target });
    }
    let new_name = numbered_name(target, &file.extension);
    let current = file.path.file_name().map(|s| s.to_string_lossy());
    if current.as_deref() == Some(new_name.as_str()) {
        return Action::Skip(SkipReason::Unchanged);
    }
    Action::Rename { new_name }
}
