use regex::Regex;
use std::sync::LazyLock;

/// Matches `NUMBER.EXTENSION` names, capturing the ASCII digit run and the
/// remainder after the first dot.
pub static NUMBERED_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.(.+)$").unwrap());
