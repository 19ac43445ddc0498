use crate::consts::NUMBERED_NAME_RE;
use std::num::IntErrorKind;
use thiserror::Error;

/// Why a matched digit run could not be turned into a number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberError {
    #[error("number is too large to represent")]
    OutOfRange,
    #[error("not a valid number")]
    Malformed,
}

/// Split a `NUMBER.EXTENSION` file name into its numeric prefix and extension.
/// Returns `None` for names that do not fit the shape at all, `Some(Err(..))`
/// when the shape matches but the digit run cannot be represented.
pub fn split_numbered_name(file_name: &str) -> Option<Result<(i64, String), NumberError>> {
    let caps = NUMBERED_NAME_RE.captures(file_name)?;
    Some(parse_number(&caps[1]).map(|n| (n, caps[2].to_string())))
}

/// Build the file name for a number/extension pair, e.g. `(7, "txt")` -> `7.txt`.
pub fn numbered_name(number: i64, extension: &str) -> String {
    format!("{number}.{extension}")
}

fn parse_number(digits: &str) -> Result<i64, NumberError> {
    digits.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumberError::OutOfRange,
        _ => NumberError::Malformed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_ok() {
        assert_eq!(split_numbered_name("5.txt"), Some(Ok((5, "txt".into()))));
        assert_eq!(split_numbered_name("007.txt"), Some(Ok((7, "txt".into()))));
        assert_eq!(split_numbered_name("0.jpg"), Some(Ok((0, "jpg".into()))));
    }

    #[test]
    fn split_keeps_dots_in_extension() {
        assert_eq!(
            split_numbered_name("10.tar.gz"),
            Some(Ok((10, "tar.gz".into())))
        );
    }

    #[test]
    fn split_rejects_other_shapes() {
        assert_eq!(split_numbered_name("abc.txt"), None);
        assert_eq!(split_numbered_name("1a.txt"), None);
        assert_eq!(split_numbered_name("5"), None);
        assert_eq!(split_numbered_name("5."), None);
        assert_eq!(split_numbered_name(".txt"), None);
        assert_eq!(split_numbered_name(""), None);
    }

    #[test]
    fn split_reports_out_of_range() {
        assert_eq!(
            split_numbered_name("99999999999999999999.txt"),
            Some(Err(NumberError::OutOfRange))
        );
    }

    #[test]
    fn parse_empty_is_malformed() {
        assert_eq!(parse_number(""), Err(NumberError::Malformed));
    }

    #[test]
    fn format_round() {
        assert_eq!(numbered_name(7, "txt"), "7.txt");
        assert_eq!(numbered_name(0, "tar.gz"), "0.tar.gz");
    }
}
