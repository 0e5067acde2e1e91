use crate::error::CoreError;
use std::num::{IntErrorKind, ParseIntError};

const CANCEL_TOKENS: [&str; 2] = ["cancel", "back"];
const AFFIRMATIVE_TOKENS: [&str; 2] = ["y", "yes"];

/// Trimmed, lowercased form used for keyword matching.
pub fn normalize_command(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_cancel(raw: &str) -> bool {
    let normalized = normalize_command(raw);
    CANCEL_TOKENS.contains(&normalized.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Cancel,
}

impl Confirmation {
    /// Cancel tokens win over everything else; only `y`/`yes` confirm.
    pub fn parse(raw: &str) -> Self {
        if is_cancel(raw) {
            return Confirmation::Cancel;
        }
        let normalized = normalize_command(raw);
        if AFFIRMATIVE_TOKENS.contains(&normalized.as_str()) {
            Confirmation::Yes
        } else {
            Confirmation::No
        }
    }
}

/// Parses a 1-based position into a list of `len` entries and returns the
/// 0-based index.
pub fn parse_selection(raw: &str, len: usize) -> Result<usize, CoreError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|err: ParseIntError| match err.kind() {
        // Too many digits is still a number, just not one on the list.
        IntErrorKind::PosOverflow => CoreError::SelectionOutOfRange(i64::MAX),
        IntErrorKind::NegOverflow => CoreError::SelectionOutOfRange(i64::MIN),
        _ => CoreError::InvalidNumber(trimmed.to_string()),
    })?;
    if value < 1 || value as u64 > len as u64 {
        return Err(CoreError::SelectionOutOfRange(value));
    }
    Ok((value - 1) as usize)
}
