//! Error type for hex color parsing.

use thiserror::Error;

/// A hex color string could not be parsed.
///
/// Every other conversion in this crate is total (out-of-range numeric
/// inputs are clamped or wrapped); hex parsing is the one place where
/// malformed input must be reported rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseHexError {
    /// The string had the wrong number of digits after stripping any
    /// leading `#`. Accepted lengths are 3 (RGB), 6 (RRGGBB), and
    /// 8 (RRGGBBAA).
    #[error("invalid hex color length: expected 3, 6, or 8 digits, got {0}")]
    InvalidLength(usize),

    /// The string contained a character outside `0-9A-Fa-f`.
    #[error("invalid hex digit {0:?} in color string")]
    InvalidDigit(char),
}
