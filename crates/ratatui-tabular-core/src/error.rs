//! Error types shared by the area math and the table model.

use thiserror::Error;

/// Errors reported to the immediate caller. Degenerate geometry is never an error; it is
/// reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A numeric argument is outside its documented range.
    #[error("invalid {name}({value}), must be in range {expected}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        expected: &'static str,
    },

    /// Text contains a character a table cell cannot display.
    #[error("invalid character {ch:?} at byte offset {offset}")]
    InvalidText { ch: char, offset: usize },

    /// The cells of a table do not tile its grid.
    #[error("invalid table content: {0}")]
    InvalidContent(String),
}

impl LayoutError {
    pub fn invalid_argument(
        name: &'static str,
        value: impl Into<i64>,
        expected: &'static str,
    ) -> Self {
        let err = Self::InvalidArgument {
            name,
            value: value.into(),
            expected,
        };
        tracing::debug!(%err, "rejected argument");
        err
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Checks `value` against `min..=max` (or `min..` when `max` is `None`).
pub fn check_range(
    name: &'static str,
    value: i32,
    min: i32,
    max: Option<i32>,
    expected: &'static str,
) -> Result<()> {
    let too_big = max.is_some_and(|max| value > max);
    if value < min || too_big {
        return Err(LayoutError::invalid_argument(name, value, expected));
    }
    Ok(())
}
