use crate::table::options::HierarchicalOptions;
use ratatui_tabular_core::LayoutError;
use ratatui_tabular_core::Result;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// A text fragment inside a [`Cell`](crate::table::cell::Cell).
///
/// The text may not contain control characters or whitespace other than `' '` and `'\n'`.
/// Newlines start a new line when the cell is displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Data {
    text: String,
    hierarchical: HierarchicalOptions,
}

impl Data {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::with_opts(text, HierarchicalOptions::default())
    }

    /// Creates a fragment carrying data-level options, the most specific level of the cascade.
    pub fn with_opts(text: impl Into<String>, hierarchical: HierarchicalOptions) -> Result<Self> {
        let text = text.into();
        validate(&text)?;
        Ok(Self { text, hierarchical })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn hierarchical(&self) -> &HierarchicalOptions {
        &self.hierarchical
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Width of the widest line in terminal columns.
    pub fn width(&self) -> usize {
        self.lines().map(|line| line.width()).max().unwrap_or(0)
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn validate(text: &str) -> Result<()> {
    let bad = text
        .char_indices()
        .find(|&(_, ch)| ch != ' ' && ch != '\n' && (ch.is_control() || ch.is_whitespace()));
    match bad {
        Some((offset, ch)) => {
            tracing::debug!(?ch, offset, "rejected cell text");
            Err(LayoutError::InvalidText { ch, offset })
        }
        None => Ok(()),
    }
}
