//! Options that can be set at several nesting levels of a table.
//!
//! A table has four levels, from least to most specific: content (the whole table), row, cell,
//! and data (one text fragment inside a cell). Each level carries a [`HierarchicalOptions`]
//! record where every field is either unset (inherit) or set (override).
//!
//! [`resolve`] walks the levels from most to least specific and picks, independently for each
//! field, the first level that sets it. A cell may set its padding and still inherit its
//! alignment from the row.
use ratatui::style::Style;
use ratatui_tabular_core::align::HorizontalAlignment;
use ratatui_tabular_core::align::VerticalAlignment;
use ratatui_tabular_core::wrapping::WrapMode;

/// Per-level overrides. `None` means "inherit from the enclosing level".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HierarchicalOptions {
    /// Style applied to the cells of the terminal that hold the content.
    pub style: Option<Style>,
    /// Fixed height in terminal rows.
    pub height: Option<u16>,
    /// Empty columns between the cell wall and its content, on each side.
    pub horizontal_padding: Option<u16>,
    /// Empty rows between the cell wall and its content, on each side.
    pub vertical_padding: Option<u16>,
    pub align_horizontal: Option<HorizontalAlignment>,
    pub align_vertical: Option<VerticalAlignment>,
    pub wrap_mode: Option<WrapMode>,
}

impl HierarchicalOptions {
    /// Keeps every field set on `self` and fills the unset ones from `fallback`.
    pub fn or(self, fallback: &HierarchicalOptions) -> Self {
        Self {
            style: self.style.or(fallback.style),
            height: self.height.or(fallback.height),
            horizontal_padding: self.horizontal_padding.or(fallback.horizontal_padding),
            vertical_padding: self.vertical_padding.or(fallback.vertical_padding),
            align_horizontal: self.align_horizontal.or(fallback.align_horizontal),
            align_vertical: self.align_vertical.or(fallback.align_vertical),
            wrap_mode: self.wrap_mode.or(fallback.wrap_mode),
        }
    }

    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fills every unset field with its built-in default.
    pub fn finish(self) -> ResolvedOptions {
        let d = ResolvedOptions::default();
        ResolvedOptions {
            style: self.style.unwrap_or(d.style),
            height: self.height.or(d.height),
            horizontal_padding: self.horizontal_padding.unwrap_or(d.horizontal_padding),
            vertical_padding: self.vertical_padding.unwrap_or(d.vertical_padding),
            align_horizontal: self.align_horizontal.unwrap_or(d.align_horizontal),
            align_vertical: self.align_vertical.unwrap_or(d.align_vertical),
            wrap_mode: self.wrap_mode.unwrap_or(d.wrap_mode),
        }
    }
}

/// The effective options for one piece of content after cascading.
///
/// The `Default` value holds the built-in defaults used when no level sets a field: plain style,
/// height sized to the content, no padding, left/top alignment, and trimming instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResolvedOptions {
    pub style: Style,
    /// `None` sizes the cell to its content.
    pub height: Option<u16>,
    pub horizontal_padding: u16,
    pub vertical_padding: u16,
    pub align_horizontal: HorizontalAlignment,
    pub align_vertical: VerticalAlignment,
    pub wrap_mode: WrapMode,
}

/// Resolves the effective options from `levels`, ordered most specific first.
pub fn resolve<'a>(levels: impl IntoIterator<Item = &'a HierarchicalOptions>) -> ResolvedOptions {
    levels
        .into_iter()
        .fold(HierarchicalOptions::default(), |acc, level| acc.or(level))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn no_levels_yield_defaults() {
        let r = resolve(Vec::<&HierarchicalOptions>::new());
        assert_eq!(r, ResolvedOptions::default());
        assert_eq!(r.height, None);
        assert_eq!(r.horizontal_padding, 0);
        assert_eq!(r.align_horizontal, HorizontalAlignment::Left);
        assert_eq!(r.align_vertical, VerticalAlignment::Top);
        assert_eq!(r.wrap_mode, WrapMode::None);
    }

    #[test]
    fn most_specific_level_wins() {
        let data = HierarchicalOptions {
            align_horizontal: Some(HorizontalAlignment::Right),
            ..Default::default()
        };
        let row = HierarchicalOptions {
            align_horizontal: Some(HorizontalAlignment::Left),
            ..Default::default()
        };
        let r = resolve([&data, &HierarchicalOptions::default(), &row]);
        assert_eq!(r.align_horizontal, HorizontalAlignment::Right);
    }

    #[test]
    fn fields_cascade_independently() {
        let cell = HierarchicalOptions {
            horizontal_padding: Some(2),
            ..Default::default()
        };
        let row = HierarchicalOptions {
            horizontal_padding: Some(5),
            align_vertical: Some(VerticalAlignment::Bottom),
            ..Default::default()
        };
        let content = HierarchicalOptions {
            style: Some(Style::default().fg(Color::Red)),
            wrap_mode: Some(WrapMode::Word),
            align_vertical: Some(VerticalAlignment::Middle),
            ..Default::default()
        };
        let r = resolve([&cell, &row, &content]);
        assert_eq!(r.horizontal_padding, 2);
        assert_eq!(r.align_vertical, VerticalAlignment::Bottom);
        assert_eq!(r.style, Style::default().fg(Color::Red));
        assert_eq!(r.wrap_mode, WrapMode::Word);
        assert_eq!(r.vertical_padding, 0);
    }

    #[test]
    fn is_empty_tracks_any_set_field() {
        assert!(HierarchicalOptions::default().is_empty());
        let o = HierarchicalOptions {
            height: Some(3),
            ..Default::default()
        };
        assert!(!o.is_empty());
    }
}
