use ratatui::layout::Alignment;

/// Horizontal placement of content inside a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of content inside a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl From<HorizontalAlignment> for Alignment {
    fn from(value: HorizontalAlignment) -> Self {
        match value {
            HorizontalAlignment::Left => Alignment::Left,
            HorizontalAlignment::Center => Alignment::Center,
            HorizontalAlignment::Right => Alignment::Right,
        }
    }
}

impl From<Alignment> for HorizontalAlignment {
    fn from(value: Alignment) -> Self {
        match value {
            Alignment::Left => HorizontalAlignment::Left,
            Alignment::Center => HorizontalAlignment::Center,
            Alignment::Right => HorizontalAlignment::Right,
        }
    }
}

impl HorizontalAlignment {
    /// Column offset of content `content_w` wide inside `avail_w` columns.
    pub fn offset(self, avail_w: u16, content_w: u16) -> u16 {
        let free = avail_w.saturating_sub(content_w);
        match self {
            HorizontalAlignment::Left => 0,
            HorizontalAlignment::Center => free / 2,
            HorizontalAlignment::Right => free,
        }
    }
}

impl VerticalAlignment {
    /// Row offset of content `content_h` tall inside `avail_h` rows.
    pub fn offset(self, avail_h: u16, content_h: u16) -> u16 {
        let free = avail_h.saturating_sub(content_h);
        match self {
            VerticalAlignment::Top => 0,
            VerticalAlignment::Middle => free / 2,
            VerticalAlignment::Bottom => free,
        }
    }
}
