use crate::table::data::Data;
use crate::table::options::HierarchicalOptions;
use ratatui::style::Style;
use ratatui_tabular_core::LayoutError;
use ratatui_tabular_core::Result;
use ratatui_tabular_core::align::HorizontalAlignment;
use ratatui_tabular_core::align::VerticalAlignment;
use ratatui_tabular_core::wrapping::WrapMode;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// One option applied while building a [`Cell`].
///
/// Options are applied in the order given. Each writes exactly one field, so a later option
/// replaces an earlier one targeting the same field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellOption {
    /// Number of columns the cell spans. Must end up non-zero.
    ColSpan(u16),
    /// Number of rows the cell spans. Must end up non-zero.
    RowSpan(u16),
    /// Cell-level style. Overrides the content and row levels, overridden by the data level.
    Style(Style),
    /// Fixed height in rows. Must end up non-zero. Defaults to the content height.
    Height(u16),
    /// Empty columns left between the cell wall and its content.
    HorizontalPadding(u16),
    /// Empty rows left between the cell wall and its content.
    VerticalPadding(u16),
    AlignHorizontal(HorizontalAlignment),
    AlignVertical(VerticalAlignment),
    /// Wrap content at word boundaries instead of trimming it.
    WrapAtWords,
}

impl CellOption {
    fn apply(self, cell: &mut Cell) {
        let h = &mut cell.hierarchical;
        match self {
            CellOption::ColSpan(cols) => cell.col_span = cols,
            CellOption::RowSpan(rows) => cell.row_span = rows,
            CellOption::Style(style) => h.style = Some(style),
            CellOption::Height(height) => h.height = Some(height),
            CellOption::HorizontalPadding(cells) => h.horizontal_padding = Some(cells),
            CellOption::VerticalPadding(cells) => h.vertical_padding = Some(cells),
            CellOption::AlignHorizontal(a) => h.align_horizontal = Some(a),
            CellOption::AlignVertical(a) => h.align_vertical = Some(a),
            CellOption::WrapAtWords => h.wrap_mode = Some(WrapMode::Word),
        }
    }
}

/// One cell in a [`Row`](crate::table::row::Row).
///
/// A cell is immutable once built; all options are applied at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    data: Vec<Data>,
    col_span: u16,
    row_span: u16,
    hierarchical: HierarchicalOptions,
}

impl Cell {
    /// Creates a cell holding `text` as a single fragment with default options.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::with_opts(vec![Data::new(text)?], [])
    }

    /// Creates a cell from explicit fragments, applying `opts` in order.
    ///
    /// Fails when the final column span, row span, or fixed height is zero.
    pub fn with_opts(data: Vec<Data>, opts: impl IntoIterator<Item = CellOption>) -> Result<Self> {
        let mut cell = Self {
            data,
            col_span: 1,
            row_span: 1,
            hierarchical: HierarchicalOptions::default(),
        };
        for opt in opts {
            opt.apply(&mut cell);
        }
        cell.validate()?;
        Ok(cell)
    }

    pub fn builder(data: Vec<Data>) -> CellBuilder {
        CellBuilder {
            data,
            opts: Vec::new(),
        }
    }

    pub fn data(&self) -> &[Data] {
        &self.data
    }

    pub fn col_span(&self) -> u16 {
        self.col_span
    }

    pub fn row_span(&self) -> u16 {
        self.row_span
    }

    pub fn hierarchical(&self) -> &HierarchicalOptions {
        &self.hierarchical
    }

    /// Width in terminal columns of the widest line of the fragments joined together.
    ///
    /// A fragment without a newline continues the line of the previous one.
    pub fn width(&self) -> usize {
        let text: String = self.data.iter().map(Data::text).collect();
        text.split('\n').map(|line| line.width()).max().unwrap_or(0)
    }

    fn validate(&self) -> Result<()> {
        if self.col_span == 0 {
            return Err(LayoutError::invalid_argument("col_span", 0, "1 <= col_span"));
        }
        if self.row_span == 0 {
            return Err(LayoutError::invalid_argument("row_span", 0, "1 <= row_span"));
        }
        if self.hierarchical.height == Some(0) {
            return Err(LayoutError::invalid_argument("height", 0, "1 <= height"));
        }
        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("| ")?;
        for d in &self.data {
            write!(f, "{d}")?;
        }
        f.write_str(" ")
    }
}

/// Accumulates [`CellOption`]s for [`Cell::with_opts`].
#[derive(Clone, Debug)]
pub struct CellBuilder {
    data: Vec<Data>,
    opts: Vec<CellOption>,
}

impl CellBuilder {
    pub fn option(mut self, opt: CellOption) -> Self {
        self.opts.push(opt);
        self
    }

    pub fn col_span(self, cols: u16) -> Self {
        self.option(CellOption::ColSpan(cols))
    }

    pub fn row_span(self, rows: u16) -> Self {
        self.option(CellOption::RowSpan(rows))
    }

    pub fn style(self, style: Style) -> Self {
        self.option(CellOption::Style(style))
    }

    pub fn height(self, height: u16) -> Self {
        self.option(CellOption::Height(height))
    }

    pub fn horizontal_padding(self, cells: u16) -> Self {
        self.option(CellOption::HorizontalPadding(cells))
    }

    pub fn vertical_padding(self, cells: u16) -> Self {
        self.option(CellOption::VerticalPadding(cells))
    }

    pub fn align_horizontal(self, align: HorizontalAlignment) -> Self {
        self.option(CellOption::AlignHorizontal(align))
    }

    pub fn align_vertical(self, align: VerticalAlignment) -> Self {
        self.option(CellOption::AlignVertical(align))
    }

    pub fn wrap_at_words(self) -> Self {
        self.option(CellOption::WrapAtWords)
    }

    pub fn build(self) -> Result<Cell> {
        Cell::with_opts(self.data, self.opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn data(texts: &[&str]) -> Vec<Data> {
        texts.iter().map(|t| Data::new(*t).unwrap()).collect()
    }

    #[test]
    fn new_uses_defaults() {
        let c = Cell::new("hello").unwrap();
        assert_eq!(c.data().len(), 1);
        assert_eq!(c.col_span(), 1);
        assert_eq!(c.row_span(), 1);
        assert!(c.hierarchical().is_empty());
    }

    #[test]
    fn new_propagates_text_errors() {
        assert!(matches!(
            Cell::new("a\tb"),
            Err(LayoutError::InvalidText { ch: '\t', .. })
        ));
    }

    #[test]
    fn last_option_wins() {
        let c = Cell::with_opts(
            data(&["x"]),
            [CellOption::ColSpan(2), CellOption::ColSpan(3)],
        )
        .unwrap();
        assert_eq!(c.col_span(), 3);
    }

    #[test]
    fn options_write_single_fields() {
        let style = Style::default().fg(Color::Green);
        let c = Cell::with_opts(
            data(&["x"]),
            [
                CellOption::RowSpan(2),
                CellOption::Style(style),
                CellOption::Height(4),
                CellOption::HorizontalPadding(1),
                CellOption::VerticalPadding(2),
                CellOption::AlignHorizontal(HorizontalAlignment::Right),
                CellOption::AlignVertical(VerticalAlignment::Middle),
                CellOption::WrapAtWords,
            ],
        )
        .unwrap();
        let h = c.hierarchical();
        assert_eq!(c.col_span(), 1);
        assert_eq!(c.row_span(), 2);
        assert_eq!(h.style, Some(style));
        assert_eq!(h.height, Some(4));
        assert_eq!(h.horizontal_padding, Some(1));
        assert_eq!(h.vertical_padding, Some(2));
        assert_eq!(h.align_horizontal, Some(HorizontalAlignment::Right));
        assert_eq!(h.align_vertical, Some(VerticalAlignment::Middle));
        assert_eq!(h.wrap_mode, Some(WrapMode::Word));
    }

    #[test]
    fn zero_spans_are_rejected() {
        assert!(matches!(
            Cell::with_opts(data(&["x"]), [CellOption::ColSpan(0)]),
            Err(LayoutError::InvalidArgument {
                name: "col_span",
                ..
            })
        ));
        assert!(Cell::with_opts(data(&["x"]), [CellOption::RowSpan(0)]).is_err());
        assert!(Cell::with_opts(data(&["x"]), [CellOption::Height(0)]).is_err());
    }

    #[test]
    fn only_the_final_span_is_validated() {
        let c = Cell::with_opts(
            data(&["x"]),
            [CellOption::ColSpan(0), CellOption::ColSpan(2)],
        )
        .unwrap();
        assert_eq!(c.col_span(), 2);
    }

    #[test]
    fn builder_matches_option_list() {
        let built = Cell::builder(data(&["x"]))
            .col_span(2)
            .align_horizontal(HorizontalAlignment::Center)
            .wrap_at_words()
            .build()
            .unwrap();
        let listed = Cell::with_opts(
            data(&["x"]),
            [
                CellOption::ColSpan(2),
                CellOption::AlignHorizontal(HorizontalAlignment::Center),
                CellOption::WrapAtWords,
            ],
        )
        .unwrap();
        assert_eq!(built, listed);
    }

    #[test]
    fn width_uses_widest_joined_line() {
        let c = Cell::with_opts(data(&["ab", "cd\nxyz", "w"]), []).unwrap();
        assert_eq!(c.width(), 4);
        let c = Cell::with_opts(data(&["long line\nx", "y"]), []).unwrap();
        assert_eq!(c.width(), 9);
        assert_eq!(Cell::with_opts(Vec::new(), []).unwrap().width(), 0);
    }

    #[test]
    fn display_concatenates_fragments() {
        let c = Cell::with_opts(data(&["ab", "cd"]), []).unwrap();
        assert_eq!(c.to_string(), "| abcd ");
        assert_eq!(Cell::new("").unwrap().to_string(), "|  ");
    }
}
