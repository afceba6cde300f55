use crate::table::cell::Cell;
use crate::table::options::HierarchicalOptions;

/// One row of a table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    hierarchical: HierarchicalOptions,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self::with_opts(cells, HierarchicalOptions::default())
    }

    /// Creates a row whose options apply to every cell that does not override them.
    pub fn with_opts(cells: Vec<Cell>, hierarchical: HierarchicalOptions) -> Self {
        Self {
            cells,
            hierarchical,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn hierarchical(&self) -> &HierarchicalOptions {
        &self.hierarchical
    }

    /// Sum of the column spans of the cells starting in this row.
    pub fn span_width(&self) -> u32 {
        self.cells.iter().map(|c| u32::from(c.col_span())).sum()
    }
}
