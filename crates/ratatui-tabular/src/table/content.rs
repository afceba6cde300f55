use crate::table::options::HierarchicalOptions;
use crate::table::options::ResolvedOptions;
use crate::table::options::resolve;
use crate::table::row::Row;
use ratatui_tabular_core::LayoutError;
use ratatui_tabular_core::Result;

/// Grid position of one cell, as computed when the content is validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Index of the row the cell belongs to.
    pub row: usize,
    /// Index of the cell within its row.
    pub cell: usize,
    /// First grid column the cell occupies.
    pub column: u16,
    pub col_span: u16,
    pub row_span: u16,
}

/// The content of a table: its rows and the table-level options.
///
/// Construction checks that the cells tile a grid of `columns` columns exactly. Cells spanning
/// several rows occupy their columns in the following rows, so those rows hold fewer cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content {
    columns: u16,
    rows: Vec<Row>,
    hierarchical: HierarchicalOptions,
    placements: Vec<Placement>,
}

impl Content {
    pub fn new(columns: u16, rows: Vec<Row>) -> Result<Self> {
        Self::with_opts(columns, rows, HierarchicalOptions::default())
    }

    /// Creates the content with table-level options, the least specific level of the cascade.
    pub fn with_opts(
        columns: u16,
        rows: Vec<Row>,
        hierarchical: HierarchicalOptions,
    ) -> Result<Self> {
        if columns == 0 {
            return Err(LayoutError::invalid_argument(
                "columns",
                columns,
                "1 <= columns",
            ));
        }
        let placements = place(columns, &rows)?;
        tracing::trace!(columns, rows = rows.len(), "validated table content");
        Ok(Self {
            columns,
            rows,
            hierarchical,
            placements,
        })
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn hierarchical(&self) -> &HierarchicalOptions {
        &self.hierarchical
    }

    /// Grid positions of all cells in row-major order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Effective options of a cell, cascading cell, row, and content levels.
    pub fn resolve_cell(&self, row: usize, cell: usize) -> Option<ResolvedOptions> {
        let r = self.rows.get(row)?;
        let c = r.cells().get(cell)?;
        Some(resolve([
            c.hierarchical(),
            r.hierarchical(),
            &self.hierarchical,
        ]))
    }

    /// Effective options of one data fragment, cascading all four levels.
    pub fn resolve_data(&self, row: usize, cell: usize, data: usize) -> Option<ResolvedOptions> {
        let r = self.rows.get(row)?;
        let c = r.cells().get(cell)?;
        let d = c.data().get(data)?;
        Some(resolve([
            d.hierarchical(),
            c.hierarchical(),
            r.hierarchical(),
            &self.hierarchical,
        ]))
    }
}

fn place(columns: u16, rows: &[Row]) -> Result<Vec<Placement>> {
    let cols = usize::from(columns);
    // Remaining rows, this one included, for which each column is occupied.
    let mut covered = vec![0u16; cols];
    let mut out = Vec::new();

    for (r, row) in rows.iter().enumerate() {
        let mut col = 0usize;
        for (i, cell) in row.cells().iter().enumerate() {
            while col < cols && covered[col] > 0 {
                col += 1;
            }
            let end = col + usize::from(cell.col_span());
            if end > cols || covered[col..end].iter().any(|&n| n > 0) {
                return Err(invalid_content(format!(
                    "row {r}: cell {i} does not fit in {columns} columns (cells span {} columns)",
                    row.span_width()
                )));
            }
            covered[col..end].fill(cell.row_span());
            out.push(Placement {
                row: r,
                cell: i,
                column: col as u16,
                col_span: cell.col_span(),
                row_span: cell.row_span(),
            });
            col = end;
        }

        if let Some(gap) = covered.iter().position(|&n| n == 0) {
            return Err(invalid_content(format!(
                "row {r}: column {gap} is not covered by any cell"
            )));
        }
        for n in &mut covered {
            *n -= 1;
        }
    }

    if covered.iter().any(|&n| n > 0) {
        return Err(invalid_content(format!(
            "a row span extends past the last row ({} rows)",
            rows.len()
        )));
    }
    Ok(out)
}

fn invalid_content(msg: String) -> LayoutError {
    tracing::debug!(%msg, "rejected table content");
    LayoutError::InvalidContent(msg)
}
