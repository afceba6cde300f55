//! `ratatui-tabular` models the cells of a terminal table and resolves their styling.
//!
//! Options such as padding, alignment, wrapping, and style can be set on the whole table
//! ([`table::Content`]), on a [`table::Row`], on a [`table::Cell`], or on a single
//! [`table::Data`] fragment. The most specific level that sets a field wins, field by field.
//!
//! Geometry lives in the core crate, re-exported here as [`primitives`]: a layout component uses
//! [`primitives::area`] to find where each cell goes and [`table::Content::resolve_data`] to decide
//! how the content sits inside it.
//!
//! ```
//! use ratatui_tabular::primitives::align::HorizontalAlignment;
//! use ratatui_tabular::table::{Cell, CellOption, Content, Data, HierarchicalOptions, Row};
//!
//! let row_opts = HierarchicalOptions {
//!     align_horizontal: Some(HorizontalAlignment::Left),
//!     ..Default::default()
//! };
//! let right = HierarchicalOptions {
//!     align_horizontal: Some(HorizontalAlignment::Right),
//!     ..Default::default()
//! };
//! let cell = Cell::with_opts(
//!     vec![Data::with_opts("42", right).unwrap()],
//!     [CellOption::HorizontalPadding(1)],
//! )
//! .unwrap();
//! let content = Content::new(1, vec![Row::with_opts(vec![cell], row_opts)]).unwrap();
//!
//! let resolved = content.resolve_data(0, 0, 0).unwrap();
//! assert_eq!(resolved.align_horizontal, HorizontalAlignment::Right);
//! assert_eq!(resolved.horizontal_padding, 1);
//! ```
pub use ratatui_tabular_core as primitives;

pub mod table;
