//! The table model: content, rows, cells, and data fragments, plus the option cascade that
//! decides which level's setting applies to each piece of content.
pub mod cell;
pub mod content;
pub mod data;
pub mod options;
pub mod row;

pub use cell::Cell;
pub use cell::CellBuilder;
pub use cell::CellOption;
pub use content::Content;
pub use content::Placement;
pub use data::Data;
pub use options::HierarchicalOptions;
pub use options::ResolvedOptions;
pub use options::resolve;
pub use row::Row;
