//! Column metadata, cell values, and preview rows.

mod column;
mod row;
mod value;

pub use column::{numeric_columns, ColumnInfo};
pub use row::{Row, RowStatus};
pub use value::{CellValue, NA_LABEL};

pub(crate) use value::number_key;
