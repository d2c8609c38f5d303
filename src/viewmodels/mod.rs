pub mod columns;

pub use columns::{visible_columns, ColumnId, ColumnsViewModel};
