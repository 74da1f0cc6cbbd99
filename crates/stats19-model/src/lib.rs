pub mod dtype;
pub mod table;
pub mod years;

pub use dtype::ColumnDtype;
pub use table::{ParseTableKindError, TableKind};
pub use years::YearCoverage;
