pub mod kind;
pub mod range;
pub mod set;
pub mod table;

pub use kind::{CategoryType, UnknownCategory};
pub use range::Range;
pub use set::CategorySet;
pub use table::{CategoryTable, CategoryTableBuilder};
