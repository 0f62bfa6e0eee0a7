//! Data types for the table view model.

mod header;
mod item;
mod pagination;
mod row;
pub mod text;

pub use header::*;
pub use item::*;
pub use pagination::*;
pub use row::*;
pub use text::TableText;
