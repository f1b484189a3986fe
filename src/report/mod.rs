//! Result table construction and export.

mod export;
mod table;

pub use export::to_csv;
pub use table::TableBuilder;
