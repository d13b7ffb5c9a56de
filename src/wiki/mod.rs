//! Wiki markup rendering for org records

pub mod range;
pub mod row;
pub mod summary;
pub mod table;

pub use range::{format_range, StatRoll};
pub use row::render_row;
pub use summary::{attribute_summary, cost_summary, income_summary};
pub use table::{build_table, generate_table, Table, TableReport};
