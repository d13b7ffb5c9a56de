pub mod config;
pub mod error;
pub mod types;

pub use config::TableConfig;
pub use error::{OrgError, Result};
pub use types::Amount;
