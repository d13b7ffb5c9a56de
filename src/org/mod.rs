//! Org template records and the flags derived from them

pub mod classify;
pub mod loader;
pub mod record;

pub use classify::{has_trait, is_faction_unique, restricted_factions, Ideology, OwnerTrait};
pub use loader::{load_from_file, load_from_json};
pub use record::{OrgRecord, OrgStats, TechBonus};
