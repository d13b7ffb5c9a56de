//! Org Table - Terra Invicta org templates as a wiki table

pub mod core;
pub mod org;
pub mod wiki;
