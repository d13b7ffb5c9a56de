//! Run configuration with documented defaults
//!
//! The generator is a one-shot batch job: read the org template file,
//! write the wiki table. Everything it needs to know lives here and is
//! passed explicitly, there is no global state.

use crate::core::error::{OrgError, Result};
use std::path::PathBuf;

/// Default org template exported from the game data
pub const DEFAULT_INPUT: &str = "TIOrgTemplate.json";

/// Default destination for the rendered table
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Configuration for a single table generation run
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Path of the JSON array of org records
    pub input: PathBuf,

    /// Path the wiki markup is written to (overwritten if present)
    pub output: PathBuf,

    /// Minimum number of qualifying orgs before rows are rendered in parallel
    ///
    /// The shipped template holds a few hundred orgs, which renders in well
    /// under a millisecond on one thread. Below this threshold the thread pool
    /// costs more than it saves.
    pub parallel_threshold: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            parallel_threshold: 256,
        }
    }
}

impl TableConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Config reading `input` and writing `output`, other values defaulted
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(OrgError::InvalidConfig("input path is empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(OrgError::InvalidConfig("output path is empty".into()));
        }

        // Writing over the source would destroy it before a rerun could recover
        if self.input == self.output {
            return Err(OrgError::InvalidConfig(format!(
                "input and output both point at {:?}",
                self.input
            )));
        }

        Ok(())
    }
}
