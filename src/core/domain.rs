use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

pub const DEFAULT_INITIAL_CAPACITY: usize = 400;

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // preallocation hint for the entry list, the catalog grows past it
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
