//! Configuration types.
//!
//! This module provides configuration structures for:
//! - Heuristic selection and scaling for A* (SearchConfig)
//! - Loading graphs from the text node/arc format (LoaderConfig)
//!
//! Both are plain serde structs with defaults, so a JSON file can override
//! any subset of fields (see [`load_json`]).

mod loader;
mod search;

pub use self::loader::LoaderConfig;
pub use self::search::{HeuristicKind, SearchConfig};

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::GraphResult;

/// Read a config struct from a JSON file. Missing fields take defaults.
pub fn load_json<C: DeserializeOwned>(path: impl AsRef<Path>) -> GraphResult<C> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let config = serde_json::from_str(&text)?;
    Ok(config)
}
