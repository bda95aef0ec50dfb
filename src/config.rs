//! Configuration file handling.
//!
//! An agent reads an optional TOML file with two tables:
//!
//! ```toml
//! [agent]
//! name = "Othello AI"
//!
//! [search]
//! algorithm = "alphabeta"
//! depth_limit = 4          # -1 for unlimited
//! caching = false
//! ordering = false
//! evaluator = "utility"    # or "heuristic"
//! tt_capacity = 65536
//! persist_cache = false
//! ```
//!
//! Every field is optional. In protocol mode the manager's handshake
//! overrides the algorithm, depth and switches.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OthelloError, Result};
use crate::protocol::DEFAULT_NAME;
use crate::search::SearchConfig;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub agent: AgentSettings,

    #[serde(default)]
    pub search: SearchConfig,
}

/// Agent identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Name announced to the game manager.
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self { name: default_name() }
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl AgentConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text).map_err(|err| match err {
            OthelloError::Config(message) => OthelloError::Config(format!("{}: {message}", path.display())),
            other => other,
        })
    }

    /// Parse and validate TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: AgentConfig = toml::from_str(text).map_err(|err| OthelloError::Config(err.to_string()))?;
        config.search.validate()?;
        Ok(config)
    }

    /// The default configuration as TOML.
    pub fn default_toml() -> Result<String> {
        toml::to_string_pretty(&AgentConfig::default()).map_err(|err| OthelloError::Config(err.to_string()))
    }
}
