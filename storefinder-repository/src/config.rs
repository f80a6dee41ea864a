//! Configuration types for the IndexProxy.

use std::fmt;
use std::str::FromStr;

use crate::errors::SearchError;

/// How `IndexProxy::delete_index` treats a failed delete call once the
/// index has been found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteMode {
    /// Log the failure and report success to the caller.
    #[default]
    BestEffort,
    /// Return the failure as `SearchError::EngineError`.
    Strict,
}

impl FromStr for DeleteMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best_effort" | "best-effort" => Ok(Self::BestEffort),
            "strict" => Ok(Self::Strict),
            other => Err(SearchError::validation(format!(
                "Unknown delete mode: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for DeleteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteMode::BestEffort => write!(f, "best_effort"),
            DeleteMode::Strict => write!(f, "strict"),
        }
    }
}

/// Configuration for the IndexProxy.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    pub delete_mode: DeleteMode,
}

impl ProxyConfig {
    /// Create a config that propagates delete failures.
    pub fn strict() -> Self {
        Self {
            delete_mode: DeleteMode::Strict,
        }
    }

    /// Create a config with the given delete mode.
    pub fn with_delete_mode(delete_mode: DeleteMode) -> Self {
        Self { delete_mode }
    }
}
