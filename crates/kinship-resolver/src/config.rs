//! Configuration for relationship resolution
//!
//! Loaded from the `[resolver]` table of a TOML file or built in code.

use crate::error::{ResolverError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the [`KinshipResolver`](crate::KinshipResolver)
///
/// # Examples
///
/// ```
/// use kinship_resolver::ResolverConfig;
///
/// // Default: in-laws resolved, unbounded ancestry, parallel sweeps
/// let config = ResolverConfig::default();
/// assert!(config.resolve_in_laws);
/// assert!(config.max_generations.is_none());
///
/// // Blood relationships only
/// let config = ResolverConfig::blood_only();
/// assert!(!config.resolve_in_laws);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Try one spousal hop when no blood relationship exists
    /// Default: true
    #[serde(default = "default_true")]
    pub resolve_in_laws: bool,

    /// Stop ancestor searches after this many generations
    /// Default: unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_generations: Option<u32>,

    /// Fan all-pairs sweeps out across the rayon thread pool
    /// Default: true
    #[serde(default = "default_true")]
    pub parallel_sweep: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolve_in_laws: true,
            max_generations: None,
            parallel_sweep: true,
        }
    }
}

impl ResolverConfig {
    /// Blood relationships only, no in-law hop
    pub fn blood_only() -> Self {
        Self {
            resolve_in_laws: false,
            ..Self::default()
        }
    }

    /// Sweeps run on the calling thread
    pub fn sequential() -> Self {
        Self {
            parallel_sweep: false,
            ..Self::default()
        }
    }

    /// Parse from a TOML string and validate
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ResolverConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file and validate
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject settings that would make every query meaningless
    pub fn validate(&self) -> Result<()> {
        if self.max_generations == Some(0) {
            return Err(ResolverError::Config(
                "max_generations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
