/// Configuration for the rank allocator
use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// Longest rank a healthy list should carry before a corrective re-rank
const DEFAULT_MAX_RANK_LENGTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Ranks longer than this mark the list as due for rebalancing.
    /// Allocation never fails because of it; it only logs and reports.
    #[serde(default = "default_max_rank_length")]
    pub max_rank_length: usize,
}

fn default_max_rank_length() -> usize {
    DEFAULT_MAX_RANK_LENGTH
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_rank_length: DEFAULT_MAX_RANK_LENGTH,
        }
    }
}

impl RankConfig {
    /// Parse from JSON, filling missing fields with defaults, then validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_rank_length == 0 {
            return Err(RankError::InvalidConfig(
                "max_rank_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
