//! Campaign rule settings.

use crate::builder::POINT_BUY_TOTAL;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Highest level a character can reach under any settings.
pub const MAX_LEVEL: u8 = 20;

/// Highest ability score the rules can describe.
pub const ABILITY_SCORE_LIMIT: u8 = 30;

/// Tunable rules for a campaign.
///
/// The defaults are the standard 5e values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Cap applied to base score plus racial bonus.
    pub ability_score_cap: u8,

    /// Lowest base score accepted at creation.
    pub min_base_score: u8,

    /// Highest base score accepted at creation.
    pub max_base_score: u8,

    /// Points available for point buy.
    pub point_buy_budget: u32,

    /// Require every new character to be a legal point buy.
    pub enforce_point_buy: bool,

    /// Campaign level cap, never above 20.
    pub max_level: u8,
}

impl RulesConfig {
    /// Create a config with the standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ability score cap.
    pub fn with_ability_score_cap(mut self, cap: u8) -> Self {
        self.ability_score_cap = cap;
        self
    }

    /// Set the accepted base score range.
    pub fn with_base_score_range(mut self, min: u8, max: u8) -> Self {
        self.min_base_score = min;
        self.max_base_score = max;
        self
    }

    /// Set the point buy budget.
    pub fn with_point_buy_budget(mut self, budget: u32) -> Self {
        self.point_buy_budget = budget;
        self
    }

    /// Require point buy for all new characters.
    pub fn with_enforced_point_buy(mut self, enforce: bool) -> Self {
        self.enforce_point_buy = enforce;
        self
    }

    /// Set the campaign level cap. Values above 20 are clamped.
    pub fn with_max_level(mut self, level: u8) -> Self {
        self.max_level = level.clamp(1, MAX_LEVEL);
        self
    }

    /// The level cap actually in force.
    pub fn level_cap(&self) -> u8 {
        self.max_level.clamp(1, MAX_LEVEL)
    }

    /// Check the score limits fit together.
    ///
    /// The cap must be in 1-30 and the base range must be non-empty and
    /// sit at or below the cap.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |message: String| Err(EngineError::InvalidReferenceData(message));

        if self.ability_score_cap == 0 || self.ability_score_cap > ABILITY_SCORE_LIMIT {
            return invalid(format!(
                "ability score cap {} is outside 1-{}",
                self.ability_score_cap, ABILITY_SCORE_LIMIT
            ));
        }
        if self.min_base_score == 0 || self.min_base_score > self.max_base_score {
            return invalid(format!(
                "base score range {}-{} is empty",
                self.min_base_score, self.max_base_score
            ));
        }
        if self.max_base_score > self.ability_score_cap {
            return invalid(format!(
                "max base score {} is above the ability score cap {}",
                self.max_base_score, self.ability_score_cap
            ));
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            ability_score_cap: 20,
            min_base_score: 3,
            max_base_score: 18,
            point_buy_budget: POINT_BUY_TOTAL,
            enforce_point_buy: false,
            max_level: MAX_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.ability_score_cap, 20);
        assert_eq!(config.point_buy_budget, 27);
        assert_eq!(config.level_cap(), 20);
        assert!(!config.enforce_point_buy);
    }

    #[test]
    fn test_max_level_clamped() {
        let config = RulesConfig::new().with_max_level(30);
        assert_eq!(config.max_level, 20);

        let config = RulesConfig::new().with_max_level(10);
        assert_eq!(config.level_cap(), 10);
    }

    #[test]
    fn test_validate_score_limits() {
        assert!(RulesConfig::default().validate().is_ok());
        assert!(RulesConfig::new()
            .with_ability_score_cap(30)
            .with_base_score_range(3, 30)
            .validate()
            .is_ok());

        let too_high = RulesConfig::new()
            .with_ability_score_cap(255)
            .with_base_score_range(3, 255);
        assert!(matches!(
            too_high.validate(),
            Err(EngineError::InvalidReferenceData(_))
        ));

        let above_cap = RulesConfig::new().with_base_score_range(3, 22);
        assert!(above_cap.validate().is_err());

        let empty = RulesConfig::new().with_base_score_range(15, 8);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RulesConfig = serde_json::from_str(r#"{"max_level": 12}"#).unwrap();
        assert_eq!(config.max_level, 12);
        assert_eq!(config.ability_score_cap, 20);
        assert_eq!(config.min_base_score, 3);
    }
}
