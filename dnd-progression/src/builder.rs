//! Character builder and ability score generation.
//!
//! Supports the three PHB methods: standard array, 27-point buy, and
//! 4d6-drop-lowest rolls.

use crate::abilities::{Ability, AbilityScores};
use crate::character::Character;
use crate::config::RulesConfig;
use crate::error::EngineError;
use crate::reference::{BackgroundId, ClassId, RaceId};
use crate::rulebook::Rulebook;

/// Method for determining ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbilityMethod {
    /// Standard array: 15, 14, 13, 12, 10, 8
    #[default]
    StandardArray,
    /// Point buy: 27 points, scores 8-15
    PointBuy,
    /// Roll 4d6, drop lowest, 6 times
    Rolled,
}

impl AbilityMethod {
    pub fn name(&self) -> &'static str {
        match self {
            AbilityMethod::StandardArray => "Standard Array",
            AbilityMethod::PointBuy => "Point Buy",
            AbilityMethod::Rolled => "Rolled",
        }
    }
}

/// Standard array values.
pub const STANDARD_ARRAY: [u8; 6] = [15, 14, 13, 12, 10, 8];

/// Default points available for point buy.
pub const POINT_BUY_TOTAL: u32 = 27;

/// Point buy cost of a single score, or `None` outside 8-15.
pub fn point_buy_cost(score: u8) -> Option<u32> {
    match score {
        8 => Some(0),
        9 => Some(1),
        10 => Some(2),
        11 => Some(3),
        12 => Some(4),
        13 => Some(5),
        14 => Some(7),
        15 => Some(9),
        _ => None,
    }
}

/// Check a point buy: every score 8-15 and the total within `budget`.
pub fn validate_point_buy(scores: &AbilityScores, budget: u32) -> Result<(), EngineError> {
    let mut total = 0;
    for ability in Ability::all() {
        let score = scores.get(ability);
        let cost = point_buy_cost(score).ok_or(EngineError::PointBuyScore { ability, score })?;
        total += cost;
    }

    if total > budget {
        return Err(EngineError::PointBuyBudget {
            cost: total,
            budget,
        });
    }
    Ok(())
}

/// Check every base score is inside the configured range.
pub fn validate_base_scores(
    scores: &AbilityScores,
    config: &RulesConfig,
) -> Result<(), EngineError> {
    for ability in Ability::all() {
        let score = scores.get(ability);
        if !(config.min_base_score..=config.max_base_score).contains(&score) {
            return Err(EngineError::ScoreOutOfRange {
                ability,
                score,
                min: config.min_base_score,
                max: config.max_base_score,
            });
        }
    }
    Ok(())
}

fn is_standard_array(scores: &AbilityScores) -> bool {
    let mut values = Ability::all().map(|a| scores.get(a));
    values.sort_unstable_by(|a, b| b.cmp(a));
    values == STANDARD_ARRAY
}

/// Roll 4d6, drop lowest, for ability score generation.
pub fn roll_4d6_drop_lowest() -> u8 {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let mut rolls: [u8; 4] = std::array::from_fn(|_| rng.gen_range(1..=6));
    rolls.sort_unstable();
    rolls[1..].iter().sum()
}

/// Roll a full set of ability scores, highest first.
pub fn roll_ability_scores() -> [u8; 6] {
    let mut scores: [u8; 6] = std::array::from_fn(|_| roll_4d6_drop_lowest());
    scores.sort_unstable_by(|a, b| b.cmp(a));
    scores
}

/// Builder for creating characters.
#[derive(Debug, Clone, Default)]
pub struct CharacterBuilder {
    name: Option<String>,
    owner: Option<String>,
    race: Option<RaceId>,
    class: Option<ClassId>,
    background: Option<BackgroundId>,
    ability_scores: Option<AbilityScores>,
    ability_method: AbilityMethod,
}

impl CharacterBuilder {
    /// Create a new character builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the opaque owner reference.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn race(mut self, race: impl Into<RaceId>) -> Self {
        self.race = Some(race.into());
        self
    }

    pub fn class(mut self, class: impl Into<ClassId>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn background(mut self, background: impl Into<BackgroundId>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Set ability scores from standard array assignment.
    ///
    /// `assignment` maps each standard array value (15, 14, 13, 12, 10, 8) to an ability.
    pub fn standard_array(mut self, assignment: [(u8, Ability); 6]) -> Self {
        let mut scores = AbilityScores::default();
        for (value, ability) in assignment {
            scores.set(ability, value);
        }
        self.ability_scores = Some(scores);
        self.ability_method = AbilityMethod::StandardArray;
        self
    }

    /// Set ability scores from point buy values.
    pub fn point_buy(mut self, scores: AbilityScores) -> Self {
        self.ability_scores = Some(scores);
        self.ability_method = AbilityMethod::PointBuy;
        self
    }

    /// Set ability scores from rolled values.
    pub fn rolled(mut self, scores: AbilityScores) -> Self {
        self.ability_scores = Some(scores);
        self.ability_method = AbilityMethod::Rolled;
        self
    }

    /// Roll fresh scores, assigned in STR, DEX, CON, INT, WIS, CHA order.
    pub fn roll(self) -> Self {
        let [str, dex, con, int, wis, cha] = roll_ability_scores();
        self.rolled(AbilityScores::new(str, dex, con, int, wis, cha))
    }

    pub fn ability_method(&self) -> AbilityMethod {
        self.ability_method
    }

    /// Build the character against a rulebook.
    pub fn build(self, rules: &Rulebook) -> Result<Character, EngineError> {
        let name = self.name.ok_or(EngineError::MissingName)?;
        let race = self.race.ok_or(EngineError::MissingRace)?;
        let class = self.class.ok_or(EngineError::MissingClass)?;
        let scores = self.ability_scores.ok_or(EngineError::MissingAbilityScores)?;

        match self.ability_method {
            AbilityMethod::StandardArray if !is_standard_array(&scores) => {
                return Err(EngineError::NotStandardArray(
                    Ability::all().map(|a| scores.get(a)),
                ));
            }
            AbilityMethod::PointBuy => {
                validate_point_buy(&scores, rules.config().point_buy_budget)?;
            }
            _ => {}
        }

        if let Some(background) = &self.background {
            if rules.background(background).is_none() {
                return Err(EngineError::UnknownBackground(background.clone()));
            }
        }

        let mut character = Character::create(name, race, class, scores, rules)?;
        character.owner = self.owner;
        character.background = self.background;
        Ok(character)
    }
}
