//! # Quest Module
//!
//! The generated quest record and its on-disk persistence.
//!
//! A [`Quest`] is assembled once by the generator and never mutated afterwards;
//! it is either discarded or written once to a `.quest.json` file. Field names
//! follow the JSON layout consumed by the quest mod.

pub mod persistence;

pub use persistence::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete generated quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub quest_info: QuestInfo,
    pub monsters: Vec<MonsterPlacement>,
    pub rewards: Vec<RewardEntry>,
    pub conditions: QuestConditions,
    pub metadata: QuestMetadata,
}

/// Headline quest data shown on the quest board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestInfo {
    pub title: String,
    pub description: String,
    /// Star rating, 1 to 9
    pub difficulty: u32,
    /// Map name
    pub map: String,
    pub map_id: u32,
    /// Time limit in minutes
    pub time_limit: u32,
    pub zenny_reward: u32,
    pub hrp_reward: u32,
}

/// A monster placed on the quest map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterPlacement {
    pub monster_id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_target: bool,
    /// Area the monster starts in, between 1 and the map's area count
    pub initial_area: u32,
}

/// One entry of the reward table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub item_id: u32,
    pub item_name: String,
    pub quantity: u32,
    pub probability: f64,
    pub rarity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestConditions {
    pub objective_type: String,
    pub target_count: u32,
    pub failure_conditions: Vec<String>,
}

/// Generation provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestMetadata {
    pub generated_at: DateTime<Utc>,
    pub generator_version: String,
}

impl QuestConditions {
    /// Standard hunt conditions for the given number of targets.
    pub fn hunt(target_count: u32) -> Self {
        Self {
            objective_type: crate::config::OBJECTIVE_TYPE.to_string(),
            target_count,
            failure_conditions: crate::config::FAILURE_CONDITIONS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl QuestMetadata {
    /// Metadata stamped with the current time and crate version.
    pub fn now() -> Self {
        Self {
            generated_at: Utc::now(),
            generator_version: crate::VERSION.to_string(),
        }
    }
}

impl Quest {
    /// Names of all placed monsters, in placement order.
    pub fn monster_names(&self) -> Vec<&str> {
        self.monsters.iter().map(|m| m.name.as_str()).collect()
    }

    /// Serializes the quest to indented JSON.
    pub fn to_json(&self) -> crate::QuestResult<String> {
        serde_json::to_string_pretty(self).map_err(crate::QuestError::from)
    }

    /// Parses a quest from JSON text.
    pub fn from_json(json: &str) -> crate::QuestResult<Self> {
        serde_json::from_str(json).map_err(crate::QuestError::from)
    }
}
