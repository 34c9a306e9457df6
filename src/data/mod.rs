//! # Reference Data Module
//!
//! Static monster, map and item tables that every quest is assembled from.
//!
//! The tables are plain immutable records. They are read once at startup by
//! [`ReferenceData::load`] and only borrowed afterwards.

pub mod loader;

pub use loader::*;

use serde::{Deserialize, Serialize};

/// A huntable monster.
///
/// # Examples
///
/// ```
/// use questsmith::Monster;
///
/// let monster = Monster::new(1, "Rathalos", "Flying Wyvern", 6);
/// assert_eq!(monster.threat_level, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: u32,
    pub name: String,
    /// Monster classification, stored as `type` in the data files
    #[serde(rename = "type")]
    pub kind: String,
    /// Difficulty weight used when a quest has no explicit star rating
    pub threat_level: u32,
}

impl Monster {
    pub fn new(id: u32, name: &str, kind: &str, threat_level: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            threat_level,
        }
    }
}

/// A hunting ground, divided into numbered areas starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    pub id: u32,
    pub name: String,
    pub areas: u32,
}

impl Map {
    pub fn new(id: u32, name: &str, areas: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            areas,
        }
    }

    /// Case-insensitive name comparison used when a map is requested by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use questsmith::Map;
    ///
    /// let map = Map::new(1, "Ancient Forest", 16);
    /// assert!(map.matches_name("ancient FOREST"));
    /// assert!(!map.matches_name("Wildspire Waste"));
    /// ```
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// A reward item with its rarity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub rarity: u32,
}

impl Item {
    pub fn new(id: u32, name: &str, rarity: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            rarity,
        }
    }
}
