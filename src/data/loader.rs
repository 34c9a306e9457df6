//! # Reference Data Loading
//!
//! Reads `monsters.json`, `maps.json` and `items.json` from a data directory.
//! Each file is a top-level object holding one named array of records.

use crate::{Item, Map, Monster, QuestError, QuestResult};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File holding the monster table.
pub const MONSTERS_FILE: &str = "monsters.json";
/// File holding the map table.
pub const MAPS_FILE: &str = "maps.json";
/// File holding the item table.
pub const ITEMS_FILE: &str = "items.json";

#[derive(Deserialize)]
struct MonsterTable {
    monsters: Vec<Monster>,
}

#[derive(Deserialize)]
struct MapTable {
    maps: Vec<Map>,
}

#[derive(Deserialize)]
struct ItemTable {
    items: Vec<Item>,
}

/// The three reference tables, loaded once and shared by every generation.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    monsters: Vec<Monster>,
    maps: Vec<Map>,
    items: Vec<Item>,
}

impl ReferenceData {
    /// Builds reference data from in-memory tables.
    ///
    /// Monsters and maps must be non-empty and every map needs at least one
    /// area. An empty item table is allowed and produces quests without rewards.
    ///
    /// # Examples
    ///
    /// ```
    /// use questsmith::{Item, Map, Monster, ReferenceData};
    ///
    /// let data = ReferenceData::new(
    ///     vec![Monster::new(1, "Rathalos", "Flying Wyvern", 6)],
    ///     vec![Map::new(1, "Ancient Forest", 16)],
    ///     vec![Item::new(1, "Potion", 1)],
    /// )
    /// .unwrap();
    /// assert_eq!(data.monsters().len(), 1);
    ///
    /// assert!(ReferenceData::new(vec![], vec![], vec![]).is_err());
    /// ```
    pub fn new(monsters: Vec<Monster>, maps: Vec<Map>, items: Vec<Item>) -> QuestResult<Self> {
        if monsters.is_empty() {
            return Err(QuestError::EmptyTable("monsters"));
        }
        if maps.is_empty() {
            return Err(QuestError::EmptyTable("maps"));
        }
        if let Some(map) = maps.iter().find(|m| m.areas == 0) {
            return Err(QuestError::InvalidReferenceData(format!(
                "map '{}' has no areas",
                map.name
            )));
        }

        Ok(Self {
            monsters,
            maps,
            items,
        })
    }

    /// Loads all three tables from `data_dir`.
    ///
    /// A missing or unreadable file is reported as
    /// [`QuestError::DataFileMissing`] naming the offending path.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> QuestResult<Self> {
        let data_dir = data_dir.as_ref();
        info!("Loading reference data from {}", data_dir.display());

        let monsters = read_table::<MonsterTable>(&data_dir.join(MONSTERS_FILE))?.monsters;
        let maps = read_table::<MapTable>(&data_dir.join(MAPS_FILE))?.maps;
        let items = read_table::<ItemTable>(&data_dir.join(ITEMS_FILE))?.items;

        info!(
            "Loaded {} monsters, {} maps, {} items",
            monsters.len(),
            maps.len(),
            items.len()
        );

        Self::new(monsters, maps, items)
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn maps(&self) -> &[Map] {
        &self.maps
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Finds a map by case-insensitive name.
    pub fn find_map(&self, name: &str) -> Option<&Map> {
        self.maps.iter().find(|m| m.matches_name(name))
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> QuestResult<T> {
    debug!("Reading {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| QuestError::DataFileMissing {
        path: PathBuf::from(path),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| QuestError::DataFileInvalid {
        path: PathBuf::from(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_tables(dir: &Path) {
        fs::write(
            dir.join(MONSTERS_FILE),
            r#"{"monsters": [{"id": 1, "name": "Rathalos", "type": "Flying Wyvern", "threat_level": 6}]}"#,
        )
        .unwrap();
        fs::write(
            dir.join(MAPS_FILE),
            r#"{"maps": [{"id": 1, "name": "Ancient Forest", "areas": 16}]}"#,
        )
        .unwrap();
        fs::write(
            dir.join(ITEMS_FILE),
            r#"{"items": [{"id": 1, "name": "Potion", "rarity": 1}]}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        write_tables(dir.path());

        let data = ReferenceData::load(dir.path()).unwrap();
        assert_eq!(data.monsters()[0].name, "Rathalos");
        assert_eq!(data.maps()[0].areas, 16);
        assert_eq!(data.items()[0].rarity, 1);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        write_tables(dir.path());
        fs::remove_file(dir.path().join(ITEMS_FILE)).unwrap();

        match ReferenceData::load(dir.path()) {
            Err(QuestError::DataFileMissing { path, .. }) => {
                assert!(path.ends_with(ITEMS_FILE));
            }
            other => panic!("expected DataFileMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        write_tables(dir.path());
        fs::write(dir.path().join(MAPS_FILE), r#"{"areas": []}"#).unwrap();

        let err = ReferenceData::load(dir.path()).unwrap_err();
        assert!(matches!(err, QuestError::DataFileInvalid { .. }));
        assert!(err.is_reference_data_error());
    }

    #[test]
    fn test_map_without_areas_rejected() {
        let err = ReferenceData::new(
            vec![Monster::new(1, "Rathalos", "Flying Wyvern", 6)],
            vec![Map::new(1, "Void", 0)],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, QuestError::InvalidReferenceData(_)));
    }

    #[test]
    fn test_find_map_is_case_insensitive() {
        let data = ReferenceData::new(
            vec![Monster::new(1, "Rathalos", "Flying Wyvern", 6)],
            vec![Map::new(1, "Ancient Forest", 16), Map::new(2, "Wildspire Waste", 15)],
            vec![],
        )
        .unwrap();
        assert_eq!(data.find_map("wildspire WASTE").map(|m| m.id), Some(2));
        assert!(data.find_map("Rotten Vale").is_none());
    }
}
