//! # Quest Composition
//!
//! Assembles a full [`Quest`] from the reference tables.
//!
//! The composer:
//! 1. Resolves the map by name, or picks one at random
//! 2. Samples the target monsters and places them on the map
//! 3. Derives the star rating from monster threat when none was requested
//! 4. Fills in a default title and description
//! 5. Builds the reward table and currency rewards

use crate::config::TIME_LIMIT_MINUTES;
use crate::utils::{clamp_difficulty, drop_probability, max_reward_rarity};
use crate::{
    EncounterConfig, EncounterGenerator, Generator, Map, Quest, QuestConditions, QuestError,
    QuestInfo, QuestMetadata, QuestParams, QuestResult, ReferenceData, RewardConfig,
    RewardGenerator,
};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates complete quests from a set of reference tables.
///
/// # Examples
///
/// ```
/// use questsmith::{generation::utils::create_rng, Generator, Item, Map, Monster};
/// use questsmith::{QuestGenerator, QuestParams, ReferenceData};
///
/// let data = ReferenceData::new(
///     vec![Monster::new(1, "Rathalos", "Flying Wyvern", 6)],
///     vec![Map::new(1, "Ancient Forest", 16)],
///     vec![Item::new(1, "Potion", 1)],
/// )
/// .unwrap();
///
/// let generator = QuestGenerator::new(&data);
/// let mut rng = create_rng(Some(42));
/// let quest = generator.generate(&QuestParams::new(), &mut rng).unwrap();
///
/// assert_eq!(quest.quest_info.title, "Hunt: Rathalos");
/// assert_eq!(quest.quest_info.difficulty, 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuestGenerator<'a> {
    data: &'a ReferenceData,
}

impl<'a> QuestGenerator<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self { data }
    }

    /// Resolves the quest map.
    ///
    /// A name that matches no map falls back to a random one instead of
    /// failing; the fallback is logged as a warning.
    pub fn resolve_map(&self, requested: Option<&str>, rng: &mut StdRng) -> QuestResult<&'a Map> {
        if let Some(name) = requested {
            if let Some(map) = self.data.find_map(name) {
                return Ok(map);
            }
            warn!("No map named '{}', choosing a random map", name);
        }

        self.data
            .maps()
            .choose(rng)
            .ok_or(QuestError::EmptyTable("maps"))
    }
}

/// Title used when none is supplied.
pub fn default_title(monster_names: &[&str]) -> String {
    match monster_names {
        [single] => format!("Hunt: {}", single),
        _ => "Multi-Monster Hunt".to_string(),
    }
}

/// Description used when none is supplied.
pub fn default_description(map_name: &str, monster_names: &[&str]) -> String {
    format!(
        "Hunt the following monsters in {}: {}",
        map_name,
        monster_names.join(", ")
    )
}

impl Generator<Quest> for QuestGenerator<'_> {
    type Config = QuestParams;

    fn generate(&self, params: &QuestParams, rng: &mut StdRng) -> QuestResult<Quest> {
        let map = self.resolve_map(params.requested_map(), rng)?;

        let encounter = EncounterGenerator::new(self.data.monsters()).generate(
            &EncounterConfig {
                monster_count: params.monster_count,
                map_areas: map.areas,
            },
            rng,
        )?;

        let difficulty = clamp_difficulty(params.difficulty.unwrap_or(encounter.peak_threat));

        let names: Vec<&str> = encounter.placements.iter().map(|p| p.name.as_str()).collect();
        let title = params
            .requested_title()
            .map(str::to_string)
            .unwrap_or_else(|| default_title(&names));
        let description = params
            .requested_description()
            .map(str::to_string)
            .unwrap_or_else(|| default_description(&map.name, &names));

        let rewards = RewardGenerator::new(self.data.items()).generate(
            &RewardConfig {
                difficulty,
                reward_count: params.reward_count,
            },
            rng,
        )?;

        let zenny_reward = difficulty * 1000 + rng.gen_range(500..=2000);
        let hrp_reward = difficulty * 100 + rng.gen_range(50..=200);

        debug!(
            "{}: composed '{}' on {} at {} stars with {} reward(s)",
            self.generator_type(),
            title,
            map.name,
            difficulty,
            rewards.len()
        );

        let target_count = encounter.placements.len() as u32;
        let quest = Quest {
            quest_info: QuestInfo {
                title,
                description,
                difficulty,
                map: map.name.clone(),
                map_id: map.id,
                time_limit: TIME_LIMIT_MINUTES,
                zenny_reward,
                hrp_reward,
            },
            monsters: encounter.placements,
            rewards,
            conditions: QuestConditions::hunt(target_count),
            metadata: QuestMetadata::now(),
        };

        self.validate(&quest, params)?;
        Ok(quest)
    }

    fn validate(&self, quest: &Quest, params: &QuestParams) -> QuestResult<()> {
        let info = &quest.quest_info;

        if info.difficulty != clamp_difficulty(info.difficulty) {
            return Err(QuestError::GenerationFailed(format!(
                "difficulty {} out of range",
                info.difficulty
            )));
        }
        if let Some(requested) = params.difficulty {
            if info.difficulty != clamp_difficulty(requested) {
                return Err(QuestError::GenerationFailed(format!(
                    "requested difficulty {} but generated {}",
                    requested, info.difficulty
                )));
            }
        }

        let expected_monsters =
            EncounterGenerator::new(self.data.monsters()).effective_count(params.monster_count);
        if quest.monsters.len() != expected_monsters
            || quest.conditions.target_count as usize != quest.monsters.len()
        {
            return Err(QuestError::GenerationFailed(format!(
                "expected {} target monsters, got {}",
                expected_monsters,
                quest.monsters.len()
            )));
        }

        let max_rarity = max_reward_rarity(info.difficulty);
        let probability = drop_probability(info.difficulty);
        if quest
            .rewards
            .iter()
            .any(|r| r.rarity > max_rarity || r.probability > probability)
        {
            return Err(QuestError::GenerationFailed(
                "reward table breaks the rarity or drop rate limits".to_string(),
            ));
        }

        if let Some(requested) = params.requested_map() {
            if let Some(map) = self.data.find_map(requested) {
                if map.id != info.map_id {
                    return Err(QuestError::GenerationFailed(format!(
                        "requested map '{}' but generated '{}'",
                        map.name, info.map
                    )));
                }
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "QuestGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils::create_rng;
    use crate::{Item, Monster};

    fn reference_data() -> ReferenceData {
        ReferenceData::new(
            vec![
                Monster::new(1, "Great Jagras", "Fanged Wyvern", 1),
                Monster::new(2, "Anjanath", "Brute Wyvern", 4),
                Monster::new(3, "Rathalos", "Flying Wyvern", 6),
                Monster::new(4, "Nergigante", "Elder Dragon", 8),
            ],
            vec![
                Map::new(1, "Ancient Forest", 16),
                Map::new(2, "Wildspire Waste", 15),
                Map::new(3, "Coral Highlands", 15),
            ],
            (1..=8)
                .map(|rarity| Item::new(rarity, &format!("Tier {} Part", rarity), rarity))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_named_map_example() {
        let data = reference_data();
        let generator = QuestGenerator::new(&data);
        let mut rng = create_rng(Some(2024));
        let params = QuestParams {
            monster_count: 1,
            difficulty: Some(5),
            map_name: Some("Ancient Forest".to_string()),
            ..QuestParams::new()
        };

        let quest = generator.generate(&params, &mut rng).unwrap();

        assert_eq!(quest.quest_info.map, "Ancient Forest");
        assert_eq!(quest.quest_info.difficulty, 5);
        assert_eq!(quest.monsters.len(), 1);
        assert!((1..=16).contains(&quest.monsters[0].initial_area));
        assert_eq!(generator.generator_type(), "QuestGenerator");
    }

    #[test]
    fn test_map_match_ignores_case() {
        let data = reference_data();
        let generator = QuestGenerator::new(&data);
        let mut rng = create_rng(Some(1));

        let map = generator.resolve_map(Some("wildspire WASTE"), &mut rng).unwrap();
        assert_eq!(map.id, 2);
    }

    #[test]
    fn test_unknown_map_falls_back_to_loaded_map() {
        let data = reference_data();
        let generator = QuestGenerator::new(&data);
        let mut rng = create_rng(Some(11));

        for _ in 0..20 {
            let map = generator.resolve_map(Some("Rotten Vale"), &mut rng).unwrap();
            assert!(data.maps().contains(map));
        }
    }

    #[test]
    fn test_derived_difficulty_is_peak_threat() {
        let data = reference_data();
        let generator = QuestGenerator::new(&data);
        let mut rng = create_rng(Some(77));
        let params = QuestParams {
            monster_count: 2,
            ..QuestParams::new()
        };

        for _ in 0..20 {
            let quest = generator.generate(&params, &mut rng).unwrap();
            let peak = quest
                .monsters
                .iter()
                .filter_map(|p| data.monsters().iter().find(|m| m.id == p.monster_id))
                .map(|m| m.threat_level)
                .max()
                .unwrap();
            assert_eq!(quest.quest_info.difficulty, peak);
        }
    }

    #[test]
    fn test_requested_difficulty_is_clamped() {
        let data = reference_data();
        let generator = QuestGenerator::new(&data);
        let mut rng = create_rng(Some(5));
        let params = QuestParams {
            difficulty: Some(42),
            ..QuestParams::new()
        };

        let quest = generator.generate(&params, &mut rng).unwrap();
        assert_eq!(quest.quest_info.difficulty, 9);
    }

    #[test]
    fn test_default_title_and_description() {
        let data = reference_data();
        let generator = QuestGenerator::new(&data);
        let mut rng = create_rng(Some(9));

        let single = generator.generate(&QuestParams::new(), &mut rng).unwrap();
        let name = &single.monsters[0].name;
        assert_eq!(single.quest_info.title, format!("Hunt: {}", name));
        assert_eq!(
            single.quest_info.description,
            format!("Hunt the following monsters in {}: {}", single.quest_info.map, name)
        );

        let params = QuestParams {
            monster_count: 3,
            ..QuestParams::new()
        };
        let multi = generator.generate(&params, &mut rng).unwrap();
        assert_eq!(multi.quest_info.title, "Multi-Monster Hunt");
        assert_eq!(
            multi.quest_info.description,
            format!(
                "Hunt the following monsters in {}: {}",
                multi.quest_info.map,
                multi.monster_names().join(", ")
            )
        );
    }

    #[test]
    fn test_supplied_text_is_kept() {
        let data = reference_data();
        let generator = QuestGenerator::new(&data);
        let mut rng = create_rng(Some(9));
        let params = QuestParams {
            title: Some("Hunt: Rathalos!".to_string()),
            description: Some("Drive it off the hill.".to_string()),
            ..QuestParams::new()
        };

        let quest = generator.generate(&params, &mut rng).unwrap();
        assert_eq!(quest.quest_info.title, "Hunt: Rathalos!");
        assert_eq!(quest.quest_info.description, "Drive it off the hill.");
    }

    #[test]
    fn test_fixed_fields_and_currency() {
        let data = reference_data();
        let generator = QuestGenerator::new(&data);
        let mut rng = create_rng(Some(31));
        let params = QuestParams {
            monster_count: 2,
            difficulty: Some(3),
            ..QuestParams::new()
        };

        let quest = generator.generate(&params, &mut rng).unwrap();
        let info = &quest.quest_info;

        assert_eq!(info.time_limit, 50);
        assert!((3500..=5000).contains(&info.zenny_reward));
        assert!((350..=500).contains(&info.hrp_reward));
        assert_eq!(quest.conditions.target_count, 2);
        assert_eq!(quest.conditions.objective_type, "hunt");
        assert_eq!(quest.metadata.generator_version, crate::VERSION);
    }

    #[test]
    fn test_same_seed_same_quest() {
        let data = reference_data();
        let generator = QuestGenerator::new(&data);
        let params = QuestParams {
            monster_count: 3,
            reward_count: 6,
            ..QuestParams::new()
        };

        let a = generator.generate(&params, &mut create_rng(Some(404))).unwrap();
        let b = generator.generate(&params, &mut create_rng(Some(404))).unwrap();

        assert_eq!(a.quest_info, b.quest_info);
        assert_eq!(a.monsters, b.monsters);
        assert_eq!(a.rewards, b.rewards);
    }
}
