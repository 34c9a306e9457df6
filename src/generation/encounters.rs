//! # Encounter Generation
//!
//! Picks the target monsters for a quest and places each one in a random
//! starting area of the quest map.

use crate::utils::clamp_monster_count;
use crate::{Generator, Monster, MonsterPlacement, QuestError, QuestResult};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Configuration for one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterConfig {
    /// Requested number of monsters, clamped to 1..=3
    pub monster_count: u32,
    /// Number of areas on the chosen map
    pub map_areas: u32,
}

/// The monsters of a quest together with their combined threat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    pub placements: Vec<MonsterPlacement>,
    /// Highest threat level among the selected monsters
    pub peak_threat: u32,
}

/// Samples distinct monsters from the reference table.
#[derive(Debug, Clone, Copy)]
pub struct EncounterGenerator<'a> {
    monsters: &'a [Monster],
}

impl<'a> EncounterGenerator<'a> {
    pub fn new(monsters: &'a [Monster]) -> Self {
        Self { monsters }
    }

    /// Number of monsters an encounter will hold for a requested count.
    ///
    /// The clamped count is further limited by the size of the table.
    pub fn effective_count(&self, requested: u32) -> usize {
        (clamp_monster_count(requested) as usize).min(self.monsters.len())
    }
}

impl Generator<Encounter> for EncounterGenerator<'_> {
    type Config = EncounterConfig;

    fn generate(&self, config: &EncounterConfig, rng: &mut StdRng) -> QuestResult<Encounter> {
        if config.map_areas == 0 {
            return Err(QuestError::InvalidReferenceData(
                "cannot place monsters on a map without areas".to_string(),
            ));
        }

        let count = self.effective_count(config.monster_count);
        let mut selected: Vec<&Monster> = self.monsters.choose_multiple(rng, count).collect();
        // choose_multiple does not randomize order
        selected.shuffle(rng);

        let peak_threat = selected
            .iter()
            .map(|m| m.threat_level)
            .max()
            .ok_or_else(|| QuestError::EmptyTable("monsters"))?;

        let placements = selected
            .into_iter()
            .map(|monster| MonsterPlacement {
                monster_id: monster.id,
                name: monster.name.clone(),
                kind: monster.kind.clone(),
                is_target: true,
                initial_area: rng.gen_range(1..=config.map_areas),
            })
            .collect::<Vec<_>>();

        debug!(
            "{}: selected {} monster(s) with peak threat {}",
            self.generator_type(),
            placements.len(),
            peak_threat
        );

        let encounter = Encounter {
            placements,
            peak_threat,
        };
        self.validate(&encounter, config)?;
        Ok(encounter)
    }

    fn validate(&self, content: &Encounter, config: &EncounterConfig) -> QuestResult<()> {
        let expected = self.effective_count(config.monster_count);
        if content.placements.len() != expected {
            return Err(QuestError::GenerationFailed(format!(
                "expected {} monsters, got {}",
                expected,
                content.placements.len()
            )));
        }

        if let Some(placement) = content
            .placements
            .iter()
            .find(|p| p.initial_area < 1 || p.initial_area > config.map_areas)
        {
            return Err(QuestError::GenerationFailed(format!(
                "{} placed in area {} of a {}-area map",
                placement.name, placement.initial_area, config.map_areas
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "EncounterGenerator"
    }
}
