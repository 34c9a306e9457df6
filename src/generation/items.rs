//! # Reward Generation
//!
//! Builds a quest's reward table from items whose rarity suits the quest
//! difficulty. Harder quests unlock rarer items and better drop rates.

use crate::config::MAX_STACK;
use crate::utils::{clamp_reward_count, drop_probability, is_stackable, max_reward_rarity};
use crate::{Generator, Item, QuestError, QuestResult, RewardEntry};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Configuration for one reward table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardConfig {
    /// Quest star rating
    pub difficulty: u32,
    /// Requested number of entries, clamped to 1..=10
    pub reward_count: u32,
}

/// Samples reward entries from the item table.
#[derive(Debug, Clone, Copy)]
pub struct RewardGenerator<'a> {
    items: &'a [Item],
}

impl<'a> RewardGenerator<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        Self { items }
    }

    /// Items eligible as rewards at `difficulty`.
    pub fn eligible_items(&self, difficulty: u32) -> Vec<&'a Item> {
        let max_rarity = max_reward_rarity(difficulty);
        self.items
            .iter()
            .filter(|item| item.rarity <= max_rarity)
            .collect()
    }
}

impl Generator<Vec<RewardEntry>> for RewardGenerator<'_> {
    type Config = RewardConfig;

    fn generate(&self, config: &RewardConfig, rng: &mut StdRng) -> QuestResult<Vec<RewardEntry>> {
        let eligible = self.eligible_items(config.difficulty);
        let count = clamp_reward_count(config.reward_count) as usize;
        let probability = drop_probability(config.difficulty);

        let picked: Vec<&Item> = eligible.choose_multiple(rng, count).copied().collect();
        let rewards = picked
            .into_iter()
            .map(|item| RewardEntry {
                item_id: item.id,
                item_name: item.name.clone(),
                quantity: if is_stackable(item.rarity) {
                    rng.gen_range(1..=MAX_STACK)
                } else {
                    1
                },
                probability,
                rarity: item.rarity,
            })
            .collect::<Vec<_>>();

        debug!(
            "{}: picked {} reward(s) from {} eligible items at difficulty {}",
            self.generator_type(),
            rewards.len(),
            eligible.len(),
            config.difficulty
        );

        self.validate(&rewards, config)?;
        Ok(rewards)
    }

    fn validate(&self, content: &Vec<RewardEntry>, config: &RewardConfig) -> QuestResult<()> {
        if content.len() > clamp_reward_count(config.reward_count) as usize {
            return Err(QuestError::GenerationFailed(format!(
                "{} rewards exceed the requested {}",
                content.len(),
                config.reward_count
            )));
        }

        let max_rarity = max_reward_rarity(config.difficulty);
        if let Some(reward) = content.iter().find(|r| r.rarity > max_rarity) {
            return Err(QuestError::GenerationFailed(format!(
                "reward {} has rarity {} above the cap of {}",
                reward.item_name, reward.rarity, max_rarity
            )));
        }

        if let Some(reward) = content
            .iter()
            .find(|r| r.probability > crate::config::MAX_DROP_PROBABILITY)
        {
            return Err(QuestError::GenerationFailed(format!(
                "reward {} has drop probability {}",
                reward.item_name, reward.probability
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "RewardGenerator"
    }
}
