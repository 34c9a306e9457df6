//! # Generation Module
//!
//! Procedural quest generation: monster encounters, reward tables and the
//! composer that assembles them into a [`Quest`](crate::Quest).
//!
//! Every generator draws from a caller-supplied [`StdRng`]. Seeding that RNG
//! makes a whole generation run reproducible, which the tests rely on.

pub mod composer;
pub mod encounters;
pub mod items;

pub use composer::*;
pub use encounters::*;
pub use items::*;

use crate::config::{DEFAULT_MONSTER_COUNT, DEFAULT_REWARD_COUNT};
use crate::QuestResult;
use rand::rngs::StdRng;

/// Parameters for generating a single quest.
///
/// Every field is optional in spirit: `None` (or an empty string) asks the
/// generator to pick or synthesize a value. Counts outside their allowed
/// range are clamped during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestParams {
    /// Quest title, generated from the monsters when absent
    pub title: Option<String>,
    /// Quest description, generated from the map and monsters when absent
    pub description: Option<String>,
    /// Requested number of monsters (1 to 3)
    pub monster_count: u32,
    /// Star rating (1 to 9), derived from monster threat when absent
    pub difficulty: Option<u32>,
    /// Map to hunt on, matched case-insensitively
    pub map_name: Option<String>,
    /// Requested number of reward entries (1 to 10)
    pub reward_count: u32,
}

impl QuestParams {
    /// Creates parameters with the default monster and reward counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use questsmith::QuestParams;
    ///
    /// let params = QuestParams::new();
    /// assert_eq!(params.monster_count, 1);
    /// assert_eq!(params.reward_count, 3);
    /// assert!(params.map_name.is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            monster_count: DEFAULT_MONSTER_COUNT,
            difficulty: None,
            map_name: None,
            reward_count: DEFAULT_REWARD_COUNT,
        }
    }

    /// Title if one was supplied and is not blank.
    pub fn requested_title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Description if one was supplied and is not blank.
    pub fn requested_description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Map name if one was supplied and is not blank.
    pub fn requested_map(&self) -> Option<&str> {
        non_blank(self.map_name.as_deref())
    }
}

impl Default for QuestParams {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Trait for procedural generators.
///
/// Each generator takes its own configuration type and produces content from
/// the supplied random source, then checks the result against its rules.
pub trait Generator<T> {
    /// Configuration accepted by this generator.
    type Config;

    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &Self::Config, rng: &mut StdRng) -> QuestResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &Self::Config) -> QuestResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates the random source for a run.
    ///
    /// A seed gives a reproducible run; without one the RNG is seeded by the
    /// operating system.
    pub fn create_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
