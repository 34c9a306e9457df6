//! # Questsmith
//!
//! Procedural generator for custom hunting quests, written out as JSON files
//! that event-quest mods can pick up.
//!
//! ## Architecture Overview
//!
//! The crate is a small pipeline over plain value types:
//!
//! - **Reference Data**: monster, map and item tables loaded once from JSON
//! - **Generation System**: random selection of monsters, map and rewards under
//!   the difficulty and rarity rules, composed into a [`Quest`]
//! - **Persistence**: pretty-printed JSON output with slug-derived filenames
//! - **Front End**: batch generation from command-line flags or an interactive
//!   prompt session
//!
//! All randomness flows through an explicit [`rand::rngs::StdRng`], so a seeded
//! generator reproduces the same quests.

pub mod data;
pub mod generation;
pub mod input;
pub mod quest;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use data::*;
pub use generation::*;
pub use input::*;
pub use quest::*;
pub use rendering::*;
pub use utils::*;

use std::path::PathBuf;

/// Core error type for quest generation.
#[derive(thiserror::Error, Debug)]
pub enum QuestError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A reference data file could not be opened or read
    #[error("Could not read data file {}: {source}", .path.display())]
    DataFileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference data file does not match the expected table shape
    #[error("Malformed data file {}: {source}", .path.display())]
    DataFileInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A reference table contains no records
    #[error("Reference table '{0}' is empty")]
    EmptyTable(&'static str),

    /// A reference record is unusable for generation
    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),

    /// Generation produced a quest that breaks its invariants
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Interactive input ended while a prompt was waiting
    #[error("Input closed before all quest parameters were entered")]
    InputClosed,
}

impl QuestError {
    /// Whether this error comes from loading the reference tables at startup.
    pub fn is_reference_data_error(&self) -> bool {
        matches!(
            self,
            QuestError::DataFileMissing { .. }
                | QuestError::DataFileInvalid { .. }
                | QuestError::EmptyTable(_)
                | QuestError::InvalidReferenceData(_)
        )
    }
}

/// Result type used throughout the Questsmith codebase.
pub type QuestResult<T> = Result<T, QuestError>;

/// Version information, also stamped into every generated quest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Quest generation constants.
pub mod config {
    /// Fewest monsters a quest can target
    pub const MIN_MONSTERS: u32 = 1;

    /// Most monsters a quest can target
    pub const MAX_MONSTERS: u32 = 3;

    /// Lowest star rating
    pub const MIN_DIFFICULTY: u32 = 1;

    /// Highest star rating
    pub const MAX_DIFFICULTY: u32 = 9;

    /// Fewest reward entries requested
    pub const MIN_REWARDS: u32 = 1;

    /// Most reward entries requested
    pub const MAX_REWARDS: u32 = 10;

    /// Reward rarity never exceeds this tier regardless of difficulty
    pub const RARITY_CAP: u32 = 7;

    /// Rarity headroom granted above the quest difficulty
    pub const RARITY_HEADROOM: u32 = 2;

    /// Items at or below this rarity drop in stacks
    pub const STACKABLE_RARITY: u32 = 3;

    /// Largest stack for a stackable reward
    pub const MAX_STACK: u32 = 3;

    /// Drop probability at difficulty zero
    pub const BASE_DROP_PROBABILITY: f64 = 0.1;

    /// Drop probability gained per star
    pub const DROP_PROBABILITY_PER_STAR: f64 = 0.05;

    /// Drop probability ceiling
    pub const MAX_DROP_PROBABILITY: f64 = 0.85;

    /// Quest time limit in minutes
    pub const TIME_LIMIT_MINUTES: u32 = 50;

    /// Objective written into every quest
    pub const OBJECTIVE_TYPE: &str = "hunt";

    /// Failure conditions written into every quest
    pub const FAILURE_CONDITIONS: [&str; 2] = ["time_up", "cart_3_times"];

    /// Default monster count when none is requested
    pub const DEFAULT_MONSTER_COUNT: u32 = 1;

    /// Default reward count when none is requested
    pub const DEFAULT_REWARD_COUNT: u32 = 3;

    /// Default reference data directory
    pub const DEFAULT_DATA_DIR: &str = "data";

    /// Default output directory
    pub const DEFAULT_OUTPUT_DIR: &str = "output";

    /// Suffix appended to slug-derived filenames
    pub const QUEST_FILE_SUFFIX: &str = ".quest.json";
}
