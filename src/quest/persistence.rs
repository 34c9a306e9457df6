//! # Quest Persistence
//!
//! Writes quests as pretty-printed JSON files and reads them back.
//! Existing files at the target path are overwritten.

use crate::config::QUEST_FILE_SUFFIX;
use crate::utils::slugify;
use crate::{Quest, QuestResult};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Default filename for a quest, derived from its title.
///
/// # Examples
///
/// ```
/// use questsmith::quest_filename;
///
/// assert_eq!(quest_filename("Hunt: Rathalos!"), "hunt__rathalos_.quest.json");
/// ```
pub fn quest_filename(title: &str) -> String {
    format!("{}{}", slugify(title), QUEST_FILE_SUFFIX)
}

/// Saves a quest under `output_dir`, creating the directory if needed.
///
/// When `filename` is `None` the name is derived from the quest title.
/// Returns the path that was written.
pub fn save_quest<P: AsRef<Path>>(
    quest: &Quest,
    output_dir: P,
    filename: Option<&str>,
) -> QuestResult<PathBuf> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let filename = match filename {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => quest_filename(&quest.quest_info.title),
    };
    let path = output_dir.join(filename);

    fs::write(&path, quest.to_json()?)?;
    info!("Saved quest '{}' to {}", quest.quest_info.title, path.display());

    Ok(path)
}

/// Loads a previously saved quest file.
pub fn load_quest<P: AsRef<Path>>(path: P) -> QuestResult<Quest> {
    let contents = fs::read_to_string(path)?;
    Quest::from_json(&contents)
}
