//! # Quest Display
//!
//! Plain-text summaries printed after each quest is generated.

use crate::Quest;
use std::path::Path;

/// Short summary printed for each quest in batch mode.
///
/// # Examples
///
/// ```no_run
/// # use questsmith::{batch_summary, Quest};
/// # fn show(quest: &Quest) {
/// println!("{}", batch_summary(quest, 1, 3, std::path::Path::new("output/q.quest.json")));
/// # }
/// ```
pub fn batch_summary(quest: &Quest, index: usize, total: usize, path: &Path) -> String {
    format!(
        "Generated quest {}/{}: {}\n  Title: {}\n  Monsters: {}\n  Difficulty: {} stars\n",
        index,
        total,
        path.display(),
        quest.quest_info.title,
        quest.monster_names().join(", "),
        quest.quest_info.difficulty
    )
}

/// Full summary shown in interactive mode before asking to save.
pub fn quest_summary(quest: &Quest) -> String {
    let info = &quest.quest_info;
    let mut lines = vec![
        "=== Generated Quest ===".to_string(),
        format!("Title: {}", info.title),
        format!("Description: {}", info.description),
        format!("Difficulty: {} stars", info.difficulty),
        format!("Map: {}", info.map),
        format!("Monsters: {}", quest.monster_names().join(", ")),
        format!("Rewards: {} items", quest.rewards.len()),
    ];
    lines.push(String::new());
    lines.join("\n")
}
