//! # Input Module
//!
//! Interactive prompt session for building a single quest.

pub mod prompts;

pub use prompts::*;

use crate::config::*;
use crate::{
    quest_summary, save_quest, Generator, Map, QuestError, QuestGenerator, QuestParams,
    QuestResult, ReferenceData,
};
use log::debug;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Interactive session reading answers from `reader` and writing prompts to
/// `writer`.
///
/// Invalid numeric answers are re-prompted until a valid one arrives. Running
/// out of input while a prompt is pending ends the session with
/// [`QuestError::InputClosed`].
///
/// # Examples
///
/// ```
/// use questsmith::InteractiveSession;
///
/// let answers = "Custom Hunt\n\n2\n\n\n5\n";
/// let mut output = Vec::new();
/// let mut session = InteractiveSession::new(answers.as_bytes(), &mut output);
///
/// let params = session.collect_params(&[]).unwrap();
/// assert_eq!(params.title.as_deref(), Some("Custom Hunt"));
/// assert_eq!(params.monster_count, 2);
/// assert_eq!(params.reward_count, 5);
/// ```
pub struct InteractiveSession<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prompts for every quest parameter in turn.
    ///
    /// `maps` is listed before the map prompt so the user can pick by name.
    pub fn collect_params(&mut self, maps: &[Map]) -> QuestResult<QuestParams> {
        let title = self.prompt_text("Quest Title (press Enter for auto-generated): ")?;
        let description =
            self.prompt_text("Quest Description (press Enter for auto-generated): ")?;

        let monster_count = self
            .prompt_bounded(
                "Number of monsters (1-3, default 1): ",
                MIN_MONSTERS,
                MAX_MONSTERS,
            )?
            .unwrap_or(DEFAULT_MONSTER_COUNT);

        let difficulty = self.prompt_bounded(
            "Difficulty level (1-9, press Enter for auto): ",
            MIN_DIFFICULTY,
            MAX_DIFFICULTY,
        )?;

        writeln!(self.writer, "\nAvailable maps:")?;
        for map in maps {
            writeln!(self.writer, "  - {}", map.name)?;
        }
        let map_name = self.prompt_text("Map name (press Enter for random): ")?;

        let reward_count = self
            .prompt_bounded(
                "Number of reward items (1-10, default 3): ",
                MIN_REWARDS,
                MAX_REWARDS,
            )?
            .unwrap_or(DEFAULT_REWARD_COUNT);

        let params = QuestParams {
            title,
            description,
            monster_count,
            difficulty,
            map_name,
            reward_count,
        };
        debug!("Interactive parameters: {:?}", params);
        Ok(params)
    }

    /// Runs a full session: prompts, generates, shows the quest and saves it
    /// under `output_dir` if confirmed.
    ///
    /// Returns the saved path, or `None` when the user declined to save.
    pub fn run(
        &mut self,
        data: &ReferenceData,
        rng: &mut StdRng,
        output_dir: &Path,
    ) -> QuestResult<Option<PathBuf>> {
        writeln!(self.writer, "\n=== Quest Generator ===\n")?;

        let params = self.collect_params(data.maps())?;

        writeln!(self.writer, "\nGenerating quest...")?;
        let quest = QuestGenerator::new(data).generate(&params, rng)?;

        writeln!(self.writer, "\n{}", quest_summary(&quest))?;

        let answer = self.prompt("\nSave quest? (y/n): ")?;
        if is_affirmative(&answer) {
            let path = save_quest(&quest, output_dir, None)?;
            writeln!(self.writer, "\nQuest saved to: {}", path.display())?;
            Ok(Some(path))
        } else {
            writeln!(self.writer, "\nQuest not saved.")?;
            Ok(None)
        }
    }

    /// Writes `label` and reads one trimmed line.
    fn prompt(&mut self, label: &str) -> QuestResult<String> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(QuestError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Free-text prompt where an empty answer means "not supplied".
    fn prompt_text(&mut self, label: &str) -> QuestResult<Option<String>> {
        let answer = self.prompt(label)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// Numeric prompt repeated until the answer is empty or within range.
    fn prompt_bounded(&mut self, label: &str, min: u32, max: u32) -> QuestResult<Option<u32>> {
        loop {
            let answer = self.prompt(label)?;
            match parse_numeric_answer(&answer, min, max) {
                NumericAnswer::Value(value) => return Ok(Some(value)),
                NumericAnswer::Empty => return Ok(None),
                NumericAnswer::OutOfRange => {
                    writeln!(self.writer, "Please enter a number between {} and {}", min, max)?;
                }
                NumericAnswer::NotANumber => {
                    writeln!(self.writer, "Please enter a valid number")?;
                }
            }
        }
    }
}
