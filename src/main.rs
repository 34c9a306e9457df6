//! # Questsmith Main Entry Point
//!
//! Loads the reference tables, then either generates a batch of quests from
//! command-line flags or runs an interactive prompt session.

use clap::Parser;
use log::{error, info};
use questsmith::config::{
    DEFAULT_DATA_DIR, DEFAULT_MONSTER_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_REWARD_COUNT,
};
use questsmith::generation::utils::create_rng;
use questsmith::{
    batch_summary, save_quest, saturate_request, Generator, InteractiveSession, QuestError,
    QuestGenerator, QuestParams, QuestResult, ReferenceData,
};
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments for the quest generator.
///
/// Counts and difficulty accept any integer; out-of-range values are clamped
/// during generation instead of being rejected here.
#[derive(Parser, Debug)]
#[command(name = "questsmith")]
#[command(about = "Generate custom quest files for event quest mods")]
#[command(version)]
struct Args {
    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Quest title
    #[arg(short, long)]
    title: Option<String>,

    /// Quest description
    #[arg(short, long)]
    description: Option<String>,

    /// Number of monsters (1-3)
    #[arg(
        short = 'm',
        long = "monsters",
        default_value_t = i64::from(DEFAULT_MONSTER_COUNT),
        allow_negative_numbers = true
    )]
    monster_count: i64,

    /// Difficulty level (1-9)
    #[arg(long, allow_negative_numbers = true)]
    difficulty: Option<i64>,

    /// Map name
    #[arg(long)]
    map: Option<String>,

    /// Number of reward items (1-10)
    #[arg(
        short = 'r',
        long = "rewards",
        default_value_t = i64::from(DEFAULT_REWARD_COUNT),
        allow_negative_numbers = true
    )]
    reward_count: i64,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Data directory path
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Number of quests to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Quest parameters requested on the command line.
    fn quest_params(&self) -> QuestParams {
        QuestParams {
            title: self.title.clone(),
            description: self.description.clone(),
            monster_count: saturate_request(self.monster_count),
            difficulty: self.difficulty.map(saturate_request),
            map_name: self.map.clone(),
            reward_count: saturate_request(self.reward_count),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("Starting questsmith v{}", questsmith::VERSION);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_reference_data_error() => {
            if matches!(e, QuestError::DataFileMissing { .. }) {
                println!("Error: Could not find data files. Make sure data directory exists.");
            } else {
                println!("Error: Reference data could not be used.");
            }
            println!("Details: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes env_logger; `RUST_LOG` takes precedence over `--log-level`.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Loads the reference data and runs the selected mode.
fn run(args: &Args) -> QuestResult<()> {
    let data = ReferenceData::load(&args.data_dir)?;
    let mut rng = create_rng(args.seed);

    if args.interactive {
        run_interactive(args, &data, &mut rng)
    } else {
        run_batch(args, &data, &mut rng)
    }
}

/// Generates `--count` quests from the command-line parameters.
fn run_batch(args: &Args, data: &ReferenceData, rng: &mut StdRng) -> QuestResult<()> {
    let params = args.quest_params();
    let generator = QuestGenerator::new(data);
    let total = args.count as usize;

    println!("Generating {} quest(s)...", total);

    for index in 1..=total {
        let quest = generator.generate(&params, rng)?;
        let path = save_quest(&quest, &args.output, None)?;
        println!("{}", batch_summary(&quest, index, total, &path));
    }

    println!("Done!");
    Ok(())
}

/// Runs a single interactive session on stdin/stdout.
fn run_interactive(args: &Args, data: &ReferenceData, rng: &mut StdRng) -> QuestResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = InteractiveSession::new(stdin.lock(), stdout.lock());

    session.run(data, rng, &args.output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use questsmith::load_quest;
    use std::path::Path;
    use tempfile::TempDir;

    fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn test_out_of_range_flags_are_accepted_and_clamped() {
        let args = Args::try_parse_from([
            "questsmith",
            "-m",
            "-1",
            "--difficulty",
            "-3",
            "-r",
            "-2",
        ])
        .unwrap();
        let params = args.quest_params();
        let data = ReferenceData::load(bundled_data_dir()).unwrap();
        let quest = QuestGenerator::new(&data)
            .generate(&params, &mut create_rng(Some(1)))
            .unwrap();

        assert_eq!(quest.monsters.len(), 1);
        assert_eq!(quest.quest_info.difficulty, 1);
        assert_eq!(quest.rewards.len(), 1);
    }

    #[test]
    fn test_oversized_flags_are_clamped() {
        let args = Args::try_parse_from([
            "questsmith",
            "--monsters=99999999999",
            "--difficulty=99999999999",
            "--rewards=99999999999",
        ])
        .unwrap();
        let params = args.quest_params();
        let data = ReferenceData::load(bundled_data_dir()).unwrap();
        let quest = QuestGenerator::new(&data)
            .generate(&params, &mut create_rng(Some(2)))
            .unwrap();

        assert_eq!(quest.monsters.len(), 3);
        assert_eq!(quest.quest_info.difficulty, 9);
        assert!(quest.rewards.len() <= 10);
    }

    #[test]
    fn test_run_reports_missing_data_as_reference_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let args = Args::try_parse_from([
            "questsmith",
            "--data-dir",
            missing.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(&args).unwrap_err();
        assert!(err.is_reference_data_error());
    }

    #[test]
    fn test_run_batch_writes_requested_quests() {
        let dir = TempDir::new().unwrap();
        let data_dir = bundled_data_dir();
        let args = Args::try_parse_from([
            "questsmith",
            "--data-dir",
            data_dir.to_str().unwrap(),
            "-o",
            dir.path().to_str().unwrap(),
            "-t",
            "Hunt: Rathalos!",
            "--map",
            "Ancient Forest",
            "-n",
            "2",
            "-s",
            "7",
        ])
        .unwrap();

        run(&args).unwrap();

        let quest = load_quest(dir.path().join("hunt__rathalos_.quest.json")).unwrap();
        assert_eq!(quest.quest_info.map, "Ancient Forest");
    }
}
