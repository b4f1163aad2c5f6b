//! Hangman Solver - CLI
//!
//! Plays Hangman against a list of secret words and reports the scores.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use hangman_solver::{
    commands::{PlayConfig, PlayReport, SetupTimings, analyze_state, parse_state, play_words},
    core::LetterOrder,
    output::{
        formatters::level_for_verbosity, logger, print_analysis_result, print_game_result,
        print_game_status, print_summary, print_timing_report,
    },
    solver::{GameRunner, GuessingStrategy, StrategyConfig, StrategyType},
    wordlists::{load_from_file, sample_words, words_from_slice},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Plays Hangman automatically using cached candidate narrowing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "words.txt")]
    dictionary: PathBuf,

    /// Wrong guesses allowed per game
    #[arg(short, long, global = true, default_value_t = 5)]
    max_wrong: usize,

    /// Strategy: frequency (default) or popular
    #[arg(
        short,
        long,
        global = true,
        default_value = "frequency",
        value_parser = ["frequency", "popular"]
    )]
    strategy: String,

    /// Order used to break ties between equally common letters
    #[arg(long, global = true, value_enum, default_value_t = TieBreak::Reverse)]
    tie_break: TieBreak,

    /// Skip pre-computing first-letter cache entries
    #[arg(long, global = true)]
    no_preseed: bool,

    /// Verbosity: -v prints each score, -vv the full transcript, -vvv strategy internals
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print a timing report
    #[arg(short, long, global = true)]
    timing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play games (default)
    Play(PlayArgs),

    /// Show candidates and letter ranking for a revealed pattern
    Analyze {
        /// Revealed pattern, '-' for unknown letters (e.g. -A---A-)
        #[arg(allow_hyphen_values = true)]
        pattern: String,

        /// Letters already guessed wrong
        #[arg(short, long, default_value = "")]
        wrong: String,
    },
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Secret words to play
    words: Vec<String>,

    /// File of secret words, one per line
    #[arg(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// Also play this many random dictionary words
    #[arg(long)]
    sample: Option<usize>,

    /// Seed for --sample
    #[arg(long, requires = "sample")]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreak {
    /// Z before A
    Reverse,
    /// A before Z
    Alphabetical,
    /// Common English letters first
    English,
}

impl TieBreak {
    fn order(self) -> LetterOrder {
        match self {
            Self::Reverse => LetterOrder::reverse_alphabetical(),
            Self::Alphabetical => LetterOrder::alphabetical(),
            Self::English => LetterOrder::english(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            eprintln!("for help use --help");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    logger::init(level_for_verbosity(cli.verbose)).context("cannot install logger")?;

    let config = StrategyConfig {
        tie_break: cli.tie_break.order(),
        preseed_threshold: if cli.no_preseed {
            None
        } else {
            StrategyConfig::default().preseed_threshold
        },
        ..StrategyConfig::default()
    };

    let load_start = Instant::now();
    let dictionary = load_from_file(&cli.dictionary)
        .with_context(|| format!("cannot load dictionary {}", cli.dictionary.display()))?;
    let mut timings = SetupTimings {
        load_dictionary: load_start.elapsed(),
        ..SetupTimings::default()
    };

    match cli.command.unwrap_or_else(|| Commands::Play(PlayArgs::default())) {
        Commands::Play(args) => {
            let words = game_words(&args, &dictionary)?;

            let build_start = Instant::now();
            let strategy = StrategyType::from_name(&cli.strategy, &dictionary, config);
            timings.build_strategy = build_start.elapsed();

            let play_config = PlayConfig {
                max_wrong_guesses: cli.max_wrong,
                show_progress: cli.verbose == 0,
            };
            let report = run_play_command(strategy, &words, &play_config, cli.verbose)?;

            if cli.timing {
                print_timing_report(&timings, &report);
            }
            Ok(())
        }
        Commands::Analyze { pattern, wrong } => {
            run_analyze_command(&pattern, &wrong, &dictionary, config)
        }
    }
}

/// Collect the secret words from literal arguments, a file and a sample
fn game_words(args: &PlayArgs, dictionary: &[String]) -> Result<Vec<String>> {
    let mut words = words_from_slice(&args.words);

    if let Some(path) = &args.words_file {
        words.extend(load_words_file(path)?);
    }
    if let Some(count) = args.sample {
        words.extend(sample_words(dictionary, count, args.seed));
    }

    if words.is_empty() {
        bail!("no words to play: pass WORDS, --words-file or --sample");
    }
    Ok(words)
}

fn load_words_file(path: &Path) -> Result<Vec<String>> {
    load_from_file(path).with_context(|| format!("cannot load word list {}", path.display()))
}

fn run_play_command(
    strategy: StrategyType,
    words: &[String],
    config: &PlayConfig,
    verbosity: u8,
) -> Result<PlayReport> {
    let mut runner = GameRunner::new(strategy);

    let report = play_words(&mut runner, words, config, |result| {
        if verbosity >= 2 {
            print_game_status(result);
        }
        if verbosity >= 1 {
            print_game_result(result);
        }
    })?;

    print_summary(&report);
    Ok(report)
}

fn run_analyze_command(
    pattern: &str,
    wrong: &str,
    dictionary: &[String],
    config: StrategyConfig,
) -> Result<()> {
    let key = parse_state(pattern, wrong)?;
    let mut strategy = GuessingStrategy::new(dictionary, config);
    let result = analyze_state(&mut strategy, key)?;

    print_analysis_result(&result);
    Ok(())
}
