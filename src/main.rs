//! # Boggle
//!
//! Boggle is a word game played on a square grid of lettered dice. Players
//! race the clock to trace words through adjacent cells, using each cell at
//! most once per word. Longer words are worth more.
//!
//! This program rolls a grid that is guaranteed to be worth playing, runs a
//! timed round in a text-based user interface (TUI) driven by mouse or
//! keyboard, and then reveals every word the player missed. Via command line
//! options, the user can specify the dictionary, the grid size, the round
//! length, and how hard the generator should work for a rich grid. The grid
//! solver is also available directly, for grids typed on the command line.

mod app;
mod tui;

use std::{
	error::Error,
	fs::File,
	path::{Path, PathBuf},
	process::ExitCode,
	rc::Rc,
	time::Duration
};

use clap::{Parser, Subcommand};
use log::{debug, error, info, trace, warn};

use app::{App, Summary};
use boggle::{
	config::GameConfig,
	dictionary::{Dictionary, Lexicon},
	generator::Generator,
	grid::{Grid, GridSize},
	highscores::HighScores,
	scoring::score,
	solver::find_words
};
use tui::tui;

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for playing Boggle.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Opts
{
	/// The path to the directory containing the dictionary files.
	#[arg(short = 'd', long, default_value = "dict", global = true)]
	directory: String,

	/// The name of the dictionary. This is the name shared by the text and
	/// binary files, sans the extension.
	#[arg(short = 'n', long, default_value = "english", global = true)]
	dictionary: String,

	/// Write the log to this file instead of standard error. Logging to
	/// standard error garbles the TUI, so use this with `RUST_LOG` while
	/// playing.
	#[arg(short = 'l', long, global = true)]
	log_file: Option<PathBuf>,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Generate,

	/// Roll a grid and play a timed round in the text-based user interface
	/// (TUI). A summary of the round is written to standard output.
	Play {
		/// The grid size: 4 or 5.
		#[arg(short = 's', long, value_parser = parse_size)]
		size: Option<GridSize>,

		/// How long the round lasts, in seconds.
		#[arg(short = 't', long)]
		seconds: Option<u64>,

		/// How many words a rolled grid should hold.
		#[arg(short = 'm', long)]
		min_words: Option<usize>,

		/// How many grids to roll, at most, in pursuit of the minimum.
		#[arg(short = 'a', long)]
		attempts: Option<usize>,

		/// The high score file.
		#[arg(long, default_value = "scores.json")]
		scores: PathBuf,

		/// Suppress emission of the summary to standard output.
		#[arg(short = 'q', long)]
		quiet: bool
	},

	/// Print every word on the given grid, with its score. Rows are separated
	/// by slashes, commas, or whitespace, e.g., `CATE/ORST/DOGS/NEWS`.
	Solve {
		/// The grid.
		grid: String
	},

	/// Print the high score table.
	Scores {
		/// The high score file.
		#[arg(long, default_value = "scores.json")]
		scores: PathBuf
	}
}

/// Parse a grid size from the command line.
///
/// # Arguments
///
/// * `s` - The dimension, as text.
///
/// # Returns
///
/// The grid size.
///
/// # Errors
///
/// If the text is not a supported dimension, an explanation is returned.
fn parse_size(s: &str) -> Result<GridSize, String>
{
	let dimension = s.parse::<usize>().map_err(|e| e.to_string())?;
	GridSize::try_from(dimension).map_err(|e| e.to_string())
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main() -> ExitCode
{
	let opts = Opts::parse();
	if let Err(e) = init_logging(opts.log_file.as_deref())
	{
		eprintln!("Failed to open log file: {}", e);
		return ExitCode::FAILURE
	}
	debug!("Command line options: {:?}", opts);
	match run(opts)
	{
		Ok(()) => ExitCode::SUCCESS,
		Err(e) =>
		{
			error!("{}", e);
			eprintln!("{}", e);
			ExitCode::FAILURE
		}
	}
}

/// Initialize logging. The level comes from `RUST_LOG`, as usual.
///
/// # Arguments
///
/// * `log_file` - Where to write the log, if not standard error.
///
/// # Errors
///
/// If the log file cannot be created, an error is returned.
fn init_logging(log_file: Option<&Path>) -> Result<(), std::io::Error>
{
	let mut builder = env_logger::Builder::from_default_env();
	if let Some(path) = log_file
	{
		let file = File::create(path)?;
		builder.target(env_logger::Target::Pipe(Box::new(file)));
	}
	builder.init();
	Ok(())
}

/// Execute the subcommand.
///
/// # Arguments
///
/// * `opts` - The command line options.
///
/// # Errors
///
/// Any error that prevents the subcommand from completing.
fn run(opts: Opts) -> Result<(), Box<dyn Error>>
{
	match opts.command
	{
		Command::Generate =>
		{
			let dictionary = open_dictionary(&opts.directory, &opts.dictionary)?;
			if dictionary.is_empty()
			{
				warn!("Dictionary is empty");
			}
			trace!("Exiting after generating binary dictionary");
		},
		Command::Play { size, seconds, min_words, attempts, ref scores, quiet } =>
		{
			let defaults = GameConfig::default();
			let config = GameConfig {
				size: size.unwrap_or(defaults.size),
				duration: seconds.map(Duration::from_secs)
					.unwrap_or(defaults.duration),
				min_words: min_words.unwrap_or(defaults.min_words),
				max_attempts: attempts.unwrap_or(defaults.max_attempts),
				dice: defaults.dice
			};
			debug!("Configuration: {:?}", config);
			let dictionary: Rc<dyn Lexicon> = Rc::new(
				open_dictionary(&opts.directory, &opts.dictionary)?
			);
			let generation = Generator::default().generate(
				config.size,
				&config.dice,
				&dictionary,
				config.min_words,
				config.max_attempts
			);
			info!(
				"Playing a grid of {} words, rolled in {} attempts",
				generation.word_count,
				generation.attempts
			);
			trace!("Opening TUI");
			let summary = tui(|tui| {
				App::new(dictionary, generation.grid, config.duration).run(tui)
			})?;
			let mut table = HighScores::load(scores)?;
			let rank = table.record(summary.score);
			table.save(scores)?;
			if !quiet
			{
				print_summary(&summary, rank);
			}
		},
		Command::Solve { ref grid } =>
		{
			let grid = grid.parse::<Grid>()?;
			let dictionary = open_dictionary(&opts.directory, &opts.dictionary)?;
			let words = find_words(&grid, Rc::new(dictionary));
			let mut total = 0;
			for word in &words
			{
				let points = score(word);
				total += points;
				println!("{:<16}{:>3}", word, points);
			}
			println!("{} words, {} points", words.len(), total);
		},
		Command::Scores { ref scores } =>
		{
			let table = HighScores::load(scores)?;
			if table.scores().is_empty()
			{
				println!("No high scores yet");
			}
			for (rank, score) in table.scores().iter().enumerate()
			{
				println!("{:>2}. {}", rank + 1, score);
			}
		}
	}
	Ok(())
}

/// Open the dictionary, creating the binary dictionary if necessary.
///
/// # Arguments
///
/// * `directory` - The directory containing the dictionary files.
/// * `name` - The name of the dictionary.
///
/// # Returns
///
/// The dictionary.
///
/// # Errors
///
/// If neither file can be read, an error naming both is returned.
fn open_dictionary(directory: &str, name: &str)
	-> Result<Dictionary, Box<dyn Error>>
{
	Dictionary::open(directory, name).map_err(|e| {
		format!(
			"Failed to open dictionary: {}/{}.dict or {0}/{1}.txt: {}",
			directory,
			name,
			e
		).into()
	})
}

/// Print the summary of a game to standard output.
///
/// # Arguments
///
/// * `summary` - The summary to print.
/// * `rank` - The rank the score earned in the high score table, if any.
fn print_summary(summary: &Summary, rank: Option<usize>)
{
	print!("{}", summary.grid);
	println!("Score: {}", summary.score);
	if let Some(rank) = rank
	{
		println!("New high score, rank {}!", rank);
	}
	println!("Found ({}): {}", summary.found.len(), summary.found.join(", "));
	println!(
		"Missed ({}): {}",
		summary.missed.len(),
		summary.missed.join(", ")
	);
}
