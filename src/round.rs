//! # Round
//!
//! The state of one round of play, and the flow that turns a candidate word
//! into points.

use std::{
	collections::{BTreeSet, HashSet},
	error::Error,
	fmt::{self, Display, Formatter}
};

use log::debug;

use crate::{
	dictionary::Lexicon,
	grid::Grid,
	scoring::score,
	selection::Selection,
	solver::MIN_WORD_LEN
};

////////////////////////////////////////////////////////////////////////////////
//                                  Rounds.                                   //
////////////////////////////////////////////////////////////////////////////////

/// Everything that belongs to a single round: the committed grid, the path
/// under construction, the words found, and the score.
#[derive(Clone, Debug)]
#[must_use]
pub struct Round
{
	/// The committed grid.
	grid: Grid,

	/// The path under construction.
	selection: Selection,

	/// The words found, in the order they were found.
	found: Vec<String>,

	/// The words found, for membership tests.
	found_set: HashSet<String>,

	/// The running score.
	score: u32
}

impl Round
{
	/// Start a round on the given grid.
	pub fn new(grid: Grid) -> Self
	{
		let selection = Selection::new(grid.size());
		Self
		{
			grid,
			selection,
			found: Vec::new(),
			found_set: HashSet::new(),
			score: 0
		}
	}

	/// The committed grid.
	#[inline]
	pub fn grid(&self) -> &Grid
	{
		&self.grid
	}

	/// The path under construction.
	#[inline]
	pub fn selection(&self) -> &Selection
	{
		&self.selection
	}

	/// The path under construction, for the input layer to drive.
	#[inline]
	pub fn selection_mut(&mut self) -> &mut Selection
	{
		&mut self.selection
	}

	/// The words found so far, in the order they were found.
	#[inline]
	#[must_use]
	pub fn found(&self) -> &[String]
	{
		&self.found
	}

	/// The running score.
	#[inline]
	#[must_use]
	pub fn score(&self) -> u32
	{
		self.score
	}

	/// Submit a candidate word. The candidate is normalized to uppercase and
	/// accepted only if it is long enough, new to this round, and in the
	/// dictionary.
	///
	/// # Arguments
	///
	/// * `candidate` - The candidate word.
	/// * `dictionary` - The dictionary.
	///
	/// # Returns
	///
	/// The points awarded.
	///
	/// # Errors
	///
	/// The [reason](Rejection) the candidate was rejected. A rejection never
	/// changes the round.
	pub fn submit(
		&mut self,
		candidate: &str,
		dictionary: &dyn Lexicon
	) -> Result<u32, Rejection>
	{
		let word = candidate.to_uppercase();
		if word.chars().count() < MIN_WORD_LEN
		{
			return Err(Rejection::TooShort)
		}
		if self.found_set.contains(&word)
		{
			return Err(Rejection::Duplicate)
		}
		if !dictionary.contains(&word)
		{
			return Err(Rejection::NotInDictionary)
		}
		let points = score(&word);
		self.score += points;
		debug!("accepted {} for {} (total {})", word, points, self.score);
		self.found_set.insert(word.clone());
		self.found.push(word);
		Ok(points)
	}

	/// Submit the word spelled by the current path, then clear the path
	/// whatever the outcome.
	///
	/// # Arguments
	///
	/// * `dictionary` - The dictionary.
	///
	/// # Returns
	///
	/// The candidate word and the outcome of [submitting](Self::submit) it.
	pub fn submit_selection(
		&mut self,
		dictionary: &dyn Lexicon
	) -> (String, Result<u32, Rejection>)
	{
		let word = self.selection.word(&self.grid).to_string();
		let outcome = self.submit(&word, dictionary);
		self.selection.clear();
		(word, outcome)
	}

	/// The solvable words that were never found.
	///
	/// # Arguments
	///
	/// * `solved` - Every word that can be formed on the grid.
	///
	/// # Returns
	///
	/// The missed words, in alphabetical order.
	#[must_use]
	pub fn missed_words(&self, solved: &BTreeSet<String>) -> Vec<String>
	{
		solved.iter()
			.filter(|w| !self.found_set.contains(*w))
			.cloned()
			.collect()
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                Rejections.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of reasons a submission is turned away. None of
/// them is fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection
{
	/// The word has fewer than three letters.
	TooShort,

	/// The word was already found this round.
	Duplicate,

	/// The word is not in the dictionary.
	NotInDictionary
}

impl Display for Rejection
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::TooShort => write!(f, "too short"),
			Self::Duplicate => write!(f, "already found"),
			Self::NotInDictionary => write!(f, "not in dictionary")
		}
	}
}

impl Error for Rejection {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
