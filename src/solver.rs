//! # Solver
//!
//! Herein is the word finder: an exhaustive depth-first search from every
//! cell of a [`Grid`], pruned by dictionary prefixes.

use std::{
	collections::BTreeSet,
	rc::Rc,
	time::{Duration, Instant}
};

use fixedstr::str32;
use log::{debug, trace};

use crate::{
	dictionary::Lexicon,
	grid::{Grid, Position, DIRECTIONS}
};

/// The shortest word that counts.
pub const MIN_WORD_LEN: usize = 3;

////////////////////////////////////////////////////////////////////////////////
//                                  Solver.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete context of the word finder. The search is driven by an
/// explicit stack rather than by recursion, so it can be suspended after any
/// step and resumed later; this lets a host time-slice the solver without
/// stalling its event loop.
#[derive(Clone, Debug)]
#[must_use]
pub struct Solver
{
	/// The dictionary to use for solving the grid.
	dictionary: Rc<dyn Lexicon>,

	/// The grid to solve.
	grid: Grid,

	/// The row-major index of the next root cell to search from.
	next_root: usize,

	/// The current path, one frame per cell.
	stack: Vec<Frame>,

	/// Which cells are on the current path, indexed row-major.
	visited: Vec<bool>,

	/// The letters of the current path.
	word: str32,

	/// Every word found so far.
	words: BTreeSet<String>,

	/// Whether the solver is finished.
	is_finished: bool
}

/// One cell of the current path, along with the next direction to explore
/// from it.
#[derive(Clone, Copy, Debug)]
struct Frame
{
	/// The cell.
	position: Position,

	/// The index into [`DIRECTIONS`] of the next neighbour to try.
	next_direction: usize
}

impl Solver
{
	/// Construct a new solver for the given grid.
	///
	/// # Arguments
	///
	/// * `dictionary` - The dictionary to use for solving the grid.
	/// * `grid` - The grid.
	///
	/// # Returns
	///
	/// A new solver, which has not yet searched anything.
	pub fn new(dictionary: Rc<dyn Lexicon>, grid: Grid) -> Self
	{
		let cells = grid.size().cell_count();
		Self
		{
			dictionary,
			grid,
			next_root: 0,
			stack: Vec::with_capacity(cells),
			visited: vec![false; cells],
			word: str32::new(),
			words: BTreeSet::new(),
			is_finished: false
		}
	}

	/// Check if the solver is finished. The solver is finished if the search
	/// has been exhausted from every root cell.
	#[inline]
	#[must_use]
	pub fn is_finished(&self) -> bool
	{
		self.is_finished
	}

	/// The grid being solved.
	#[inline]
	pub fn grid(&self) -> &Grid
	{
		&self.grid
	}

	/// Run the solver until a single new word is found or the specified
	/// quantum elapses. Always take at least one step, even if the quantum is
	/// zero, so that the solver always makes progress.
	///
	/// # Arguments
	///
	/// * `duration` - The maximum amount of time to run the solver before
	///   answering a continuation context.
	///
	/// # Returns
	///
	/// A 2-tuple comprising the continuation context and any new word found,
	/// respectively. The caller should call [`is_finished`](Self::is_finished)
	/// to determine if there is any additional work to perform.
	pub fn solve(mut self, duration: Duration) -> (Self, Option<String>)
	{
		if self.is_finished
		{
			trace!("solver is already finished");
			return (self, None)
		}
		let start_time = Instant::now();
		loop
		{
			let found = match self.stack.last_mut()
			{
				None if self.next_root == self.visited.len() =>
				{
					debug!(
						"exhausted search space: {} words",
						self.words.len()
					);
					self.is_finished = true;
					return (self, None)
				},
				None =>
				{
					let n = self.grid.dimension();
					let root = Position::new(
						self.next_root / n,
						self.next_root % n
					);
					self.next_root += 1;
					self.enter(root)
				},
				Some(frame) if frame.next_direction < DIRECTIONS.len() =>
				{
					let direction = DIRECTIONS[frame.next_direction];
					let position = frame.position;
					frame.next_direction += 1;
					match self.grid.step(position, direction)
					{
						Some(next) if !self.visited[self.grid.index_of(next)] =>
							self.enter(next),
						_ => None
					}
				},
				Some(_) =>
				{
					self.leave();
					None
				}
			};
			if found.is_some()
			{
				return (self, found)
			}
			let elapsed = Instant::now().duration_since(start_time);
			if elapsed >= duration
			{
				trace!("quantum elapsed: {:?}", elapsed);
				return (self, None)
			}
		}
	}

	/// Run the solver until the search space is exhausted.
	///
	/// # Returns
	///
	/// The final context, whose [words](Self::words) are the complete set of
	/// solvable words.
	pub fn solve_fully(mut self) -> Self
	{
		while !self.is_finished
		{
			self = self.solve(Duration::MAX).0;
		}
		self
	}

	/// The words found so far, in alphabetical order.
	#[inline]
	#[must_use]
	pub fn words(&self) -> &BTreeSet<String>
	{
		&self.words
	}

	/// The number of words found so far.
	#[inline]
	#[must_use]
	pub fn word_count(&self) -> usize
	{
		self.words.len()
	}

	/// Consume the solver, answering the words found so far.
	#[inline]
	#[must_use]
	pub fn into_words(self) -> BTreeSet<String>
	{
		self.words
	}

	/// Try to extend the current path onto `position`, which must be on the
	/// grid and unvisited. If no word begins with the extended letters, the
	/// branch is pruned and the path is left as it was.
	///
	/// # Returns
	///
	/// The extended word, if it is a valid word not seen before.
	fn enter(&mut self, position: Position) -> Option<String>
	{
		self.word.push_char(self.grid[position]);
		let word = self.word.as_str();
		let found = (word.len() >= MIN_WORD_LEN
			&& self.dictionary.contains(word)
			&& self.words.insert(word.to_string()))
			.then(|| word.to_string());
		if let Some(ref word) = found
		{
			debug!("found word: {}", word);
		}
		if !self.dictionary.contains_prefix(word)
		{
			trace!("pruned: {}", word);
			self.word.pop_char();
			return found
		}
		self.visited[self.grid.index_of(position)] = true;
		self.stack.push(Frame { position, next_direction: 0 });
		found
	}

	/// Retreat from the last cell of the current path, making it available to
	/// sibling branches again.
	fn leave(&mut self)
	{
		if let Some(frame) = self.stack.pop()
		{
			self.visited[self.grid.index_of(frame.position)] = false;
			self.word.pop_char();
		}
	}
}

/// Find every dictionary word that can be formed on the grid.
///
/// # Arguments
///
/// * `grid` - The grid.
/// * `dictionary` - The dictionary.
///
/// # Returns
///
/// The complete set of solvable words, in alphabetical order.
#[must_use]
pub fn find_words(grid: &Grid, dictionary: Rc<dyn Lexicon>) -> BTreeSet<String>
{
	Solver::new(dictionary, grid.clone()).solve_fully().into_words()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{
		cell::Cell,
		collections::BTreeSet,
		rc::Rc,
		time::Duration
	};

	use proptest::prelude::*;

	use crate::{
		dictionary::{Dictionary, Lexicon},
		grid::{Grid, GridSize},
		solver::{find_words, Solver, MIN_WORD_LEN}
	};

	/// A lexicon that counts its prefix queries, to observe pruning.
	#[derive(Debug)]
	struct CountingLexicon
	{
		inner: Dictionary,
		prefix_queries: Cell<usize>
	}

	impl Lexicon for CountingLexicon
	{
		fn contains(&self, word: &str) -> bool { self.inner.contains(word) }

		fn contains_prefix(&self, prefix: &str) -> bool
		{
			self.prefix_queries.set(self.prefix_queries.get() + 1);
			self.inner.contains_prefix(prefix)
		}
	}

	fn words(list: &[&str]) -> BTreeSet<String>
	{
		list.iter().map(|w| w.to_string()).collect()
	}

	/// The fixed regression grid. The S at (1, 2) touches the T at (0, 2), so
	/// CATS is reachable; no O touches a T, so ROT is not.
	#[test]
	fn test_regression_grid()
	{
		let grid = "CATE/ORST/DOGS/NEWS".parse::<Grid>().unwrap();
		let dictionary = Rc::new(
			["CAT", "CATS", "DOG", "DOGS", "ROT", "NEWS"].into_iter()
				.collect::<Dictionary>()
		);
		let found = find_words(&grid, dictionary);
		assert_eq!(found, words(&["CAT", "CATS", "DOG", "DOGS", "NEWS"]));
	}

	/// Words shorter than three letters never count, and a cell is never used
	/// twice within a word.
	#[test]
	fn test_short_and_repeated()
	{
		let grid = "ABCD/EFGH/IJKL/MNOP".parse::<Grid>().unwrap();
		let dictionary = Rc::new(
			["AB", "ABF", "ABA", "FAB", "FEB", "PLOP"].into_iter()
				.collect::<Dictionary>()
		);
		let found = find_words(&grid, dictionary);
		assert_eq!(found, words(&["ABF", "FAB", "FEB"]));
	}

	/// A word reachable along several paths appears once.
	#[test]
	fn test_dedupe()
	{
		let grid = "AAAA/AAAA/AAAA/AAAA".parse::<Grid>().unwrap();
		let dictionary = Rc::new(
			["AAA", "AAAA"].into_iter().collect::<Dictionary>()
		);
		let found = find_words(&grid, dictionary);
		assert_eq!(found, words(&["AAA", "AAAA"]));
	}

	/// An empty dictionary prunes every root immediately: one prefix query per
	/// cell and nothing more.
	#[test]
	fn test_pruning()
	{
		let grid = "ABCD/EFGH/IJKL/MNOP".parse::<Grid>().unwrap();
		let lexicon = Rc::new(CountingLexicon {
			inner: Dictionary::new(),
			prefix_queries: Cell::new(0)
		});
		let found = find_words(&grid, lexicon.clone());
		assert!(found.is_empty());
		assert_eq!(lexicon.prefix_queries.get(), 16);
	}

	/// Time-slicing yields each new word exactly once, and the sliced result
	/// matches the unsliced one.
	#[test]
	fn test_time_sliced()
	{
		let grid = "CATE/ORST/DOGS/NEWS".parse::<Grid>().unwrap();
		let dictionary: Rc<dyn Lexicon> = Rc::new(
			Dictionary::read_from_file("dict/english.txt").unwrap()
		);
		let mut solver = Solver::new(Rc::clone(&dictionary), grid.clone());
		let mut reported = Vec::new();
		while !solver.is_finished()
		{
			let (next, word) = solver.solve(Duration::ZERO);
			solver = next;
			reported.extend(word);
		}
		let reported_set = reported.iter().cloned().collect::<BTreeSet<_>>();
		assert_eq!(reported.len(), reported_set.len());
		assert_eq!(&reported_set, solver.words());
		assert_eq!(reported_set, find_words(&grid, dictionary));
		// Solving a finished solver is a no-op.
		let (solver, word) = solver.solve(Duration::MAX);
		assert!(word.is_none());
		assert!(solver.is_finished());
	}

	/// The solver is deterministic: solving twice yields the same set.
	#[test]
	fn test_idempotent()
	{
		let dictionary: Rc<dyn Lexicon> = Rc::new(
			Dictionary::read_from_file("dict/english.txt").unwrap()
		);
		let grid = "SEAT/RNOL/TEAP/DISH".parse::<Grid>().unwrap();
		let first = find_words(&grid, Rc::clone(&dictionary));
		let second = find_words(&grid, dictionary);
		assert!(!first.is_empty());
		assert_eq!(first, second);
	}

	/// Compose a small dictionary and a grid from a tiny alphabet, so that
	/// random grids actually contain words.
	fn grid_and_dictionary()
		-> impl Strategy<Value = (Grid, Vec<String>, Dictionary)>
	{
		let letters = prop::sample::select(vec!['A', 'E', 'R', 'S', 'T']);
		(
			prop::collection::vec(letters.clone(), 16),
			prop::collection::vec(prop::collection::vec(letters, 1..7), 1..40)
		).prop_map(|(cells, words)| {
			let grid = Grid::new(GridSize::Four, cells).unwrap();
			let words = words.iter()
				.map(|w| w.iter().collect::<String>())
				.collect::<Vec<_>>();
			let dictionary = words.iter().collect::<Dictionary>();
			(grid, words, dictionary)
		})
	}

	proptest!
	{
		#![proptest_config(ProptestConfig::with_cases(64))]

		/// Every found word is long enough, valid, and traceable; every
		/// traceable dictionary word of sufficient length is found.
		#[test]
		fn prop_found_words_are_sound(
			(grid, words, dictionary) in grid_and_dictionary()
		)
		{
			let dictionary = Rc::new(dictionary);
			let found = find_words(&grid, dictionary.clone());
			for word in &found
			{
				prop_assert!(word.len() >= MIN_WORD_LEN);
				prop_assert!(dictionary.contains(word));
				let path = grid.trace(word);
				prop_assert!(path.is_some(), "untraceable: {}", word);
			}
			for word in &words
			{
				if word.len() >= MIN_WORD_LEN && grid.trace(word).is_some()
				{
					prop_assert!(found.contains(word), "missed: {}", word);
				}
			}
			prop_assert_eq!(&found, &find_words(&grid, dictionary));
		}
	}
}
