//! # Dice
//!
//! Letter dice and the pools that grids are rolled from.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

use crate::grid::GridSize;

/// The base dice, used on their own for a 4×4 grid.
const BASE_DICE: [&str; 16] = [
	"AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS",
	"AOOTTW", "CIMOTU", "DEILRX", "DELRVY",
	"DISTTY", "EEGHNW", "EEINSU", "EHRTVW",
	"EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ"
];

/// The extended dice, added to the base dice for a 5×5 grid.
const EXTENDED_DICE: [&str; 9] = [
	"AAAFRS", "AEEEEM", "AEGMNN",
	"CEIILT", "CEIPST", "DHHNOT",
	"DHLNOR", "FIPRSY", "GORRVW"
];

////////////////////////////////////////////////////////////////////////////////
//                                   Dice.                                    //
////////////////////////////////////////////////////////////////////////////////

/// A single die: six uppercase letter faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Die([char; 6]);

impl Die
{
	/// Construct a die from its faces.
	///
	/// # Arguments
	///
	/// * `faces` - Exactly six ASCII letters, in any case.
	///
	/// # Errors
	///
	/// * [`DiceError::WrongFaceCount`] if there are not exactly six faces.
	/// * [`DiceError::InvalidFace`] if a face is not an ASCII letter.
	pub fn new(faces: &str) -> Result<Self, DiceError>
	{
		let mut die = ['A'; 6];
		let mut count = 0;
		for c in faces.chars()
		{
			if !c.is_ascii_alphabetic()
			{
				return Err(DiceError::InvalidFace(c))
			}
			if count < die.len()
			{
				die[count] = c.to_ascii_uppercase();
			}
			count += 1;
		}
		if count != die.len()
		{
			return Err(DiceError::WrongFaceCount(faces.to_string()))
		}
		Ok(Self(die))
	}

	/// The faces of the die.
	#[inline]
	#[must_use]
	pub fn faces(&self) -> &[char; 6]
	{
		&self.0
	}

	/// Check if the given letter appears on some face of the die.
	#[inline]
	#[must_use]
	pub fn has_face(&self, letter: char) -> bool
	{
		self.0.contains(&letter)
	}
}

impl Display for Die
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{}", self.0.iter().collect::<String>())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Dice sets.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The dice available to the generator, partitioned into a base set and an
/// extended set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct DiceSet
{
	/// The dice used for every grid size.
	base: Vec<Die>,

	/// The dice added for a 5×5 grid.
	extended: Vec<Die>
}

impl DiceSet
{
	/// Construct a dice set.
	///
	/// # Errors
	///
	/// [`DiceError::EmptyPool`] if `base` is empty, since no grid could be
	/// rolled from it.
	pub fn new(base: Vec<Die>, extended: Vec<Die>) -> Result<Self, DiceError>
	{
		if base.is_empty()
		{
			return Err(DiceError::EmptyPool)
		}
		Ok(Self { base, extended })
	}

	/// The standard dice: sixteen base dice and nine extended dice.
	pub fn classic() -> Self
	{
		let parse = |faces: &[&str]| {
			faces.iter()
				.filter_map(|f| Die::new(f).ok())
				.collect::<Vec<_>>()
		};
		Self { base: parse(&BASE_DICE), extended: parse(&EXTENDED_DICE) }
	}

	/// The base dice.
	#[inline]
	#[must_use]
	pub fn base(&self) -> &[Die]
	{
		&self.base
	}

	/// The extended dice.
	#[inline]
	#[must_use]
	pub fn extended(&self) -> &[Die]
	{
		&self.extended
	}

	/// Assemble the candidate pool for the given grid size: the base dice
	/// alone for 4×4, the base and extended dice for 5×5. The pool is
	/// cyclically repeated until it holds at least one die per cell.
	///
	/// # Arguments
	///
	/// * `size` - The grid size.
	///
	/// # Returns
	///
	/// The candidate pool, not yet shuffled.
	#[must_use]
	pub fn pool(&self, size: GridSize) -> Vec<Die>
	{
		let source = match size
		{
			GridSize::Four => self.base.clone(),
			GridSize::Five =>
				self.base.iter().chain(self.extended.iter()).copied().collect()
		};
		let mut pool = source.clone();
		while pool.len() < size.cell_count()
		{
			pool.extend_from_slice(&source);
		}
		pool
	}
}

impl Default for DiceSet
{
	fn default() -> Self
	{
		Self::classic()
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Errors.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of dice errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiceError
{
	/// A die must have exactly six faces.
	WrongFaceCount(String),

	/// A face must be an ASCII letter.
	InvalidFace(char),

	/// The base pool must not be empty.
	EmptyPool
}

impl Display for DiceError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::WrongFaceCount(faces) =>
				write!(f, "die must have exactly 6 faces: {}", faces),
			Self::InvalidFace(c) => write!(f, "not a letter: {:?}", c),
			Self::EmptyPool => write!(f, "base dice pool is empty")
		}
	}
}

impl Error for DiceError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
