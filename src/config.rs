//! # Configuration
//!
//! The knobs of a game. The binary fills these in from the command line.

use std::time::Duration;

use crate::{dice::DiceSet, grid::GridSize};

/// The complete configuration of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct GameConfig
{
	/// The grid size.
	pub size: GridSize,

	/// How long a round lasts.
	pub duration: Duration,

	/// How many words a generated grid should hold.
	pub min_words: usize,

	/// How many grids to roll, at most, in pursuit of `min_words`.
	pub max_attempts: usize,

	/// The dice to roll grids from.
	pub dice: DiceSet
}

impl Default for GameConfig
{
	fn default() -> Self
	{
		Self
		{
			size: GridSize::Four,
			duration: Duration::from_secs(180),
			min_words: 20,
			max_attempts: 50,
			dice: DiceSet::classic()
		}
	}
}
