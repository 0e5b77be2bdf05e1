//! # Selection
//!
//! The interactive path tracker. It applies the solver's rules one cell at a
//! time as the player drags across the grid: consecutive cells must be
//! adjacent and no cell may be used twice. Retracing onto the second-to-last
//! cell undoes the last selection.

use fixedstr::str32;
use log::trace;

use crate::grid::{Grid, GridSize, Position};

/// The coarse state of a [`Selection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState
{
	/// Nothing is selected.
	Idle,

	/// At least one cell is selected.
	Building
}

/// The effect of a single [`select`](Selection::select).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange
{
	/// The path began at this cell.
	Started(Position),

	/// This cell was appended to the path.
	Extended(Position),

	/// This cell was removed from the end of the path.
	Retracted(Position),

	/// The target was off the grid, not adjacent, or already selected.
	Ignored
}

/// The path being built by the player, along with the state of the current
/// press.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Selection
{
	/// The size of the grid being selected from.
	size: GridSize,

	/// The selected cells, in order.
	path: Vec<Position>,

	/// Whether the pointer is currently pressed.
	is_pressed: bool,

	/// Whether a cell beyond the first was appended during the current press.
	has_dragged: bool
}

impl Selection
{
	/// Construct an idle selection for a grid of the given size.
	pub fn new(size: GridSize) -> Self
	{
		Self
		{
			size,
			path: Vec::with_capacity(size.cell_count()),
			is_pressed: false,
			has_dragged: false
		}
	}

	/// The coarse state of the selection.
	#[inline]
	#[must_use]
	pub fn state(&self) -> SelectionState
	{
		if self.path.is_empty() { SelectionState::Idle }
		else { SelectionState::Building }
	}

	/// The selected cells, in order.
	#[inline]
	#[must_use]
	pub fn path(&self) -> &[Position]
	{
		&self.path
	}

	/// Check if the given cell is selected.
	#[inline]
	#[must_use]
	pub fn contains(&self, position: Position) -> bool
	{
		self.path.contains(&position)
	}

	/// Apply a target cell to the path:
	///
	/// * When idle, any cell on the grid starts the path.
	/// * The second-to-last cell retracts the last cell.
	/// * An unselected cell adjacent to the last cell extends the path.
	/// * Anything else, including no cell at all, is ignored.
	///
	/// # Arguments
	///
	/// * `target` - The cell under the pointer, if any.
	///
	/// # Returns
	///
	/// What happened to the path.
	pub fn select(&mut self, target: Option<Position>) -> SelectionChange
	{
		let dimension = self.size.dimension();
		let target = match target
		{
			Some(t) if t.row < dimension && t.column < dimension => t,
			_ => return SelectionChange::Ignored
		};
		let change = match self.path.as_slice()
		{
			[] =>
			{
				self.path.push(target);
				SelectionChange::Started(target)
			},
			[.., previous, last] if *previous == target =>
			{
				let last = *last;
				self.path.pop();
				SelectionChange::Retracted(last)
			},
			[.., last] if last.is_adjacent(&target) && !self.contains(target) =>
			{
				self.path.push(target);
				SelectionChange::Extended(target)
			},
			_ => SelectionChange::Ignored
		};
		trace!("select {}: {:?}", target, change);
		change
	}

	/// Begin a press on the given cell.
	///
	/// # Arguments
	///
	/// * `target` - The cell under the pointer, if any.
	///
	/// # Returns
	///
	/// What happened to the path.
	pub fn press(&mut self, target: Option<Position>) -> SelectionChange
	{
		self.is_pressed = true;
		self.has_dragged = false;
		self.select(target)
	}

	/// Move the pressed pointer onto the given cell. Movement without a press
	/// is ignored.
	///
	/// # Arguments
	///
	/// * `target` - The cell under the pointer, if any.
	///
	/// # Returns
	///
	/// What happened to the path.
	pub fn drag(&mut self, target: Option<Position>) -> SelectionChange
	{
		if !self.is_pressed
		{
			return SelectionChange::Ignored
		}
		let change = self.select(target);
		if matches!(change, SelectionChange::Extended(_))
		{
			self.has_dragged = true;
		}
		change
	}

	/// End the current press.
	///
	/// # Returns
	///
	/// `true` if the path should be submitted now: a cell beyond the first was
	/// dragged onto during this press and the path still spans at least two
	/// cells. A single stationary press leaves the path for explicit
	/// submission.
	#[must_use]
	pub fn release(&mut self) -> bool
	{
		let submit = self.is_pressed && self.has_dragged && self.path.len() >= 2;
		self.is_pressed = false;
		self.has_dragged = false;
		submit
	}

	/// Empty the path and return to [`SelectionState::Idle`]. Any press in
	/// progress ends too, so pointer movement before the next press is
	/// ignored.
	pub fn clear(&mut self)
	{
		self.path.clear();
		self.is_pressed = false;
		self.has_dragged = false;
	}

	/// The letters along the path.
	///
	/// # Arguments
	///
	/// * `grid` - The grid being selected from.
	///
	/// # Returns
	///
	/// The candidate word.
	#[must_use]
	pub fn word(&self, grid: &Grid) -> str32
	{
		let mut word = str32::new();
		for &position in &self.path
		{
			if let Some(letter) = grid.get(position)
			{
				word.push_char(letter);
			}
		}
		word
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use proptest::prelude::*;

	use crate::{
		grid::{Grid, GridSize, Position},
		selection::{Selection, SelectionChange, SelectionState}
	};

	fn at(row: usize, column: usize) -> Option<Position>
	{
		Some(Position::new(row, column))
	}

	/// Walk through every transition of the state machine.
	#[test]
	fn test_transitions()
	{
		let mut selection = Selection::new(GridSize::Four);
		assert_eq!(selection.state(), SelectionState::Idle);
		assert_eq!(selection.select(None), SelectionChange::Ignored);
		assert_eq!(selection.select(at(4, 0)), SelectionChange::Ignored);
		assert_eq!(selection.state(), SelectionState::Idle);

		assert_eq!(
			selection.select(at(1, 1)),
			SelectionChange::Started(Position::new(1, 1))
		);
		assert_eq!(selection.state(), SelectionState::Building);
		// Same cell, non-adjacent cell: ignored.
		assert_eq!(selection.select(at(1, 1)), SelectionChange::Ignored);
		assert_eq!(selection.select(at(3, 3)), SelectionChange::Ignored);
		assert_eq!(
			selection.select(at(2, 2)),
			SelectionChange::Extended(Position::new(2, 2))
		);
		assert_eq!(
			selection.select(at(2, 1)),
			SelectionChange::Extended(Position::new(2, 1))
		);
		// Adjacent to the last cell, but already selected and not a retrace.
		assert_eq!(
			selection.path(),
			&[Position::new(1, 1), Position::new(2, 2), Position::new(2, 1)]
		);
		assert_eq!(selection.select(at(1, 1)), SelectionChange::Ignored);
		// Retrace onto the second-to-last cell.
		assert_eq!(
			selection.select(at(2, 2)),
			SelectionChange::Retracted(Position::new(2, 1))
		);
		assert_eq!(
			selection.select(at(1, 1)),
			SelectionChange::Retracted(Position::new(2, 2))
		);
		assert_eq!(selection.path(), &[Position::new(1, 1)]);
		// A single cell has no second-to-last cell to retrace onto.
		assert_eq!(selection.select(at(1, 1)), SelectionChange::Ignored);
		assert_eq!(selection.state(), SelectionState::Building);
		selection.clear();
		assert_eq!(selection.state(), SelectionState::Idle);
		assert!(selection.path().is_empty());
	}

	/// The word is read off the path in order.
	#[test]
	fn test_word()
	{
		let grid = "CATE/ORST/DOGS/NEWS".parse::<Grid>().unwrap();
		let mut selection = Selection::new(GridSize::Four);
		for target in [at(2, 0), at(2, 1), at(2, 2), at(1, 2)]
		{
			assert_ne!(selection.select(target), SelectionChange::Ignored);
		}
		assert_eq!(selection.word(&grid).as_str(), "DOGS");
		selection.clear();
		assert_eq!(selection.word(&grid).as_str(), "");
	}

	/// Dragging across several cells submits on release; a stationary press
	/// does not.
	#[test]
	fn test_auto_submit()
	{
		let mut selection = Selection::new(GridSize::Four);
		selection.press(at(0, 0));
		assert!(!selection.release());
		assert_eq!(selection.path().len(), 1);

		// Pressing again on an adjacent cell extends the path, but that is a
		// tap, not a drag.
		selection.press(at(0, 1));
		assert_eq!(selection.path().len(), 2);
		assert!(!selection.release());

		selection.clear();
		selection.press(at(0, 0));
		selection.drag(at(0, 0));
		selection.drag(at(1, 1));
		selection.drag(at(2, 2));
		assert!(selection.release());
		assert_eq!(selection.path().len(), 3);

		// Dragging out and retracing back to one cell is not a submission.
		selection.clear();
		selection.press(at(0, 0));
		selection.drag(at(0, 1));
		selection.drag(at(0, 0));
		assert_eq!(selection.path().len(), 1);
		assert!(!selection.release());

		// Movement without a press does nothing.
		selection.clear();
		assert_eq!(selection.drag(at(0, 0)), SelectionChange::Ignored);
		assert!(!selection.release());
	}

	/// Clearing during a held press ends the press: the rest of the drag
	/// neither rebuilds a path nor submits on release.
	#[test]
	fn test_clear_ends_press()
	{
		let mut selection = Selection::new(GridSize::Four);
		selection.press(at(0, 0));
		selection.drag(at(0, 1));
		selection.drag(at(0, 2));
		selection.clear();
		assert_eq!(selection.drag(at(0, 3)), SelectionChange::Ignored);
		assert_eq!(selection.drag(at(1, 3)), SelectionChange::Ignored);
		assert!(selection.path().is_empty());
		assert!(!selection.release());
		assert_eq!(selection.state(), SelectionState::Idle);

		// A fresh press works as usual afterwards.
		selection.press(at(1, 1));
		selection.drag(at(2, 2));
		assert!(selection.release());
	}

	proptest!
	{
		/// However the pointer wanders, the path stays duplicate-free and
		/// adjacency-chained, and retraction removes exactly the last cell.
		#[test]
		fn prop_path_invariants(
			targets in prop::collection::vec(
				prop::option::weighted(0.9, (0usize .. 6, 0usize .. 6)),
				0 .. 200
			)
		)
		{
			let mut selection = Selection::new(GridSize::Five);
			for target in targets
			{
				let before = selection.path().to_vec();
				let target = target.map(|(r, c)| Position::new(r, c));
				match selection.select(target)
				{
					SelectionChange::Retracted(last) =>
					{
						prop_assert!(before.len() >= 2);
						prop_assert_eq!(Some(&last), before.last());
						prop_assert_eq!(target, Some(before[before.len() - 2]));
						prop_assert_eq!(selection.path(), &before[.. before.len() - 1]);
					},
					SelectionChange::Ignored =>
						prop_assert_eq!(selection.path(), before.as_slice()),
					SelectionChange::Started(p) =>
					{
						prop_assert!(before.is_empty());
						prop_assert_eq!(selection.path(), &[p]);
					},
					SelectionChange::Extended(p) =>
					{
						prop_assert_eq!(selection.path().last(), Some(&p));
						prop_assert_eq!(selection.path().len(), before.len() + 1);
					}
				}
				let path = selection.path();
				for pair in path.windows(2)
				{
					prop_assert!(pair[0].is_adjacent(&pair[1]));
				}
				for (i, p) in path.iter().enumerate()
				{
					prop_assert!(!path[i + 1 ..].contains(p));
					prop_assert!(p.row < 5 && p.column < 5);
				}
			}
		}
	}
}
