//! # Grid
//!
//! The letter grid, its coordinates, and the adjacency rule shared by the
//! solver and the selection tracker: two cells are adjacent when they are a
//! king's move apart.

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	ops::Index,
	str::FromStr
};

////////////////////////////////////////////////////////////////////////////////
//                                Grid sizes.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The supported grid dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GridSize
{
	/// A 4×4 grid, rolled from the base dice.
	#[default]
	Four,

	/// A 5×5 grid, rolled from the base and extended dice.
	Five
}

impl GridSize
{
	/// The length of one side of the grid.
	#[inline]
	#[must_use]
	pub const fn dimension(self) -> usize
	{
		match self
		{
			Self::Four => 4,
			Self::Five => 5
		}
	}

	/// The number of cells in the grid.
	#[inline]
	#[must_use]
	pub const fn cell_count(self) -> usize
	{
		self.dimension() * self.dimension()
	}
}

impl TryFrom<usize> for GridSize
{
	type Error = GridError;

	fn try_from(value: usize) -> Result<Self, Self::Error>
	{
		match value
		{
			4 => Ok(Self::Four),
			5 => Ok(Self::Five),
			_ => Err(GridError::UnsupportedSize(value))
		}
	}
}

impl Display for GridSize
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{0}×{0}", self.dimension())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Positions.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The coordinates of a cell. The origin is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position
{
	/// The row, counting down from the top.
	pub row: usize,

	/// The column, counting right from the left edge.
	pub column: usize
}

impl Position
{
	/// Construct a position.
	#[inline]
	#[must_use]
	pub const fn new(row: usize, column: usize) -> Self
	{
		Self { row, column }
	}

	/// Check if `other` is a king's move away from this position, i.e., the
	/// Chebyshev distance between the two is exactly 1. A position is not
	/// adjacent to itself.
	///
	/// # Arguments
	///
	/// * `other` - The other position.
	///
	/// # Returns
	///
	/// `true` if the positions are adjacent, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_adjacent(&self, other: &Position) -> bool
	{
		self.row.abs_diff(other.row).max(self.column.abs_diff(other.column))
			== 1
	}
}

impl Display for Position
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "({}, {})", self.row, self.column)
	}
}

/// The eight king-move offsets, clockwise from north-west. The zero offset is
/// deliberately absent.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
	(-1, -1), (-1, 0), (-1, 1),
	(0, 1),
	(1, 1), (1, 0), (1, -1),
	(0, -1)
];

////////////////////////////////////////////////////////////////////////////////
//                                   Grids.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A fully populated square grid of uppercase ASCII letters, linearized in
/// row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Grid
{
	/// The dimensions of the grid.
	size: GridSize,

	/// The letters of the grid, row by row.
	letters: Vec<char>
}

impl Grid
{
	/// Construct a grid from the given letters, in row-major order.
	///
	/// # Arguments
	///
	/// * `size` - The dimensions of the grid.
	/// * `letters` - Exactly `size.cell_count()` ASCII letters, in any case.
	///
	/// # Returns
	///
	/// The grid, with every letter in uppercase.
	///
	/// # Errors
	///
	/// * [`GridError::WrongCellCount`] if the number of letters does not match
	///   the size.
	/// * [`GridError::InvalidLetter`] if a letter is not ASCII alphabetic.
	pub fn new<I>(size: GridSize, letters: I) -> Result<Self, GridError>
		where I: IntoIterator<Item = char>
	{
		let letters = letters.into_iter()
			.map(|c| {
				if c.is_ascii_alphabetic() { Ok(c.to_ascii_uppercase()) }
				else { Err(GridError::InvalidLetter(c)) }
			})
			.collect::<Result<Vec<_>, _>>()?;
		if letters.len() != size.cell_count()
		{
			return Err(GridError::WrongCellCount {
				expected: size.cell_count(),
				actual: letters.len()
			})
		}
		Ok(Self { size, letters })
	}

	/// The dimensions of the grid.
	#[inline]
	#[must_use]
	pub fn size(&self) -> GridSize
	{
		self.size
	}

	/// The length of one side of the grid.
	#[inline]
	#[must_use]
	pub fn dimension(&self) -> usize
	{
		self.size.dimension()
	}

	/// Check if the position lies on the grid.
	#[inline]
	#[must_use]
	pub fn contains(&self, position: Position) -> bool
	{
		position.row < self.dimension() && position.column < self.dimension()
	}

	/// Get the letter at the given position, or `None` if the position is off
	/// the grid.
	#[inline]
	#[must_use]
	pub fn get(&self, position: Position) -> Option<char>
	{
		if self.contains(position)
		{
			Some(self.letters[self.index_of(position)])
		}
		else
		{
			None
		}
	}

	/// Iterate over every position of the grid, in row-major order.
	pub fn positions(&self) -> impl Iterator<Item = Position>
	{
		let n = self.dimension();
		(0..n * n).map(move |i| Position::new(i / n, i % n))
	}

	/// Iterate over the letters of the grid, in row-major order.
	pub fn letters(&self) -> impl Iterator<Item = char> + '_
	{
		self.letters.iter().copied()
	}

	/// Iterate over the in-bounds neighbours of the given position.
	///
	/// # Arguments
	///
	/// * `position` - The centre position.
	///
	/// # Returns
	///
	/// The up to 8 positions that are adjacent to `position`.
	pub fn neighbours(&self, position: Position)
		-> impl Iterator<Item = Position> + '_
	{
		DIRECTIONS.iter()
			.filter_map(move |&direction| self.step(position, direction))
	}

	/// Take a single step from `position` in the given direction, answering
	/// `None` if that would leave the grid.
	#[inline]
	pub(crate) fn step(
		&self,
		position: Position,
		(dr, dc): (isize, isize)
	) -> Option<Position>
	{
		let row = position.row.checked_add_signed(dr)?;
		let column = position.column.checked_add_signed(dc)?;
		let next = Position::new(row, column);
		self.contains(next).then_some(next)
	}

	/// The row-major index of the given position. The position must be on the
	/// grid.
	#[inline]
	#[must_use]
	pub(crate) fn index_of(&self, position: Position) -> usize
	{
		position.row * self.dimension() + position.column
	}

	/// Find one legal path that spells the given word: consecutive cells are
	/// adjacent and no cell is used twice.
	///
	/// # Arguments
	///
	/// * `word` - The word to trace, in any case.
	///
	/// # Returns
	///
	/// A path spelling `word`, or `None` if the word cannot be formed.
	#[must_use]
	pub fn trace(&self, word: &str) -> Option<Vec<Position>>
	{
		let word = word.chars()
			.map(|c| c.to_ascii_uppercase())
			.collect::<Vec<_>>();
		if word.is_empty()
		{
			return None
		}
		let mut path = Vec::with_capacity(word.len());
		let mut visited = vec![false; self.letters.len()];
		self.positions()
			.find(|&start| self.trace_from(start, &word, &mut path, &mut visited))
			.map(|_| path)
	}

	/// Depth-first helper for [`trace`](Self::trace). On success, `path` holds
	/// the complete route; on failure, `path` and `visited` are restored.
	fn trace_from(
		&self,
		position: Position,
		word: &[char],
		path: &mut Vec<Position>,
		visited: &mut [bool]
	) -> bool
	{
		let index = self.index_of(position);
		if visited[index] || self.letters[index] != word[path.len()]
		{
			return false
		}
		path.push(position);
		if path.len() == word.len()
		{
			return true
		}
		visited[index] = true;
		let found = DIRECTIONS.iter()
			.filter_map(|&direction| self.step(position, direction))
			.any(|next| self.trace_from(next, word, path, visited));
		visited[index] = false;
		if !found
		{
			path.pop();
		}
		found
	}
}

impl Index<Position> for Grid
{
	type Output = char;

	#[inline]
	fn index(&self, position: Position) -> &Self::Output
	{
		&self.letters[self.index_of(position)]
	}
}

impl FromStr for Grid
{
	type Err = GridError;

	/// Parse a grid from its rows, separated by whitespace, `/`, or `,`, e.g.,
	/// `CATE/ORST/DOGS/NEWS`. The size is inferred from the number of rows.
	fn from_str(s: &str) -> Result<Self, Self::Err>
	{
		let rows = s
			.split(|c: char| c.is_whitespace() || c == '/' || c == ',')
			.filter(|row| !row.is_empty())
			.collect::<Vec<_>>();
		let size = GridSize::try_from(rows.len())?;
		if let Some(row) = rows.iter().find(|row| row.chars().count() != rows.len())
		{
			return Err(GridError::RaggedRow(row.to_string()))
		}
		Self::new(size, rows.iter().flat_map(|row| row.chars()))
	}
}

impl Display for Grid
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for row in self.letters.chunks(self.dimension())
		{
			writeln!(f, "{}", row.iter().collect::<String>())?;
		}
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Errors.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of [`Grid`] construction errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError
{
	/// Only 4×4 and 5×5 grids are supported.
	UnsupportedSize(usize),

	/// The number of letters does not fill the grid exactly.
	WrongCellCount {
		/// The number of cells in the grid.
		expected: usize,

		/// The number of letters supplied.
		actual: usize
	},

	/// A row of a parsed grid does not match the number of rows.
	RaggedRow(String),

	/// A cell must hold a single ASCII letter.
	InvalidLetter(char)
}

impl Display for GridError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::UnsupportedSize(n) =>
				write!(f, "unsupported grid size: {} (expected 4 or 5)", n),
			Self::WrongCellCount { expected, actual } =>
				write!(f, "expected {} letters, found {}", expected, actual),
			Self::RaggedRow(row) =>
				write!(f, "row has the wrong length: {}", row),
			Self::InvalidLetter(c) => write!(f, "not a letter: {:?}", c)
		}
	}
}

impl Error for GridError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::grid::{Grid, GridError, GridSize, Position};

	/// Adjacency is exactly Chebyshev distance 1, for every pair of positions
	/// on a 5×5 grid.
	#[test]
	fn test_is_adjacent()
	{
		for a in 0..25
		{
			for b in 0..25
			{
				let p = Position::new(a / 5, a % 5);
				let q = Position::new(b / 5, b % 5);
				let dr = (p.row as i32 - q.row as i32).abs();
				let dc = (p.column as i32 - q.column as i32).abs();
				assert_eq!(
					p.is_adjacent(&q),
					dr.max(dc) == 1,
					"{} vs {}", p, q
				);
			}
		}
	}

	/// Corners have 3 neighbours, edges 5, and interior cells 8.
	#[test]
	fn test_neighbours()
	{
		let grid = "abcd/efgh/ijkl/mnop".parse::<Grid>().unwrap();
		let count = |r, c| grid.neighbours(Position::new(r, c)).count();
		assert_eq!(count(0, 0), 3);
		assert_eq!(count(3, 3), 3);
		assert_eq!(count(0, 1), 5);
		assert_eq!(count(2, 0), 5);
		assert_eq!(count(1, 1), 8);
		assert_eq!(count(2, 2), 8);
		for position in grid.positions()
		{
			for neighbour in grid.neighbours(position)
			{
				assert!(position.is_adjacent(&neighbour));
				assert!(grid.contains(neighbour));
			}
		}
	}

	/// Parsing accepts several row separators and normalizes case.
	#[test]
	fn test_parse()
	{
		let grid = "cate/orst/dogs/news".parse::<Grid>().unwrap();
		assert_eq!(grid.size(), GridSize::Four);
		assert_eq!(grid[Position::new(0, 0)], 'C');
		assert_eq!(grid[Position::new(3, 3)], 'S');
		assert_eq!(grid.to_string(), "CATE\nORST\nDOGS\nNEWS\n");
		assert_eq!(grid, "CATE ORST,DOGS\nNEWS".parse().unwrap());
		let grid = "abcde/fghij/klmno/pqrst/uvwxy".parse::<Grid>().unwrap();
		assert_eq!(grid.size(), GridSize::Five);
		assert_eq!(grid.get(Position::new(4, 4)), Some('Y'));
		assert_eq!(grid.get(Position::new(5, 0)), None);
	}

	/// Malformed grids are rejected with a specific error.
	#[test]
	fn test_parse_errors()
	{
		assert_eq!(
			"abc/def/ghi".parse::<Grid>(),
			Err(GridError::UnsupportedSize(3))
		);
		assert_eq!(
			"abcd/efgh/ijk/mnop".parse::<Grid>(),
			Err(GridError::RaggedRow("ijk".to_string()))
		);
		assert_eq!(
			"abcd/efgh/ij1l/mnop".parse::<Grid>(),
			Err(GridError::InvalidLetter('1'))
		);
		assert_eq!(
			Grid::new(GridSize::Five, "abcd".chars()),
			Err(GridError::WrongCellCount { expected: 25, actual: 4 })
		);
	}

	/// Tracing finds legal paths and refuses to reuse cells.
	#[test]
	fn test_trace()
	{
		let grid = "cate/orst/dogs/news".parse::<Grid>().unwrap();
		let path = grid.trace("dogs").unwrap();
		assert_eq!(path.len(), 4);
		assert_eq!(path[0], Position::new(2, 0));
		assert_eq!(path[1], Position::new(2, 1));
		assert_eq!(path[2], Position::new(2, 2));
		for pair in path.windows(2)
		{
			assert!(pair[0].is_adjacent(&pair[1]));
		}
		assert!(grid.trace("CAT").is_some());
		// There is only one C, so it cannot be used twice.
		assert!(grid.trace("CAC").is_none());
		// R and O are adjacent, but no T touches either O.
		assert!(grid.trace("ROT").is_none());
		assert!(grid.trace("").is_none());
	}
}
