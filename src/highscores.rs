//! # High scores
//!
//! The table of best round scores, saved as JSON between runs.

use std::{
	fs::File,
	io::{self, BufReader, BufWriter, ErrorKind, Write},
	path::Path
};

use log::debug;
use serde::{Deserialize, Serialize};

/// Number of entries in the table.
pub const TABLE_SIZE: usize = 10;

/// The best scores, highest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct HighScores
{
	/// At most [`TABLE_SIZE`] scores, in descending order.
	top: Vec<u32>
}

impl HighScores
{
	/// Construct an empty table.
	#[inline]
	pub fn new() -> Self
	{
		Self::default()
	}

	/// The scores, highest first.
	#[inline]
	#[must_use]
	pub fn scores(&self) -> &[u32]
	{
		&self.top
	}

	/// Record the score of a finished round. Zero scores are not recorded.
	///
	/// # Arguments
	///
	/// * `score` - The score.
	///
	/// # Returns
	///
	/// The rank of the new entry, starting at 1, or `None` if the score did
	/// not make the table.
	pub fn record(&mut self, score: u32) -> Option<usize>
	{
		if score == 0
		{
			return None
		}
		// Ties go below the existing entries.
		let index = self.top.partition_point(|&s| s >= score);
		if index >= TABLE_SIZE
		{
			return None
		}
		self.top.insert(index, score);
		self.top.truncate(TABLE_SIZE);
		debug!("high score {} at rank {}", score, index + 1);
		Some(index + 1)
	}

	/// Read the table from the given file.
	///
	/// # Arguments
	///
	/// * `path` - The JSON file.
	///
	/// # Returns
	///
	/// The table, or an empty table if the file does not exist.
	///
	/// # Errors
	///
	/// If the file exists but cannot be read or parsed, an error is returned.
	pub fn load<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = match File::open(path.as_ref())
		{
			Ok(file) => file,
			Err(e) if e.kind() == ErrorKind::NotFound =>
			{
				debug!("no high scores at {}", path.as_ref().display());
				return Ok(Self::new())
			},
			Err(e) => return Err(e)
		};
		let mut scores: Self = serde_json::from_reader(BufReader::new(file))?;
		// Hand-edited files may be unordered or overlong.
		scores.top.sort_unstable_by(|a, b| b.cmp(a));
		scores.top.retain(|&s| s > 0);
		scores.top.truncate(TABLE_SIZE);
		Ok(scores)
	}

	/// Write the table to the given file.
	///
	/// # Arguments
	///
	/// * `path` - The JSON file.
	///
	/// # Errors
	///
	/// If the file cannot be created or written, an error is returned.
	pub fn save<T: AsRef<Path>>(&self, path: T) -> Result<(), io::Error>
	{
		let file = File::create(path)?;
		let mut writer = BufWriter::new(file);
		serde_json::to_writer(&mut writer, self)?;
		writer.flush()
	}
}

#[cfg(test)]
mod test
{
	use std::fs;

	use tempfile::tempdir;

	use crate::highscores::{HighScores, TABLE_SIZE};

	#[test]
	fn test_record()
	{
		let mut scores = HighScores::new();
		assert_eq!(scores.record(0), None);
		assert!(scores.scores().is_empty());
		assert_eq!(scores.record(5), Some(1));
		assert_eq!(scores.record(9), Some(1));
		assert_eq!(scores.record(7), Some(2));
		assert_eq!(scores.record(7), Some(3));
		assert_eq!(scores.scores(), &[9, 7, 7, 5]);
	}

	/// The table keeps only the best ten.
	#[test]
	fn test_truncate()
	{
		let mut scores = HighScores::new();
		for score in 1 ..= 12
		{
			scores.record(score);
		}
		assert_eq!(scores.scores().len(), TABLE_SIZE);
		assert_eq!(scores.scores()[0], 12);
		assert_eq!(scores.scores()[TABLE_SIZE - 1], 3);
		assert_eq!(scores.record(2), None);
		assert_eq!(scores.record(3), None);
		assert_eq!(scores.record(4), Some(10));
		assert_eq!(scores.scores()[TABLE_SIZE - 1], 4);
	}

	#[test]
	fn test_save_and_load()
	{
		let dir = tempdir().unwrap();
		let path = dir.path().join("scores.json");
		assert_eq!(HighScores::load(&path).unwrap(), HighScores::new());
		let mut scores = HighScores::new();
		scores.record(3);
		scores.record(11);
		scores.save(&path).unwrap();
		assert_eq!(HighScores::load(&path).unwrap(), scores);
	}

	/// Unordered files are put back in order; broken files are errors.
	#[test]
	fn test_load_repairs_and_rejects()
	{
		let dir = tempdir().unwrap();
		let path = dir.path().join("scores.json");
		fs::write(&path, r#"{"top":[1,0,5,3]}"#).unwrap();
		assert_eq!(HighScores::load(&path).unwrap().scores(), &[5, 3, 1]);
		fs::write(&path, "not json").unwrap();
		assert!(HighScores::load(&path).is_err());
	}
}
