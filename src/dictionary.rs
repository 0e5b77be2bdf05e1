//! # Dictionary
//!
//! Herein is support for dictionary construction and lookup. The solver, the
//! generator, and the submission flow never reach for a global word list;
//! they are handed a [`Lexicon`], which answers exactly two questions: is
//! this a word, and does any word begin with this prefix? The stock
//! implementation is [`Dictionary`], a prefix tree of uppercase words.

use std::{
	fmt::Debug,
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{trace, warn};
use pfx::PrefixTreeSet;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                  Lexicon.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The word lookup capability required by the engine. Implementations must
/// agree with the grid on case: every query is uppercase.
pub trait Lexicon: Debug
{
	/// Check if the lexicon contains the given word.
	///
	/// # Arguments
	///
	/// * `word` - The uppercase word to check.
	///
	/// # Returns
	///
	/// `true` if the lexicon contains the word, `false` otherwise.
	fn contains(&self, word: &str) -> bool;

	/// Check if the lexicon contains a word that begins with the given prefix.
	/// A word is considered a prefix of itself.
	///
	/// # Arguments
	///
	/// * `prefix` - The uppercase prefix to check.
	///
	/// # Returns
	///
	/// `true` if some word begins with `prefix`, `false` otherwise.
	fn contains_prefix(&self, prefix: &str) -> bool;
}

////////////////////////////////////////////////////////////////////////////////
//                                Dictionary.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is a [`PrefixTreeSet`] of uppercase words.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary(PrefixTreeSet<String>);

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty dictionary.
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the dictionary is empty.
	///
	/// # Returns
	///
	/// `true` if the dictionary is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Populate the dictionary with the given words. Words are normalized to
	/// uppercase. Blank entries, and entries with anything other than
	/// alphabetic characters, cannot appear on a grid and are skipped.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			let word = word.as_ref().trim();
			if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic())
			{
				continue
			}
			self.0.insert(word.to_ascii_uppercase());
		}
	}

	/// Open a dictionary with the given name. Only the specified directory will
	/// be searched. `name` denotes the dictionary file, sans the extension. If
	/// a binary dictionary (`<name>.dict`) exists _and_ is newer than the text
	/// file (`<name>.txt`), it will be read; otherwise, the text file will be
	/// read and a binary dictionary will be written to speed up future reads.
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the binary file contains invalid data, an
	///   [`ErrorKind::InvalidData`] is returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let dict_path = dir.as_ref().join(format!("{}.dict", name));
		let txt_path = dir.as_ref().join(format!("{}.txt", name));
		// A missing binary file, a missing text file, or an unreadable
		// timestamp all mean the same thing: go back to the text file.
		let binary_is_fresh = dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| dict_time > txt_time)
			})
			.unwrap_or(false);
		if binary_is_fresh
		{
			let dictionary = Self::deserialize_from_file(&dict_path)?;
			trace!("Read binary dictionary: {}", dict_path.display());
			return Ok(dictionary)
		}
		let dictionary = Self::read_from_file(&txt_path)?;
		trace!("Read text dictionary: {}", txt_path.display());
		match dictionary.serialize_to_file(&dict_path)
		{
			Ok(_) => trace!("Wrote binary dictionary: {}", dict_path.display()),
			Err(e) => warn!(
				"Failed to write binary dictionary: {}: {}",
				dict_path.display(),
				e
			)
		}
		Ok(dictionary)
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let words = reader.lines().collect::<Result<Vec<_>, _>>()?;
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary deserialized from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let dictionary = bincode::deserialize(&content)
			.map_err(|_e| ErrorKind::InvalidData)?;
		Ok(dictionary)
	}

	/// Serialize the dictionary to the given file. The dictionary is serialized
	/// in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be created or written, an error is returned.
	/// * If the dictionary cannot be encoded, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let content =
			bincode::serialize(self).map_err(|_e| ErrorKind::InvalidData)?;
		file.write_all(&content)?;
		Ok(())
	}
}

impl Lexicon for Dictionary
{
	#[inline]
	fn contains(&self, word: &str) -> bool { self.0.contains(word) }

	#[inline]
	fn contains_prefix(&self, prefix: &str) -> bool
	{
		self.0.contains_prefix(prefix)
	}
}

impl<T: AsRef<str>> FromIterator<T> for Dictionary
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self
	{
		let words = iter.into_iter().collect::<Vec<_>>();
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		dictionary
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
