//! # Scoring
//!
//! Points awarded for a word, by length.

/// Score a word. Only the length matters: 3–4 letters score 1, 5 score 2,
/// 6 score 3, 7 score 5, and 8 or more score 11. Anything shorter than 3
/// letters scores nothing.
///
/// # Arguments
///
/// * `word` - The word to score.
///
/// # Returns
///
/// The point value of the word.
#[inline]
#[must_use]
pub fn score(word: &str) -> u32
{
	match word.chars().count()
	{
		0 ..= 2 => 0,
		3 | 4 => 1,
		5 => 2,
		6 => 3,
		7 => 5,
		_ => 11
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::scoring::score;

	#[test]
	fn test_score_table()
	{
		let cases = [
			("", 0), ("AB", 0),
			("CAT", 1), ("CATS", 1),
			("HOUSE", 2), ("HOUSES", 3), ("HOUSING", 5),
			("HOUSINGS", 11), ("EXTRAORDINARY", 11)
		];
		for (word, expected) in cases
		{
			assert_eq!(score(word), expected, "{}", word);
		}
	}

	/// Scores never decrease as words grow.
	#[test]
	fn test_monotonic()
	{
		let scores = (0 .. 30)
			.map(|n| score(&"A".repeat(n)))
			.collect::<Vec<_>>();
		assert!(scores.windows(2).all(|w| w[0] <= w[1]));
	}
}
