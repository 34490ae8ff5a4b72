//! String similarity used to order search results.

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// Only two rows of the dynamic-programming table are kept, sized by the
/// shorter input.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();
	let (short, long) = if a.len() > b.len() { (b, a) } else { (a, b) };

	let mut current: Vec<usize> = (0..=short.len()).collect();
	let mut previous = vec![0; short.len() + 1];

	for (i, &long_ch) in long.iter().enumerate() {
		std::mem::swap(&mut previous, &mut current);
		current[0] = i + 1;
		for (j, &short_ch) in short.iter().enumerate() {
			let insert = previous[j + 1] + 1;
			let remove = current[j] + 1;
			let change = previous[j] + usize::from(short_ch != long_ch);
			current[j + 1] = insert.min(remove).min(change);
		}
	}

	current[short.len()]
}

/// Rank `item` against `query`; lower is a better match.
///
/// The edit distance is offset by the item length so long items are not
/// punished for their size. When the query appears verbatim in the item the
/// score drops by the query length, minus a fraction of the item length
/// that grows with the match position, so earlier matches win ties.
#[must_use]
pub fn score(query: &str, item: &str) -> f64 {
	let query = query.to_lowercase();
	let item = item.to_lowercase();
	let item_len = item.chars().count();

	let mut score = levenshtein(&query, &item) as f64 - item_len as f64;

	// An empty item has no position to normalise by.
	if item_len > 0 {
		if let Some(byte_pos) = item.find(&query) {
			let position = item[..byte_pos].chars().count();
			score -= query.chars().count() as f64 - position as f64 / item_len as f64;
		}
	}

	score
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identical_strings_have_zero_distance() {
		for word in ["", "a", "kitten", "naïve café"] {
			assert_eq!(levenshtein(word, word), 0, "{word}");
		}
	}

	#[test]
	fn empty_side_costs_the_other_length() {
		assert_eq!(levenshtein("", "binary"), 6);
		assert_eq!(levenshtein("cipher", ""), 6);
		assert_eq!(levenshtein("", "héllo"), 5);
	}

	#[test]
	fn classic_distances() {
		assert_eq!(levenshtein("kitten", "sitting"), 3);
		assert_eq!(levenshtein("flaw", "lawn"), 2);
		assert_eq!(levenshtein("abc", "yabd"), 2);
	}

	#[test]
	fn distance_is_symmetric_and_obeys_triangle_inequality() {
		let words = ["", "abacus", "binary", "cipher", "bin", "abc", "acb"];
		for a in words {
			for b in words {
				assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a} / {b}");
				for c in words {
					assert!(
						levenshtein(a, c) <= levenshtein(a, b) + levenshtein(b, c),
						"{a} / {b} / {c}"
					);
				}
			}
		}
	}

	#[test]
	fn earlier_substring_match_scores_lower() {
		// Same length, same edit distance from the query, match position differs.
		let early = score("ab", "abxx");
		let late = score("ab", "xxab");
		assert!(early < late, "{early} should beat {late}");
	}

	#[test]
	fn substring_match_beats_near_miss() {
		assert!(score("bet", "beta") < score("bet", "gamma"));
		assert!(score("bet", "beta") < score("bet", "bxt"));
	}

	#[test]
	fn scoring_ignores_case() {
		assert_eq!(score("BET", "Beta"), score("bet", "beta"));
	}

	#[test]
	fn empty_item_gets_no_substring_bonus() {
		assert_eq!(score("", ""), 0.0);
		assert_eq!(score("abc", ""), 3.0);
	}
}
