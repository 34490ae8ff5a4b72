//! Ordering of search results around the middle of the list.

use std::collections::VecDeque;

use crate::distance::score;

/// Items reordered for a query, with the index of the best match.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
	pub items: Vec<String>,
	pub selected: usize,
}

/// Score every item against `query` and lay the results out so the best
/// match sits in the middle of the list.
///
/// Sorted entries are dealt alternately to the back and the front of the
/// output, starting with the back: the best match ends up at `len / 2`, the
/// runner-up just above it, the third just below, and so on. Centring the
/// selection keeps the viewport scrolled onto the best results without any
/// extra scroll bookkeeping.
#[must_use]
pub fn rank(query: &str, items: &[String]) -> Ranked {
	let mut entries: Vec<(f64, &String)> = items
		.iter()
		.map(|item| (score(query, item), item))
		.collect();
	// `sort_by` is stable, so equal scores keep their input order.
	entries.sort_by(|a, b| a.0.total_cmp(&b.0));

	let mut dealt = VecDeque::with_capacity(entries.len());
	for (index, (_, item)) in entries.into_iter().enumerate() {
		if index % 2 == 0 {
			dealt.push_back(item.clone());
		} else {
			dealt.push_front(item.clone());
		}
	}

	let items: Vec<String> = dealt.into();
	let selected = items.len() / 2;
	Ranked { items, selected }
}
