//! Off-screen copy of the full item list.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::style::{Emphasis, MenuStyle};

/// Logical dimensions of a pad: one row per item plus one spare, and one
/// column wider than the widest item (never narrower than two).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadSize {
	pub rows: usize,
	pub cols: usize,
}

impl PadSize {
	#[must_use]
	pub fn for_items(items: &[String]) -> Self {
		let widest = items.iter().map(|item| item.width()).max().unwrap_or(0);
		Self {
			rows: items.len() + 1,
			cols: (widest + 1).max(2),
		}
	}
}

#[derive(Debug, Clone)]
struct PadRow {
	text: String,
	emphasis: Emphasis,
}

/// Scratch surface holding every item row, of which the viewport copies a
/// window onto the terminal.
///
/// Rows are stored as text plus emphasis rather than as cells, so a long
/// list costs one string per item regardless of its width.
#[derive(Debug, Clone)]
pub struct Pad {
	size: PadSize,
	rows: Vec<PadRow>,
}

impl Pad {
	#[must_use]
	pub fn new(size: PadSize) -> Self {
		let blank = PadRow {
			text: String::new(),
			emphasis: Emphasis::Normal,
		};
		Self {
			size,
			rows: vec![blank; size.rows],
		}
	}

	#[must_use]
	pub fn size(&self) -> PadSize {
		self.size
	}

	/// Overwrite `row`. Rows outside the pad are ignored.
	pub fn write(&mut self, row: usize, text: &str, emphasis: Emphasis) {
		if let Some(slot) = self.rows.get_mut(row) {
			slot.text.clear();
			slot.text.push_str(text);
			slot.emphasis = emphasis;
		}
	}

	#[must_use]
	pub fn emphasis(&self, row: usize) -> Option<Emphasis> {
		self.rows.get(row).map(|row| row.emphasis)
	}

	/// Whether the leading rows spell out exactly `items`.
	#[must_use]
	pub fn holds(&self, items: &[String]) -> bool {
		self.size.rows == items.len() + 1
			&& self.rows.iter().zip(items).all(|(row, item)| row.text == *item)
	}

	/// Copy rows starting at `src_row` into `dst`, one pad row per
	/// destination line, clipped to the destination width.
	pub fn copy_onto(&self, buf: &mut Buffer, src_row: usize, dst: Rect, style: &MenuStyle) {
		let rows = self.rows.iter().skip(src_row).take(usize::from(dst.height));
		for (offset, row) in (0u16..).zip(rows) {
			buf.set_stringn(
				dst.x,
				dst.y + offset,
				&row.text,
				usize::from(dst.width),
				style.style_for(row.emphasis),
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn strings(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	#[test]
	fn size_tracks_count_and_widest_item() {
		assert_eq!(
			PadSize::for_items(&strings(&["ab", "abcdef"])),
			PadSize { rows: 3, cols: 7 }
		);
		assert_eq!(PadSize::for_items(&[]), PadSize { rows: 1, cols: 2 });
		assert_eq!(
			PadSize::for_items(&strings(&["日本"])),
			PadSize { rows: 2, cols: 5 }
		);
	}

	#[test]
	fn copy_clips_to_destination() {
		let items = strings(&["alpha", "beta", "gamma"]);
		let mut pad = Pad::new(PadSize::for_items(&items));
		for (row, item) in items.iter().enumerate() {
			pad.write(row, item, Emphasis::Normal);
		}
		assert!(pad.holds(&items));

		let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
		pad.copy_onto(&mut buf, 1, Rect::new(1, 0, 3, 2), &MenuStyle::default());
		assert_eq!(buf, Buffer::with_lines([" bet", " gam"]));
	}

	#[test]
	fn writes_outside_the_pad_are_dropped() {
		let mut pad = Pad::new(PadSize { rows: 2, cols: 4 });
		pad.write(5, "nope", Emphasis::Selected);
		assert_eq!(pad.emphasis(5), None);
		assert_eq!(pad.emphasis(0), Some(Emphasis::Normal));
	}
}
