//! Maps a selection onto a bounded, scrolled terminal region.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Clear, Widget};
use tpick_core::{MenuError, SelectionState};

use crate::pad::{Pad, PadSize};
use crate::style::{Emphasis, MenuStyle};

/// Smallest surface the menu will draw on.
pub const MIN_ROWS: u16 = 2;
pub const MIN_COLS: u16 = 4;

/// Dimensions worked out for one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
	/// Number of items.
	pub total_rows: usize,
	/// Display width of the widest item.
	pub total_cols: usize,
	/// Item rows copied onto the surface.
	pub visible_rows: usize,
	/// Columns copied onto the surface.
	pub visible_cols: usize,
	/// First item row shown.
	pub scroll_offset: usize,
}

/// How much of the pad the last render had to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
	/// Every row was written, after the items changed.
	Full,
	/// Only the old and new highlighted rows were rewritten.
	Highlight,
	Unchanged,
}

/// First item row to show so the selection sits mid-screen, without
/// scrolling before the first item or past the last one.
///
/// One surface row is taken by the title, hence the `+ 1` on the upper bound.
#[must_use]
pub fn scroll_offset(selected: usize, len: usize, surface_rows: usize) -> usize {
	let max_offset = (len + 1).saturating_sub(surface_rows);
	selected.saturating_sub(surface_rows / 2).min(max_offset)
}

/// Draws a [`SelectionState`] onto a rectangle of a ratatui buffer.
///
/// The renderer keeps a [`Pad`] with every item between frames. The pad is
/// rebuilt when its size changes and fully repainted when the items change;
/// otherwise only the rows whose highlight moved are rewritten.
#[derive(Debug, Clone, Default)]
pub struct ViewportRenderer {
	style: MenuStyle,
	pad: Option<Pad>,
	highlighted: Option<usize>,
	last_repaint: Option<Repaint>,
}

impl ViewportRenderer {
	#[must_use]
	pub fn new(style: MenuStyle) -> Self {
		Self {
			style,
			..Self::default()
		}
	}

	/// What the most recent successful render did to the pad.
	#[must_use]
	pub fn last_repaint(&self) -> Option<Repaint> {
		self.last_repaint
	}

	/// Drop the cached pad so the next render starts from scratch.
	pub fn invalidate(&mut self) {
		self.pad = None;
		self.highlighted = None;
	}

	/// Draw `state` into `area` of `buf`.
	pub fn render(
		&mut self,
		state: &SelectionState,
		area: Rect,
		buf: &mut Buffer,
	) -> Result<Geometry, MenuError> {
		if area.height < MIN_ROWS || area.width < MIN_COLS {
			return Err(MenuError::TooSmall {
				rows: area.height,
				cols: area.width,
			});
		}

		let items = state.items();
		let selected = state.selected();
		let repaint = self.sync_pad(items, selected);
		self.last_repaint = Some(repaint);
		let Some(pad) = self.pad.as_ref() else {
			return Ok(Geometry::default());
		};
		let size = pad.size();

		Clear.render(area, buf);
		buf.set_stringn(
			area.x + 1,
			area.y,
			state.title(),
			usize::from(area.width - 1),
			self.style.style_for(Emphasis::Title),
		);

		let rows = usize::from(area.height);
		let cols = usize::from(area.width);
		let offset = scroll_offset(selected, items.len(), rows);
		let visible_rows = (rows - 1).min(items.len().saturating_sub(offset));
		let visible_cols = (cols - 1).min(size.cols - 1);

		let window = Rect::new(
			area.x + 1,
			area.y + 1,
			u16::try_from(visible_cols).unwrap_or(u16::MAX),
			u16::try_from(visible_rows).unwrap_or(u16::MAX),
		);
		pad.copy_onto(buf, offset, window, &self.style);

		Ok(Geometry {
			total_rows: items.len(),
			total_cols: size.cols - 1,
			visible_rows,
			visible_cols,
			scroll_offset: offset,
		})
	}

	fn sync_pad(&mut self, items: &[String], selected: usize) -> Repaint {
		let size = PadSize::for_items(items);
		let cached = self
			.pad
			.take()
			.filter(|pad| pad.size() == size && pad.holds(items));

		let (pad, repaint) = match cached {
			Some(pad) if self.highlighted == Some(selected) || items.is_empty() => {
				(pad, Repaint::Unchanged)
			}
			Some(mut pad) => {
				if let Some(previous) = self.highlighted {
					if let Some(item) = items.get(previous) {
						pad.write(previous, item, Emphasis::Normal);
					}
				}
				if let Some(item) = items.get(selected) {
					pad.write(selected, item, Emphasis::Selected);
				}
				(pad, Repaint::Highlight)
			}
			None => {
				log::trace!("repainting pad for {} items ({size:?})", items.len());
				let mut pad = Pad::new(size);
				for (row, item) in items.iter().enumerate() {
					let emphasis = if row == selected {
						Emphasis::Selected
					} else {
						Emphasis::Normal
					};
					pad.write(row, item, emphasis);
				}
				(pad, Repaint::Full)
			}
		};

		self.pad = Some(pad);
		self.highlighted = (!items.is_empty()).then_some(selected);
		repaint
	}
}

#[cfg(test)]
mod tests {
	use ratatui::style::Modifier;
	use tpick_core::Keymap;

	use super::*;

	fn numbered(count: usize) -> Vec<String> {
		(0..count).map(|i| format!("item-{i:02}")).collect()
	}

	fn state(items: Vec<String>, selected: usize) -> SelectionState {
		SelectionState::new(items, "menu", Keymap::navigation()).with_selected(selected)
	}

	fn rows(buf: &Buffer) -> Vec<String> {
		(0..buf.area.height)
			.map(|y| {
				(0..buf.area.width)
					.map(|x| buf[(x, y)].symbol())
					.collect::<String>()
			})
			.collect()
	}

	fn draw(renderer: &mut ViewportRenderer, state: &SelectionState, area: Rect) -> Buffer {
		let mut buf = Buffer::empty(area);
		renderer.render(state, area, &mut buf).expect("render");
		buf
	}

	#[test]
	fn scroll_offset_centres_and_clamps() {
		assert_eq!(scroll_offset(15, 20, 5), 13);
		assert_eq!(scroll_offset(15, 20, 5), (15 - 2).min(20 - 5 + 1));
		assert_eq!(scroll_offset(0, 20, 5), 0);
		assert_eq!(scroll_offset(1, 20, 5), 0);
		assert_eq!(scroll_offset(19, 20, 5), 16);
		assert_eq!(scroll_offset(2, 3, 10), 0);
		assert_eq!(scroll_offset(0, 0, 2), 0);
	}

	#[test]
	fn rejects_surfaces_below_the_minimum() {
		let mut renderer = ViewportRenderer::default();
		let menu = state(numbered(3), 0);
		for (width, height) in [(3, 5), (10, 1), (0, 0)] {
			let area = Rect::new(0, 0, width, height);
			let mut buf = Buffer::empty(area);
			assert_eq!(
				renderer.render(&menu, area, &mut buf),
				Err(MenuError::TooSmall {
					rows: height,
					cols: width
				})
			);
		}
		let area = Rect::new(0, 0, MIN_COLS, MIN_ROWS);
		assert!(renderer.render(&menu, area, &mut Buffer::empty(area)).is_ok());
	}

	#[test]
	fn window_follows_the_selection() {
		let mut renderer = ViewportRenderer::default();
		let menu = state(numbered(20), 15);
		let area = Rect::new(0, 0, 12, 5);
		let mut buf = Buffer::empty(area);
		let geometry = renderer.render(&menu, area, &mut buf).expect("render");

		assert_eq!(
			geometry,
			Geometry {
				total_rows: 20,
				total_cols: 7,
				visible_rows: 4,
				visible_cols: 7,
				scroll_offset: 13,
			}
		);
		insta::assert_debug_snapshot!(rows(&buf), @r#"
[
    " menu       ",
    " item-13    ",
    " item-14    ",
    " item-15    ",
    " item-16    ",
]
"#);

		assert!(buf[(1, 0)].modifier.contains(Modifier::BOLD));
		assert!(buf[(1, 3)].modifier.contains(Modifier::REVERSED));
		assert!(buf[(7, 3)].modifier.contains(Modifier::REVERSED));
		assert!(!buf[(8, 3)].modifier.contains(Modifier::REVERSED));
		assert!(!buf[(1, 2)].modifier.contains(Modifier::REVERSED));
	}

	#[test]
	fn narrow_surface_clips_items_and_title() {
		let mut renderer = ViewportRenderer::default();
		let mut menu = state(numbered(2), 0);
		menu.set_title("a long title");
		let buf = draw(&mut renderer, &menu, Rect::new(0, 0, 5, 3));
		assert_eq!(rows(&buf), [" a lo", " item", " item"]);
	}

	#[test]
	fn short_list_leaves_trailing_rows_blank() {
		let mut renderer = ViewportRenderer::default();
		let menu = state(vec!["abacus".into(), "binary".into()], 1);
		let area = Rect::new(0, 0, 8, 5);
		let mut buf = Buffer::empty(area);
		let geometry = renderer.render(&menu, area, &mut buf).expect("render");
		assert_eq!(geometry.scroll_offset, 0);
		assert_eq!(geometry.visible_rows, 2);
		assert_eq!(
			rows(&buf),
			[" menu   ", " abacus ", " binary ", "        ", "        "]
		);
	}

	#[test]
	fn empty_list_draws_only_the_title() {
		let mut renderer = ViewportRenderer::default();
		let menu = state(Vec::new(), 0);
		let buf = draw(&mut renderer, &menu, Rect::new(0, 0, 6, 3));
		assert_eq!(rows(&buf), [" menu ", "      ", "      "]);
	}

	#[test]
	fn highlight_moves_without_a_full_repaint() {
		let area = Rect::new(0, 0, 12, 6);
		let mut incremental = ViewportRenderer::default();
		let mut menu = state(numbered(8), 0);

		draw(&mut incremental, &menu, area);
		assert_eq!(incremental.last_repaint(), Some(Repaint::Full));

		for _ in 0..5 {
			menu.move_down();
		}
		let moved = draw(&mut incremental, &menu, area);
		assert_eq!(incremental.last_repaint(), Some(Repaint::Highlight));

		let again = draw(&mut incremental, &menu, area);
		assert_eq!(incremental.last_repaint(), Some(Repaint::Unchanged));
		assert_eq!(moved, again);

		let mut fresh = ViewportRenderer::default();
		assert_eq!(moved, draw(&mut fresh, &menu, area));
		assert_eq!(fresh.last_repaint(), Some(Repaint::Full));
	}

	#[test]
	fn changed_items_force_a_full_repaint() {
		let area = Rect::new(0, 0, 12, 6);
		let mut renderer = ViewportRenderer::default();
		let mut menu = state(numbered(8), 7);
		draw(&mut renderer, &menu, area);

		menu.delete_selected();
		let after_delete = draw(&mut renderer, &menu, area);
		assert_eq!(renderer.last_repaint(), Some(Repaint::Full));
		assert_eq!(after_delete, draw(&mut ViewportRenderer::default(), &menu, area));

		menu.replace(numbered(7).into_iter().rev().collect(), 0);
		draw(&mut renderer, &menu, area);
		assert_eq!(renderer.last_repaint(), Some(Repaint::Full));
	}

	#[test]
	fn accent_colours_title_and_selection() {
		use ratatui::style::Color;

		let mut renderer = ViewportRenderer::new(MenuStyle::default().with_accent(Color::Cyan));
		let menu = state(numbered(3), 1);
		let buf = draw(&mut renderer, &menu, Rect::new(0, 0, 10, 4));
		assert_eq!(buf[(1, 0)].fg, Color::Cyan);
		assert_eq!(buf[(1, 2)].fg, Color::Cyan);
		assert_eq!(buf[(1, 1)].fg, Color::Reset);
	}
}
