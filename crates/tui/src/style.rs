use ratatui::style::{Color, Modifier, Style};

/// Visual state of a piece of menu text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
	Normal,
	Selected,
	Title,
}

/// Styles applied to the title line and to item rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyle {
	pub title: Style,
	pub normal: Style,
	pub selected: Style,
}

impl Default for MenuStyle {
	fn default() -> Self {
		Self {
			title: Style::new().add_modifier(Modifier::BOLD),
			normal: Style::new(),
			selected: Style::new().add_modifier(Modifier::REVERSED),
		}
	}
}

impl MenuStyle {
	/// Tint the title and the highlighted row with `color`.
	#[must_use]
	pub fn with_accent(mut self, color: Color) -> Self {
		self.title = self.title.fg(color);
		self.selected = self.selected.fg(color);
		self
	}

	#[must_use]
	pub fn style_for(&self, emphasis: Emphasis) -> Style {
		match emphasis {
			Emphasis::Normal => self.normal,
			Emphasis::Selected => self.selected,
			Emphasis::Title => self.title,
		}
	}
}
