//! The render → read → dispatch loop.

use anyhow::Result;
use ratatui::backend::Backend;
use tpick_core::{
	DEFAULT_PAGE_SIZE, Keymap, MenuError, Navigator, Outcome, SelectionState, Transition,
};

use crate::input::InputSource;
use crate::style::MenuStyle;
use crate::surface::Surface;
use crate::terminal::TerminalSession;
use crate::viewport::{Geometry, ViewportRenderer};

/// Settings for one menu session.
#[derive(Debug, Clone)]
pub struct MenuOptions {
	title: String,
	keymap: Keymap,
	search_keymap: Keymap,
	page_size: usize,
	style: MenuStyle,
}

impl Default for MenuOptions {
	fn default() -> Self {
		Self {
			title: String::new(),
			keymap: Keymap::navigation(),
			search_keymap: Keymap::search(),
			page_size: DEFAULT_PAGE_SIZE,
			style: MenuStyle::default(),
		}
	}
}

impl MenuOptions {
	/// Label drawn on the top line while browsing.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Bindings for browsing. Search contexts fall back to these.
	#[must_use]
	pub fn with_keymap(mut self, keymap: Keymap) -> Self {
		self.keymap = keymap;
		self
	}

	/// Bindings owned by search contexts.
	#[must_use]
	pub fn with_search_keymap(mut self, keymap: Keymap) -> Self {
		self.search_keymap = keymap;
		self
	}

	#[must_use]
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	#[must_use]
	pub fn with_style(mut self, style: MenuStyle) -> Self {
		self.style = style;
		self
	}

	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	#[must_use]
	pub fn page_size(&self) -> usize {
		self.page_size
	}
}

/// A navigator and the renderer drawing it.
pub struct MenuSession {
	navigator: Navigator,
	renderer: ViewportRenderer,
}

impl MenuSession {
	/// Prepare a session over `items`. An empty list is refused.
	pub fn new(items: Vec<String>, options: MenuOptions) -> Result<Self, MenuError> {
		let MenuOptions {
			title,
			keymap,
			search_keymap,
			page_size,
			style,
		} = options;
		let root = SelectionState::new(items, title, keymap).with_page_size(page_size);
		let navigator = Navigator::new(root)?.with_search_keymap(search_keymap);
		Ok(Self {
			navigator,
			renderer: ViewportRenderer::new(style),
		})
	}

	#[must_use]
	pub fn navigator(&self) -> &Navigator {
		&self.navigator
	}

	/// Draw the active frame onto `surface`.
	pub fn render<B: Backend, I: InputSource>(
		&mut self,
		surface: &mut Surface<B, I>,
	) -> Result<Geometry> {
		let Self {
			navigator,
			renderer,
		} = self;
		let mut rendered = Ok(Geometry::default());
		surface.draw(|frame| {
			let area = frame.area();
			rendered = renderer.render(navigator.active(), area, frame.buffer_mut());
		})?;
		Ok(rendered?)
	}

	/// Run until the user selects an item or backs out.
	pub fn run<B: Backend, I: InputSource>(
		mut self,
		surface: &mut Surface<B, I>,
	) -> Result<Outcome> {
		loop {
			self.render(surface)?;
			let key = surface.read_input();
			if let Transition::Done(outcome) = self.navigator.handle(key) {
				log::debug!("menu finished: {outcome:?}");
				return Ok(outcome);
			}
		}
	}
}

/// Show `items` on `surface` and wait for a choice.
pub fn run<B: Backend, I: InputSource>(
	surface: &mut Surface<B, I>,
	items: Vec<String>,
	options: MenuOptions,
) -> Result<Outcome> {
	MenuSession::new(items, options)?.run(surface)
}

/// Take over the terminal, show `items`, and restore the terminal before
/// returning.
pub fn pick(items: Vec<String>, options: MenuOptions) -> Result<Outcome> {
	let session = MenuSession::new(items, options)?;
	let mut terminal = TerminalSession::enter()?;
	session.run(terminal.surface_mut())
}
