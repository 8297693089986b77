use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the overlay's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for the active tab, section headers and borders.
	pub header: Style,
	/// Style for the selected result row.
	pub row_highlight: Style,
	/// Style for the prompt label.
	pub prompt: Style,
	/// Style for empty states, excerpts and disabled controls.
	pub empty: Style,
	/// Style for characters matching the query.
	pub highlight: Style,
	/// Style for symbol kind badges.
	pub badge: Style,
	/// Style for failure messages.
	pub error: Style,
}

impl Theme {
	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the selected tab.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		self.header
	}

	/// Returns the style for section headers inside the result list.
	#[must_use]
	pub fn section_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}

	/// Returns the style for a disabled control.
	#[must_use]
	pub fn disabled_style(&self) -> Style {
		self.empty.add_modifier(Modifier::DIM)
	}

	/// Returns the border colour shared by the overlay frame.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.bg.or(self.header.fg).unwrap_or(Color::Reset))
	}
}

/// Describes a theme instance that can be looked up by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
