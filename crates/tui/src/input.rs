//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Editable query line.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	/// Create an input holding `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.textarea.set_placeholder_text(placeholder);
		self
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the editor. Returns `true` when the text changed.
	///
	/// Keys that would insert a line break are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		if self.textarea.lines().len() > 1 {
			let joined = self.textarea.lines().concat();
			self.replace(joined);
		}
		self.text() != before
	}

	/// Replace the whole text and move the cursor to its end.
	pub fn replace(&mut self, text: impl Into<String>) {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		std::mem::swap(&mut self.textarea, &mut textarea);
		self.textarea
			.set_placeholder_text(textarea.placeholder_text().to_string());
		self.textarea.set_cursor_style(textarea.cursor_style());
	}

	/// Hide or show the cursor, e.g. while the input is not focused.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('\n' | '\r') => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_after_initial_text() {
		let mut input = QueryInput::new("fet");
		assert!(input.input(press(KeyCode::Char('c'))));
		assert!(input.input(press(KeyCode::Char('h'))));
		assert_eq!(input.text(), "fetch");
	}

	#[test]
	fn enter_never_inserts_a_line() {
		let mut input = QueryInput::new("serve");
		assert!(!input.input(press(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "serve");
	}

	#[test]
	fn cursor_moves_do_not_report_changes() {
		let mut input = QueryInput::new("serve");
		assert!(!input.input(press(KeyCode::Left)));
		assert!(input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "sere");
	}

	#[test]
	fn replace_keeps_placeholder() {
		let mut input = QueryInput::new("").with_placeholder("Search docs");
		input.replace("oak");
		assert_eq!(input.text(), "oak");
	}
}
