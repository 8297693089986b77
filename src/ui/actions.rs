use anyhow::Result;
use docsift_search_api::{Category, SymbolKind};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::outcome::SearchOutcome;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Ok(Some(self.outcome()));
		}
		if self.overlay.is_open_request(&key) {
			self.open_overlay();
			return Ok(None);
		}
		if self.overlay.is_open() {
			self.handle_overlay_key(key);
			return Ok(None);
		}

		match key.code {
			KeyCode::Char('q') => return Ok(Some(self.outcome())),
			KeyCode::Up => {
				self.scroll_document(-1);
			}
			KeyCode::Down => {
				self.scroll_document(1);
			}
			KeyCode::PageUp => {
				let page = self.document.page_len();
				self.scroll_document(-page);
			}
			KeyCode::PageDown => {
				let page = self.document.page_len();
				self.scroll_document(page);
			}
			_ => {}
		}
		Ok(None)
	}

	fn handle_overlay_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => {
				self.close_overlay();
			}
			KeyCode::Tab => self.cycle_category(true),
			KeyCode::BackTab => self.cycle_category(false),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::PageDown => {
				if self.query.next_page(self.search.total_pages()) {
					self.request_search();
				}
			}
			KeyCode::PageUp => {
				if self.query.previous_page() {
					self.request_search();
				}
			}
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				if self.search.is_failed() {
					self.retry_search();
				}
			}
			KeyCode::Char(digit) if key.modifiers.contains(KeyModifiers::ALT) => {
				self.toggle_kind_shortcut(digit);
			}
			KeyCode::Enter => {
				if self.search.is_failed() {
					self.retry_search();
				} else {
					self.activate_selection();
				}
			}
			_ => {
				if self.input.input(key) && self.query.set_text(self.input.text()) {
					self.request_search();
				}
			}
		}
	}

	fn scroll_document(&mut self, delta: isize) {
		self.document.scroll_by(delta, self.overlay.scroll_lock());
	}

	fn cycle_category(&mut self, forward: bool) {
		if self.query.cycle_category(forward) {
			self.request_search();
		}
	}

	/// `Alt+1` .. `Alt+7` toggle the n-th filterable kind while on the symbols tab.
	fn toggle_kind_shortcut(&mut self, digit: char) {
		if self.query.category() != Category::Symbols {
			return;
		}
		let Some(kind) = digit
			.to_digit(10)
			.and_then(|n| usize::try_from(n).ok())
			.and_then(|n| n.checked_sub(1))
			.and_then(|index| SymbolKind::FILTERABLE.get(index).copied())
		else {
			return;
		};
		if self.query.toggle_kind(kind) {
			self.request_search();
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.selected
			&& selected > 0
		{
			self.selected = Some(selected - 1);
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.selected
			&& selected + 1 < self.hit_count()
		{
			self.selected = Some(selected + 1);
		}
	}
}
