//! Overlay open/close transitions and their side effects.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Where keyboard input goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
	/// The background document.
	#[default]
	Body,
	/// The overlay's query input.
	Input,
}

/// Guard that freezes background scrolling while held.
///
/// Locking or unlocking twice is the same as doing it once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
	locked: bool,
}

impl ScrollLock {
	pub fn lock(&mut self) {
		self.locked = true;
	}

	pub fn unlock(&mut self) {
		self.locked = false;
	}

	#[must_use]
	pub fn is_locked(&self) -> bool {
		self.locked
	}
}

/// Visibility of the search overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
	open: bool,
	focus: Focus,
	scroll_lock: ScrollLock,
}

impl Overlay {
	/// Show the overlay. Returns `false` when it was already open.
	pub fn open(&mut self) -> bool {
		if self.open {
			return false;
		}
		self.open = true;
		self.scroll_lock.lock();
		self.focus = Focus::Input;
		debug!("overlay opened");
		true
	}

	/// Hide the overlay. Returns `false` when it was already closed.
	pub fn close(&mut self) -> bool {
		if !self.open {
			return false;
		}
		self.open = false;
		self.scroll_lock.unlock();
		self.focus = Focus::Body;
		debug!("overlay closed");
		true
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn scroll_lock(&self) -> ScrollLock {
		self.scroll_lock
	}

	/// Whether `key` asks to open the overlay given the current focus.
	///
	/// `Ctrl+K` (or `Super+K`) always does; `/` only from the document body.
	#[must_use]
	pub fn is_open_request(&self, key: &KeyEvent) -> bool {
		match key.code {
			KeyCode::Char('k' | 'K') => key
				.modifiers
				.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER),
			KeyCode::Char('/') => self.focus == Focus::Body && key.modifiers.is_empty(),
			_ => false,
		}
	}
}
