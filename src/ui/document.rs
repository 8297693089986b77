//! Background document pane drawn beneath the overlay.

use docsift_tui::Theme;
use docsift_tui::components::{ScrollMetrics, render_scrollbar};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, ScrollbarState};

use super::lifecycle::ScrollLock;
use super::outcome::Activation;

const WELCOME: &[&str] = &[
	"Press Ctrl+K or / to search the documentation.",
	"",
	"Inside the search overlay:",
	"  Tab / Shift+Tab   switch category",
	"  Up / Down         move the selection",
	"  PageUp / PageDown previous / next page",
	"  Alt+1 .. Alt+7    toggle symbol kinds",
	"  Enter             open the selected result",
	"  Ctrl+R            retry a failed search",
	"  Esc               close the overlay",
	"",
	"Press q to quit.",
];

pub(crate) struct DocumentState {
	pub title: String,
	pub lines: Vec<String>,
	pub scroll: usize,
	/// Last rendered viewport height, used to bound scrolling.
	pub viewport_height: usize,
	pub scrollbar_state: ScrollbarState,
}

impl Default for DocumentState {
	fn default() -> Self {
		Self {
			title: "docsift".to_string(),
			lines: WELCOME.iter().map(|line| (*line).to_string()).collect(),
			scroll: 0,
			viewport_height: 0,
			scrollbar_state: ScrollbarState::default(),
		}
	}
}

impl DocumentState {
	/// Replace the contents with an activated result.
	pub(crate) fn show(&mut self, activation: &Activation) {
		self.title = activation.title.clone();
		self.lines = vec![activation.href.clone(), String::new()];
		if let Some(excerpt) = &activation.excerpt {
			self.lines.extend(excerpt.lines().map(str::to_string));
		}
		self.scroll = 0;
	}

	/// Scroll by `delta` lines unless `lock` is held. Returns `true` when the offset moved.
	pub(crate) fn scroll_by(&mut self, delta: isize, lock: ScrollLock) -> bool {
		if lock.is_locked() {
			return false;
		}
		let metrics = ScrollMetrics::compute(self.lines.len(), self.viewport_height);
		let target = metrics.clamp(self.scroll.saturating_add_signed(delta));
		if target == self.scroll {
			return false;
		}
		self.scroll = target;
		true
	}

	pub(crate) fn page_len(&self) -> isize {
		isize::try_from(self.viewport_height.max(1)).unwrap_or(isize::MAX)
	}

	pub(crate) fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(theme.border_style())
			.title(Span::styled(format!(" {} ", self.title), theme.header));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		self.viewport_height = usize::from(inner.height);
		let metrics = ScrollMetrics::compute(self.lines.len(), self.viewport_height);
		self.scroll = metrics.clamp(self.scroll);

		let lines: Vec<Line<'static>> = self
			.lines
			.iter()
			.skip(self.scroll)
			.take(self.viewport_height)
			.map(|line| Line::from(line.clone()))
			.collect();
		let content_area = if metrics.needs_scrollbar {
			self.scrollbar_state = ScrollbarState::new(metrics.content_length)
				.position(metrics.scrollbar_position(self.scroll));
			render_scrollbar(frame, inner, &mut self.scrollbar_state, theme)
		} else {
			inner
		};
		frame.render_widget(Paragraph::new(lines), content_area);
	}
}
