//! Previous/next page controls.

use docsift_search_api::{can_go_next, can_go_previous};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Page position of the current result view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageControls {
	/// Zero-based page index.
	pub page: u32,
	/// Page count reported by the last resolved cycle, at least 1.
	pub total_pages: u32,
}

impl PageControls {
	#[must_use]
	pub fn new(page: u32, total_pages: u32) -> Self {
		Self {
			page,
			total_pages: total_pages.max(1),
		}
	}

	#[must_use]
	pub fn previous_enabled(&self) -> bool {
		can_go_previous(self.page)
	}

	#[must_use]
	pub fn next_enabled(&self) -> bool {
		can_go_next(self.page, self.total_pages)
	}

	/// `‹ Prev  Page x of y  Next ›`, with disabled controls dimmed.
	#[must_use]
	pub fn line(&self, theme: &Theme) -> Line<'static> {
		let style_for = |enabled: bool| {
			if enabled {
				theme.header
			} else {
				theme.disabled_style()
			}
		};
		Line::from(vec![
			Span::styled("‹ Prev", style_for(self.previous_enabled())),
			Span::styled(
				format!("  Page {} of {}  ", self.page.saturating_add(1), self.total_pages),
				theme.empty,
			),
			Span::styled("Next ›", style_for(self.next_enabled())),
		])
	}
}

pub fn render_pagination(frame: &mut Frame, area: Rect, controls: PageControls, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let widget = Paragraph::new(controls.line(theme)).alignment(Alignment::Center);
	frame.render_widget(widget, area);
}
