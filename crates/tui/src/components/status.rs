//! Messages shown in place of the result list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};

use crate::config::OverlayLabels;
use crate::style::Theme;

/// What the result area shows when there are no rows to list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusMessage<'a> {
	/// The loading delay elapsed before the cycle resolved.
	Loading,
	/// The cycle resolved with no hits.
	NoResults,
	/// The cycle failed; carries a one-line reason.
	Failed(&'a str),
}

#[must_use]
pub fn status_text(message: StatusMessage<'_>, labels: &OverlayLabels, theme: &Theme) -> Text<'static> {
	match message {
		StatusMessage::Loading => Text::from(Span::styled(labels.loading.clone(), theme.empty)),
		StatusMessage::NoResults => Text::from(Span::styled(labels.no_results.clone(), theme.empty)),
		StatusMessage::Failed(reason) => Text::from(vec![
			Line::from(Span::styled(format!("Search failed: {reason}"), theme.error)),
			Line::from(Span::styled(labels.retry_hint.clone(), theme.empty)),
		]),
	}
}

pub fn render_status(
	frame: &mut Frame,
	area: Rect,
	message: StatusMessage<'_>,
	labels: &OverlayLabels,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let widget = Paragraph::new(status_text(message, labels, theme))
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failure_offers_retry() {
		let labels = OverlayLabels::default();
		let text = status_text(StatusMessage::Failed("HTTP 503"), &labels, &Theme::default());
		assert_eq!(text.lines.len(), 2);
		assert_eq!(text.lines[0].to_string(), "Search failed: HTTP 503");
		assert_eq!(text.lines[1].to_string(), "Ctrl+R to retry");
	}

	#[test]
	fn empty_and_loading_use_labels() {
		let labels = OverlayLabels::default();
		let theme = Theme::default();
		assert_eq!(status_text(StatusMessage::NoResults, &labels, &theme).to_string(), "No results");
		assert_eq!(status_text(StatusMessage::Loading, &labels, &theme).to_string(), "Loading…");
	}
}
