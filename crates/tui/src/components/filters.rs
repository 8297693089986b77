//! Symbol-kind checkbox row shown in the Symbols category.

use docsift_search_api::{KindFilters, SymbolKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Build the checkbox line; the digit before each label is its `Alt` shortcut.
#[must_use]
pub fn kind_filter_line(kinds: &KindFilters, theme: &Theme) -> Line<'static> {
	let mut spans = Vec::with_capacity(SymbolKind::FILTERABLE.len() * 2);
	for (index, kind) in SymbolKind::FILTERABLE.into_iter().enumerate() {
		let checked = kinds.is_checked(kind);
		let mark = if checked { "[x]" } else { "[ ]" };
		let style = if checked { theme.badge } else { theme.empty };
		if index > 0 {
			spans.push(Span::raw("  "));
		}
		spans.push(Span::styled(
			format!("{mark} {} {}", index + 1, kind.label()),
			style,
		));
	}
	Line::from(spans)
}

pub fn render_kind_filters(frame: &mut Frame, area: Rect, kinds: &KindFilters, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	frame.render_widget(Paragraph::new(kind_filter_line(kinds, theme)), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unchecked_kinds_render_empty_boxes() {
		let kinds = KindFilters::only([SymbolKind::Function]);
		let text = kind_filter_line(&kinds, &Theme::default()).to_string();
		assert!(text.starts_with("[x] 1 Functions  [ ] 2 Variables"), "{text}");
		assert!(text.ends_with("[ ] 7 Namespaces"), "{text}");
	}
}
