use docsift_search_api::HitRef;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::ListItem;
use unicode_width::UnicodeWidthStr;

use crate::highlight::{highlight_line, truncate};
use crate::style::Theme;

const BREADCRUMB_SEPARATOR: &str = " › ";
const EXCERPT_INDENT: &str = "    ";

/// Build the list item for one hit: a title line and an optional excerpt line.
#[must_use]
pub fn hit_item(hit: HitRef<'_>, query: &str, width: usize, theme: &Theme) -> ListItem<'static> {
	let mut title = Line::default();
	let mut used = 0usize;

	match hit {
		HitRef::Symbol(symbol) => {
			let badge = format!("{:<5} ", symbol.kind.badge());
			used += badge.width();
			title.spans.push(Span::styled(badge, theme.badge));
		}
		HitRef::Manual(_) | HitRef::Module(_) => {}
	}

	let name = hit.title();
	let remaining = width.saturating_sub(used);
	let name_line = highlight_line(name, query, Some(remaining), Style::default(), theme.highlight);
	used += name_line.width();
	title.spans.extend(name_line.spans);

	let context = context_text(hit);
	let context_room = width.saturating_sub(used + 1);
	if !context.is_empty() && context_room > 1 {
		title.spans.push(Span::styled(
			format!(" {}", truncate(&context, context_room)),
			theme.empty,
		));
	}

	let mut text = Text::from(title);
	if let Some(excerpt) = hit.excerpt().map(single_line).filter(|line| !line.is_empty()) {
		let room = width.saturating_sub(EXCERPT_INDENT.len());
		text.lines.push(Line::from(vec![
			Span::raw(EXCERPT_INDENT),
			Span::styled(truncate(&excerpt, room), theme.empty),
		]));
	}
	ListItem::new(text)
}

/// Secondary text shown after the title: breadcrumbs or the symbol's origin.
fn context_text(hit: HitRef<'_>) -> String {
	match hit {
		HitRef::Manual(manual) => {
			let crumbs = manual.breadcrumbs();
			let title = manual.title();
			crumbs
				.into_iter()
				.filter(|crumb| *crumb != title)
				.collect::<Vec<_>>()
				.join(BREADCRUMB_SEPARATOR)
		}
		HitRef::Symbol(symbol) if symbol.version.is_empty() => symbol.source.clone(),
		HitRef::Symbol(symbol) => format!("{}@{}", symbol.source, symbol.version),
		HitRef::Module(_) => String::new(),
	}
}

fn single_line(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}
