//! Query match highlighting for result titles.

use std::mem;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Character indices of `text` matched by `needle`, if any.
#[must_use]
pub fn match_indices(needle: &str, text: &str) -> Option<Vec<usize>> {
	let needle = needle.trim();
	if needle.is_empty() || text.is_empty() {
		return None;
	}
	SkimMatcherV2::default()
		.ignore_case()
		.fuzzy_indices(text, needle)
		.map(|(_, indices)| indices)
		.filter(|indices| !indices.is_empty())
}

/// Build a line for `text` with the characters matching `needle` styled.
///
/// The text is cut to `max_width` columns with a trailing ellipsis.
#[must_use]
pub fn highlight_line(
	text: &str,
	needle: &str,
	max_width: Option<usize>,
	base: Style,
	highlight: Style,
) -> Line<'static> {
	let indices = match_indices(needle, text);
	let (display, indices) = match max_width {
		Some(width) => truncate_with_highlight(text, indices, width),
		None => (text.to_string(), indices),
	};

	let Some(mut sorted) = indices else {
		return Line::from(Span::styled(display, base));
	};
	sorted.sort_unstable();
	let mut next = sorted.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();
	let style_for = |on: bool| if on { base.patch(highlight) } else { base };

	for (idx, ch) in display.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				spans.push(Span::styled(mem::take(&mut buffer), style_for(highlighted)));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}
	if !buffer.is_empty() {
		spans.push(Span::styled(buffer, style_for(highlighted)));
	}

	Line::from(spans)
}

/// Cut `text` to `max_width` columns with a trailing ellipsis.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
	truncate_with_highlight(text, None, max_width).0
}

fn truncate_with_highlight(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: usize,
) -> (String, Option<Vec<usize>>) {
	if max_width == 0 {
		return (String::new(), None);
	}
	if text.width() <= max_width {
		return (text.to_string(), indices);
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return (ELLIPSIS.to_string(), None);
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let mut truncated = slice.to_string();
	truncated.push_str(ELLIPSIS);
	let limit = slice.chars().count();
	let indices = indices.and_then(|indices| {
		let kept: Vec<usize> = indices.into_iter().filter(|&idx| idx < limit).collect();
		(!kept.is_empty()).then_some(kept)
	});
	(truncated, indices)
}
