use docsift_search_api::{ResultBag, Section};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState, ScrollbarState};

use crate::components::rows::hit_item;
use crate::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Argument bundle for rendering the grouped result list.
pub struct ResultsContext<'a> {
	pub bag: &'a ResultBag,
	/// Query text used to highlight matching characters.
	pub query: &'a str,
	/// Selected row, counted over hits only.
	pub selected: Option<usize>,
	pub theme: &'a Theme,
}

/// Sections that produced at least one hit, in display order.
fn visible_sections(bag: &ResultBag) -> impl Iterator<Item = Section> + '_ {
	bag.sections().filter(|section| bag.len(*section) > 0)
}

/// Map a hit index to its row in the rendered list, skipping section headers.
#[must_use]
pub fn list_row(bag: &ResultBag, flat: usize) -> Option<usize> {
	let (target, _) = bag.locate(flat)?;
	let headers = visible_sections(bag)
		.take_while(|section| *section != target)
		.count()
		+ 1;
	Some(flat + headers)
}

/// Build the list items: a header per non-empty section followed by its hits.
#[must_use]
pub fn build_items(ctx: &ResultsContext<'_>, width: usize) -> Vec<ListItem<'static>> {
	let mut items = Vec::with_capacity(ctx.bag.total_len() + Section::ORDER.len());
	let row_width = width.saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
	for section in visible_sections(ctx.bag) {
		items.push(ListItem::new(Line::from(Span::styled(
			section.label(),
			ctx.theme.section_style(),
		))));
		for row in 0..ctx.bag.len(section) {
			if let Some(hit) = ctx.bag.hit(section, row) {
				items.push(hit_item(hit, ctx.query, row_width, ctx.theme));
			}
		}
	}
	items
}

/// Render the grouped result list with a scrollbar when it overflows.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	ctx: ResultsContext<'_>,
	list_state: &mut ListState,
	scrollbar_state: &mut ScrollbarState,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let items = build_items(&ctx, usize::from(area.width.saturating_sub(1)));
	let total_rows = items.len();
	list_state.select(ctx.selected.and_then(|flat| list_row(ctx.bag, flat)));

	let metrics = ScrollMetrics::compute(total_rows, usize::from(area.height));
	let list_area = if metrics.needs_scrollbar {
		Rect {
			width: area.width.saturating_sub(1),
			..area
		}
	} else {
		area
	};

	let list = List::new(items)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always)
		.highlight_style(ctx.theme.row_highlight);
	frame.render_stateful_widget(list, list_area, list_state);

	if metrics.needs_scrollbar {
		*scrollbar_state = ScrollbarState::new(total_rows)
			.position(list_state.selected().unwrap_or(list_state.offset()));
		render_scrollbar(frame, area, scrollbar_state, ctx.theme);
	}
}

#[cfg(test)]
mod tests {
	use docsift_search_api::{ModuleHit, PagedResults};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn module(name: &str) -> ModuleHit {
		ModuleHit {
			object_id: name.into(),
			name: name.into(),
			description: None,
		}
	}

	fn page<T>(items: Vec<T>) -> PagedResults<T> {
		PagedResults {
			query_id: None,
			items,
			hits_per_page: 5,
			page: 0,
		}
	}

	fn bag() -> ResultBag {
		ResultBag {
			manual: Some(page(Vec::new())),
			modules: Some(page(vec![module("oak"), module("fresh")])),
			symbols: None,
		}
	}

	#[test]
	fn rows_skip_empty_section_headers() {
		let bag = bag();
		assert_eq!(list_row(&bag, 0), Some(1));
		assert_eq!(list_row(&bag, 1), Some(2));
		assert_eq!(list_row(&bag, 2), None);
	}

	#[test]
	fn renders_headers_and_selection_marker() {
		let bag = bag();
		let theme = Theme::default();
		let mut terminal = Terminal::new(TestBackend::new(30, 4)).expect("terminal");
		let mut list_state = ListState::default();
		let mut scrollbar_state = ScrollbarState::default();
		terminal
			.draw(|frame| {
				render_results(
					frame,
					frame.area(),
					ResultsContext {
						bag: &bag,
						query: "oak",
						selected: Some(1),
						theme: &theme,
					},
					&mut list_state,
					&mut scrollbar_state,
				);
			})
			.expect("draw");

		let buffer = terminal.backend().buffer();
		let rows: Vec<String> = (0..4)
			.map(|y| (0..30).map(|x| buffer[(x, y)].symbol().to_string()).collect())
			.collect();
		assert!(rows[0].contains("Modules"), "{rows:?}");
		assert!(!rows.iter().any(|row| row.contains("Manual")), "{rows:?}");
		assert!(rows[2].starts_with("▶ fresh"), "{rows:?}");
		assert_eq!(list_state.selected(), Some(2));
	}
}
