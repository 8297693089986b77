use docsift_search_api::Category;
use docsift_tui::components::{
	PageControls, ProgressState, PromptContext, ResultsContext, StatusMessage, render_kind_filters,
	render_pagination, render_prompt, render_results, render_status,
};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear};

use super::App;
use super::state::ResultView;

/// Smallest popup that still fits the prompt, one result and the pager.
const MIN_POPUP_WIDTH: u16 = 40;
const MIN_POPUP_HEIGHT: u16 = 8;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		self.document.render(frame, area, &self.theme);

		if !self.overlay.is_open() {
			return;
		}

		let popup = popup_area(area);
		frame.render_widget(Clear, popup);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.border_style())
			.title(Span::styled(format!(" {} ", self.labels.title), self.theme.header));
		let inner = block.inner(popup).inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		frame.render_widget(block, popup);

		let show_filters = self.query.category() == Category::Symbols;
		let constraints = if show_filters {
			vec![
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			]
		} else {
			vec![Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)]
		};
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints(constraints)
			.split(inner);

		let (progress_text, progress_complete) = self.progress_status();
		let prompt = PromptContext {
			input: &self.input,
			category: self.query.category(),
			labels: &self.labels,
			area: layout[0],
			theme: &self.theme,
		};
		let progress = ProgressState {
			progress_text: &progress_text,
			progress_complete,
			throbber_state: &self.throbber_state,
		};
		render_prompt(frame, prompt, progress);

		let (results_area, pager_area) = if show_filters {
			render_kind_filters(frame, layout[1], self.query.kinds(), &self.theme);
			(layout[2], layout[3])
		} else {
			(layout[1], layout[2])
		};

		self.render_body(frame, results_area);
		render_pagination(
			frame,
			pager_area,
			PageControls::new(self.query.page(), self.search.total_pages()),
			&self.theme,
		);
	}

	fn render_body(&mut self, frame: &mut Frame, area: Rect) {
		match self.search.view() {
			ResultView::Idle => {}
			ResultView::Loading => {
				render_status(frame, area, StatusMessage::Loading, &self.labels, &self.theme);
			}
			ResultView::Failed(error) => {
				let reason = error.summary();
				render_status(
					frame,
					area,
					StatusMessage::Failed(&reason),
					&self.labels,
					&self.theme,
				);
			}
			ResultView::Ready(snapshot) if snapshot.bag.is_empty() => {
				render_status(frame, area, StatusMessage::NoResults, &self.labels, &self.theme);
			}
			ResultView::Ready(snapshot) => {
				let ctx = ResultsContext {
					bag: &snapshot.bag,
					query: self.query.text(),
					selected: self.selected,
					theme: &self.theme,
				};
				render_results(frame, area, ctx, &mut self.list_state, &mut self.scrollbar_state);
			}
		}
	}

	/// Hit count for the prompt row and whether the spinner should stop.
	fn progress_status(&self) -> (String, bool) {
		let complete = !self.search.is_in_flight();
		let text = match self.search.view() {
			ResultView::Ready(_) => match self.hit_count() {
				1 => "1 hit".to_string(),
				count => format!("{count} hits"),
			},
			_ => String::new(),
		};
		(text, complete)
	}
}

/// Centered popup covering most of `area`, never larger than it.
fn popup_area(area: Rect) -> Rect {
	let width = (area.width.saturating_mul(4) / 5)
		.max(MIN_POPUP_WIDTH)
		.min(area.width);
	let height = (area.height.saturating_mul(4) / 5)
		.max(MIN_POPUP_HEIGHT)
		.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::thread;
	use std::time::{Duration, Instant};

	use docsift_search_api::{IndexNames, IndexQuery, RawIndexResponse, SearchClient, SearchError};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::ui::state::tests::{fixture_app, wait_for_results};

	fn render(app: &mut App) -> String {
		let backend = TestBackend::new(100, 30);
		let mut terminal = Terminal::new(backend).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		format!("{:?}", terminal.backend().buffer())
	}

	struct FailingClient;

	impl SearchClient for FailingClient {
		fn multiple_queries(
			&self,
			_queries: &[IndexQuery],
		) -> Result<Vec<RawIndexResponse>, SearchError> {
			Err(SearchError::Status {
				status: 503,
				message: "unavailable".into(),
			})
		}
	}

	#[test]
	fn closed_overlay_shows_only_the_document() {
		let (mut app, _client) = fixture_app();
		let rendered = render(&mut app);
		assert!(rendered.contains("Press Ctrl+K"));
		assert!(!rendered.contains("Search >"));
	}

	#[test]
	fn open_overlay_lists_sections_and_pager() {
		let (mut app, _client) = fixture_app();
		app.open_overlay();
		wait_for_results(&mut app);
		let rendered = render(&mut app);
		assert!(rendered.contains("Search >"));
		assert!(rendered.contains("Manual"));
		assert!(rendered.contains("Symbols"));
		assert!(rendered.contains("Modules"));
		assert!(rendered.contains("oak"));
		assert!(rendered.contains("Page 1 of 3"));
		assert!(rendered.contains("3 hits"));
	}

	#[test]
	fn pager_keeps_page_count_while_loading() {
		let (mut app, _client) = fixture_app();
		app.open_overlay();
		wait_for_results(&mut app);
		app.query.next_page(app.search.total_pages());
		app.request_search();
		app.set_loading_delay(Duration::ZERO);
		assert!(app.search.tick(Instant::now()));
		let rendered = render(&mut app);
		assert!(rendered.contains("Page 2 of 3"));
	}

	#[test]
	fn symbols_category_shows_kind_filters() {
		let (mut app, _client) = fixture_app();
		app.open_overlay();
		app.query.set_category(Category::Symbols);
		app.request_search();
		wait_for_results(&mut app);
		let rendered = render(&mut app);
		assert!(rendered.contains("Functions"));
	}

	#[test]
	fn failed_cycle_offers_retry() {
		let mut app = App::new(Arc::new(FailingClient), IndexNames::default());
		app.open_overlay();
		let deadline = Instant::now() + Duration::from_secs(2);
		while !app.search.is_failed() && Instant::now() < deadline {
			thread::sleep(Duration::from_millis(10));
			app.pump_search_results();
		}
		let rendered = render(&mut app);
		assert!(rendered.contains("Search failed: service error (503)"));
		assert!(rendered.contains("Ctrl+R to retry"));
	}

	#[test]
	fn popup_fits_small_terminals() {
		let area = Rect::new(0, 0, 30, 6);
		assert_eq!(popup_area(area), area);
		let large = popup_area(Rect::new(0, 0, 100, 50));
		assert_eq!((large.width, large.height), (80, 40));
		assert_eq!((large.x, large.y), (10, 5));
	}
}
