use docsift_search_api::Category;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::config::OverlayLabels;
use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	/// The query input widget.
	pub input: &'a QueryInput<'a>,
	/// Active category, highlighted among the tabs.
	pub category: Category,
	pub labels: &'a OverlayLabels,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Progress information for the prompt status indicator.
pub struct ProgressState<'a> {
	/// Text describing the request state.
	pub progress_text: &'a str,
	/// Whether the current cycle has resolved.
	pub progress_complete: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, query input and category tabs on one row.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, progress: ProgressState<'_>) {
	let PromptContext {
		input,
		category,
		labels,
		area,
		theme,
	} = prompt;
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;

	let tabs_width = calculate_tabs_width(labels);
	let prompt_text = labels.prompt.as_str();
	let prompt_width = calculate_prompt_width(prompt_text);
	let constraints = layout_constraints(!prompt_text.is_empty(), prompt_width, tabs_width);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(constraints)
		.split(area);

	if !prompt_text.is_empty() {
		let widget = Paragraph::new(format!("{prompt_text} > ")).style(theme.prompt);
		frame.render_widget(widget, horizontal[0]);
	}

	let input_index = usize::from(!prompt_text.is_empty());
	let input_area = horizontal[input_index];
	input.render(frame, input_area);
	render_progress(
		frame,
		input_area,
		progress_text,
		progress_complete,
		throbber_state,
		theme,
	);

	let tabs_area = horizontal[horizontal.len() - 1];
	let tabs_inner = Rect {
		x: tabs_area.x.saturating_add(1),
		width: tabs_area.width.saturating_sub(1),
		..tabs_area
	};
	let selected = labels.tab_index(category);
	let tabs = Tabs::new(build_tab_titles(theme, selected, labels))
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(tabs, tabs_inner);
}

fn calculate_prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		u16::try_from(prompt.chars().count())
			.unwrap_or(u16::MAX)
			.saturating_add(3)
	}
}

fn layout_constraints(has_prompt: bool, prompt_width: u16, tabs_width: u16) -> Vec<Constraint> {
	if has_prompt {
		vec![
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(tabs_width),
		]
	} else {
		vec![Constraint::Min(1), Constraint::Length(tabs_width)]
	}
}

fn build_tab_titles(theme: &Theme, selected: usize, labels: &OverlayLabels) -> Vec<Line<'static>> {
	let active = theme.tab_highlight_style();
	let inactive = theme.tab_inactive_style();
	labels
		.tabs()
		.iter()
		.enumerate()
		.map(|(index, (_, label))| {
			let style = if index == selected { active } else { inactive };
			Line::from(format!(" {label} ")).style(style)
		})
		.collect()
}

fn calculate_tabs_width(labels: &OverlayLabels) -> u16 {
	let mut width = 0u16;
	for (_, label) in labels.tabs() {
		let label_len = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
		width = width.saturating_add(label_len.saturating_add(3));
	}
	width.max(12)
}

fn render_progress(
	frame: &mut Frame,
	area: Rect,
	progress_text: &str,
	progress_complete: bool,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 || (progress_complete && progress_text.is_empty()) {
		return;
	}

	let muted_style = theme.empty;
	let mut line = Line::default();
	if !progress_complete {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	if !progress_text.is_empty() {
		line.spans.push(Span::styled(progress_text.to_string(), muted_style));
	}

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	// Keep two columns between the typed query and the indicator.
	if let Some(last_x) = last_char_x {
		let min_start = last_x.saturating_add(3);
		if min_start > start_x {
			start_x = min_start;
		}
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area
		.right()
		.saturating_sub(start_x)
		.min(line_width)
		.min(area.width);
	if max_width == 0 {
		return;
	}

	buffer.set_line(start_x, input_row, &line, max_width);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
		let buffer = terminal.backend().buffer();
		(0..buffer.area.width)
			.map(|x| buffer[(x, y)].symbol().to_string())
			.collect()
	}

	#[test]
	fn prompt_row_shows_query_and_tabs() {
		let mut terminal = Terminal::new(TestBackend::new(80, 1)).expect("terminal");
		let input = QueryInput::new("readFile");
		let labels = OverlayLabels::default();
		let theme = Theme::default();
		let throbber = ThrobberState::default();
		terminal
			.draw(|frame| {
				render_prompt(
					frame,
					PromptContext {
						input: &input,
						category: Category::Symbols,
						labels: &labels,
						area: frame.area(),
						theme: &theme,
					},
					ProgressState {
						progress_text: "",
						progress_complete: true,
						throbber_state: &throbber,
					},
				);
			})
			.expect("draw");

		let text = row_text(&terminal, 0);
		assert!(text.starts_with("Search > readFile"), "{text}");
		for label in ["All", "Manual", "Modules", "Symbols"] {
			assert!(text.contains(label), "missing {label} in {text}");
		}
	}

	#[test]
	fn width_helpers_account_for_padding() {
		assert_eq!(calculate_prompt_width(""), 0);
		assert_eq!(calculate_prompt_width("Search"), 9);
		assert_eq!(calculate_tabs_width(&OverlayLabels::default()), 3 + 6 + 7 + 7 + 12);
		assert_eq!(layout_constraints(false, 0, 12).len(), 2);
	}
}
