use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::config::{FieldLabels, UiLabels};
use crate::input::TextInput;
use crate::style::Theme;

/// Context for one bordered form field.
pub struct FieldContext<'a, 'b> {
	pub labels: &'a FieldLabels,
	pub input: &'a TextInput<'b>,
	pub focused: bool,
	pub theme: &'a Theme,
}

/// Everything the status line reports.
pub struct StatusContext<'a> {
	pub loading: bool,
	pub error: Option<&'a str>,
	/// Transient message and whether it reports a failure.
	pub notice: Option<(&'a str, bool)>,
	pub completed: bool,
	pub count: usize,
	pub total: Option<u64>,
	pub kind_label: &'a str,
	pub labels: &'a UiLabels,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Heading on the first row, tagline on the second.
pub fn render_heading(frame: &mut Frame, area: Rect, labels: &UiLabels, theme: &Theme) {
	let lines = vec![
		Line::from(Span::styled(
			labels.heading.clone(),
			theme.header.add_modifier(Modifier::BOLD),
		)),
		Line::from(Span::styled(labels.tagline.clone(), theme.empty_style())),
	];
	frame.render_widget(Paragraph::new(lines), area);
}

/// Draw a text field inside a titled, rounded border.
pub fn render_field(frame: &mut Frame, area: Rect, ctx: FieldContext<'_, '_>) {
	let border_style = if ctx.focused {
		ctx.theme.focus_border_style()
	} else {
		ctx.theme.border_style()
	};
	let title_style = if ctx.focused {
		ctx.theme.prompt
	} else {
		ctx.theme.empty_style()
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(border_style)
		.title(Span::styled(format!(" {} ", ctx.labels.title), title_style));

	let inner = block.inner(area);
	frame.render_widget(block, area);
	ctx.input.render(frame, inner);
}

/// Single status row: submit state, outcome of the last search and the
/// active type filter.
pub fn render_status(frame: &mut Frame, area: Rect, ctx: StatusContext<'_>) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	frame.render_widget(Paragraph::new(status_line(&ctx)), area);
}

fn status_line<'a>(ctx: &StatusContext<'a>) -> Line<'a> {
	let muted = ctx.theme.empty_style();
	let mut line = Line::default();

	if ctx.loading {
		let spinner = Throbber::default().style(muted).throbber_style(ctx.theme.prompt);
		line.spans.push(spinner.to_symbol_span(ctx.throbber_state));
		line.spans
			.push(Span::styled(ctx.labels.searching_label.clone(), ctx.theme.prompt));
	} else {
		line.spans.push(Span::styled(
			format!("[{}]", ctx.labels.submit_label),
			ctx.theme.prompt,
		));
	}

	if let Some((message, is_error)) = ctx.notice {
		let style = if is_error { ctx.theme.error } else { muted };
		line.spans.push(Span::raw("  "));
		line.spans.push(Span::styled(message, style));
	} else if let Some(error) = ctx.error {
		line.spans.push(Span::raw("  "));
		line.spans.push(Span::styled(error, ctx.theme.error));
	} else if ctx.completed {
		line.spans.push(Span::raw("  "));
		line.spans.push(Span::styled(result_count(ctx.count, ctx.total), muted));
	}

	line.spans.push(Span::styled("  type: ", muted));
	line.spans.push(Span::styled(
		ctx.kind_label,
		Style::default().add_modifier(Modifier::BOLD),
	));
	line
}

fn result_count(count: usize, total: Option<u64>) -> String {
	let noun = if count == 1 { "result" } else { "results" };
	match total {
		Some(total) if total > count as u64 => format!("{count} {noun} of {total}"),
		_ => format!("{count} {noun}"),
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn render(ctx: StatusContext<'_>) -> String {
		let mut terminal = Terminal::new(TestBackend::new(80, 1)).expect("terminal");
		terminal
			.draw(|frame| render_status(frame, frame.area(), ctx))
			.expect("draw");
		terminal.backend().to_string()
	}

	fn context<'a>(
		labels: &'a UiLabels,
		throbber: &'a ThrobberState,
		theme: &'a Theme,
	) -> StatusContext<'a> {
		StatusContext {
			loading: false,
			error: None,
			notice: None,
			completed: false,
			count: 0,
			total: None,
			kind_label: "all",
			labels,
			throbber_state: throbber,
			theme,
		}
	}

	#[test]
	fn loading_shows_searching_label() {
		let (labels, throbber, theme) = (UiLabels::default(), ThrobberState::default(), Theme::default());
		let view = render(StatusContext {
			loading: true,
			..context(&labels, &throbber, &theme)
		});
		assert!(view.contains("Searching..."));
		assert!(!view.contains("[Search]"));
	}

	#[test]
	fn failure_is_reported_in_place_of_counts() {
		let (labels, throbber, theme) = (UiLabels::default(), ThrobberState::default(), Theme::default());
		let view = render(StatusContext {
			error: Some("search failed: network error: refused"),
			completed: true,
			count: 3,
			..context(&labels, &throbber, &theme)
		});
		assert!(view.contains("[Search]"));
		assert!(view.contains("search failed: network error: refused"));
		assert!(!view.contains("3 results"));
	}

	#[test]
	fn counts_mention_backend_total() {
		assert_eq!(result_count(1, None), "1 result");
		assert_eq!(result_count(2, Some(40)), "2 results of 40");
		assert_eq!(result_count(2, Some(2)), "2 results");
	}

	#[test]
	fn type_filter_is_always_visible() {
		let (labels, throbber, theme) = (UiLabels::default(), ThrobberState::default(), Theme::default());
		let view = render(StatusContext {
			kind_label: "pr",
			..context(&labels, &throbber, &theme)
		});
		assert!(view.contains("type: pr"));
	}
}
