use issue_search_core::display::{LINK_LABEL, ResultView};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::symbols::border;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::render_scrollbar;
use crate::style::Theme;

pub const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Context needed to draw the result list.
pub struct ResultsContext<'a> {
	pub views: &'a [ResultView],
	pub title: &'a str,
	/// Shown instead of the list when there are no views.
	pub placeholder: &'a str,
	pub focused: bool,
	pub theme: &'a Theme,
}

/// Draw one list entry per view inside a bordered block.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	list_state: &mut ListState,
	ctx: ResultsContext<'_>,
) {
	let border_style = if ctx.focused {
		ctx.theme.focus_border_style()
	} else {
		ctx.theme.border_style()
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(border_style)
		.title(Span::styled(format!(" {} ", ctx.title), ctx.theme.header));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if ctx.views.is_empty() {
		let message = Paragraph::new(Span::styled(ctx.placeholder, ctx.theme.empty_style()))
			.alignment(Alignment::Center);
		frame.render_widget(message, inner);
		return;
	}

	let full_width = usize::from(inner.width).saturating_sub(HIGHLIGHT_SYMBOL.width());
	let mut entries = entry_texts(ctx.views, full_width, ctx.theme);
	if visible_entries(&entries, inner.height) < entries.len() {
		entries = entry_texts(ctx.views, full_width.saturating_sub(1), ctx.theme);
	}

	let content = render_scrollbar(
		frame,
		inner,
		entries.len(),
		visible_entries(&entries, inner.height),
		list_state.selected().unwrap_or(0),
		ctx.theme,
	);
	let items: Vec<ListItem> = entries.into_iter().map(ListItem::new).collect();

	let list = List::new(items)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always)
		.highlight_style(ctx.theme.row_highlight);
	frame.render_stateful_widget(list, content, list_state);
}

/// Metadata line, title, wrapped body preview, link and a blank separator.
fn entry_text(view: &ResultView, width: usize, theme: &Theme) -> Text<'static> {
	let mut lines = vec![Line::from(Span::styled(
		view.metadata.clone(),
		theme.empty_style(),
	))];
	if let Some(title) = &view.title {
		lines.push(Line::from(Span::styled(
			title.clone(),
			theme.highlight.add_modifier(Modifier::BOLD),
		)));
	}
	if let Some(body) = &view.body {
		lines.extend(wrap_to_width(body, width).into_iter().map(Line::from));
	}
	if let Some(link) = &view.link {
		lines.push(Line::from(vec![
			Span::styled(format!("{LINK_LABEL} "), theme.empty_style()),
			Span::styled(link.clone(), theme.link),
		]));
	}
	lines.push(Line::default());
	Text::from(lines)
}

fn entry_texts(views: &[ResultView], width: usize, theme: &Theme) -> Vec<Text<'static>> {
	views
		.iter()
		.map(|view| entry_text(view, width, theme))
		.collect()
}

/// Number of leading entries whose rows fit into `height`.
fn visible_entries(entries: &[Text<'_>], height: u16) -> usize {
	let mut remaining = usize::from(height);
	let mut count = 0;
	for entry in entries {
		let rows = entry.height();
		if rows > remaining {
			break;
		}
		remaining -= rows;
		count += 1;
	}
	count
}

/// Break `text` into lines no wider than `width` terminal columns, preferring
/// whitespace boundaries. Embedded newlines always start a new line.
///
/// Whitespace inside a line is kept as written (tabs become four spaces); only
/// the whitespace at a soft break is dropped.
#[must_use]
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
	if width == 0 {
		return vec![text.to_string()];
	}

	let mut lines = Vec::new();
	for paragraph in text.split('\n') {
		let paragraph = paragraph.replace('\t', "    ");
		let mut line = String::new();
		let mut line_width = 0;
		let mut gap = String::new();
		for (is_space, run) in whitespace_runs(&paragraph) {
			if is_space {
				gap.push_str(run);
				continue;
			}
			if line_width > 0 && line_width + gap.width() + run.width() > width {
				lines.push(std::mem::take(&mut line));
				line_width = 0;
				gap.clear();
			}
			for ch in gap.drain(..).chain(run.chars()) {
				let ch_width = ch.width().unwrap_or(0);
				if line_width + ch_width > width && line_width > 0 {
					lines.push(std::mem::take(&mut line));
					line_width = 0;
				}
				line.push(ch);
				line_width += ch_width;
			}
		}
		lines.push(line);
	}
	lines
}

/// Split `text` into maximal runs of whitespace and non-whitespace.
fn whitespace_runs(text: &str) -> Vec<(bool, &str)> {
	let mut runs = Vec::new();
	let mut start = 0;
	let mut current = None;
	for (index, ch) in text.char_indices() {
		let is_space = ch.is_whitespace();
		match current {
			Some(kind) if kind == is_space => {}
			Some(kind) => {
				runs.push((kind, &text[start..index]));
				start = index;
				current = Some(is_space);
			}
			None => current = Some(is_space),
		}
	}
	if let Some(kind) = current {
		runs.push((kind, &text[start..]));
	}
	runs
}

#[cfg(test)]
mod tests {
	use issue_search_core::display::result_views;
	use issue_search_core::{ItemId, ResultItem, ResultKind};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn draw(views: &[ResultView], width: u16, height: u16) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
		let mut state = ListState::default();
		state.select((!views.is_empty()).then_some(0));
		let theme = Theme::default();
		terminal
			.draw(|frame| {
				render_results(
					frame,
					frame.area(),
					&mut state,
					ResultsContext {
						views,
						title: "Results",
						placeholder: "No results",
						focused: true,
						theme: &theme,
					},
				);
			})
			.expect("draw");
		terminal.backend().to_string()
	}

	#[test]
	fn renders_metadata_title_and_preview_without_link() {
		let items = vec![
			ResultItem::new(ItemId::Number(1), ResultKind::Issue, "alice")
				.with_title("App crashes")
				.with_body("Steps to reproduce..."),
		];
		let view = draw(&result_views(&items), 60, 8);
		assert!(view.contains("issue • alice"));
		assert!(view.contains("App crashes"));
		assert!(view.contains("Steps to reproduce......"));
		assert!(!view.contains(LINK_LABEL));
	}

	#[test]
	fn link_row_is_labelled() {
		let items = vec![
			ResultItem::new(ItemId::Number(7), ResultKind::PullRequest, "bob")
				.with_html_url("https://github.com/a/b/pull/7"),
		];
		let view = draw(&result_views(&items), 70, 6);
		assert!(view.contains("pr • bob"));
		assert!(view.contains("View on GitHub https://github.com/a/b/pull/7"));
	}

	#[test]
	fn empty_list_shows_placeholder() {
		let view = draw(&[], 40, 5);
		assert!(view.contains("No results"));
		assert!(!view.contains(HIGHLIGHT_SYMBOL));
	}

	#[test]
	fn wrap_respects_width_and_newlines() {
		assert_eq!(
			wrap_to_width("one two three", 7),
			vec!["one two".to_string(), "three".to_string()]
		);
		assert_eq!(wrap_to_width("a\nb", 10), vec!["a".to_string(), "b".to_string()]);
		assert_eq!(
			wrap_to_width("abcdefgh", 3),
			vec!["abc".to_string(), "def".to_string(), "gh".to_string()]
		);
	}

	#[test]
	fn wrap_keeps_indentation_and_inner_spacing() {
		assert_eq!(
			wrap_to_width("    let x  = 1;\n\tpanic!()", 40),
			vec!["    let x  = 1;".to_string(), "    panic!()".to_string()]
		);
		assert_eq!(
			wrap_to_width("at  foo::bar  at  baz::qux", 14),
			vec!["at  foo::bar".to_string(), "at  baz::qux".to_string()]
		);
	}

	#[test]
	fn long_bodies_that_overflow_show_a_scrollbar() {
		let body = "lorem ipsum dolor sit amet ".repeat(12);
		let items: Vec<_> = (1..=3)
			.map(|id| {
				ResultItem::new(ItemId::Number(id), ResultKind::Issue, "alice").with_body(body.as_str())
			})
			.collect();
		let views = result_views(&items);

		let entries = entry_texts(&views, 36, &Theme::default());
		let rows: usize = entries.iter().map(Text::height).sum();
		assert!(rows > 18);
		assert!(visible_entries(&entries, 18) < views.len());

		let view = draw(&views, 40, 20);
		assert!(view.contains('█'));
	}

	#[test]
	fn short_entries_fit_without_scrollbar() {
		let items = vec![ResultItem::new(ItemId::Number(1), ResultKind::Issue, "alice")];
		let view = draw(&result_views(&items), 40, 10);
		assert!(!view.contains('█'));
	}

	#[test]
	fn wrap_counts_wide_characters_as_two_columns() {
		for line in wrap_to_width("漢字漢字漢字", 4) {
			assert!(line.width() <= 4);
		}
	}
}
