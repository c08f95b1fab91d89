use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Rows of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScreenAreas {
	pub heading: Rect,
	pub repo: Rect,
	pub query: Rect,
	pub status: Rect,
	pub results: Rect,
	pub help: Rect,
}

pub(crate) fn split_screen(area: Rect) -> ScreenAreas {
	let area = area.inner(Margin {
		vertical: 0,
		horizontal: 1,
	});
	let [heading, repo, query, status, results, help] = Layout::vertical([
		Constraint::Length(2),
		Constraint::Length(3),
		Constraint::Length(3),
		Constraint::Length(1),
		Constraint::Min(3),
		Constraint::Length(1),
	])
	.areas(area);

	ScreenAreas {
		heading,
		repo,
		query,
		status,
		results,
		help,
	}
}
