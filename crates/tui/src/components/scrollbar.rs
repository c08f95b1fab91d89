//! Shared scrollbar rendering component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Render a themed vertical scrollbar on the right edge of `area`.
///
/// Returns the area left for content. Nothing is drawn when all `len` entries
/// fit into `visible` rows.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	len: usize,
	visible: usize,
	position: usize,
	theme: &Theme,
) -> Rect {
	if len <= visible || area.width < 2 {
		return area;
	}

	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)));

	let sb_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};
	let mut state = ScrollbarState::new(len).position(position);
	frame.render_stateful_widget(scrollbar, sb_area, &mut state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
