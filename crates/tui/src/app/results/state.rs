//! Selection state for the result list.

use ratatui::widgets::ListState;

/// Rows moved by PageUp / PageDown.
const PAGE_STEP: usize = 5;

#[derive(Default)]
pub(crate) struct ResultsState {
	/// Selection and scroll offset of the rendered list.
	pub list_state: ListState,
}

impl ResultsState {
	pub fn selected(&self) -> Option<usize> {
		self.list_state.selected()
	}

	/// Select the first row of a freshly applied result set.
	pub fn reset(&mut self, len: usize) {
		*self.list_state.offset_mut() = 0;
		self.list_state.select((len > 0).then_some(0));
	}

	/// Keep the selection inside `0..len`.
	pub fn ensure_selection(&mut self, len: usize) {
		match self.list_state.selected() {
			_ if len == 0 => self.list_state.select(None),
			None => self.list_state.select(Some(0)),
			Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	pub fn select_previous(&mut self, len: usize) {
		self.step_back(1, len);
	}

	pub fn select_next(&mut self, len: usize) {
		self.step_forward(1, len);
	}

	pub fn page_up(&mut self, len: usize) {
		self.step_back(PAGE_STEP, len);
	}

	pub fn page_down(&mut self, len: usize) {
		self.step_forward(PAGE_STEP, len);
	}

	pub fn select_first(&mut self, len: usize) {
		self.list_state.select((len > 0).then_some(0));
	}

	pub fn select_last(&mut self, len: usize) {
		self.list_state.select(len.checked_sub(1));
	}

	fn step_back(&mut self, step: usize, len: usize) {
		if len == 0 {
			self.list_state.select(None);
			return;
		}
		let current = self.list_state.selected().unwrap_or(0);
		self.list_state.select(Some(current.saturating_sub(step)));
	}

	fn step_forward(&mut self, step: usize, len: usize) {
		if len == 0 {
			self.list_state.select(None);
			return;
		}
		let next = self
			.list_state
			.selected()
			.map_or(0, |current| current.saturating_add(step));
		self.list_state.select(Some(next.min(len - 1)));
	}
}
