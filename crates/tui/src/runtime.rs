//! Application runtime and event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppOutcome};

/// Run `app` to completion in the current terminal.
pub fn run(mut app: App<'_>) -> Result<AppOutcome> {
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<AppOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		self.hydrate_initial_results();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<AppOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(outcome) = self.handle_key(key)
				{
					maybe_outcome = Some(outcome);
					break;
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			self.pump_search_results();
			self.prune_notice(Instant::now());
			if self.session.is_loading() {
				self.throbber_state.calc_next();
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		debug!("event loop finished");
		result
	}

	pub(crate) fn hydrate_initial_results(&mut self) {
		if self.needs_initial_search() {
			self.submit();
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::app::state::tests::{app_for, settle};

	#[test]
	fn hydration_runs_prefilled_search_once() {
		let mut app = app_for("a/b", "crash").submit_on_start(true);
		app.hydrate_initial_results();
		assert_eq!(app.session.latest_id(), 1);
		settle(&mut app);

		app.hydrate_initial_results();
		assert_eq!(app.session.latest_id(), 1);
		assert_eq!(app.result_count(), 2);
	}

	#[test]
	fn hydration_is_skipped_without_opt_in() {
		let mut app = app_for("a/b", "crash");
		app.hydrate_initial_results();
		assert_eq!(app.session.latest_id(), 0);
	}
}
