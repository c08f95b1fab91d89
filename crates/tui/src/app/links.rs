//! Opening result links.
//!
//! Links are handed to the operating system, which starts the default browser
//! as a separate process. The opened page gets no handle back to this client.

use std::io;

use log::warn;

use super::notice::Notice;
use crate::app::state::App;

/// Function used to launch a URL.
pub type LinkOpener = fn(&str) -> io::Result<()>;

/// Default [`LinkOpener`]: the system browser.
pub fn open_in_browser(url: &str) -> io::Result<()> {
	open::that(url)
}

/// Only web links are handed to the browser.
pub(crate) fn is_web_link(url: &str) -> bool {
	let url = url.trim_start().to_ascii_lowercase();
	url.starts_with("https://") || url.starts_with("http://")
}

impl<'a> App<'a> {
	/// Open the selected row's `html_url` in the system browser.
	pub(crate) fn open_selected_link(&mut self) {
		let Some(item) = self.selected_item() else {
			self.notice = Some(Notice::error("No result selected"));
			return;
		};
		let Some(url) = item.html_url.clone() else {
			self.notice = Some(Notice::error("No link for this result"));
			return;
		};
		if !is_web_link(&url) {
			self.notice = Some(Notice::error("Refusing to open a non-web link"));
			return;
		}

		self.notice = match (self.link_opener)(&url) {
			Ok(()) => Some(Notice::info("Opened in browser")),
			Err(err) => {
				warn!("failed to open {url}: {err}");
				Some(Notice::error(format!("Failed to open browser: {err}")))
			}
		};
	}
}
