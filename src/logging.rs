//! Logger setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so interactive
//! sessions log to a file in the data directory. Headless runs log to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::app_dirs;

const LOG_FILE_NAME: &str = "issue-search.log";

/// Where log records end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogTarget {
	Stderr,
	File(PathBuf),
}

impl LogTarget {
	/// Default log file inside the data directory.
	pub(crate) fn default_file() -> Result<Self> {
		Ok(Self::File(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)))
	}
}

/// Map `-v` occurrences to a level; `warn` when none were given.
pub(crate) fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install the global logger. `RUST_LOG` takes precedence over `verbosity`.
pub(crate) fn initialize(verbosity: u8, target: &LogTarget) -> Result<()> {
	let mut builder = Builder::new();
	builder.filter_level(level_for(verbosity));
	builder.parse_env(Env::default());

	if let LogTarget::File(path) = target {
		let file = open_log_file(path)?;
		builder.target(Target::Pipe(Box::new(file)));
		builder.write_style(env_logger::WriteStyle::Never);
	}

	builder
		.try_init()
		.context("failed to install the logger")?;
	Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
