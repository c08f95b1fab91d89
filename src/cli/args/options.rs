use clap::ValueEnum;

/// Result kinds accepted as a type filter on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum KindArg {
	Issue,
	Pr,
	Comment,
}

impl KindArg {
	/// Return the label consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			KindArg::Issue => "issue",
			KindArg::Pr => "pr",
			KindArg::Comment => "comment",
		}
	}
}

/// Output formats supported by the headless modes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
