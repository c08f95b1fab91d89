use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where the validated settings came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_base_url: Option<SettingSource>,
	pub(crate) api_timeout: Option<SettingSource>,
	pub(crate) ui_kind: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_base_url(&self) -> SettingSource {
		self.api_base_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.base_url"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.api_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.timeout_secs"))
	}

	pub(crate) fn source_for_kind(&self) -> SettingSource {
		self.ui_kind
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.kind"))
	}
}
