use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod api;
mod ui;

use api::ApiSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			api_base_url: detect_source(
				cli.api_base.is_some(),
				self.api.base_url.is_some(),
				"ISSUE_SEARCH__API__BASE_URL",
				"--api-base",
				"api.base_url",
			),
			api_timeout: detect_source(
				cli.timeout.is_some(),
				self.api.timeout_secs.is_some(),
				"ISSUE_SEARCH__API__TIMEOUT_SECS",
				"--timeout",
				"api.timeout_secs",
			),
			ui_kind: detect_source(
				cli.kind.is_some(),
				self.ui.kind.is_some(),
				"ISSUE_SEARCH__UI__KIND",
				"--kind",
				"ui.kind",
			),
		};

		let client = self.api.resolve(&sources)?;
		let ui = self.ui.resolve(&sources)?;

		let config = ResolvedConfig {
			client,
			theme: ui.theme,
			initial: ui.initial,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
