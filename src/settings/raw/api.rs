use std::time::Duration;

use anyhow::Result;
use issue_search_core::{ClientConfig, DEFAULT_API_BASE};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// Backend connection settings as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
	pub(super) user_agent: Option<String>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(base) = cli.api_base.clone() {
			self.base_url = Some(base);
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ClientConfig> {
		let defaults = ClientConfig::default();

		let base_url = self
			.base_url
			.map(|url| url.trim().to_string())
			.unwrap_or_else(|| DEFAULT_API_BASE.to_string());

		let timeout = match self.timeout_secs {
			Some(0) => {
				return Err(ConfigError::invalid(
					"api.timeout_secs",
					"0",
					sources.source_for_timeout(),
					"must be greater than zero",
				)
				.into());
			}
			Some(secs) => Duration::from_secs(secs),
			None => defaults.timeout,
		};

		Ok(ClientConfig {
			api_base: base_url,
			timeout,
			user_agent: self
				.user_agent
				.filter(|agent| !agent.trim().is_empty())
				.unwrap_or(defaults.user_agent),
		})
	}
}
