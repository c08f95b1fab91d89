use anyhow::Result;
use issue_search_core::{ResultKind, SearchRequest};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) repo: Option<String>,
	pub(super) query: Option<String>,
	pub(super) kind: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) initial: SearchRequest,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(repo) = cli.repo.clone() {
			self.repo = Some(repo);
		}
		if let Some(query) = cli.query.clone() {
			self.query = Some(query);
		}
		if let Some(kind) = cli.kind {
			self.kind = Some(kind.as_str().to_string());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<UiResolution> {
		let kind = match self.kind.as_deref().map(str::trim) {
			None | Some("") | Some("all") => None,
			Some(label) => Some(ResultKind::parse_filter(label).ok_or_else(|| {
				ConfigError::invalid(
					"ui.kind",
					label,
					sources.source_for_kind(),
					"expected one of issue, pr, comment or all",
				)
			})?),
		};

		let initial = SearchRequest::new(
			self.repo.unwrap_or_default(),
			self.query.unwrap_or_default(),
		)
		.with_kind(kind);

		Ok(UiResolution {
			theme: self.theme.filter(|theme| !theme.trim().is_empty()),
			initial,
		})
	}
}
