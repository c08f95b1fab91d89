use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let base = config.client.api_base.to_ascii_lowercase();
	if !(base.starts_with("http://") || base.starts_with("https://")) {
		return Err(ConfigError::invalid(
			"api.base_url",
			config.client.api_base.clone(),
			sources.source_for_base_url(),
			"must start with http:// or https://",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use issue_search_core::{ClientConfig, SearchRequest};

	use super::*;
	use crate::settings::resolved::SettingSource;

	fn config_with_base(base: &str) -> ResolvedConfig {
		ResolvedConfig {
			client: ClientConfig {
				api_base: base.into(),
				..ClientConfig::default()
			},
			theme: None,
			initial: SearchRequest::default(),
		}
	}

	#[test]
	fn http_and_https_origins_are_accepted() {
		let sources = ConfigSources::default();
		assert!(validate(&config_with_base("http://localhost:8000"), &sources).is_ok());
		assert!(validate(&config_with_base("HTTPS://search.example"), &sources).is_ok());
	}

	#[test]
	fn other_schemes_report_their_origin() {
		let sources = ConfigSources {
			api_base_url: Some(SettingSource::CliFlag("--api-base")),
			..ConfigSources::default()
		};
		let err = validate(&config_with_base("ftp://example"), &sources).expect_err("ftp");
		assert_eq!(err.key, "api.base_url");
		assert_eq!(err.origin, SettingSource::CliFlag("--api-base"));
		assert!(err.to_string().contains("CLI flag `--api-base`"));
	}
}
