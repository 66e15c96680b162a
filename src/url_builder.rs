//! Renders the remote API URL of a destination or certificate request from the `UrlConfig` templates.

use crate::config::UrlConfig;
use crate::{Error, Result};
use reqwest::Url;

/// The per call values substituted in the `UrlConfig` templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParameters {
	pub region: String,
	pub subaccount_id: String,
	/// When not empty, the instance level path template is used.
	pub instance_id: String,
	/// Only used for delete requests.
	pub entity_name: String,
}

/// Constructors
impl UrlParameters {
	pub fn new(region: impl Into<String>, subaccount_id: impl Into<String>) -> Self {
		Self {
			region: region.into(),
			subaccount_id: subaccount_id.into(),
			..Default::default()
		}
	}

	pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
		self.instance_id = instance_id.into();
		self
	}

	pub fn with_entity_name(mut self, entity_name: impl Into<String>) -> Self {
		self.entity_name = entity_name.into();
		self
	}
}

/// Builds the URL for a create (`is_delete == false`) or delete request.
///
/// A delete URL is the create URL with the `/{name}` segment appended.
pub fn build_url(config: &UrlConfig, params: &UrlParameters, is_delete: bool) -> Result<String> {
	if params.region.is_empty() || params.subaccount_id.is_empty() {
		return Err(Error::validation(
			"the provided region and/or subaccount for the URL must not be empty",
		));
	}

	let mut base = Url::parse(&config.base_url)
		.map_err(|err| Error::validation(format!("invalid base URL {:?}: {err}", config.base_url)))?;
	if base.cannot_be_a_base() {
		return Err(Error::validation(format!(
			"invalid base URL {:?}: it cannot be used as a base",
			config.base_url
		)));
	}

	let has_instance = !params.instance_id.is_empty();
	let template = if has_instance {
		&config.instance_level_path
	} else {
		&config.subaccount_level_path
	};

	let mut path = template
		.replacen(&placeholder(&config.region_param), &params.region, 1)
		.replacen(&placeholder(&config.subaccount_id_param), &params.subaccount_id, 1);
	if has_instance {
		path = path.replacen(&placeholder(&config.instance_id_param), &params.instance_id, 1);
	}

	if is_delete {
		if params.entity_name.is_empty() {
			return Err(Error::validation("entity name must not be empty for a delete request"));
		}
		path.push('/');
		path.push_str(&params.entity_name);
	}

	let full_path = format!("{}{path}", base.path().trim_end_matches('/'));
	base.set_path(&full_path);

	Ok(base.to_string())
}

fn placeholder(param: &str) -> String {
	format!("{{{param}}}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	fn url_config() -> UrlConfig {
		UrlConfig::default()
			.with_base_url("https://dest-creator.example.com")
			.with_subaccount_level_path("/regions/{region}/subaccounts/{subaccountId}/destinations")
			.with_instance_level_path("/regions/{region}/subaccounts/{subaccountId}/instances/{instanceId}/destinations")
			.with_params("region", "subaccountId", "instanceId", "name")
	}

	#[test]
	fn test_build_url_subaccount_level() -> Result<()> {
		let url = build_url(&url_config(), &UrlParameters::new("cf-eu10", "sub-1"), false)?;
		assert_eq!(
			url,
			"https://dest-creator.example.com/regions/cf-eu10/subaccounts/sub-1/destinations"
		);
		Ok(())
	}

	#[test]
	fn test_build_url_instance_level() -> Result<()> {
		let params = UrlParameters::new("cf-eu10", "sub-1").with_instance_id("inst-1");
		let url = build_url(&url_config(), &params, false)?;
		assert_eq!(
			url,
			"https://dest-creator.example.com/regions/cf-eu10/subaccounts/sub-1/instances/inst-1/destinations"
		);
		Ok(())
	}

	#[test]
	fn test_build_url_delete_appends_name() -> Result<()> {
		let params = UrlParameters::new("cf-eu10", "sub-1").with_entity_name("my-dest");
		let url = build_url(&url_config(), &params, true)?;
		assert_eq!(
			url,
			"https://dest-creator.example.com/regions/cf-eu10/subaccounts/sub-1/destinations/my-dest"
		);
		Ok(())
	}

	#[test]
	fn test_build_url_delete_without_name_fails() {
		let params = UrlParameters::new("cf-eu10", "sub-1").with_instance_id("inst-1");
		let err = build_url(&url_config(), &params, true).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Validation);
		assert!(err.to_string().contains("entity name must not be empty"));
	}

	#[test]
	fn test_build_url_missing_region_or_subaccount() {
		for params in [UrlParameters::new("", "sub-1"), UrlParameters::new("cf-eu10", "")] {
			let err = build_url(&url_config(), &params, false).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::Validation);
		}
	}

	#[test]
	fn test_build_url_keeps_base_path() -> Result<()> {
		let config = url_config().with_base_url("https://dest-creator.example.com/api/v1/");
		let url = build_url(&config, &UrlParameters::new("cf-eu10", "sub-1"), false)?;
		assert_eq!(
			url,
			"https://dest-creator.example.com/api/v1/regions/cf-eu10/subaccounts/sub-1/destinations"
		);
		Ok(())
	}

	#[test]
	fn test_build_url_invalid_base_url() {
		let config = url_config().with_base_url("dest-creator.example.com");
		let err = build_url(&config, &UrlParameters::new("cf-eu10", "sub-1"), false).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Validation);
	}
}
