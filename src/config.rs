//! Static configuration of the destination creator remote API.
//!
//! The configuration is loaded once (usually with `Config::from_env()`) and given to the `ServiceBuilder`.
//! It is never mutated after.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "APP_DESTINATION_CREATOR";

// region:    --- UrlConfig

/// The URL templates and placeholder names of one remote API (destinations or certificates).
///
/// The paths are templates like `/regions/{region}/subaccounts/{subaccountId}/destinations`
/// where the placeholder names are the `*_param` values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlConfig {
	pub base_url: String,
	pub subaccount_level_path: String,
	pub instance_level_path: String,
	pub region_param: String,
	pub subaccount_id_param: String,
	pub instance_id_param: String,
	pub name_param: String,
}

/// Setters
impl UrlConfig {
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_subaccount_level_path(mut self, path: impl Into<String>) -> Self {
		self.subaccount_level_path = path.into();
		self
	}

	pub fn with_instance_level_path(mut self, path: impl Into<String>) -> Self {
		self.instance_level_path = path.into();
		self
	}

	pub fn with_params(
		mut self,
		region_param: impl Into<String>,
		subaccount_id_param: impl Into<String>,
		instance_id_param: impl Into<String>,
		name_param: impl Into<String>,
	) -> Self {
		self.region_param = region_param.into();
		self.subaccount_id_param = subaccount_id_param.into();
		self.instance_id_param = instance_id_param.into();
		self.name_param = name_param.into();
		self
	}
}

impl UrlConfig {
	fn from_lookup<F>(api_name: &str, lookup: &F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |suffix: &str| required_var(&format!("{ENV_PREFIX}_{api_name}_{suffix}"), lookup);

		Ok(Self {
			base_url: get("BASE_URL")?,
			subaccount_level_path: get("PATH")?,
			instance_level_path: get("INSTANCE_LEVEL_PATH")?,
			region_param: get("REGION_PARAMETER")?,
			subaccount_id_param: get("SUBACCOUNT_ID_PARAMETER")?,
			instance_id_param: get("INSTANCE_ID_PARAMETER")?,
			name_param: get("NAME_PARAMETER")?,
		})
	}

	fn validate(&self, api_name: &str) -> Result<()> {
		let required = [
			("base URL", &self.base_url),
			("subaccount level path", &self.subaccount_level_path),
			("instance level path", &self.instance_level_path),
			("region parameter", &self.region_param),
			("subaccount ID parameter", &self.subaccount_id_param),
			("instance ID parameter", &self.instance_id_param),
			("name parameter", &self.name_param),
		];

		for (field, value) in required {
			if value.is_empty() {
				return Err(Error::validation(format!(
					"the {field} of the {api_name} API configuration must not be empty"
				)));
			}
		}

		Ok(())
	}
}

// endregion: --- UrlConfig

// region:    --- Config

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
	/// The key under which the joined correlation IDs are set in the destination additional properties.
	pub correlation_ids_key: String,
	pub destination_api: UrlConfig,
	pub certificate_api: UrlConfig,
}

/// Constructors
impl Config {
	/// Loads the configuration from the `APP_DESTINATION_CREATOR_*` environment variables.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Same as `from_env`, with a custom variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let correlation_ids_key = required_var(&format!("{ENV_PREFIX}_CORRELATION_IDS_KEY"), &lookup)?;
		let destination_api = UrlConfig::from_lookup("DESTINATION", &lookup)?;
		let certificate_api = UrlConfig::from_lookup("CERTIFICATE", &lookup)?;

		let config = Self {
			correlation_ids_key,
			destination_api,
			certificate_api,
		};
		config.validate()?;

		Ok(config)
	}
}

/// Setters
impl Config {
	pub fn with_correlation_ids_key(mut self, key: impl Into<String>) -> Self {
		self.correlation_ids_key = key.into();
		self
	}

	pub fn with_destination_api(mut self, url_config: UrlConfig) -> Self {
		self.destination_api = url_config;
		self
	}

	pub fn with_certificate_api(mut self, url_config: UrlConfig) -> Self {
		self.certificate_api = url_config;
		self
	}
}

impl Config {
	pub fn validate(&self) -> Result<()> {
		if self.correlation_ids_key.is_empty() {
			return Err(Error::validation("the correlation IDs key must not be empty"));
		}
		self.destination_api.validate("destination")?;
		self.certificate_api.validate("certificate")?;
		Ok(())
	}
}

// endregion: --- Config

// region:    --- Support

fn required_var<F>(name: &str, lookup: &F) -> Result<String>
where
	F: Fn(&str) -> Option<String>,
{
	match lookup(name) {
		Some(value) if !value.trim().is_empty() => Ok(value),
		_ => Err(Error::validation(format!("missing configuration variable {name}"))),
	}
}

// endregion: --- Support
