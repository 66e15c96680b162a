use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A provisioning request for one destination, as given by the formation participants.
///
/// All the fields are raw strings; they are parsed and validated when the request body is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDetails {
	pub name: String,
	#[serde(default, rename = "type")]
	pub destination_type: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub proxy_type: String,
	#[serde(default)]
	pub authentication: String,
	#[serde(default)]
	pub url: String,
	/// The external subaccount ID. When empty, the consumer subaccount of the assignment is used.
	#[serde(default)]
	pub subaccount_id: String,
	/// When set, the destination is created at the service instance level.
	#[serde(default)]
	pub instance_id: String,
	#[serde(default)]
	pub additional_properties: Option<Value>,
}

/// Constructors
impl DestinationDetails {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = url.into();
		self
	}

	pub fn with_type(mut self, destination_type: impl Into<String>) -> Self {
		self.destination_type = destination_type.into();
		self
	}

	pub fn with_proxy_type(mut self, proxy_type: impl Into<String>) -> Self {
		self.proxy_type = proxy_type.into();
		self
	}

	pub fn with_authentication(mut self, authentication: impl Into<String>) -> Self {
		self.authentication = authentication.into();
		self
	}

	pub fn with_subaccount_id(mut self, subaccount_id: impl Into<String>) -> Self {
		self.subaccount_id = subaccount_id.into();
		self
	}

	pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
		self.instance_id = instance_id.into();
		self
	}

	pub fn with_additional_properties(mut self, additional_properties: Value) -> Self {
		self.additional_properties = Some(additional_properties);
		self
	}
}

// region:    --- Credentials

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicAuthentication {
	#[serde(default)]
	pub url: String,
	pub username: String,
	pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlAssertionAuthentication {
	pub url: String,
	/// When empty, the base URL of the source application is used.
	#[serde(default)]
	pub audience: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCertAuthentication {
	pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2ClientCredentialsAuthentication {
	pub url: String,
	pub token_service_url: String,
	pub client_id: String,
	pub client_secret: String,
	/// `Dedicated` or `Common`. Defaults to `Dedicated` when empty.
	#[serde(default)]
	pub token_service_url_type: String,
}

// endregion: --- Credentials
