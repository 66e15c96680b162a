use crate::destination::{AuthType, DestinationType, ProxyType, TokenServiceUrlType, validate_entity_name};
use crate::{Error, Result};
use derive_more::From;
use serde::Serialize;
use serde_json::Value;

const MAX_BASIC_USER_LENGTH: usize = 256;

// region:    --- BaseDestinationRequestBody

/// The fields common to all the destination request bodies.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseDestinationRequestBody {
	pub name: String,
	pub url: String,
	#[serde(rename = "type")]
	pub destination_type: DestinationType,
	pub proxy_type: ProxyType,
	pub authentication_type: AuthType,
	pub additional_properties: Option<Value>,
}

impl BaseDestinationRequestBody {
	pub fn new(name: impl Into<String>, url: impl Into<String>, authentication_type: AuthType) -> Self {
		Self {
			name: name.into(),
			url: url.into(),
			destination_type: DestinationType::Http,
			proxy_type: ProxyType::Internet,
			authentication_type,
			additional_properties: None,
		}
	}

	fn validate(&self, expected_auth_type: AuthType) -> Result<()> {
		validate_entity_name(&self.name)?;
		if self.url.is_empty() {
			return Err(Error::validation("url: cannot be blank"));
		}
		if self.authentication_type != expected_auth_type {
			return Err(Error::validation(format!(
				"authenticationType: must be {expected_auth_type}, got {}",
				self.authentication_type
			)));
		}
		Ok(())
	}
}

// endregion: --- BaseDestinationRequestBody

// region:    --- Variants

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoAuthRequestBody {
	#[serde(flatten)]
	pub base: BaseDestinationRequestBody,
}

impl NoAuthRequestBody {
	pub fn validate(&self) -> Result<()> {
		self.base.validate(AuthType::NoAuthentication)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicRequestBody {
	#[serde(flatten)]
	pub base: BaseDestinationRequestBody,
	pub user: String,
	pub password: String,
}

impl BasicRequestBody {
	pub fn validate(&self) -> Result<()> {
		self.base.validate(AuthType::BasicAuthentication)?;
		if self.user.is_empty() {
			return Err(Error::validation("user: cannot be blank"));
		}
		if self.user.len() > MAX_BASIC_USER_LENGTH {
			return Err(Error::validation(format!(
				"user: the length must be no more than {MAX_BASIC_USER_LENGTH}"
			)));
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlAssertionRequestBody {
	#[serde(flatten)]
	pub base: BaseDestinationRequestBody,
	pub audience: String,
	pub key_store_location: String,
}

impl SamlAssertionRequestBody {
	pub fn validate(&self) -> Result<()> {
		self.base.validate(AuthType::SamlAssertion)?;
		validate_key_store_location(&self.key_store_location)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCertificateRequestBody {
	#[serde(flatten)]
	pub base: BaseDestinationRequestBody,
	pub key_store_location: String,
}

impl ClientCertificateRequestBody {
	pub fn validate(&self) -> Result<()> {
		self.base.validate(AuthType::ClientCertificateAuthentication)?;
		validate_key_store_location(&self.key_store_location)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2ClientCredentialsRequestBody {
	#[serde(flatten)]
	pub base: BaseDestinationRequestBody,
	#[serde(rename = "tokenServiceURL")]
	pub token_service_url: String,
	pub client_id: String,
	pub client_secret: String,
	#[serde(rename = "tokenServiceURLType")]
	pub token_service_url_type: TokenServiceUrlType,
}

impl OAuth2ClientCredentialsRequestBody {
	pub fn validate(&self) -> Result<()> {
		self.base.validate(AuthType::OAuth2ClientCredentials)?;
		let required = [
			("clientId", &self.client_id),
			("clientSecret", &self.client_secret),
			("tokenServiceURL", &self.token_service_url),
		];
		for (field, value) in required {
			if value.is_empty() {
				return Err(Error::validation(format!("{field}: cannot be blank")));
			}
		}
		Ok(())
	}
}

fn validate_key_store_location(key_store_location: &str) -> Result<()> {
	if key_store_location.is_empty() {
		return Err(Error::validation("keyStoreLocation: cannot be blank"));
	}
	Ok(())
}

// endregion: --- Variants

// region:    --- DestinationRequestBody

/// A destination request body, one variant per authentication kind.
#[derive(Debug, Clone, PartialEq, Serialize, From)]
#[serde(untagged)]
pub enum DestinationRequestBody {
	NoAuth(NoAuthRequestBody),
	Basic(BasicRequestBody),
	SamlAssertion(SamlAssertionRequestBody),
	ClientCertificate(ClientCertificateRequestBody),
	OAuth2ClientCredentials(OAuth2ClientCredentialsRequestBody),
}

impl DestinationRequestBody {
	pub fn validate(&self) -> Result<()> {
		match self {
			Self::NoAuth(body) => body.validate(),
			Self::Basic(body) => body.validate(),
			Self::SamlAssertion(body) => body.validate(),
			Self::ClientCertificate(body) => body.validate(),
			Self::OAuth2ClientCredentials(body) => body.validate(),
		}
	}

	pub fn base(&self) -> &BaseDestinationRequestBody {
		match self {
			Self::NoAuth(body) => &body.base,
			Self::Basic(body) => &body.base,
			Self::SamlAssertion(body) => &body.base,
			Self::ClientCertificate(body) => &body.base,
			Self::OAuth2ClientCredentials(body) => &body.base,
		}
	}

	pub fn name(&self) -> &str {
		&self.base().name
	}

	/// Human readable kind, used in the logs and error contexts.
	#[must_use]
	pub const fn kind_label(&self) -> &'static str {
		match self {
			Self::NoAuth(_) => "design time",
			Self::Basic(_) => "basic",
			Self::SamlAssertion(_) => "SAML assertion",
			Self::ClientCertificate(_) => "client certificate authentication",
			Self::OAuth2ClientCredentials(_) => "OAuth2 client credentials",
		}
	}
}

// endregion: --- DestinationRequestBody
