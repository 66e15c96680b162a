use crate::{Error, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// region:    --- DestinationType

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestinationType {
	#[serde(rename = "HTTP")]
	#[display("HTTP")]
	Http,
	#[serde(rename = "RFC")]
	#[display("RFC")]
	Rfc,
	#[serde(rename = "LDAP")]
	#[display("LDAP")]
	Ldap,
	#[serde(rename = "MAIL")]
	#[display("MAIL")]
	Mail,
}

impl DestinationType {
	pub const ALL: &[Self] = &[Self::Http, Self::Rfc, Self::Ldap, Self::Mail];
}

impl FromStr for DestinationType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		parse_one_of("type", s, Self::ALL)
	}
}

// endregion: --- DestinationType

// region:    --- ProxyType

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProxyType {
	Internet,
	OnPremise,
	PrivateLink,
}

impl ProxyType {
	pub const ALL: &[Self] = &[Self::Internet, Self::OnPremise, Self::PrivateLink];
}

impl FromStr for ProxyType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		parse_one_of("proxy type", s, Self::ALL)
	}
}

// endregion: --- ProxyType

// region:    --- AuthType

/// The authentication kind of a destination.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthType {
	NoAuthentication,
	BasicAuthentication,
	#[serde(rename = "SAMLAssertion")]
	#[display("SAMLAssertion")]
	SamlAssertion,
	#[serde(rename = "SAMLBearerAssertion")]
	#[display("SAMLBearerAssertion")]
	SamlBearerAssertion,
	ClientCertificateAuthentication,
	OAuth2ClientCredentials,
}

impl AuthType {
	pub const ALL: &[Self] = &[
		Self::NoAuthentication,
		Self::BasicAuthentication,
		Self::SamlAssertion,
		Self::SamlBearerAssertion,
		Self::ClientCertificateAuthentication,
		Self::OAuth2ClientCredentials,
	];

	/// The prefix of the certificate name created for this authentication kind.
	/// Only the certificate based kinds have one.
	#[must_use]
	pub const fn certificate_name_prefix(&self) -> Option<&'static str> {
		match self {
			Self::SamlAssertion => Some("SAMLAssertion"),
			Self::SamlBearerAssertion => Some("SAMLBearerAssertion"),
			Self::ClientCertificateAuthentication => Some("ClientCertificate"),
			Self::NoAuthentication | Self::BasicAuthentication | Self::OAuth2ClientCredentials => None,
		}
	}
}

impl FromStr for AuthType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		parse_one_of("authentication type", s, Self::ALL)
	}
}

// endregion: --- AuthType

// region:    --- TokenServiceUrlType

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenServiceUrlType {
	Dedicated,
	Common,
}

impl TokenServiceUrlType {
	pub const ALL: &[Self] = &[Self::Dedicated, Self::Common];
}

impl FromStr for TokenServiceUrlType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		parse_one_of("token service URL type", s, Self::ALL)
	}
}

// endregion: --- TokenServiceUrlType

// region:    --- Support

fn parse_one_of<T: Copy + std::fmt::Display>(field: &str, value: &str, allowed: &[T]) -> Result<T> {
	allowed.iter().copied().find(|candidate| candidate.to_string() == value).ok_or_else(|| {
		let allowed = allowed.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
		Error::validation(format!("{field}: {value:?} must be one of [{allowed}]"))
	})
}

// endregion: --- Support
