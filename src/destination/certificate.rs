use crate::destination::{AuthType, MAX_ENTITY_NAME_LENGTH, validate_entity_name};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// region:    --- CertificateRequestBody

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestBody {
	pub name: String,
	pub self_signed: bool,
}

impl CertificateRequestBody {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			self_signed: true,
		}
	}

	pub fn validate(&self) -> Result<()> {
		validate_entity_name(&self.name)
	}
}

/// Builds the certificate name of a formation assignment: `{prefix}-{assignment_id}`,
/// truncated to `MAX_ENTITY_NAME_LENGTH`.
pub fn certificate_name(auth_type: AuthType, assignment_id: &str) -> Result<String> {
	let prefix = auth_type.certificate_name_prefix().ok_or_else(|| {
		Error::validation(format!(
			"no certificate can be created for authentication type {auth_type}"
		))
	})?;

	let mut name = format!("{prefix}-{assignment_id}");
	if name.len() > MAX_ENTITY_NAME_LENGTH {
		let cut = (0..=MAX_ENTITY_NAME_LENGTH)
			.rev()
			.find(|idx| name.is_char_boundary(*idx))
			.unwrap_or(0);
		name.truncate(cut);
	}

	Ok(name)
}

// endregion: --- CertificateRequestBody

// region:    --- CertificateResponse

/// The certificate creation response of the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateResponse {
	#[serde(default)]
	pub file_name: String,
	#[serde(default)]
	pub common_name: String,
	#[serde(default)]
	pub certificate_chain: String,
}

impl CertificateResponse {
	pub fn validate(&self) -> Result<()> {
		let required = [
			("fileName", &self.file_name),
			("commonName", &self.common_name),
			("certificateChain", &self.certificate_chain),
		];
		for (field, value) in required {
			if value.is_empty() {
				return Err(Error::validation(format!("{field}: cannot be blank")));
			}
		}
		Ok(())
	}
}

// endregion: --- CertificateResponse

// region:    --- CertificateData

/// The certificate material returned to the caller once the certificate is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateData {
	pub file_name: String,
	pub common_name: String,
	pub certificate_chain: String,
}

impl From<CertificateResponse> for CertificateData {
	fn from(response: CertificateResponse) -> Self {
		Self {
			file_name: response.file_name,
			common_name: response.common_name,
			certificate_chain: response.certificate_chain,
		}
	}
}

// endregion: --- CertificateData

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn test_certificate_name_prefix() -> Result<()> {
		let name = certificate_name(AuthType::SamlAssertion, "fa-1")?;
		assert_eq!(name, "SAMLAssertion-fa-1");

		let name = certificate_name(AuthType::ClientCertificateAuthentication, "fa-1")?;
		assert_eq!(name, "ClientCertificate-fa-1");
		Ok(())
	}

	#[test]
	fn test_certificate_name_truncated() -> Result<()> {
		let assignment_id = "f".repeat(80);
		let name = certificate_name(AuthType::SamlBearerAssertion, &assignment_id)?;

		assert_eq!(name.len(), MAX_ENTITY_NAME_LENGTH);
		assert!(name.starts_with("SAMLBearerAssertion-"));
		assert!(CertificateRequestBody::new(name).validate().is_ok());
		Ok(())
	}

	#[test]
	fn test_certificate_name_unsupported_auth_type() {
		let err = certificate_name(AuthType::BasicAuthentication, "fa-1").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Validation);
	}

	#[test]
	fn test_certificate_response_validate() -> Result<()> {
		let response: CertificateResponse =
			serde_json::from_str(r#"{"fileName":"cert.jks","commonName":"cn","certificateChain":""}"#)?;
		let err = response.validate().unwrap_err();
		assert!(err.to_string().contains("certificateChain"));
		Ok(())
	}
}
