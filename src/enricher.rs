//! Structural patching of opaque JSON blobs: the formation assignment configuration
//! (with the created certificate material) and the destination additional properties
//! (with the correlation IDs).

use crate::destination::CertificateData;
use crate::{Error, Result};
use serde_json::{Value, json};
use value_ext::{JsonValueExt, JsonValueExtError};

const CERTIFICATE_KEY: &str = "certificate";
const ASSERTION_ISSUER_KEY: &str = "assertionIssuer";

/// Sets `{destination_type_path}.certificate` to the certificate chain.
///
/// `destination_type_path` is dot separated (e.g., `credentials.inboundCommunication.clientCertificateAuthentication`),
/// the missing intermediate objects are created and all the other keys are kept as is.
/// An empty `assignment_config` is treated as `{}`.
pub fn enrich_assignment_config_with_certificate_data(
	assignment_config: &str,
	destination_type_path: &str,
	cert_data: &CertificateData,
) -> Result<String> {
	let mut config = parse_config(assignment_config)?;

	insert_at_path(&mut config, destination_type_path, CERTIFICATE_KEY, &cert_data.certificate_chain)
		.map_err(|err| Error::from(err).context(format!("while enriching {destination_type_path:?} with the certificate")))?;

	Ok(serde_json::to_string(&config)?)
}

/// Same as `enrich_assignment_config_with_certificate_data`, and also sets
/// `{destination_type_path}.assertionIssuer` to the certificate common name.
pub fn enrich_assignment_config_with_saml_certificate_data(
	assignment_config: &str,
	destination_type_path: &str,
	cert_data: &CertificateData,
) -> Result<String> {
	let config = enrich_assignment_config_with_certificate_data(assignment_config, destination_type_path, cert_data)?;
	let mut config = parse_config(&config)?;

	insert_at_path(&mut config, destination_type_path, ASSERTION_ISSUER_KEY, &cert_data.common_name)
		.map_err(|err| Error::from(err).context(format!("while enriching {destination_type_path:?} with the assertion issuer")))?;

	Ok(serde_json::to_string(&config)?)
}

/// Sets the comma joined `correlation_ids` under `correlation_ids_key` of the destination additional properties.
pub fn enrich_additional_properties_with_correlation_ids(
	correlation_ids_key: &str,
	correlation_ids: &[String],
	additional_properties: Option<&Value>,
) -> Result<Value> {
	let mut properties = match additional_properties {
		None | Some(Value::Null) => json!({}),
		Some(properties) => properties.clone(),
	};

	properties
		.x_insert(correlation_ids_key, correlation_ids.join(","))
		.map_err(|err| Error::from(err).context("while setting the correlation IDs as additional properties of the destination"))?;

	Ok(properties)
}

// region:    --- Support

fn parse_config(assignment_config: &str) -> Result<Value> {
	if assignment_config.trim().is_empty() {
		return Ok(json!({}));
	}
	serde_json::from_str(assignment_config)
		.map_err(|err| Error::from(err).context("while parsing the formation assignment configuration"))
}

/// Sets `key` in the object at the dot separated `dot_path`, creating the missing objects on the way.
///
/// Each segment is a literal object key, a `/` or `~` in it is not a JSON pointer token.
fn insert_at_path(
	config: &mut Value,
	dot_path: &str,
	key: &str,
	value: &str,
) -> core::result::Result<(), JsonValueExtError> {
	let mut current = config;
	for segment in dot_path.split('.').filter(|segment| !segment.is_empty()) {
		let Value::Object(map) = current else {
			return Err(JsonValueExtError::Custom(format!("the parent of {segment:?} is not an object")));
		};
		current = map.entry(segment).or_insert_with(|| json!({}));
	}

	current.x_insert(key, value)
}

// endregion: --- Support
