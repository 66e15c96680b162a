//! The request and response payloads of the destination creator remote API.
//! Every payload validates itself before it is sent.

// region:    --- Modules

mod certificate;
mod destination_body;
mod destination_kind;

// -- Flatten
pub use certificate::*;
pub use destination_body::*;
pub use destination_kind::*;

// endregion: --- Modules

/// Maximum length of a destination or certificate name.
pub const MAX_ENTITY_NAME_LENGTH: usize = 64;

/// Extension of the key store file the remote service derives from a certificate name.
pub const JAVA_KEY_STORE_FILE_EXTENSION: &str = ".jks";

/// Validates a destination or certificate name against `^[A-Za-z0-9_-]{1,64}$`.
pub fn validate_entity_name(name: &str) -> crate::Result<()> {
	if name.is_empty() {
		return Err(crate::Error::validation("name: cannot be blank"));
	}
	if name.len() > MAX_ENTITY_NAME_LENGTH {
		return Err(crate::Error::validation(format!(
			"name: the length must be no more than {MAX_ENTITY_NAME_LENGTH}"
		)));
	}
	if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
		return Err(crate::Error::validation(format!(
			"name: {name:?} must contain only letters, digits, '_' and '-'"
		)));
	}
	Ok(())
}
