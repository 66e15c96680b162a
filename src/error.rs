use crate::webc;
use derive_more::{Display, From};
use value_ext::JsonValueExtError;

pub type Result<T> = core::result::Result<T, Error>;

/// Main error type of the crate.
///
/// Each layer wraps the error it receives with `Error::context(..)` instead of replacing it,
/// so `Error::kind()` always reports the kind of the root failure.
#[derive(Debug, Display, From)]
pub enum Error {
	// -- Input / Policy
	/// Bad input or a policy violation. Never retried.
	#[display("validation error: {_0}")]
	Validation(String),

	#[display("not found: {_0}")]
	NotFound(String),

	#[display("unexpected type of {name:?} label, expected: {expected}, got: {got}")]
	TypeMismatch {
		name: String,
		expected: &'static str,
		got: &'static str,
	},

	// -- Remote service
	#[display("failed to {action} entity with name: {entity_name:?}, status: {status}, body: {body}")]
	Upstream {
		action: &'static str,
		entity_name: String,
		status: u16,
		body: String,
	},

	#[display("destination creator service retry limit: {depth_limit} is exceeded")]
	RetryLimitExceeded { depth_limit: u8 },

	// -- Wrapping
	#[display("{context}: {source}")]
	Context { context: String, source: Box<Error> },

	// -- Externals
	#[from]
	#[display("web call failed: {_0}")]
	Webc(webc::Error),

	#[from]
	#[display("json serialization error: {_0}")]
	SerdeJson(serde_json::Error),

	#[from]
	#[display("json value error: {_0}")]
	JsonValueExt(JsonValueExtError),
}

// region:    --- ErrorKind

/// The kind of the root failure, independent of the context wrapping.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum ErrorKind {
	Validation,
	NotFound,
	TypeMismatch,
	Upstream,
	Serialization,
	RetryLimitExceeded,
	Transport,
}

// endregion: --- ErrorKind

/// Constructors
impl Error {
	pub fn validation(msg: impl Into<String>) -> Self {
		Self::Validation(msg.into())
	}

	pub fn not_found(msg: impl Into<String>) -> Self {
		Self::NotFound(msg.into())
	}

	/// Wraps `self` with the call-specific `context`.
	pub fn context(self, context: impl Into<String>) -> Self {
		Self::Context {
			context: context.into(),
			source: Box::new(self),
		}
	}
}

/// Getters
impl Error {
	#[must_use]
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Validation(_) => ErrorKind::Validation,
			Self::NotFound(_) => ErrorKind::NotFound,
			Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
			Self::Upstream { .. } => ErrorKind::Upstream,
			Self::RetryLimitExceeded { .. } => ErrorKind::RetryLimitExceeded,
			Self::Context { source, .. } => source.kind(),
			Self::Webc(_) => ErrorKind::Transport,
			Self::SerdeJson(_) | Self::JsonValueExt(_) => ErrorKind::Serialization,
		}
	}

	/// Returns the innermost error, skipping all the `Context` layers.
	#[must_use]
	pub fn root(&self) -> &Error {
		match self {
			Self::Context { source, .. } => source.root(),
			other => other,
		}
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
