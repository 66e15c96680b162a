use crate::model::FormationAssignmentType;
use crate::{Error, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Label holding the external subaccount ID of an entity.
pub const GLOBAL_SUBACCOUNT_LABEL_KEY: &str = "global_subaccount_id";
/// Label holding the region of a tenant.
pub const REGION_LABEL_KEY: &str = "region";

// region:    --- LabelableObject

/// The kind of object a label is attached to.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelableObject {
	Tenant,
	Application,
	ApplicationTemplate,
	Runtime,
	RuntimeContext,
}

impl LabelableObject {
	/// Maps the type of a formation assignment participant to the object its labels are attached to.
	pub fn from_assignment_type(assignment_type: FormationAssignmentType) -> Result<Self> {
		match assignment_type {
			FormationAssignmentType::Application => Ok(Self::Application),
			FormationAssignmentType::Runtime => Ok(Self::Runtime),
			FormationAssignmentType::RuntimeContext => Ok(Self::RuntimeContext),
			FormationAssignmentType::Unknown => Err(Error::validation(format!(
				"unknown formation assignment type: {assignment_type}"
			))),
		}
	}
}

// endregion: --- LabelableObject

// region:    --- LabelValue

/// The value of a label. Labels are untyped JSON in storage, this is the closed set this crate accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
	String(String),
	Number(Number),
	Bool(bool),
	List(Vec<LabelValue>),
}

/// Getters
impl LabelValue {
	#[must_use]
	pub const fn type_name(&self) -> &'static str {
		match self {
			Self::String(_) => "string",
			Self::Number(_) => "number",
			Self::Bool(_) => "bool",
			Self::List(_) => "list",
		}
	}

	/// Returns the string value, or a `TypeMismatch` error naming the label `key`.
	pub fn as_str(&self, key: &str) -> Result<&str> {
		match self {
			Self::String(value) => Ok(value),
			other => Err(Error::TypeMismatch {
				name: key.to_string(),
				expected: "string",
				got: other.type_name(),
			}),
		}
	}
}

impl From<&str> for LabelValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for LabelValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<bool> for LabelValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

// endregion: --- LabelValue

// region:    --- Label

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
	pub key: String,
	pub value: LabelValue,
}

impl Label {
	pub fn new(key: impl Into<String>, value: impl Into<LabelValue>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}

	pub fn value_as_str(&self) -> Result<&str> {
		self.value.as_str(&self.key)
	}
}

// endregion: --- Label
