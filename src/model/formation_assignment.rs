use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The type of the source or target of a formation assignment.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormationAssignmentType {
	#[serde(rename = "APPLICATION")]
	#[display("APPLICATION")]
	Application,
	#[serde(rename = "RUNTIME")]
	#[display("RUNTIME")]
	Runtime,
	#[serde(rename = "RUNTIME_CONTEXT")]
	#[display("RUNTIME_CONTEXT")]
	RuntimeContext,
	/// Any type this crate does not know how to provision for.
	#[serde(other)]
	#[display("UNKNOWN")]
	Unknown,
}

/// One directed edge (source -> target) of a formation.
///
/// Owned by the formation engine, this crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationAssignment {
	pub id: String,
	pub formation_id: String,
	pub tenant_id: String,
	pub source: String,
	pub source_type: FormationAssignmentType,
	pub target: String,
	pub target_type: FormationAssignmentType,
	pub state: String,
	#[serde(default)]
	pub value: Option<Value>,
	#[serde(default)]
	pub error: Option<Value>,
}
