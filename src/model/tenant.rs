use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TenantType {
	#[display("account")]
	Account,
	#[display("customer")]
	Customer,
	#[display("organization")]
	Organization,
	#[display("folder")]
	Folder,
	#[display("resource-group")]
	ResourceGroup,
	#[display("subaccount")]
	Subaccount,
	#[display("unknown")]
	#[serde(other)]
	Unknown,
}

/// The internal record of a business tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
	/// Internal ID, used to scope the label and entity lookups.
	pub id: String,
	/// The externally visible ID (e.g., the subaccount ID).
	pub external_id: String,
	pub tenant_type: TenantType,
}
