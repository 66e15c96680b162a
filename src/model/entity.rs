use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
	pub id: String,
	pub application_template_id: Option<String>,
	pub base_url: Option<String>,
}

impl Application {
	/// Returns the template ID if present and not empty.
	pub fn template_id(&self) -> Option<&str> {
		self.application_template_id.as_deref().filter(|id| !id.is_empty())
	}

	/// Returns the base URL if present and not empty.
	pub fn base_url(&self) -> Option<&str> {
		self.base_url.as_deref().filter(|url| !url.is_empty())
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeContext {
	pub id: String,
	/// The runtime owning this context.
	pub runtime_id: String,
}
