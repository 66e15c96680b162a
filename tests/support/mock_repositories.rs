use async_trait::async_trait;
use destination_creator::model::{Application, Label, LabelValue, LabelableObject, RuntimeContext, Tenant, TenantType};
use destination_creator::repository::{
	ApplicationRepository, LabelRepository, RuntimeContextRepository, RuntimeRepository, TenantRepository,
};
use destination_creator::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In memory implementation of all the repositories.
///
/// Seed it before sharing it, then inspect `calls()` to assert which lookups happened.
#[derive(Default)]
pub struct MockRepositories {
	tenants: HashMap<String, Tenant>,
	labels: HashMap<(LabelableObject, String), HashMap<String, Label>>,
	applications: HashMap<String, Application>,
	runtime_owners: HashSet<(String, String)>,
	runtime_contexts: HashMap<String, RuntimeContext>,
	calls: Mutex<Vec<String>>,
	label_lookups: Mutex<Vec<LabelLookup>>,
}

/// The arguments of a `get_by_key` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelLookup {
	pub tenant_id: String,
	pub object_type: LabelableObject,
	pub object_id: String,
	pub key: String,
}

/// Seeders
impl MockRepositories {
	pub fn with_tenant(mut self, id: &str, external_id: &str, tenant_type: TenantType) -> Self {
		let tenant = Tenant {
			id: id.to_string(),
			external_id: external_id.to_string(),
			tenant_type,
		};
		self.tenants.insert(external_id.to_string(), tenant);
		self
	}

	pub fn with_label(mut self, object_type: LabelableObject, object_id: &str, key: &str, value: impl Into<LabelValue>) -> Self {
		self.labels
			.entry((object_type, object_id.to_string()))
			.or_default()
			.insert(key.to_string(), Label::new(key, value));
		self
	}

	pub fn with_application(mut self, id: &str, template_id: Option<&str>, base_url: Option<&str>) -> Self {
		let app = Application {
			id: id.to_string(),
			application_template_id: template_id.map(str::to_string),
			base_url: base_url.map(str::to_string),
		};
		self.applications.insert(id.to_string(), app);
		self
	}

	pub fn with_runtime_owner(mut self, tenant_id: &str, runtime_id: &str) -> Self {
		self.runtime_owners.insert((tenant_id.to_string(), runtime_id.to_string()));
		self
	}

	pub fn with_runtime_context(mut self, id: &str, runtime_id: &str) -> Self {
		let runtime_context = RuntimeContext {
			id: id.to_string(),
			runtime_id: runtime_id.to_string(),
		};
		self.runtime_contexts.insert(id.to_string(), runtime_context);
		self
	}
}

/// Call recording
impl MockRepositories {
	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
	}

	pub fn call_count(&self, call: &str) -> usize {
		self.calls().iter().filter(|recorded| recorded.as_str() == call).count()
	}

	pub fn label_lookups(&self) -> Vec<LabelLookup> {
		self.label_lookups.lock().map(|lookups| lookups.clone()).unwrap_or_default()
	}

	fn record(&self, call: &str) {
		if let Ok(mut calls) = self.calls.lock() {
			calls.push(call.to_string());
		}
	}
}

#[async_trait]
impl TenantRepository for MockRepositories {
	async fn get_by_external_tenant(&self, external_tenant: &str) -> Result<Tenant> {
		self.record("tenants.get_by_external_tenant");
		self.tenants
			.get(external_tenant)
			.cloned()
			.ok_or_else(|| Error::not_found(format!("tenant with external ID {external_tenant:?}")))
	}
}

#[async_trait]
impl LabelRepository for MockRepositories {
	async fn get_by_key(
		&self,
		tenant_id: &str,
		object_type: LabelableObject,
		object_id: &str,
		key: &str,
	) -> Result<Label> {
		self.record("labels.get_by_key");
		if let Ok(mut lookups) = self.label_lookups.lock() {
			lookups.push(LabelLookup {
				tenant_id: tenant_id.to_string(),
				object_type,
				object_id: object_id.to_string(),
				key: key.to_string(),
			});
		}
		self.labels
			.get(&(object_type, object_id.to_string()))
			.and_then(|labels| labels.get(key))
			.cloned()
			.ok_or_else(|| Error::not_found(format!("label {key:?} for {object_type} {object_id:?}")))
	}

	async fn list_for_object(
		&self,
		_tenant_id: &str,
		object_type: LabelableObject,
		object_id: &str,
	) -> Result<HashMap<String, Label>> {
		self.record("labels.list_for_object");
		Ok(self.labels.get(&(object_type, object_id.to_string())).cloned().unwrap_or_default())
	}

	async fn list_for_global_object(
		&self,
		object_type: LabelableObject,
		object_id: &str,
	) -> Result<HashMap<String, Label>> {
		self.record("labels.list_for_global_object");
		Ok(self.labels.get(&(object_type, object_id.to_string())).cloned().unwrap_or_default())
	}
}

#[async_trait]
impl ApplicationRepository for MockRepositories {
	async fn get_by_id(&self, _tenant_id: &str, id: &str) -> Result<Application> {
		self.record("applications.get_by_id");
		self.applications
			.get(id)
			.cloned()
			.ok_or_else(|| Error::not_found(format!("application {id:?}")))
	}
}

#[async_trait]
impl RuntimeRepository for MockRepositories {
	async fn owner_exists(&self, tenant_id: &str, id: &str) -> Result<bool> {
		self.record("runtimes.owner_exists");
		Ok(self.runtime_owners.contains(&(tenant_id.to_string(), id.to_string())))
	}
}

#[async_trait]
impl RuntimeContextRepository for MockRepositories {
	async fn get_by_id(&self, _tenant_id: &str, id: &str) -> Result<RuntimeContext> {
		self.record("runtime_contexts.get_by_id");
		self.runtime_contexts
			.get(id)
			.cloned()
			.ok_or_else(|| Error::not_found(format!("runtime context {id:?}")))
	}
}
