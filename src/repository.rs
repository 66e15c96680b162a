//! The lookups this crate needs from the persistence layer.
//! All of them are read only, the implementations live outside of this crate.

use crate::Result;
use crate::model::{Application, Label, LabelableObject, RuntimeContext, Tenant};
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait TenantRepository: Send + Sync {
	/// Returns `Error::NotFound` if no tenant has this external ID.
	async fn get_by_external_tenant(&self, external_tenant: &str) -> Result<Tenant>;
}

#[async_trait]
pub trait LabelRepository: Send + Sync {
	/// Returns `Error::NotFound` if the object has no label with this key.
	async fn get_by_key(
		&self,
		tenant_id: &str,
		object_type: LabelableObject,
		object_id: &str,
		key: &str,
	) -> Result<Label>;

	/// Labels of a tenant scoped object, by key.
	async fn list_for_object(
		&self,
		tenant_id: &str,
		object_type: LabelableObject,
		object_id: &str,
	) -> Result<HashMap<String, Label>>;

	/// Labels of a global (not tenant scoped) object, e.g., an application template.
	async fn list_for_global_object(
		&self,
		object_type: LabelableObject,
		object_id: &str,
	) -> Result<HashMap<String, Label>>;
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
	async fn get_by_id(&self, tenant_id: &str, id: &str) -> Result<Application>;
}

#[async_trait]
pub trait RuntimeRepository: Send + Sync {
	/// Whether `tenant_id` is an owner of the runtime.
	async fn owner_exists(&self, tenant_id: &str, id: &str) -> Result<bool>;
}

#[async_trait]
pub trait RuntimeContextRepository: Send + Sync {
	async fn get_by_id(&self, tenant_id: &str, id: &str) -> Result<RuntimeContext>;
}
