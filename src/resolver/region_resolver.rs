use crate::Result;
use crate::model::{LabelableObject, REGION_LABEL_KEY};
use crate::repository::{LabelRepository, TenantRepository};
use std::sync::Arc;

/// Maps a subaccount to its region with its `region` label.
///
/// The label is attached to the external subaccount ID, scoped by the internal tenant ID.
/// Each call is a fresh two-hop lookup (tenant, then label), nothing is cached.
#[derive(Clone)]
pub struct RegionResolver {
	tenants: Arc<dyn TenantRepository>,
	labels: Arc<dyn LabelRepository>,
}

impl RegionResolver {
	pub fn new(tenants: Arc<dyn TenantRepository>, labels: Arc<dyn LabelRepository>) -> Self {
		Self { tenants, labels }
	}

	pub async fn resolve_region(&self, tenant_external_id: &str) -> Result<String> {
		let tenant = self
			.tenants
			.get_by_external_tenant(tenant_external_id)
			.await
			.map_err(|err| err.context(format!("while getting tenant by external ID: {tenant_external_id:?}")))?;

		let region_label = self
			.labels
			.get_by_key(&tenant.id, LabelableObject::Tenant, tenant_external_id, REGION_LABEL_KEY)
			.await
			.map_err(|err| {
				err.context(format!(
					"while getting {REGION_LABEL_KEY:?} label for tenant with external ID: {tenant_external_id:?}"
				))
			})?;

		Ok(region_label.value_as_str()?.to_string())
	}
}
