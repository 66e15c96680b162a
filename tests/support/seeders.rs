use super::{MockRepositories, MockTransport};
use destination_creator::model::{FormationAssignment, FormationAssignmentType, LabelableObject, TenantType};
use destination_creator::{Config, RequestContext, Result, Service, UrlConfig};
use std::sync::Arc;

// region:    --- Fixture Constants

pub const CONSUMER_SUBACCOUNT_ID: &str = "sub-consumer";
pub const CONSUMER_TENANT_ID: &str = "tenant-consumer";
pub const CONSUMER_REGION: &str = "cf-eu10";

pub const PROVIDER_SUBACCOUNT_ID: &str = "sub-provider";
pub const PROVIDER_TENANT_ID: &str = "tenant-provider";
pub const PROVIDER_REGION: &str = "cf-us10";

pub const PARENT_TENANT_ID: &str = "tenant-parent";
pub const ASSIGNMENT_ID: &str = "fa-1";

pub const SOURCE_APP_ID: &str = "app-source";
pub const SOURCE_APP_BASE_URL: &str = "https://source.example.com";
pub const TARGET_APP_ID: &str = "app-target";
pub const TARGET_APP_BASE_URL: &str = "https://target.example.com";
pub const APP_TEMPLATE_ID: &str = "tmpl-1";

pub const RUNTIME_ID: &str = "rt-1";
pub const RUNTIME_CONTEXT_ID: &str = "rtc-1";

pub const DESTINATION_BASE_URL: &str = "https://dest-creator.example.com";
pub const CORRELATION_IDS_KEY: &str = "correlationIds";

const GLOBAL_SUBACCOUNT_ID: &str = "global_subaccount_id";
const REGION: &str = "region";

// endregion: --- Fixture Constants

pub fn seed_config() -> Config {
	let url_config = |entities: &str| {
		UrlConfig::default()
			.with_base_url(DESTINATION_BASE_URL)
			.with_subaccount_level_path(format!("/regions/{{region}}/subaccounts/{{subaccountId}}/{entities}"))
			.with_instance_level_path(format!(
				"/regions/{{region}}/subaccounts/{{subaccountId}}/instances/{{instanceId}}/{entities}"
			))
			.with_params("region", "subaccountId", "instanceId", "name")
	};

	Config::default()
		.with_correlation_ids_key(CORRELATION_IDS_KEY)
		.with_destination_api(url_config("destinations"))
		.with_certificate_api(url_config("certificates"))
}

/// The consumer and provider tenants with their region, the applications, the runtime and its context.
/// Every assignment target is labelled with the consumer subaccount.
pub fn seed_repositories() -> MockRepositories {
	MockRepositories::default()
		.with_tenant(CONSUMER_TENANT_ID, CONSUMER_SUBACCOUNT_ID, TenantType::Subaccount)
		.with_tenant(PROVIDER_TENANT_ID, PROVIDER_SUBACCOUNT_ID, TenantType::Subaccount)
		.with_label(LabelableObject::Tenant, CONSUMER_SUBACCOUNT_ID, REGION, CONSUMER_REGION)
		.with_label(LabelableObject::Tenant, PROVIDER_SUBACCOUNT_ID, REGION, PROVIDER_REGION)
		.with_application(SOURCE_APP_ID, None, Some(SOURCE_APP_BASE_URL))
		.with_application(TARGET_APP_ID, Some(APP_TEMPLATE_ID), Some(TARGET_APP_BASE_URL))
		.with_label(LabelableObject::Application, TARGET_APP_ID, GLOBAL_SUBACCOUNT_ID, CONSUMER_SUBACCOUNT_ID)
		.with_label(
			LabelableObject::ApplicationTemplate,
			APP_TEMPLATE_ID,
			GLOBAL_SUBACCOUNT_ID,
			PROVIDER_SUBACCOUNT_ID,
		)
		.with_label(LabelableObject::Runtime, RUNTIME_ID, GLOBAL_SUBACCOUNT_ID, CONSUMER_SUBACCOUNT_ID)
		.with_label(
			LabelableObject::RuntimeContext,
			RUNTIME_CONTEXT_ID,
			GLOBAL_SUBACCOUNT_ID,
			CONSUMER_SUBACCOUNT_ID,
		)
		.with_runtime_owner(PROVIDER_TENANT_ID, RUNTIME_ID)
		.with_runtime_context(RUNTIME_CONTEXT_ID, RUNTIME_ID)
}

/// An assignment from the source application to the target application.
pub fn seed_assignment() -> FormationAssignment {
	FormationAssignment {
		id: ASSIGNMENT_ID.to_string(),
		formation_id: "formation-1".to_string(),
		tenant_id: PARENT_TENANT_ID.to_string(),
		source: SOURCE_APP_ID.to_string(),
		source_type: FormationAssignmentType::Application,
		target: TARGET_APP_ID.to_string(),
		target_type: FormationAssignmentType::Application,
		state: "INITIAL".to_string(),
		value: None,
		error: None,
	}
}

pub fn seed_assignment_with_target(target: &str, target_type: FormationAssignmentType) -> FormationAssignment {
	FormationAssignment {
		target: target.to_string(),
		target_type,
		..seed_assignment()
	}
}

pub fn seed_ctx() -> RequestContext {
	RequestContext::new("corr-id-1").with_client_user("client-user-1")
}

/// Builds the service over the given collaborators.
pub fn seed_service(repositories: &Arc<MockRepositories>, transport: &Arc<MockTransport>) -> Result<Service> {
	Service::builder()
		.with_config(seed_config())
		.with_transport(transport.clone())
		.with_tenant_repository(repositories.clone())
		.with_label_repository(repositories.clone())
		.with_application_repository(repositories.clone())
		.with_runtime_repository(repositories.clone())
		.with_runtime_context_repository(repositories.clone())
		.build()
}

/// The subaccount level URL of `entities` (e.g., `destinations`) in the consumer subaccount.
pub fn consumer_url(entities: &str) -> String {
	format!("{DESTINATION_BASE_URL}/regions/{CONSUMER_REGION}/subaccounts/{CONSUMER_SUBACCOUNT_ID}/{entities}")
}
