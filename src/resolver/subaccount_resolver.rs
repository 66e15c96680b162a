use crate::model::{FormationAssignment, FormationAssignmentType, GLOBAL_SUBACCOUNT_LABEL_KEY, LabelableObject, TenantType};
use crate::repository::{
	ApplicationRepository, LabelRepository, RuntimeContextRepository, RuntimeRepository, TenantRepository,
};
use crate::{Error, Result};
use std::sync::Arc;

/// Decides which subaccount a provisioning request runs against, and whether the caller may use it.
///
/// - No subaccount given: the consumer subaccount, i.e., the `global_subaccount_id` label of the assignment target.
/// - The consumer subaccount given: accepted as is.
/// - Any other subaccount: it must be the provider of the target (owner of the application template,
///   or owner of the runtime).
#[derive(Clone)]
pub struct SubaccountResolver {
	tenants: Arc<dyn TenantRepository>,
	labels: Arc<dyn LabelRepository>,
	applications: Arc<dyn ApplicationRepository>,
	runtimes: Arc<dyn RuntimeRepository>,
	runtime_contexts: Arc<dyn RuntimeContextRepository>,
}

/// Constructors
impl SubaccountResolver {
	pub fn new(
		tenants: Arc<dyn TenantRepository>,
		labels: Arc<dyn LabelRepository>,
		applications: Arc<dyn ApplicationRepository>,
		runtimes: Arc<dyn RuntimeRepository>,
		runtime_contexts: Arc<dyn RuntimeContextRepository>,
	) -> Self {
		Self {
			tenants,
			labels,
			applications,
			runtimes,
			runtime_contexts,
		}
	}
}

impl SubaccountResolver {
	/// Returns the subaccount the request must run against.
	///
	/// With `skip_validation`, a non empty `external_subaccount_id` is accepted without any ownership check.
	pub async fn resolve_subaccount(
		&self,
		external_subaccount_id: &str,
		formation_assignment: &FormationAssignment,
		skip_validation: bool,
	) -> Result<String> {
		if external_subaccount_id.is_empty() {
			let consumer_subaccount_id = self.consumer_subaccount(formation_assignment).await?;
			tracing::info!(
				subaccount_id = %consumer_subaccount_id,
				"no subaccount ID was provided in the destination, the consumer subaccount is used"
			);
			return Ok(consumer_subaccount_id);
		}

		if skip_validation {
			tracing::debug!(subaccount_id = %external_subaccount_id, "skipping the subaccount validation");
			return Ok(external_subaccount_id.to_string());
		}

		match self.consumer_subaccount(formation_assignment).await {
			Ok(consumer_subaccount_id) if consumer_subaccount_id == external_subaccount_id => {
				tracing::info!(
					subaccount_id = %external_subaccount_id,
					"successfully validated the provided destination subaccount ID is a consumer subaccount"
				);
				return Ok(consumer_subaccount_id);
			}
			Ok(_) => (),
			Err(err) => {
				tracing::warn!(
					subaccount_id = %external_subaccount_id,
					error = %err,
					"couldn't validate if the provided destination subaccount ID is a consumer subaccount. Validating if it's a provider one..."
				);
			}
		}

		match formation_assignment.target_type {
			FormationAssignmentType::Application => {
				self.validate_app_template_provider(formation_assignment, external_subaccount_id).await?
			}
			FormationAssignmentType::Runtime => {
				self.validate_runtime_provider(&formation_assignment.target, external_subaccount_id).await?
			}
			FormationAssignmentType::RuntimeContext => {
				self.validate_runtime_context_provider(formation_assignment, external_subaccount_id).await?
			}
			FormationAssignmentType::Unknown => {
				return Err(Error::validation(format!(
					"unknown formation assignment type: {}",
					formation_assignment.target_type
				)));
			}
		}

		Ok(external_subaccount_id.to_string())
	}

	/// Returns the `global_subaccount_id` label of the assignment target.
	pub async fn consumer_subaccount(&self, formation_assignment: &FormationAssignment) -> Result<String> {
		let FormationAssignment {
			tenant_id,
			target,
			target_type,
			..
		} = formation_assignment;

		let object_type = LabelableObject::from_assignment_type(*target_type)?;

		let labels = self
			.labels
			.list_for_object(tenant_id, object_type, target)
			.await
			.map_err(|err| err.context(format!("while getting labels for {target_type} with ID: {target:?}")))?;

		let label = labels.get(GLOBAL_SUBACCOUNT_LABEL_KEY).ok_or_else(|| {
			Error::not_found(format!(
				"{GLOBAL_SUBACCOUNT_LABEL_KEY:?} label does not exist for {target_type} with ID: {target:?}"
			))
		})?;

		Ok(label.value_as_str()?.to_string())
	}
}

// region:    --- Provider Validation

impl SubaccountResolver {
	/// The subaccount must be the `global_subaccount_id` of the template of the target application.
	///
	/// A missing label is a `Validation` error, a label that is not a string is a `TypeMismatch`,
	/// like any other label read through `Label::value_as_str`.
	async fn validate_app_template_provider(
		&self,
		formation_assignment: &FormationAssignment,
		external_subaccount_id: &str,
	) -> Result<()> {
		let app = self
			.applications
			.get_by_id(&formation_assignment.tenant_id, &formation_assignment.target)
			.await
			.map_err(|err| {
				err.context(format!(
					"while getting application with ID: {:?}",
					formation_assignment.target
				))
			})?;

		let template_id = app.template_id().ok_or_else(|| {
			Error::validation(format!(
				"the application template ID for application ID: {:?} should not be empty",
				app.id
			))
		})?;

		let labels = self
			.labels
			.list_for_global_object(LabelableObject::ApplicationTemplate, template_id)
			.await
			.map_err(|err| err.context(format!("while getting labels for application template with ID: {template_id:?}")))?;

		let label = labels.get(GLOBAL_SUBACCOUNT_LABEL_KEY).ok_or_else(|| {
			Error::validation(format!(
				"{GLOBAL_SUBACCOUNT_LABEL_KEY:?} label should exist as part of the provider application template with ID: {template_id:?}"
			))
		})?;

		if label.value_as_str()? != external_subaccount_id {
			return Err(Error::validation(format!(
				"the provided destination subaccount {external_subaccount_id:?} is not the template owner of the application template with ID: {template_id:?}"
			)));
		}

		tracing::info!(
			subaccount_id = %external_subaccount_id,
			"successfully validated the provided destination subaccount is a provider one - the owner of the application template"
		);

		Ok(())
	}

	async fn validate_runtime_provider(&self, runtime_id: &str, external_subaccount_id: &str) -> Result<()> {
		let tenant = self
			.tenants
			.get_by_external_tenant(external_subaccount_id)
			.await
			.map_err(|err| err.context(format!("while getting tenant by external ID: {external_subaccount_id:?}")))?;

		if tenant.tenant_type != TenantType::Subaccount {
			return Err(Error::validation(format!(
				"the provided destination external tenant ID: {external_subaccount_id:?} has invalid type, expected: {}, got: {}",
				TenantType::Subaccount,
				tenant.tenant_type
			)));
		}

		let exists = self
			.runtimes
			.owner_exists(&tenant.id, runtime_id)
			.await
			.map_err(|err| err.context(format!("while checking the owner of runtime with ID: {runtime_id:?}")))?;

		if !exists {
			return Err(Error::validation(format!(
				"the provided destination external subaccount: {external_subaccount_id:?} is not a provider of the runtime with ID: {runtime_id:?}"
			)));
		}

		tracing::info!(
			subaccount_id = %external_subaccount_id,
			runtime_id = %runtime_id,
			"successfully validated the provided destination subaccount is a provider one - the owner of the runtime"
		);

		Ok(())
	}

	async fn validate_runtime_context_provider(
		&self,
		formation_assignment: &FormationAssignment,
		external_subaccount_id: &str,
	) -> Result<()> {
		let runtime_context = self
			.runtime_contexts
			.get_by_id(&formation_assignment.tenant_id, &formation_assignment.target)
			.await
			.map_err(|err| {
				err.context(format!(
					"while getting runtime context with ID: {:?}",
					formation_assignment.target
				))
			})?;

		self.validate_runtime_provider(&runtime_context.runtime_id, external_subaccount_id)
			.await
	}
}

// endregion: --- Provider Validation
