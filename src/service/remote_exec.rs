//! The HTTP round-trips with the remote service and the conflict (409) handling shared by all the create operations.

use crate::Service;
use crate::config::UrlConfig;
use crate::context::RequestContext;
use crate::model::FormationAssignment;
use crate::url_builder::{UrlParameters, build_url};
use crate::webc::WebRequest;
use crate::{Error, Result};
use derive_more::Display;
use reqwest::Method;
use serde::Serialize;

/// How many times a create is retried after a conflict. At most `DEPTH_LIMIT + 1` create attempts are made.
pub const DEPTH_LIMIT: u8 = 2;

const CLIENT_USER_HEADER_KEY: &str = "CLIENT_USER";
const CONTENT_TYPE_HEADER_KEY: &str = "Content-Type";
const CONTENT_TYPE_APPLICATION_JSON: &str = "application/json;charset=UTF-8";

const STATUS_CREATED: u16 = 201;
const STATUS_NO_CONTENT: u16 = 204;
const STATUS_CONFLICT: u16 = 409;

// region:    --- Types

/// The two remote APIs of the destination creator service.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub(super) enum RemoteApi {
	#[display("destination")]
	Destination,
	#[display("certificate")]
	Certificate,
}

/// Where an entity lives in the remote service.
#[derive(Debug, Clone)]
pub(super) struct RemoteTarget {
	pub region: String,
	pub subaccount_id: String,
	pub instance_id: String,
}

impl RemoteTarget {
	fn url_parameters(&self, entity_name: &str) -> UrlParameters {
		UrlParameters::new(&self.region, &self.subaccount_id)
			.with_instance_id(&self.instance_id)
			.with_entity_name(entity_name)
	}
}

enum CreateOutcome {
	/// The response body.
	Created(String),
	Conflict,
}

// endregion: --- Types

impl Service {
	fn url_config(&self, api: RemoteApi) -> &UrlConfig {
		match api {
			RemoteApi::Destination => &self.inner.config.destination_api,
			RemoteApi::Certificate => &self.inner.config.certificate_api,
		}
	}

	/// Resolves the target of a request: validates the subaccount, then resolves its region.
	pub(super) async fn resolve_remote_target(
		&self,
		external_subaccount_id: &str,
		instance_id: &str,
		formation_assignment: &FormationAssignment,
		skip_subaccount_validation: bool,
	) -> Result<RemoteTarget> {
		let subaccount_id = self
			.inner
			.subaccount_resolver
			.resolve_subaccount(external_subaccount_id, formation_assignment, skip_subaccount_validation)
			.await?;

		let region = self
			.inner
			.region_resolver
			.resolve_region(&subaccount_id)
			.await
			.map_err(|err| err.context(format!("while getting region label for tenant with ID: {subaccount_id:?}")))?;

		Ok(RemoteTarget {
			region,
			subaccount_id,
			instance_id: instance_id.to_string(),
		})
	}

	/// Creates the entity, and on conflict deletes it and creates it again, up to `DEPTH_LIMIT` times.
	///
	/// Returns the body of the successful create response.
	pub(super) async fn create_with_conflict_retry<B: Serialize>(
		&self,
		ctx: &RequestContext,
		api: RemoteApi,
		target: &RemoteTarget,
		entity_name: &str,
		body: &B,
		formation_assignment: &FormationAssignment,
	) -> Result<String> {
		let url = build_url(self.url_config(api), &target.url_parameters(""), false)
			.map_err(|err| err.context(format!("while building {api} URL")))?;

		let payload =
			serde_json::to_vec(body).map_err(|err| Error::from(err).context("while marshalling request body"))?;

		for attempt in 0..=DEPTH_LIMIT {
			let outcome = self
				.execute_create_request(ctx, &url, payload.clone(), entity_name)
				.await
				.map_err(|err| {
					err.context(format!(
						"while creating {api} with name: {entity_name:?} in the destination service"
					))
				})?;

			match outcome {
				CreateOutcome::Created(response_body) => return Ok(response_body),
				CreateOutcome::Conflict if attempt < DEPTH_LIMIT => {
					tracing::info!(
						entity_name = %entity_name,
						attempt,
						"the {api} already exists. Will be deleted and created again..."
					);
					self.delete_entity(
						ctx,
						api,
						entity_name,
						&target.subaccount_id,
						&target.instance_id,
						formation_assignment,
						true,
					)
					.await
					.map_err(|err| {
						err.context(format!(
							"while deleting {api} with name: {entity_name:?} and subaccount ID: {:?}",
							target.subaccount_id
						))
					})?;
				}
				CreateOutcome::Conflict => (),
			}
		}

		tracing::warn!(entity_name = %entity_name, depth_limit = DEPTH_LIMIT, "the {api} conflict retry limit is exceeded");
		Err(Error::RetryLimitExceeded { depth_limit: DEPTH_LIMIT })
	}

	/// Resolves the target and deletes the entity.
	pub(super) async fn delete_entity(
		&self,
		ctx: &RequestContext,
		api: RemoteApi,
		entity_name: &str,
		external_subaccount_id: &str,
		instance_id: &str,
		formation_assignment: &FormationAssignment,
		skip_subaccount_validation: bool,
	) -> Result<()> {
		let target = self
			.resolve_remote_target(
				external_subaccount_id,
				instance_id,
				formation_assignment,
				skip_subaccount_validation,
			)
			.await?;

		let url = build_url(self.url_config(api), &target.url_parameters(entity_name), true)
			.map_err(|err| err.context(format!("while building {api} URL")))?;

		tracing::info!(
			entity_name = %entity_name,
			subaccount_id = %target.subaccount_id,
			"deleting {api} from the destination service"
		);
		self.execute_delete_request(ctx, &url, entity_name, &target.subaccount_id).await
	}
}

// region:    --- Web Calls

impl Service {
	async fn execute_create_request(
		&self,
		ctx: &RequestContext,
		url: &str,
		payload: Vec<u8>,
		entity_name: &str,
	) -> Result<CreateOutcome> {
		let request = WebRequest {
			method: Method::POST,
			url: url.to_string(),
			headers: default_headers(ctx),
			body: Some(payload),
		};

		let response = self.inner.transport.execute(request).await?;

		match response.status {
			STATUS_CREATED => {
				tracing::info!(entity_name = %entity_name, "successfully created entity in the destination service");
				Ok(CreateOutcome::Created(response.body))
			}
			STATUS_CONFLICT => {
				tracing::info!(
					entity_name = %entity_name,
					"the entity already exists in the destination service. Returning conflict status code..."
				);
				Ok(CreateOutcome::Conflict)
			}
			status => Err(Error::Upstream {
				action: "create",
				entity_name: entity_name.to_string(),
				status,
				body: response.body,
			}),
		}
	}

	async fn execute_delete_request(
		&self,
		ctx: &RequestContext,
		url: &str,
		entity_name: &str,
		subaccount_id: &str,
	) -> Result<()> {
		let request = WebRequest {
			method: Method::DELETE,
			url: url.to_string(),
			headers: default_headers(ctx),
			body: None,
		};

		let response = self.inner.transport.execute(request).await?;

		if response.status != STATUS_NO_CONTENT {
			return Err(Error::Upstream {
				action: "delete",
				entity_name: entity_name.to_string(),
				status: response.status,
				body: response.body,
			});
		}

		tracing::info!(
			entity_name = %entity_name,
			subaccount_id = %subaccount_id,
			"successfully deleted entity from the destination service"
		);

		Ok(())
	}
}

fn default_headers(ctx: &RequestContext) -> Vec<(String, String)> {
	vec![
		(CLIENT_USER_HEADER_KEY.to_string(), ctx.client_user_header().to_string()),
		(CONTENT_TYPE_HEADER_KEY.to_string(), CONTENT_TYPE_APPLICATION_JSON.to_string()),
	]
}

// endregion: --- Web Calls
