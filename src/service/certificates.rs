use super::remote_exec::RemoteApi;
use crate::context::RequestContext;
use crate::destination::{AuthType, CertificateData, CertificateRequestBody, CertificateResponse, certificate_name};
use crate::model::{DestinationDetails, FormationAssignment};
use crate::{Error, Result, Service};
use std::collections::BTreeSet;
use tracing::Instrument;

/// Certificates
impl Service {
	/// Makes all the `destinations` point to the same subaccount, and returns it.
	///
	/// The destinations without a subaccount get the consumer subaccount of the assignment.
	/// Fails when more than one distinct subaccount remains.
	pub async fn ensure_subaccount_ids_correctness(
		&self,
		ctx: &RequestContext,
		destinations: &mut [DestinationDetails],
		formation_assignment: &FormationAssignment,
	) -> Result<String> {
		let mut consumer_subaccount_id: Option<String> = None;

		for destination in destinations.iter_mut().filter(|dest| dest.subaccount_id.is_empty()) {
			let subaccount_id = match consumer_subaccount_id.clone() {
				Some(subaccount_id) => subaccount_id,
				None => {
					let subaccount_id = self
						.consumer_subaccount(ctx, formation_assignment)
						.await
						.map_err(|err| err.context("while getting the consumer subaccount of the formation assignment"))?;
					consumer_subaccount_id = Some(subaccount_id.clone());
					subaccount_id
				}
			};
			destination.subaccount_id = subaccount_id;
		}

		let subaccount_ids: BTreeSet<&str> = destinations.iter().map(|dest| dest.subaccount_id.as_str()).collect();

		match Vec::from_iter(subaccount_ids).as_slice() {
			[subaccount_id] => Ok(subaccount_id.to_string()),
			subaccount_ids => Err(Error::validation(format!(
				"Found {} different subaccount IDs in the destinations details, all of them should be the same",
				subaccount_ids.len()
			))),
		}
	}

	/// Creates the certificate of the formation assignment for the given certificate based `auth_type`.
	///
	/// The certificate is created in the one subaccount all the `destinations` agree on,
	/// in the service instance of the first destination.
	pub async fn create_certificate(
		&self,
		ctx: &RequestContext,
		destinations: &[DestinationDetails],
		auth_type: AuthType,
		formation_assignment: &FormationAssignment,
		skip_subaccount_validation: bool,
	) -> Result<CertificateData> {
		async {
			let mut destinations = destinations.to_vec();
			let subaccount_id = self
				.ensure_subaccount_ids_correctness(ctx, &mut destinations, formation_assignment)
				.await?;
			let instance_id = destinations.first().map(|dest| dest.instance_id.as_str()).unwrap_or_default();

			let name = certificate_name(auth_type, &formation_assignment.id)?;
			let body = CertificateRequestBody::new(&name);
			body.validate()
				.map_err(|err| err.context("while validating certificate request body"))?;

			let creating_context = || format!("while creating {auth_type} certificate with name: {name:?}");

			let target = self
				.resolve_remote_target(&subaccount_id, instance_id, formation_assignment, skip_subaccount_validation)
				.await
				.map_err(|err| err.context(creating_context()))?;

			tracing::info!(
				certificate_name = %name,
				subaccount_id = %target.subaccount_id,
				"creating {auth_type} certificate in the destination service"
			);

			let response_body = self
				.create_with_conflict_retry(ctx, RemoteApi::Certificate, &target, &name, &body, formation_assignment)
				.await
				.map_err(|err| err.context(creating_context()))?;

			let response: CertificateResponse = serde_json::from_str(&response_body)
				.map_err(|err| Error::from(err).context("while unmarshalling certificate response"))?;
			response
				.validate()
				.map_err(|err| err.context(format!("while validating {auth_type} certificate data")))?;

			Ok::<_, Error>(CertificateData::from(response))
		}
		.instrument(ctx.span("create_certificate"))
		.await
	}

	pub async fn delete_certificate(
		&self,
		ctx: &RequestContext,
		certificate_name: &str,
		external_subaccount_id: &str,
		instance_id: &str,
		formation_assignment: &FormationAssignment,
		skip_subaccount_validation: bool,
	) -> Result<()> {
		self.delete_entity(
			ctx,
			RemoteApi::Certificate,
			certificate_name,
			external_subaccount_id,
			instance_id,
			formation_assignment,
			skip_subaccount_validation,
		)
		.instrument(ctx.span("delete_certificate"))
		.await
		.map_err(|err| err.context(format!("while deleting certificate with name: {certificate_name:?}")))
	}
}
