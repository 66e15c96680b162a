use super::remote_exec::RemoteApi;
use crate::context::RequestContext;
use crate::destination::{
	AuthType, BaseDestinationRequestBody, BasicRequestBody, ClientCertificateRequestBody, DestinationRequestBody,
	DestinationType, JAVA_KEY_STORE_FILE_EXTENSION, NoAuthRequestBody, OAuth2ClientCredentialsRequestBody, ProxyType,
	SamlAssertionRequestBody, TokenServiceUrlType, certificate_name,
};
use crate::enricher::enrich_additional_properties_with_correlation_ids;
use crate::model::{
	BasicAuthentication, ClientCertAuthentication, DestinationDetails, FormationAssignment, FormationAssignmentType,
	OAuth2ClientCredentialsAuthentication, SamlAssertionAuthentication,
};
use crate::{Error, Result, Service};
use tracing::Instrument;

/// Destination creation
impl Service {
	/// Creates a destination without authentication (a "design time" destination).
	pub async fn create_design_time_destination(
		&self,
		ctx: &RequestContext,
		details: &DestinationDetails,
		formation_assignment: &FormationAssignment,
		correlation_ids: &[String],
		skip_subaccount_validation: bool,
	) -> Result<()> {
		async {
			let base = self.base_request_body(details, &details.url, AuthType::NoAuthentication, correlation_ids)?;
			let body = NoAuthRequestBody { base };

			self.create_destination(ctx, body.into(), details, formation_assignment, skip_subaccount_validation)
				.await
		}
		.instrument(ctx.span("create_design_time_destination"))
		.await
	}

	/// Creates a destination with basic authentication. See `prepare_basic_request_body` for the URL resolution.
	pub async fn create_basic_destination(
		&self,
		ctx: &RequestContext,
		details: &DestinationDetails,
		credentials: &BasicAuthentication,
		formation_assignment: &FormationAssignment,
		correlation_ids: &[String],
		skip_subaccount_validation: bool,
	) -> Result<()> {
		async {
			let body = self
				.prepare_basic_request_body(ctx, details, credentials, formation_assignment, correlation_ids)
				.await?;

			self.create_destination(ctx, body.into(), details, formation_assignment, skip_subaccount_validation)
				.await
		}
		.instrument(ctx.span("create_basic_destination"))
		.await
	}

	/// Builds and validates the basic destination request body.
	///
	/// The destination URL is the first non empty of: the destination details URL, the credentials URL,
	/// the base URL of the assignment target when it is an application.
	pub async fn prepare_basic_request_body(
		&self,
		_ctx: &RequestContext,
		details: &DestinationDetails,
		credentials: &BasicAuthentication,
		formation_assignment: &FormationAssignment,
		correlation_ids: &[String],
	) -> Result<BasicRequestBody> {
		let url = if !details.url.is_empty() {
			details.url.clone()
		} else if !credentials.url.is_empty() {
			credentials.url.clone()
		} else if formation_assignment.target_type == FormationAssignmentType::Application {
			self.application_base_url(formation_assignment, &formation_assignment.target)
				.await?
				.unwrap_or_default()
		} else {
			String::new()
		};

		let base = self.base_request_body(details, &url, AuthType::BasicAuthentication, correlation_ids)?;
		let body = BasicRequestBody {
			base,
			user: credentials.username.clone(),
			password: credentials.password.clone(),
		};

		body.validate()
			.map_err(|err| err.context("while validating basic destination request body"))?;

		Ok(body)
	}

	/// Creates a SAML assertion destination.
	///
	/// The audience is the credentials audience, or the base URL of the assignment source when it is an application.
	pub async fn create_saml_assertion_destination(
		&self,
		ctx: &RequestContext,
		details: &DestinationDetails,
		credentials: &SamlAssertionAuthentication,
		formation_assignment: &FormationAssignment,
		correlation_ids: &[String],
		skip_subaccount_validation: bool,
	) -> Result<()> {
		async {
			let auth_type = AuthType::SamlAssertion;
			let base = self.base_request_body(details, &credentials.url, auth_type, correlation_ids)?;

			let audience = if !credentials.audience.is_empty() {
				credentials.audience.clone()
			} else if formation_assignment.source_type == FormationAssignmentType::Application {
				self.application_base_url(formation_assignment, &formation_assignment.source)
					.await?
					.unwrap_or_default()
			} else {
				String::new()
			};

			let body = SamlAssertionRequestBody {
				base,
				audience,
				key_store_location: key_store_location(auth_type, formation_assignment)?,
			};

			self.create_destination(ctx, body.into(), details, formation_assignment, skip_subaccount_validation)
				.await
		}
		.instrument(ctx.span("create_saml_assertion_destination"))
		.await
	}

	/// Creates a client certificate authentication destination, pointing to the certificate of the assignment.
	pub async fn create_client_certificate_destination(
		&self,
		ctx: &RequestContext,
		details: &DestinationDetails,
		credentials: &ClientCertAuthentication,
		formation_assignment: &FormationAssignment,
		correlation_ids: &[String],
		skip_subaccount_validation: bool,
	) -> Result<()> {
		async {
			let auth_type = AuthType::ClientCertificateAuthentication;
			let base = self.base_request_body(details, &credentials.url, auth_type, correlation_ids)?;

			let body = ClientCertificateRequestBody {
				base,
				key_store_location: key_store_location(auth_type, formation_assignment)?,
			};

			self.create_destination(ctx, body.into(), details, formation_assignment, skip_subaccount_validation)
				.await
		}
		.instrument(ctx.span("create_client_certificate_destination"))
		.await
	}

	pub async fn create_oauth2_client_credentials_destination(
		&self,
		ctx: &RequestContext,
		details: &DestinationDetails,
		credentials: &OAuth2ClientCredentialsAuthentication,
		formation_assignment: &FormationAssignment,
		correlation_ids: &[String],
		skip_subaccount_validation: bool,
	) -> Result<()> {
		async {
			let base =
				self.base_request_body(details, &credentials.url, AuthType::OAuth2ClientCredentials, correlation_ids)?;

			let token_service_url_type = match credentials.token_service_url_type.as_str() {
				"" => TokenServiceUrlType::Dedicated,
				raw => raw.parse::<TokenServiceUrlType>()?,
			};

			let body = OAuth2ClientCredentialsRequestBody {
				base,
				token_service_url: credentials.token_service_url.clone(),
				client_id: credentials.client_id.clone(),
				client_secret: credentials.client_secret.clone(),
				token_service_url_type,
			};

			self.create_destination(ctx, body.into(), details, formation_assignment, skip_subaccount_validation)
				.await
		}
		.instrument(ctx.span("create_oauth2_client_credentials_destination"))
		.await
	}
}

/// Destination deletion
impl Service {
	/// Deletes the destination `destination_name` from the given subaccount (the consumer one when empty)
	/// and, when `instance_id` is not empty, from that service instance.
	pub async fn delete_destination(
		&self,
		ctx: &RequestContext,
		destination_name: &str,
		external_subaccount_id: &str,
		instance_id: &str,
		formation_assignment: &FormationAssignment,
		skip_subaccount_validation: bool,
	) -> Result<()> {
		self.delete_entity(
			ctx,
			RemoteApi::Destination,
			destination_name,
			external_subaccount_id,
			instance_id,
			formation_assignment,
			skip_subaccount_validation,
		)
		.instrument(ctx.span("delete_destination"))
		.await
		.map_err(|err| err.context(format!("while deleting destination with name: {destination_name:?}")))
	}
}

// region:    --- Support

impl Service {
	/// Validates the body, resolves where it goes, and creates it (deleting and recreating on conflict).
	async fn create_destination(
		&self,
		ctx: &RequestContext,
		body: DestinationRequestBody,
		details: &DestinationDetails,
		formation_assignment: &FormationAssignment,
		skip_subaccount_validation: bool,
	) -> Result<()> {
		let kind = body.kind_label();
		let name = body.name();
		let creating_context = || format!("while creating {kind} destination with name: {name:?}");

		body.validate()
			.map_err(|err| err.context(format!("while validating {kind} destination request body")))?;

		let target = self
			.resolve_remote_target(
				&details.subaccount_id,
				&details.instance_id,
				formation_assignment,
				skip_subaccount_validation,
			)
			.await
			.map_err(|err| err.context(creating_context()))?;

		tracing::info!(
			destination_name = %name,
			subaccount_id = %target.subaccount_id,
			assignment_id = %formation_assignment.id,
			"creating {kind} destination in the destination service"
		);

		self.create_with_conflict_retry(
			ctx,
			RemoteApi::Destination,
			&target,
			name,
			&body,
			formation_assignment,
		)
		.await
		.map_err(|err| err.context(creating_context()))?;

		Ok(())
	}

	/// The common part of every destination body, taken from the destination details.
	///
	/// Empty type and proxy type default to `HTTP` and `Internet`.
	fn base_request_body(
		&self,
		details: &DestinationDetails,
		url: &str,
		auth_type: AuthType,
		correlation_ids: &[String],
	) -> Result<BaseDestinationRequestBody> {
		if !details.authentication.is_empty() && details.authentication != auth_type.to_string() {
			return Err(Error::validation(format!(
				"The provided authentication type: {} in the destination details is invalid. It should be {auth_type}",
				details.authentication
			)));
		}

		let mut base = BaseDestinationRequestBody::new(&details.name, url, auth_type);

		if !details.destination_type.is_empty() {
			base.destination_type = details.destination_type.parse::<DestinationType>()?;
		}
		if !details.proxy_type.is_empty() {
			base.proxy_type = details.proxy_type.parse::<ProxyType>()?;
		}

		base.additional_properties = Some(enrich_additional_properties_with_correlation_ids(
			&self.inner.config.correlation_ids_key,
			correlation_ids,
			details.additional_properties.as_ref(),
		)?);

		Ok(base)
	}

	async fn application_base_url(
		&self,
		formation_assignment: &FormationAssignment,
		application_id: &str,
	) -> Result<Option<String>> {
		let app = self
			.inner
			.applications
			.get_by_id(&formation_assignment.tenant_id, application_id)
			.await
			.map_err(|err| err.context(format!("while getting application with ID: {application_id:?}")))?;

		Ok(app.base_url().map(str::to_string))
	}
}

fn key_store_location(auth_type: AuthType, formation_assignment: &FormationAssignment) -> Result<String> {
	let name = certificate_name(auth_type, &formation_assignment.id)?;
	Ok(format!("{name}{JAVA_KEY_STORE_FILE_EXTENSION}"))
}

// endregion: --- Support
