/// The per request values the provisioning calls take from their caller.
///
/// The client user is sent as the `CLIENT_USER` header of every remote call,
/// falling back to the correlation ID when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
	pub correlation_id: Option<String>,
	pub client_user: Option<String>,
}

/// Constructors
impl RequestContext {
	pub fn new(correlation_id: impl Into<String>) -> Self {
		Self {
			correlation_id: Some(correlation_id.into()),
			client_user: None,
		}
	}

	pub fn with_client_user(mut self, client_user: impl Into<String>) -> Self {
		self.client_user = Some(client_user.into());
		self
	}
}

/// Getters
impl RequestContext {
	pub fn correlation_id(&self) -> &str {
		self.correlation_id.as_deref().unwrap_or_default()
	}

	/// The span the provisioning operations run in.
	pub fn span(&self, operation: &'static str) -> tracing::Span {
		tracing::info_span!("destination_creator", operation, correlation_id = %self.correlation_id())
	}

	/// Returns the `CLIENT_USER` header value.
	pub fn client_user_header(&self) -> &str {
		match self.client_user.as_deref() {
			Some(client_user) if !client_user.is_empty() => client_user,
			_ => {
				tracing::warn!("unable to provide client_user. Using correlation ID as client_user header...");
				self.correlation_id()
			}
		}
	}
}
