use crate::config::Config;
use crate::context::RequestContext;
use crate::model::FormationAssignment;
use crate::repository::ApplicationRepository;
use crate::resolver::{RegionResolver, SubaccountResolver};
use crate::webc::HttpTransport;
use crate::{Result, ServiceBuilder};
use std::sync::Arc;
use tracing::Instrument;

/// The destination creator service.
///
/// It is cheap to clone, all the clones share the same configuration and collaborators.
/// Each call is self-contained; the service holds no mutable state.
#[derive(Clone)]
pub struct Service {
	pub(super) inner: Arc<ServiceInner>,
}

pub(super) struct ServiceInner {
	pub(super) config: Config,
	pub(super) transport: Arc<dyn HttpTransport>,
	pub(super) subaccount_resolver: SubaccountResolver,
	pub(super) region_resolver: RegionResolver,
	pub(super) applications: Arc<dyn ApplicationRepository>,
}

/// Constructors
impl Service {
	pub fn builder() -> ServiceBuilder {
		ServiceBuilder::default()
	}
}

/// Getters
impl Service {
	pub fn config(&self) -> &Config {
		&self.inner.config
	}
}

/// Resolvers
impl Service {
	/// Returns the subaccount a request for `formation_assignment` runs against.
	/// See `SubaccountResolver::resolve_subaccount`.
	pub async fn resolve_subaccount(
		&self,
		ctx: &RequestContext,
		external_subaccount_id: &str,
		formation_assignment: &FormationAssignment,
		skip_validation: bool,
	) -> Result<String> {
		self.inner
			.subaccount_resolver
			.resolve_subaccount(external_subaccount_id, formation_assignment, skip_validation)
			.instrument(ctx.span("resolve_subaccount"))
			.await
	}

	/// Returns the consumer subaccount of `formation_assignment`.
	pub async fn consumer_subaccount(
		&self,
		ctx: &RequestContext,
		formation_assignment: &FormationAssignment,
	) -> Result<String> {
		self.inner
			.subaccount_resolver
			.consumer_subaccount(formation_assignment)
			.instrument(ctx.span("consumer_subaccount"))
			.await
	}

	pub async fn resolve_region(&self, ctx: &RequestContext, tenant_external_id: &str) -> Result<String> {
		self.inner
			.region_resolver
			.resolve_region(tenant_external_id)
			.instrument(ctx.span("resolve_region"))
			.await
	}
}
