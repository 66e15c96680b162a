use crate::config::Config;
use crate::repository::{
	ApplicationRepository, LabelRepository, RuntimeContextRepository, RuntimeRepository, TenantRepository,
};
use crate::resolver::{RegionResolver, SubaccountResolver};
use super::service_impl::ServiceInner;
use crate::webc::{HttpTransport, WebClient};
use crate::{Error, Result, Service};
use std::sync::Arc;

/// The builder for the `Service` struct.
///
/// ```ignore
/// let service = Service::builder()
/// 	.with_config(Config::from_env()?)
/// 	.with_reqwest(mtls_reqwest_client)
/// 	.with_tenant_repository(tenants)
/// 	// ...
/// 	.build()?;
/// ```
#[derive(Default)]
pub struct ServiceBuilder {
	config: Option<Config>,
	transport: Option<Arc<dyn HttpTransport>>,
	tenants: Option<Arc<dyn TenantRepository>>,
	labels: Option<Arc<dyn LabelRepository>>,
	applications: Option<Arc<dyn ApplicationRepository>>,
	runtimes: Option<Arc<dyn RuntimeRepository>>,
	runtime_contexts: Option<Arc<dyn RuntimeContextRepository>>,
}

/// Builder methods
impl ServiceBuilder {
	pub fn with_config(mut self, config: Config) -> Self {
		self.config = Some(config);
		self
	}

	/// Uses the default `WebClient` transport over this `reqwest::Client` (which should carry the mTLS identity).
	pub fn with_reqwest(mut self, reqwest_client: reqwest::Client) -> Self {
		self.transport = Some(Arc::new(WebClient::from_reqwest_client(reqwest_client)));
		self
	}

	pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
		self.transport = Some(transport);
		self
	}

	pub fn with_tenant_repository(mut self, tenants: Arc<dyn TenantRepository>) -> Self {
		self.tenants = Some(tenants);
		self
	}

	pub fn with_label_repository(mut self, labels: Arc<dyn LabelRepository>) -> Self {
		self.labels = Some(labels);
		self
	}

	pub fn with_application_repository(mut self, applications: Arc<dyn ApplicationRepository>) -> Self {
		self.applications = Some(applications);
		self
	}

	pub fn with_runtime_repository(mut self, runtimes: Arc<dyn RuntimeRepository>) -> Self {
		self.runtimes = Some(runtimes);
		self
	}

	pub fn with_runtime_context_repository(mut self, runtime_contexts: Arc<dyn RuntimeContextRepository>) -> Self {
		self.runtime_contexts = Some(runtime_contexts);
		self
	}

	/// Builds the `Service`.
	///
	/// The configuration and all the repositories are required. Without a transport, a default `WebClient` is used.
	pub fn build(self) -> Result<Service> {
		let config = required(self.config, "config")?;
		config.validate()?;

		let tenants = required(self.tenants, "tenant repository")?;
		let labels = required(self.labels, "label repository")?;
		let applications = required(self.applications, "application repository")?;
		let runtimes = required(self.runtimes, "runtime repository")?;
		let runtime_contexts = required(self.runtime_contexts, "runtime context repository")?;

		let transport = self.transport.unwrap_or_else(|| Arc::new(WebClient::default()));

		let inner = ServiceInner {
			config,
			transport,
			subaccount_resolver: SubaccountResolver::new(
				tenants.clone(),
				labels.clone(),
				applications.clone(),
				runtimes,
				runtime_contexts,
			),
			region_resolver: RegionResolver::new(tenants, labels),
			applications,
		};

		Ok(Service { inner: Arc::new(inner) })
	}
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
	value.ok_or_else(|| Error::validation(format!("the {name} is required to build the destination creator service")))
}
