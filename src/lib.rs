//! Provisioning client for the remote destination creator service.
//!
//! On behalf of a formation assignment, it creates and deletes destinations
//! (no authentication, basic, SAML assertion, client certificate, OAuth2 client credentials)
//! and certificates, in the right subaccount and region, and enriches the assignment
//! configuration with the created certificate material.
//!
//! ```ignore
//! let service = Service::builder()
//! 	.with_config(Config::from_env()?)
//! 	.with_tenant_repository(tenants)
//! 	.with_label_repository(labels)
//! 	.with_application_repository(applications)
//! 	.with_runtime_repository(runtimes)
//! 	.with_runtime_context_repository(runtime_contexts)
//! 	.build()?;
//!
//! let ctx = RequestContext::new(correlation_id).with_client_user(client_user);
//! service.create_basic_destination(&ctx, &details, &credentials, &assignment, &correlation_ids, false).await?;
//! ```

// region:    --- Modules

mod config;
mod context;
mod error;
mod service;
mod url_builder;

pub use config::*;
pub use context::*;
pub use error::{Error, ErrorKind, Result};
pub use service::*;
pub use url_builder::*;

// -- Public Modules
pub mod destination;
pub mod enricher;
pub mod model;
pub mod repository;
pub mod resolver;
pub mod webc;

// endregion: --- Modules
