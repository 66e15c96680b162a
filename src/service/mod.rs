//! The provisioning service: creates and deletes destinations and certificates in the remote
//! destination creator service on behalf of a formation assignment.

// region:    --- Modules

mod certificates;
mod destinations;
mod remote_exec;
mod service_builder;
mod service_impl;

pub use remote_exec::DEPTH_LIMIT;
pub use service_builder::*;
pub use service_impl::*;

// endregion: --- Modules
