//! Resolvers deciding where a provisioning request runs: which subaccount (and whether the caller may use it),
//! and which region that subaccount lives in.

// region:    --- Modules

mod region_resolver;
mod subaccount_resolver;

pub use region_resolver::*;
pub use subaccount_resolver::*;

// endregion: --- Modules
