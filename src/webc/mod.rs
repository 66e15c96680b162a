//! The `webc` module is the HTTP layer of the crate.
//! - `HttpTransport` is the seam the provisioning service sends its requests through.
//! - `WebClient` is the default `reqwest` based implementation.

// region:    --- Modules

mod error;
mod web_client;

pub use error::{Error, Result};
pub use web_client::*;

// endregion: --- Modules
