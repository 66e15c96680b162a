//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

// region:    --- Modules

mod mock_repositories;
mod mock_transport;
mod seeders;

pub use mock_repositories::*;
pub use mock_transport::*;
pub use seeders::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

// region:    --- Tracing

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_TRACING: Once = Once::new();

/// Installs a fmt subscriber once per test binary. Filter with `RUST_LOG` (e.g., `RUST_LOG=destination_creator=debug`).
pub fn init_tracing() {
	INIT_TRACING.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::from_default_env())
			.with_test_writer()
			.try_init();
	});
}

// endregion: --- Tracing
