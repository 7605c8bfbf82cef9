//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

// region:    --- Modules

mod mock_transport;
mod seeders;

pub use mock_transport::*;
pub use seeders::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

/// Installs a subscriber so resolver diagnostics show up under `RUST_LOG=acs_core=debug`.
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.try_init();
}
