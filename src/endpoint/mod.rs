//! Runtime endpoint discovery: which network host should receive API calls for a given
//! (product, region) pair.

// region:    --- Modules

mod describe_endpoint;
mod location_config;

// -- Flatten
pub use describe_endpoint::*;
pub use location_config::*;

// endregion: --- Modules
