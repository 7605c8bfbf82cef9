//! Credential and request-signing seam.

// region:    --- Modules

mod credential;
mod signer;

// -- Flatten
pub use credential::*;
pub use signer::*;

// endregion: --- Modules
