//! Transport capability: the seam between this crate and the wire.
//!
//! [`Transport`] and [`AsyncTransport`] are the pluggable traits; [`BlockingWebClient`] and
//! [`WebClient`] are the reqwest-backed defaults.

// region:    --- Modules

mod error;
mod transport;
mod web_client;

// -- Flatten
pub use error::{Error, Result};
pub use transport::*;
pub use web_client::*;

// endregion: --- Modules
