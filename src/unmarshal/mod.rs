//! Path-addressable unmarshalling over a parsed document tree, plus the extraction of
//! error-shaped response bodies.

// region:    --- Modules

mod acs_error;
mod unmarshaller_context;

// -- Flatten
pub use acs_error::*;
pub use unmarshaller_context::*;

// endregion: --- Modules
