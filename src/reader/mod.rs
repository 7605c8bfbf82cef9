//! Format-specific readers turn response body text into the format-agnostic
//! [`DocumentNode`] tree consumed by the unmarshalling context.

// region:    --- Modules

mod json_reader;
mod node;

// -- Flatten
pub use json_reader::*;
pub use node::*;

// endregion: --- Modules

use crate::http::FormatType;
use crate::{Error, Result};

/// Parses body text into a document tree rooted at the named element, so that path queries
/// start with `root.`.
pub trait Reader {
	fn read(&self, text: &str, root: &str) -> Result<DocumentNode>;
}

/// The reader for the given content format.
///
/// Only JSON is bundled; formats without a bundled reader (XML) report
/// [`Error::NoReaderForFormat`] — callers with such payloads bring their own [`Reader`].
pub fn reader_for(format: FormatType) -> Result<&'static dyn Reader> {
	match format {
		FormatType::Json => Ok(&JsonReader),
		_ => Err(Error::NoReaderForFormat { format }),
	}
}
