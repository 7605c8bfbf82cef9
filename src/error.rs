use crate::http::FormatType;
use crate::webc;
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
	// -- Http
	/// A method string that does not name a supported HTTP verb.
	InvalidMethod { method: String },

	/// The response carried a charset label no decoder is known for.
	UnsupportedEncoding { encoding: String },

	// -- Readers / Unmarshalling
	/// No reader is registered for the given content format (e.g. XML without a plugged-in reader).
	NoReaderForFormat { format: FormatType },

	// -- Externals
	#[from]
	Webc(webc::Error),

	#[from]
	SerdeJson(serde_json::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
