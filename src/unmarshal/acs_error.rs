use crate::http::{FormatType, HttpResponse};
use crate::unmarshal::UnmarshallerContext;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Root element of error-shaped response bodies.
const ERROR_ROOT: &str = "Error";

/// A structured service error extracted from a non-success response body.
///
/// This is a value, not an exception: the endpoint resolver reports it for diagnostics and
/// then collapses the outcome to "absent".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcsError {
	pub request_id: Option<String>,
	pub error_code: Option<String>,
	pub error_message: Option<String>,
}

/// Extracts an [`AcsError`] from an error-shaped response.
///
/// The body is decoded with the response's recorded encoding (UTF-8 when unset; an
/// unrecognized label fails with `UnsupportedEncoding`), parsed with the reader for
/// `format`, and read at the provider-fixed `Error.*` paths.
pub fn read_error(response: &HttpResponse, format: FormatType) -> Result<AcsError> {
	let text = response.text()?;
	let context = UnmarshallerContext::read(&text, ERROR_ROOT, format)?;

	Ok(AcsError {
		request_id: context.string_value("Error.RequestId").map(str::to_string),
		error_code: context.string_value("Error.Code").map(str::to_string),
		error_message: context.string_value("Error.Message").map(str::to_string),
	})
}

// region:    --- Tests


// endregion: --- Tests
