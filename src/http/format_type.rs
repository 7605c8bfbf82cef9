use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The wire serialization of a request/response body.
///
/// `Raw` stands for any mime type outside the fixed lookup below; a response with no
/// `Content-Type` header at all has no format (`None` on the response).
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FormatType {
	Json,
	Xml,
	Form,
	Raw,
}

impl FormatType {
	/// The mime type sent in `Accept`/`Content-Type` headers for this format.
	#[must_use]
	pub const fn as_mime(&self) -> &'static str {
		match self {
			Self::Json => "application/json",
			Self::Xml => "application/xml",
			Self::Form => "application/x-www-form-urlencoded",
			Self::Raw => "application/octet-stream",
		}
	}

	/// Fixed lookup from a mime type (the first `;` segment of a `Content-Type` value,
	/// already trimmed) to the format enumeration. Unrecognized mime types map to `Raw`.
	#[must_use]
	pub fn from_mime(mime: &str) -> Self {
		match mime {
			"application/json" | "text/json" => Self::Json,
			"application/xml" | "text/xml" => Self::Xml,
			"application/x-www-form-urlencoded" => Self::Form,
			_ => Self::Raw,
		}
	}
}
