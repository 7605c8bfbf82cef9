use crate::http::{FormatType, MethodType};
use crate::webc::{self, RawResponse};
use crate::{Error, Result};
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use std::collections::HashMap;
use std::io::Read;

/// Size of the fixed read buffer used to drain blocking response bodies.
const READ_BUF_LEN: usize = 1024;

const CONTENT_TYPE: &str = "Content-Type";

/// A normalized HTTP response: one transport exchange, fully drained and typed.
///
/// `content_type` and `encoding` are derived solely from the `Content-Type` header; when that
/// header is absent both stay `None`. The value is immutable after construction and consumed
/// exactly once by the caller (success path or error extraction).
#[derive(Debug, Clone)]
pub struct HttpResponse {
	pub status: u16,
	pub headers: HashMap<String, String>,
	pub content: Bytes,
	pub content_type: Option<FormatType>,
	/// Uppercase canonical charset label (e.g. `"UTF-8"`, `"GBK"`).
	pub encoding: Option<String>,
	pub method: MethodType,
}

/// Constructors
impl HttpResponse {
	/// Assembles a response from already-drained parts.
	///
	/// This is the single assembly point shared by both read modes, so a blocking and a
	/// stream drain of the same exchange produce byte-identical values.
	#[must_use]
	pub fn from_parts(
		status: u16,
		headers: Vec<(String, String)>,
		content: impl Into<Bytes>,
		method: MethodType,
	) -> Self {
		// Duplicate header keys: last value wins.
		let mut header_map: HashMap<String, String> = HashMap::new();
		for (key, value) in headers {
			header_map.insert(key, value);
		}

		// Header names arrive lowercased from some transports, verbatim from others.
		let content_type_value = header_map
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(CONTENT_TYPE))
			.map(|(_, value)| value.as_str());

		let (content_type, encoding) = match content_type_value {
			Some(value) => {
				let (format, encoding) = parse_content_type(value);
				(Some(format), Some(encoding))
			}
			None => (None, None),
		};

		Self {
			status,
			headers: header_map,
			content: content.into(),
			content_type,
			encoding,
			method,
		}
	}

	/// Drains a raw blocking response and normalizes it.
	///
	/// The body is read in fixed [`READ_BUF_LEN`] chunks until a zero-length read, so
	/// arbitrarily long bodies never require a known length up front.
	pub fn read_blocking(raw: RawResponse<impl Read>, method: MethodType) -> Result<Self> {
		let mut body = raw.body;
		let mut buf = [0u8; READ_BUF_LEN];
		let mut content = BytesMut::new();
		loop {
			let len = body.read(&mut buf).map_err(webc::Error::Io)?;
			if len == 0 {
				break;
			}
			content.extend_from_slice(&buf[..len]);
		}

		Ok(Self::from_parts(raw.status, raw.headers, content.freeze(), method))
	}

	/// Suspendable twin of [`HttpResponse::read_blocking`]: drains a chunked byte stream,
	/// resuming the caller once the body is complete.
	pub async fn read_stream<S, E>(raw: RawResponse<S>, method: MethodType) -> Result<Self>
	where
		S: Stream<Item = core::result::Result<Bytes, E>> + Unpin,
		E: Into<webc::Error>,
	{
		let mut body = raw.body;
		let mut content = BytesMut::new();
		while let Some(chunk) = body.next().await {
			let chunk = chunk.map_err(Into::into)?;
			content.extend_from_slice(&chunk);
		}

		Ok(Self::from_parts(raw.status, raw.headers, content.freeze(), method))
	}
}

/// Getters
impl HttpResponse {
	#[must_use]
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Decodes the body with the recorded charset, UTF-8 when none was recorded.
	///
	/// Fails with [`Error::UnsupportedEncoding`] when the recorded label names no known
	/// decoder. Byte sequences invalid for the charset decode to replacement characters.
	pub fn text(&self) -> Result<String> {
		let encoding = match &self.encoding {
			Some(label) => encoding_rs::Encoding::for_label(label.as_bytes())
				.ok_or_else(|| Error::UnsupportedEncoding { encoding: label.clone() })?,
			None => encoding_rs::UTF_8,
		};
		let (text, _, _) = encoding.decode(&self.content);
		Ok(text.into_owned())
	}
}

/// Splits a `Content-Type` value of the form `<mime>[; charset=<ENC>]` into the content
/// format and the charset label (trimmed, upper-cased, `"UTF-8"` when no `charset=` segment
/// is present). Segments past the second are ignored.
fn parse_content_type(value: &str) -> (FormatType, String) {
	let mut segments = value.split(';');
	let format = FormatType::from_mime(segments.next().unwrap_or("").trim());

	let mut encoding = "UTF-8".to_string();
	if let Some(second) = segments.next()
		&& let Some((_, label)) = second.split_once('=')
	{
		encoding = label.trim().to_uppercase();
	}

	(format, encoding)
}

// region:    --- Tests


// endregion: --- Tests
