use crate::http::HttpRequest;
use crate::webc::Result;
use bytes::Bytes;
use futures::Stream;
use std::io::Read;
use std::pin::Pin;
use std::time::Duration;

/// Body of an async transport response, delivered as a chunked byte stream.
pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Body of a blocking transport response.
pub type BodyReader = Box<dyn Read + Send>;

/// One raw transport exchange before normalization: status, verbatim header pairs (possibly
/// with duplicate keys), and the undrained body.
pub struct RawResponse<B> {
	pub status: u16,
	pub headers: Vec<(String, String)>,
	pub body: B,
}

/// Blocking transport capability.
///
/// Contract: an HTTP-level failure that still carries a response payload (e.g. a 5xx with a
/// body) must be returned as `Ok` so the normalizer always gets a response object, even when
/// the underlying client reported the exchange as an error. Only failures with no usable
/// response (connect failure, timeout) may be returned as `Err`.
pub trait Transport {
	fn send(&self, request: &HttpRequest, timeout: Duration) -> Result<RawResponse<BodyReader>>;
}

/// Suspendable twin of [`Transport`], for use inside an async caller's own scheduling
/// context. Same contract; the two are never mixed within a single call chain.
pub trait AsyncTransport {
	async fn send(&self, request: &HttpRequest, timeout: Duration) -> Result<RawResponse<BodyStream>>;
}
