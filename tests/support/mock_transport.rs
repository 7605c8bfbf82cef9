use acs_core::auth::{Credential, ProductDomain, Signer};
use acs_core::http::{FormatType, HttpRequest};
use acs_core::webc::{self, AsyncTransport, BodyReader, BodyStream, RawResponse, Transport};
use bytes::Bytes;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// The canned exchange a [`MockTransport`] replays.
#[derive(Clone)]
pub struct CannedResponse {
	pub status: u16,
	pub headers: Vec<(String, String)>,
	pub body: Vec<u8>,
}

impl CannedResponse {
	pub fn json(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self {
			status,
			headers: vec![("Content-Type".to_string(), "application/json; charset=utf-8".to_string())],
			body: body.into(),
		}
	}
}

/// Transport double that replays one canned exchange for every send, counts calls, and
/// captures the outgoing requests. Implements both the blocking and the async capability so
/// the two resolver variants can be driven off identical inputs.
pub struct MockTransport {
	canned: Option<CannedResponse>,
	calls: AtomicUsize,
	requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
	/// Replays `canned` for every call.
	pub fn returning(canned: CannedResponse) -> Self {
		Self {
			canned: Some(canned),
			calls: AtomicUsize::new(0),
			requests: Mutex::new(Vec::new()),
		}
	}

	/// Fails every call with a payload-less transport error.
	pub fn failing() -> Self {
		Self {
			canned: None,
			calls: AtomicUsize::new(0),
			requests: Mutex::new(Vec::new()),
		}
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn last_request(&self) -> Option<HttpRequest> {
		self.requests.lock().unwrap().last().cloned()
	}

	fn record(&self, request: &HttpRequest) -> webc::Result<CannedResponse> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.requests.lock().unwrap().push(request.clone());

		self.canned.clone().ok_or_else(|| {
			webc::Error::Io(std::io::Error::new(
				std::io::ErrorKind::ConnectionRefused,
				"no route to discovery service",
			))
		})
	}
}

impl Transport for MockTransport {
	fn send(&self, request: &HttpRequest, _timeout: Duration) -> webc::Result<RawResponse<BodyReader>> {
		let canned = self.record(request)?;
		Ok(RawResponse {
			status: canned.status,
			headers: canned.headers,
			body: Box::new(std::io::Cursor::new(canned.body)),
		})
	}
}

impl AsyncTransport for MockTransport {
	async fn send(&self, request: &HttpRequest, _timeout: Duration) -> webc::Result<RawResponse<BodyStream>> {
		let canned = self.record(request)?;
		// Deliver the body in small chunks to exercise stream reassembly.
		let chunks: Vec<webc::Result<Bytes>> = canned
			.body
			.chunks(13)
			.map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
			.collect();
		Ok(RawResponse {
			status: canned.status,
			headers: canned.headers,
			body: Box::pin(tokio_stream::iter(chunks)),
		})
	}
}

/// Signer double: stamps a marker header binding the credential to the signing domain.
pub struct StaticSigner;

impl Signer for StaticSigner {
	fn sign(
		&self,
		request: HttpRequest,
		credential: &Credential,
		_format: FormatType,
		domain: &ProductDomain,
	) -> acs_core::Result<HttpRequest> {
		let marker = format!("TEST {}@{}", credential.access_key_id(), domain.domain_name);
		Ok(request.with_header("Authorization", marker))
	}
}
