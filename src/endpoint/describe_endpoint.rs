use crate::auth::{Credential, ProductDomain, Signer};
use crate::endpoint::LocationConfig;
use crate::http::{FormatType, HttpRequest, HttpResponse, MethodType};
use crate::unmarshal::{read_error, UnmarshallerContext};
use crate::webc::{AsyncTransport, Transport};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Only endpoints of this type are eligible for API traffic.
const DEFAULT_ENDPOINT_TYPE: &str = "openAPI";

const DISCOVERY_ACTION: &str = "DescribeEndpoints";
const DISCOVERY_VERSION: &str = "2015-06-12";

/// Root element of the discovery success body.
const RESPONSE_ROOT: &str = "DescribeEndpointsResponse";

/// Applied when no explicit timeout is configured on the service.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100_000);

/// A successfully discovered endpoint for one (product, region) pair.
///
/// Produced at most once per resolution call and not cached by this crate.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEndpoint {
	pub request_id: Option<String>,
	/// Product code as reported by the discovery service.
	pub product: Option<String>,
	/// The host that should receive this product's API calls. Never empty.
	pub endpoint: String,
	pub region_id: Option<String>,
}

/// Resolves the network endpoint for a (product, region) pair by calling the well-known
/// discovery service.
///
/// Resolution is best-effort by design: any failure mode, from network outage to malformed
/// provider response, degrades to `None` ("no endpoint found"), never to an error. Callers
/// are expected to keep a static fallback. Failure detail goes to `tracing` only.
pub struct DescribeEndpointService<S> {
	signer: S,
	timeout: Duration,
}

/// Constructors
impl<S: Signer> DescribeEndpointService<S> {
	pub fn new(signer: S) -> Self {
		Self {
			signer,
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Overrides the transport timeout for every call made by this service.
	#[must_use]
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}

/// Resolution
impl<S: Signer> DescribeEndpointService<S> {
	/// Discovers the endpoint for `product` in `region_id`, blocking until done.
	pub fn resolve(
		&self,
		transport: &impl Transport,
		region_id: &str,
		product: &str,
		credential: &Credential,
		location: &LocationConfig,
	) -> Option<ResolvedEndpoint> {
		// Resolution is only meaningful for a named product.
		if product.is_empty() {
			return None;
		}

		match self.try_resolve(transport, region_id, product, credential, location) {
			Ok(found) => found,
			Err(err) => {
				tracing::warn!("endpoint discovery failed for product '{product}': {err}");
				None
			}
		}
	}

	/// Suspendable twin of [`DescribeEndpointService::resolve`]. Same decision logic; the two
	/// differ only in how the network call and body drain are scheduled.
	pub async fn resolve_async(
		&self,
		transport: &impl AsyncTransport,
		region_id: &str,
		product: &str,
		credential: &Credential,
		location: &LocationConfig,
	) -> Option<ResolvedEndpoint> {
		if product.is_empty() {
			return None;
		}

		match self.try_resolve_async(transport, region_id, product, credential, location).await {
			Ok(found) => found,
			Err(err) => {
				tracing::warn!("endpoint discovery failed for product '{product}': {err}");
				None
			}
		}
	}

	fn try_resolve(
		&self,
		transport: &impl Transport,
		region_id: &str,
		product: &str,
		credential: &Credential,
		location: &LocationConfig,
	) -> Result<Option<ResolvedEndpoint>> {
		let request = self.signed_request(region_id, product, credential, location)?;
		let method = request.method;
		let raw = transport.send(&request, self.timeout)?;
		let response = HttpResponse::read_blocking(raw, method)?;
		evaluate_response(&response)
	}

	async fn try_resolve_async(
		&self,
		transport: &impl AsyncTransport,
		region_id: &str,
		product: &str,
		credential: &Credential,
		location: &LocationConfig,
	) -> Result<Option<ResolvedEndpoint>> {
		let request = self.signed_request(region_id, product, credential, location)?;
		let method = request.method;
		let raw = transport.send(&request, self.timeout).await?;
		let response = HttpResponse::read_stream(raw, method).await?;
		evaluate_response(&response)
	}

	/// Builds the discovery request and signs it against the discovery service's own
	/// product/domain pair (the bootstrap call authenticates to the discovery service, not
	/// to the target product).
	fn signed_request(
		&self,
		region_id: &str,
		product: &str,
		credential: &Credential,
		location: &LocationConfig,
	) -> Result<HttpRequest> {
		let request = HttpRequest::new(MethodType::Get, format!("https://{}/", location.endpoint))
			.with_accept_format(FormatType::Json)
			.with_query("Action", DISCOVERY_ACTION)
			.with_query("Version", DISCOVERY_VERSION)
			.with_query("Id", region_id)
			.with_query("ServiceCode", product)
			.with_query("Type", DEFAULT_ENDPOINT_TYPE)
			.with_query("RegionId", &location.region_id);

		let domain = ProductDomain::new(&location.product, &location.endpoint);
		self.signer.sign(request, credential, FormatType::Json, &domain)
	}
}

/// The decision half of a resolution call, shared verbatim by both entry points.
fn evaluate_response(response: &HttpResponse) -> Result<Option<ResolvedEndpoint>> {
	if response.is_success() {
		let body = response.text()?;
		return select_endpoint(&body, DEFAULT_ENDPOINT_TYPE);
	}

	// Non-success: the structured error is diagnostic only, the outcome is "absent" either way.
	let error = read_error(response, FormatType::Json)?;
	if response.status >= 500 {
		tracing::warn!(
			"endpoint discovery server error: status {}, request_id {:?}, code {:?}, message {:?}",
			response.status,
			error.request_id,
			error.error_code,
			error.error_message,
		);
	} else {
		tracing::debug!(
			"endpoint discovery rejected: status {}, request_id {:?}, code {:?}, message {:?}",
			response.status,
			error.request_id,
			error.error_code,
			error.error_message,
		);
	}
	Ok(None)
}

/// Scans the discovery body for the first endpoint entry of the wanted type.
fn select_endpoint(body: &str, endpoint_type: &str) -> Result<Option<ResolvedEndpoint>> {
	let context = UnmarshallerContext::read(body, RESPONSE_ROOT, FormatType::Json)?;

	let count = context.length(&format!("{RESPONSE_ROOT}.Endpoints.Length"));
	for i in 0..count {
		if context.string_value(&format!("{RESPONSE_ROOT}.Endpoints[{i}].Type")) != Some(endpoint_type) {
			continue;
		}

		let endpoint = context.string_value(&format!("{RESPONSE_ROOT}.Endpoints[{i}].Endpoint"));
		let Some(endpoint) = endpoint.filter(|endpoint| !endpoint.is_empty()) else {
			// A matching entry without a usable host is "absent", not an error.
			return Ok(None);
		};

		return Ok(Some(ResolvedEndpoint {
			request_id: context.string_value(&format!("{RESPONSE_ROOT}.RequestId")).map(str::to_string),
			// "SerivceCode" is the literal field name on the wire.
			product: context
				.string_value(&format!("{RESPONSE_ROOT}.Endpoints[{i}].SerivceCode"))
				.map(str::to_string),
			endpoint: endpoint.to_string(),
			region_id: context
				.string_value(&format!("{RESPONSE_ROOT}.Endpoints[{i}].Id"))
				.map(str::to_string),
		}));
	}

	Ok(None)
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_select_endpoint_picks_first_matching_type() {
		let body = r#"{
			"RequestId": "req-42",
			"Endpoints": [
				{"Type": "innerAPI", "SerivceCode": "ecs", "Endpoint": "inner.example.com", "Id": "eu-west-1"},
				{"Type": "openAPI", "SerivceCode": "ecs", "Endpoint": "ecs.eu-west-1.example.com", "Id": "eu-west-1"}
			]
		}"#;
		let found = select_endpoint(body, "openAPI").unwrap().unwrap();
		assert_eq!(found.endpoint, "ecs.eu-west-1.example.com");
		assert_eq!(found.product.as_deref(), Some("ecs"));
		assert_eq!(found.region_id.as_deref(), Some("eu-west-1"));
		assert_eq!(found.request_id.as_deref(), Some("req-42"));
	}

	#[test]
	fn test_select_endpoint_no_match_is_absent() {
		let body = r#"{"RequestId": "r", "Endpoints": [{"Type": "innerAPI", "Endpoint": "x"}]}"#;
		assert_eq!(select_endpoint(body, "openAPI").unwrap(), None);
	}

	#[test]
	fn test_select_endpoint_empty_list_is_absent() {
		let body = r#"{"RequestId": "r", "Endpoints": []}"#;
		assert_eq!(select_endpoint(body, "openAPI").unwrap(), None);
	}

	#[test]
	fn test_select_endpoint_empty_host_is_absent() {
		let body = r#"{"Endpoints": [{"Type": "openAPI", "Endpoint": ""}]}"#;
		assert_eq!(select_endpoint(body, "openAPI").unwrap(), None);
	}

	#[test]
	fn test_select_endpoint_malformed_body_is_error() {
		assert!(select_endpoint("not json", "openAPI").is_err());
	}
}

// endregion: --- Tests
