use serde::{Deserialize, Serialize};

/// Static bootstrap configuration for endpoint discovery: the discovery service's own
/// region, product name, and domain. Supplied by the caller; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
	pub region_id: String,
	pub product: String,
	pub endpoint: String,
}

/// Constructors
impl LocationConfig {
	pub fn new(region_id: impl Into<String>, product: impl Into<String>, endpoint: impl Into<String>) -> Self {
		Self {
			region_id: region_id.into(),
			product: product.into(),
			endpoint: endpoint.into(),
		}
	}
}

/// The well-known discovery service coordinates.
impl Default for LocationConfig {
	fn default() -> Self {
		Self::new("cn-hangzhou", "Location", "location.aliyuncs.com")
	}
}
