use acs_core::auth::Credential;
use acs_core::endpoint::LocationConfig;

pub fn seed_credential() -> Credential {
	Credential::new("test-ak-id", "test-ak-secret")
}

pub fn seed_location_config() -> LocationConfig {
	LocationConfig::new("eu-central-1", "Location", "location.cloud.example.com")
}

/// Discovery body with one `openAPI` entry and one decoy of another type.
pub fn seed_discovery_body_two_endpoints() -> &'static str {
	r#"{
		"RequestId": "req-0001",
		"Success": true,
		"Endpoints": [
			{
				"Type": "innerAPI",
				"SerivceCode": "ecs",
				"Endpoint": "ecs-inner.eu-central-1.cloud.example.com",
				"Id": "eu-central-1",
				"Namespace": "26842",
				"Protocols": {"Protocols": ["HTTP", "HTTPS"]}
			},
			{
				"Type": "openAPI",
				"SerivceCode": "ecs",
				"Endpoint": "ecs.eu-central-1.cloud.example.com",
				"Id": "eu-central-1",
				"Namespace": "26842",
				"Protocols": {"Protocols": ["HTTP", "HTTPS"]}
			}
		]
	}"#
}

pub fn seed_discovery_body_no_endpoints() -> &'static str {
	r#"{"RequestId": "req-0002", "Success": true, "Endpoints": []}"#
}

pub fn seed_discovery_body_no_open_api() -> &'static str {
	r#"{
		"RequestId": "req-0003",
		"Endpoints": [{"Type": "innerAPI", "SerivceCode": "ecs", "Endpoint": "inner.example.com", "Id": "eu-central-1"}]
	}"#
}

pub fn seed_discovery_body_empty_endpoint() -> &'static str {
	r#"{
		"RequestId": "req-0004",
		"Endpoints": [{"Type": "openAPI", "SerivceCode": "ecs", "Endpoint": "", "Id": "eu-central-1"}]
	}"#
}

pub fn seed_error_body() -> &'static str {
	r#"{"RequestId": "req-0005", "HostId": "location.cloud.example.com", "Code": "InvalidAccessKeyId.NotFound", "Message": "Specified access key is not found."}"#
}
