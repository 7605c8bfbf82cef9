use crate::reader::{DocumentNode, Reader};
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Reads JSON body text into the document tree.
pub struct JsonReader;

impl Reader for JsonReader {
	fn read(&self, text: &str, root: &str) -> Result<DocumentNode> {
		let value: Value = serde_json::from_str(text)?;

		let mut top = HashMap::new();
		top.insert(root.to_string(), from_value(value));
		Ok(DocumentNode::Map(top))
	}
}

fn from_value(value: Value) -> DocumentNode {
	match value {
		Value::Null => DocumentNode::Scalar(String::new()),
		Value::Bool(b) => DocumentNode::Scalar(b.to_string()),
		Value::Number(n) => DocumentNode::Scalar(n.to_string()),
		Value::String(s) => DocumentNode::Scalar(s),
		Value::Array(items) => DocumentNode::Sequence(items.into_iter().map(from_value).collect()),
		Value::Object(fields) => DocumentNode::Map(fields.into_iter().map(|(k, v)| (k, from_value(v))).collect()),
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_read_roots_tree_under_given_name() {
		let tree = JsonReader
			.read(r#"{"RequestId": "abc", "Endpoints": [{"Type": "openAPI"}]}"#, "Root")
			.unwrap();

		let DocumentNode::Map(top) = &tree else {
			panic!("expected map at top");
		};
		let DocumentNode::Map(root) = top.get("Root").unwrap() else {
			panic!("expected map under root");
		};
		assert_eq!(root.get("RequestId").unwrap().as_scalar(), Some("abc"));
		assert!(matches!(root.get("Endpoints"), Some(DocumentNode::Sequence(items)) if items.len() == 1));
	}

	#[test]
	fn test_read_scalar_coercions() {
		let tree = JsonReader.read(r#"{"n": 42, "b": true, "z": null}"#, "R").unwrap();
		let DocumentNode::Map(top) = &tree else {
			panic!("expected map");
		};
		let DocumentNode::Map(root) = top.get("R").unwrap() else {
			panic!("expected map");
		};
		assert_eq!(root.get("n").unwrap().as_scalar(), Some("42"));
		assert_eq!(root.get("b").unwrap().as_scalar(), Some("true"));
		assert_eq!(root.get("z").unwrap().as_scalar(), Some(""));
	}

	#[test]
	fn test_read_malformed_json_fails() {
		assert!(JsonReader.read("{not json", "R").is_err());
	}
}

// endregion: --- Tests
