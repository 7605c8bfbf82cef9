use crate::http::FormatType;
use crate::reader::{reader_for, DocumentNode};
use crate::Result;

/// Read-only path queries over a parsed [`DocumentNode`] tree.
///
/// Paths are dot-separated field names with optional `[index]` suffixes addressing elements
/// of a repeated field, e.g. `Root.Items[2].Name`. The grammar is deliberately tiny: field
/// access, indexed access, and a `.Length` pseudo-accessor — nothing more. The same
/// traversal works for any wire format whose reader produced the tree.
pub struct UnmarshallerContext {
	root: DocumentNode,
}

/// Constructors
impl UnmarshallerContext {
	#[must_use]
	pub fn new(root: DocumentNode) -> Self {
		Self { root }
	}

	/// Convenience: parse `text` with the reader registered for `format`.
	pub fn read(text: &str, root: &str, format: FormatType) -> Result<Self> {
		let reader = reader_for(format)?;
		Ok(Self::new(reader.read(text, root)?))
	}
}

/// Path queries
impl UnmarshallerContext {
	/// The string at `path`, or `None` when the path addresses nothing (or a non-scalar).
	#[must_use]
	pub fn string_value(&self, path: &str) -> Option<&str> {
		self.resolve(path)?.as_scalar()
	}

	/// The scalar at `path` parsed as an integer.
	#[must_use]
	pub fn integer_value(&self, path: &str) -> Option<i64> {
		self.string_value(path)?.parse().ok()
	}

	/// The scalar at `path` parsed as a boolean.
	#[must_use]
	pub fn boolean_value(&self, path: &str) -> Option<bool> {
		self.string_value(path)?.parse().ok()
	}

	/// The count of repeated elements addressed by `path` (0 when absent or not repeated).
	/// A trailing `.Length` pseudo-segment is accepted and addresses the sequence itself.
	#[must_use]
	pub fn length(&self, path: &str) -> usize {
		let path = path.strip_suffix(".Length").unwrap_or(path);
		match self.resolve(path) {
			Some(DocumentNode::Sequence(items)) => items.len(),
			_ => 0,
		}
	}

	fn resolve(&self, path: &str) -> Option<&DocumentNode> {
		let mut node = &self.root;
		for segment in path.split('.') {
			let (name, indexes) = split_segment(segment)?;
			if !name.is_empty() {
				let DocumentNode::Map(fields) = node else {
					return None;
				};
				node = fields.get(name)?;
			}
			for index in indexes {
				let DocumentNode::Sequence(items) = node else {
					return None;
				};
				node = items.get(index)?;
			}
		}
		Some(node)
	}
}

/// Splits one path segment into its field name and trailing `[n]` indexes.
/// Returns `None` for malformed segments (unbalanced brackets, non-numeric index).
fn split_segment(segment: &str) -> Option<(&str, Vec<usize>)> {
	let (name, mut rest) = match segment.find('[') {
		Some(pos) => (&segment[..pos], &segment[pos..]),
		None => (segment, ""),
	};

	let mut indexes = Vec::new();
	while !rest.is_empty() {
		let inner = rest.strip_prefix('[')?;
		let (index, after) = inner.split_once(']')?;
		indexes.push(index.trim().parse().ok()?);
		rest = after;
	}

	Some((name, indexes))
}

// region:    --- Tests


// endregion: --- Tests
