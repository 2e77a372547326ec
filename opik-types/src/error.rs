use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
	#[error("Unknown {kind} value: `{value}`")]
	UnknownVariant { kind: &'static str, value: String },
}

/// A value did not match the shape its schema declares.
///
/// `path` holds the breadcrumbs leading to the offending value, outermost
/// first. Sequence indices are rendered as their decimal position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", DisplayPath(.path, .message))]
pub struct SchemaError {
	pub path: Vec<String>,
	pub message: String,
}

struct DisplayPath<'a>(&'a [String], &'a str);

impl Display for DisplayPath<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.0.is_empty() {
			write!(f, "{}", self.1)
		} else {
			write!(f, "{}: {}", self.0.join(" -> "), self.1)
		}
	}
}

impl SchemaError {
	pub fn new(path: Vec<String>, message: impl Into<String>) -> Self {
		Self {
			path,
			message: message.into(),
		}
	}

	pub fn at(key: &str, message: impl Into<String>) -> Self {
		Self::new(vec![key.to_string()], message)
	}

	pub(crate) fn with_prefix(mut self, prefix: &[String]) -> Self {
		if !prefix.is_empty() {
			self.path.splice(0..0, prefix.iter().cloned());
		}
		self
	}

	pub(crate) fn from_path_error<E: Display>(e: serde_path_to_error::Error<E>) -> Self {
		use serde_path_to_error::Segment;

		let path = e
			.path()
			.iter()
			.filter_map(|segment| match segment {
				Segment::Seq { index } => Some(index.to_string()),
				Segment::Map { key } => Some(key.clone()),
				Segment::Enum { variant } => Some(variant.clone()),
				Segment::Unknown => None,
			})
			.collect();
		Self::new(path, e.into_inner().to_string())
	}
}
