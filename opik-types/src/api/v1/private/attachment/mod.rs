use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

pub mod delete;

/// The kind of entity an attachment hangs off.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
	Trace,
	Span,
	/// A value this client does not know about. Only produced when parsing
	/// with `allow_unrecognized_enum_values`.
	#[serde(untagged)]
	Unrecognized(String),
}

#[cfg_attr(
	all(target_family = "wasm", target_os = "unknown"),
	wasm_bindgen::prelude::wasm_bindgen(typescript_custom_section)
)]
#[cfg_attr(not(all(target_family = "wasm", target_os = "unknown")), allow(dead_code))]
const TS_ENTITY_TYPE: &'static str = r#"export type EntityType = "trace" | "span";"#;

impl EntityType {
	/// Must list the same values as `TS_ENTITY_TYPE`.
	pub const VALUES: &'static [&'static str] = &["trace", "span"];

	/// Builds an `EntityType` from wire text, using the named variant when
	/// the text is a known value.
	pub fn unrecognized(value: impl Into<String>) -> Self {
		let value = value.into();
		value.parse().unwrap_or(EntityType::Unrecognized(value))
	}

	pub fn as_str(&self) -> &str {
		match self {
			EntityType::Trace => "trace",
			EntityType::Span => "span",
			EntityType::Unrecognized(s) => s,
		}
	}

	pub fn is_recognized(&self) -> bool {
		!matches!(self, EntityType::Unrecognized(_))
	}
}

impl AsRef<str> for EntityType {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl Display for EntityType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for EntityType {
	type Err = ConversionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"trace" => Ok(EntityType::Trace),
			"span" => Ok(EntityType::Span),
			other => Err(ConversionError::UnknownVariant {
				kind: "EntityType",
				value: other.to_string(),
			}),
		}
	}
}
