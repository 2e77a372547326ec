use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::EntityType;
use crate::{
	error::SchemaError,
	schema::{ObjectSchema, ParseOptions},
};

pub const ENDPOINT: &str = "v1/private/attachment/delete";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(
	all(target_family = "wasm", target_os = "unknown"),
	derive(tsify::Tsify)
)]
pub struct Request<'a> {
	pub file_names: Vec<Cow<'a, str>>,
	#[cfg_attr(
		all(target_family = "wasm", target_os = "unknown"),
		tsify(type = "EntityType")
	)]
	pub entity_type: EntityType,
	pub entity_id: Cow<'a, str>,
	pub container_id: Cow<'a, str>,
}

impl<'a> Request<'a> {
	pub fn new<I, S>(
		file_names: I,
		entity_type: EntityType,
		entity_id: impl Into<Cow<'a, str>>,
		container_id: impl Into<Cow<'a, str>>,
	) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Cow<'a, str>>,
	{
		Self {
			file_names: file_names.into_iter().map(Into::into).collect(),
			entity_type,
			entity_id: entity_id.into(),
			container_id: container_id.into(),
		}
	}

	pub fn borrow_clone(&'a self) -> Request<'a> {
		Request {
			file_names: self
				.file_names
				.iter()
				.map(|name| Cow::Borrowed(name.as_ref()))
				.collect(),
			entity_type: self.entity_type.clone(),
			entity_id: Cow::Borrowed(&self.entity_id),
			container_id: Cow::Borrowed(&self.container_id),
		}
	}

	pub fn into_owned(self) -> Request<'static> {
		Request {
			file_names: self
				.file_names
				.into_iter()
				.map(|name| Cow::Owned(name.into_owned()))
				.collect(),
			entity_type: self.entity_type,
			entity_id: Cow::Owned(self.entity_id.into_owned()),
			container_id: Cow::Owned(self.container_id.into_owned()),
		}
	}
}

impl ObjectSchema for Request<'_> {
	const NAME: &'static str = "DeleteAttachmentsRequest";
	const KEYS: &'static [&'static str] = &["file_names", "entity_type", "entity_id", "container_id"];

	fn validate(&self, options: &ParseOptions) -> Result<(), SchemaError> {
		if let EntityType::Unrecognized(value) = &self.entity_type {
			if EntityType::VALUES.contains(&value.as_str()) {
				return Err(SchemaError::at(
					"entity_type",
					format!("`{value}` is a known variant and must not be carried as unrecognized"),
				));
			}
			if !options.allow_unrecognized_enum_values {
				return Err(SchemaError::at(
					"entity_type",
					format!(
						"unknown variant `{value}`, expected one of {}",
						EntityType::VALUES
							.iter()
							.map(|v| format!("`{v}`"))
							.collect::<Vec<_>>()
							.join(", ")
					),
				));
			}
			log::warn!("Accepting unrecognized entity_type `{value}` for {}", Self::NAME);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::schema::{json, parse};

	fn sample() -> Request<'static> {
		Request::new(["a.png", "b.png"], EntityType::Trace, "e1", "c1")
	}

	#[test]
	fn parses_documented_example() {
		let raw = json!({
			"file_names": ["a.png", "b.png"],
			"entity_type": "trace",
			"entity_id": "e1",
			"container_id": "c1"
		});
		let parsed: Request = parse(&raw, &ParseOptions::default()).unwrap();
		assert_eq!(parsed, sample());
		assert_eq!(json(&parsed, &ParseOptions::default()).unwrap(), raw);
	}

	#[test]
	fn missing_entity_id_is_named() {
		let raw = json!({
			"file_names": [],
			"entity_type": "span",
			"container_id": "c1"
		});
		let err = parse::<Request>(&raw, &ParseOptions::default()).unwrap_err();
		assert!(err.message.contains("entity_id"), "{err}");
	}

	#[test]
	fn unknown_entity_type_is_rejected() {
		let raw = json!({
			"file_names": ["a.png"],
			"entity_type": "dataset",
			"entity_id": "e1",
			"container_id": "c1"
		});
		let err = parse::<Request>(&raw, &ParseOptions::default()).unwrap_err();
		assert_eq!(err.path, vec!["entity_type"]);
		assert_eq!(
			err.message,
			"unknown variant `dataset`, expected one of `trace`, `span`"
		);
	}

	#[test]
	fn unknown_entity_type_survives_when_allowed() {
		let raw = json!({
			"file_names": ["a.png"],
			"entity_type": "dataset",
			"entity_id": "e1",
			"container_id": "c1"
		});
		let options = ParseOptions::lenient();
		let parsed: Request = parse(&raw, &options).unwrap();
		assert_eq!(
			parsed.entity_type,
			EntityType::Unrecognized("dataset".to_string())
		);
		assert_eq!(json(&parsed, &options).unwrap(), raw);
		assert!(json(&parsed, &ParseOptions::default()).is_err());
	}

	#[test]
	fn non_string_entity_type_is_a_type_error() {
		let raw = json!({
			"file_names": ["a.png"],
			"entity_type": 3,
			"entity_id": "e1",
			"container_id": "c1"
		});
		let err = parse::<Request>(&raw, &ParseOptions::lenient()).unwrap_err();
		assert_eq!(err.path, vec!["entity_type"]);
	}

	#[test]
	fn borrowed_request_serializes_without_copying() {
		let name = String::from("c.txt");
		let entity_id = String::from("e2");
		let request = Request::new([name.as_str()], EntityType::Span, entity_id.as_str(), "c2");
		let raw = json(&request, &ParseOptions::default()).unwrap();
		assert_eq!(
			raw,
			json!({
				"file_names": ["c.txt"],
				"entity_type": "span",
				"entity_id": "e2",
				"container_id": "c2"
			})
		);
		let text = crate::schema::to_string(&request, &ParseOptions::strict()).unwrap();
		let parsed: Request = crate::schema::parse_str(&text, &ParseOptions::strict()).unwrap();
		assert_eq!(parsed, request);
	}

	#[test]
	fn unrecognized_known_value_is_rejected() {
		let request = Request::new(
			["a.png"],
			EntityType::Unrecognized("trace".to_string()),
			"e1",
			"c1",
		);
		for options in [ParseOptions::default(), ParseOptions::lenient()] {
			let err = json(&request, &options).unwrap_err();
			assert_eq!(err.path, vec!["entity_type"]);
			assert_eq!(
				err.message,
				"`trace` is a known variant and must not be carried as unrecognized"
			);
		}

		let normalized = Request::new(["a.png"], EntityType::unrecognized("trace"), "e1", "c1");
		let options = ParseOptions::lenient();
		let back: Request = parse(&json(&normalized, &options).unwrap(), &options).unwrap();
		assert_eq!(back, normalized);
		assert_eq!(back.entity_type, EntityType::Trace);
	}

	#[test]
	fn borrowed_request_matches_owned() {
		let name = String::from("c.txt");
		let borrowed = Request::new([name.as_str()], EntityType::Span, "e2", "c2");
		let owned = borrowed.borrow_clone().into_owned();
		assert_eq!(borrowed, owned);
		assert!(matches!(owned.file_names[0], Cow::Owned(_)));
	}
}
