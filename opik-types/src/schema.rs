//! Bidirectional mapping between raw wire JSON and typed values.
//!
//! Every wire type implements [`ObjectSchema`]; the free functions here do
//! the conversion and report failures as [`SchemaError`]s carrying the path
//! to the offending value.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::SchemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedObjectKeys {
	/// Unknown wire keys are dropped.
	#[default]
	Strip,
	/// Unknown wire keys fail the parse at their own path.
	Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOptions {
	pub unrecognized_object_keys: UnrecognizedObjectKeys,
	pub allow_unrecognized_enum_values: bool,
	pub skip_validation: bool,
	pub breadcrumbs_prefix: Vec<String>,
}

impl ParseOptions {
	pub fn strict() -> Self {
		Self {
			unrecognized_object_keys: UnrecognizedObjectKeys::Fail,
			..Default::default()
		}
	}

	pub fn lenient() -> Self {
		Self {
			allow_unrecognized_enum_values: true,
			..Default::default()
		}
	}

	pub fn with_breadcrumbs_prefix<I, S>(mut self, prefix: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.breadcrumbs_prefix = prefix.into_iter().map(Into::into).collect();
		self
	}
}

pub trait ObjectSchema: Serialize {
	/// Name used in diagnostics.
	const NAME: &'static str;
	/// Every key the wire object may carry.
	const KEYS: &'static [&'static str];

	/// Checks serde cannot express on its own, run after a successful parse
	/// and before serializing.
	fn validate(&self, _options: &ParseOptions) -> Result<(), SchemaError> {
		Ok(())
	}
}

pub fn parse<T: ObjectSchema + DeserializeOwned>(raw: &Value, options: &ParseOptions) -> Result<T, SchemaError> {
	parse_inner(raw, options).map_err(|e| {
		let e = e.with_prefix(&options.breadcrumbs_prefix);
		log::debug!("Failed to parse {}: {}", T::NAME, e);
		e
	})
}

fn parse_inner<T: ObjectSchema + DeserializeOwned>(raw: &Value, options: &ParseOptions) -> Result<T, SchemaError> {
	let Some(object) = raw.as_object() else {
		return Err(SchemaError::new(
			vec![],
			format!("expected an object, got {}", kind_of(raw)),
		));
	};

	if options.unrecognized_object_keys == UnrecognizedObjectKeys::Fail {
		if let Some(key) = object.keys().find(|k| !T::KEYS.contains(&k.as_str())) {
			return Err(SchemaError::at(key, "unrecognized key"));
		}
	}

	let parsed: T = serde_path_to_error::deserialize(raw).map_err(SchemaError::from_path_error)?;

	if !options.skip_validation {
		parsed.validate(options)?;
	}
	Ok(parsed)
}

pub fn json<T: ObjectSchema + ?Sized>(value: &T, options: &ParseOptions) -> Result<Value, SchemaError> {
	json_inner(value, options).map_err(|e| {
		let e = e.with_prefix(&options.breadcrumbs_prefix);
		log::debug!("Failed to serialize {}: {}", T::NAME, e);
		e
	})
}

fn json_inner<T: ObjectSchema + ?Sized>(value: &T, options: &ParseOptions) -> Result<Value, SchemaError> {
	if !options.skip_validation {
		value.validate(options)?;
	}
	serde_path_to_error::serialize(value, serde_json::value::Serializer)
		.map_err(SchemaError::from_path_error)
}

pub fn parse_str<T: ObjectSchema + DeserializeOwned>(raw: &str, options: &ParseOptions) -> Result<T, SchemaError> {
	let value: Value = serde_json::from_str(raw).map_err(|e| {
		log::debug!("Failed to read {} JSON: {}", T::NAME, e);
		SchemaError::new(options.breadcrumbs_prefix.clone(), e.to_string())
	})?;
	parse(&value, options)
}

pub fn to_string<T: ObjectSchema + ?Sized>(value: &T, options: &ParseOptions) -> Result<String, SchemaError> {
	let value = json(value, options)?;
	Ok(value.to_string())
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
