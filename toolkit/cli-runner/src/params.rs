use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// How a single `--key` argument is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
	/// `--key`
	Flag,
	/// `--key=true`
	Bool(bool),
	/// `--key value`, an empty value renders like [ParamValue::Flag]
	Value(String),
}

/// Named command line arguments, rendered in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, key: &str, value: impl Display) -> Self {
		self.0.insert(key.to_string(), ParamValue::Value(value.to_string()));
		self
	}

	pub fn flag(mut self, key: &str) -> Self {
		self.0.insert(key.to_string(), ParamValue::Flag);
		self
	}

	pub fn with_bool(mut self, key: &str, value: bool) -> Self {
		self.0.insert(key.to_string(), ParamValue::Bool(value));
		self
	}

	/// Entries of `other` overwrite entries of `self` with the same key.
	pub fn merge(mut self, other: Params) -> Self {
		self.0.extend(other.0);
		self
	}

	pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
		self.0.remove(key)
	}

	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self.0.get(key)
	}

	/// Returns the raw value of a `--key value` entry.
	pub fn value(&self, key: &str) -> Option<&str> {
		match self.0.get(key) {
			Some(ParamValue::Value(value)) => Some(value.as_str()),
			_ => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Display for Params {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut first = true;
		for (key, value) in &self.0 {
			if !first {
				f.write_str(" ")?;
			}
			first = false;
			match value {
				ParamValue::Flag => write!(f, "--{key}")?,
				ParamValue::Value(value) if value.is_empty() => write!(f, "--{key}")?,
				ParamValue::Bool(value) => write!(f, "--{key}={value}")?,
				ParamValue::Value(value) => {
					let quoted = shlex::try_quote(value).map_err(|_| std::fmt::Error)?;
					write!(f, "--{key} {quoted}")?
				},
			}
		}
		Ok(())
	}
}

impl<const N: usize> From<[(&str, &str); N]> for Params {
	fn from(entries: [(&str, &str); N]) -> Self {
		entries.into_iter().fold(Params::new(), |params, (key, value)| params.with(key, value))
	}
}
