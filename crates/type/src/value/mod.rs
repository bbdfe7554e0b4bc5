// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod compare;
mod into;
mod r#type;

pub use into::IntoValue;
pub use r#type::Type;

/// A host value crossing the DataFrame API boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(f64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// An ordered sequence of values
	List(Vec<Value>),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn list(values: impl IntoIterator<Item = impl IntoValue>) -> Self {
		Value::List(values.into_iter().map(IntoValue::into_value).collect())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Int8(_) => Type::Int8,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
			Value::List(_) => Type::List,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::List(values) => {
				f.write_str("[")?;
				for (idx, value) in values.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Value::Undefined.to_string(), "undefined");
		assert_eq!(Value::bool(true).to_string(), "true");
		assert_eq!(Value::int8(42).to_string(), "42");
		assert_eq!(Value::utf8("abc").to_string(), "abc");
		assert_eq!(Value::list([1, 2, 3]).to_string(), "[1, 2, 3]");
	}

	#[test]
	fn test_get_type() {
		assert_eq!(Value::float8(1.5).get_type(), Type::Float8);
		assert_eq!(Value::list(Vec::<bool>::new()).get_type(), Type::List);
		assert!(Value::undefined().is_undefined());
	}
}
