// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Index,
};

use serde::{Deserialize, Serialize};

use crate::Value;

/// A materialized result row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
	values: Vec<Value>,
}

impl Row {
	pub fn new(values: Vec<Value>) -> Self {
		Self {
			values,
		}
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.values.get(index)
	}

	pub fn get_int(&self, index: usize) -> Option<i64> {
		match self.values.get(index)? {
			Value::Int8(value) => Some(*value),
			_ => None,
		}
	}

	pub fn get_bool(&self, index: usize) -> Option<bool> {
		match self.values.get(index)? {
			Value::Boolean(value) => Some(*value),
			_ => None,
		}
	}

	pub fn get_utf8(&self, index: usize) -> Option<&str> {
		match self.values.get(index)? {
			Value::Utf8(value) => Some(value.as_str()),
			_ => None,
		}
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn into_values(self) -> Vec<Value> {
		self.values
	}
}

impl Index<usize> for Row {
	type Output = Value;

	fn index(&self, index: usize) -> &Self::Output {
		&self.values[index]
	}
}

impl From<Vec<Value>> for Row {
	fn from(values: Vec<Value>) -> Self {
		Row::new(values)
	}
}

impl Display for Row {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("Row[")?;
		for (idx, value) in self.values.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(value, f)?;
		}
		f.write_str("]")
	}
}
