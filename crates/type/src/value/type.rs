// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Undefined,
	Boolean,
	Int8,
	Float8,
	Utf8,
	List,
}

impl Type {
	/// Rank used to order values of different kinds against each other.
	pub(crate) fn rank(&self) -> u8 {
		match self {
			Type::Boolean => 0,
			Type::Int8 | Type::Float8 => 1,
			Type::Utf8 => 2,
			Type::List => 3,
			Type::Undefined => 4,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("undefined"),
			Type::Boolean => f.write_str("bool"),
			Type::Int8 => f.write_str("int8"),
			Type::Float8 => f.write_str("float8"),
			Type::Utf8 => f.write_str("utf8"),
			Type::List => f.write_str("list"),
		}
	}
}
