// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Case folding applied to unquoted identifiers before they are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierCase {
	#[default]
	Upper,
	Lower,
	/// Keeps the name as written. Emitted names are always quoted, since an
	/// engine would fold a bare name.
	Preserve,
}

impl IdentifierCase {
	pub fn apply(&self, name: &str) -> String {
		match self {
			IdentifierCase::Upper => name.to_uppercase(),
			IdentifierCase::Lower => name.to_lowercase(),
			IdentifierCase::Preserve => name.to_string(),
		}
	}
}

/// Session level settings for SQL lowering.
///
/// | key                 | default | meaning                                      |
/// |---------------------|---------|----------------------------------------------|
/// | `identifier_case`   | `upper` | folding of unquoted identifiers              |
/// | `quote_identifiers` | `true`  | wrap every emitted identifier in `"`         |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
	pub identifier_case: IdentifierCase,
	pub quote_identifiers: bool,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			identifier_case: IdentifierCase::Upper,
			quote_identifiers: true,
		}
	}
}

impl SessionConfig {
	pub fn from_json(json: &str) -> crate::Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn identifier_case(mut self, case: IdentifierCase) -> Self {
		self.identifier_case = case;
		self
	}

	pub fn quote_identifiers(mut self, quote: bool) -> Self {
		self.quote_identifiers = quote;
		self
	}
}
