// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

impl SortDirection {
	pub fn from_ascending(ascending: bool) -> Self {
		if ascending {
			SortDirection::Asc
		} else {
			SortDirection::Desc
		}
	}

	pub fn is_ascending(&self) -> bool {
		matches!(self, SortDirection::Asc)
	}
}

impl Display for SortDirection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			SortDirection::Asc => f.write_str("ASC"),
			SortDirection::Desc => f.write_str("DESC"),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullOrder {
	NullsFirst,
	NullsLast,
}

impl Display for NullOrder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			NullOrder::NullsFirst => f.write_str("NULLS FIRST"),
			NullOrder::NullsLast => f.write_str("NULLS LAST"),
		}
	}
}

/// Ordering attached to a column by its builder call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortOrder {
	pub direction: SortDirection,
	/// Unset leaves null placement to the engine
	pub nulls: Option<NullOrder>,
}

impl Display for SortOrder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.direction, f)?;
		if let Some(nulls) = &self.nulls {
			write!(f, " {}", nulls)?;
		}
		Ok(())
	}
}
