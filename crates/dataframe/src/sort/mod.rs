// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use reifydb_type::{IntoDiagnostic, return_error};

use crate::{
	DataFrameError,
	column::{Column, Expr, NullOrder, SortDirection},
};

mod normalize;
mod validate;

pub use normalize::normalize;
pub use validate::validate;

/// One positional argument of `sort`: either a single key or one collection
/// of keys.
#[derive(Clone, Debug, PartialEq)]
pub enum SortArg {
	Key(Column),
	Collection(Vec<Column>),
}

impl SortArg {
	pub fn len(&self) -> usize {
		match self {
			SortArg::Key(_) => 1,
			SortArg::Collection(columns) => columns.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_collection(&self) -> bool {
		matches!(self, SortArg::Collection(_))
	}

	fn into_columns(self) -> Vec<Column> {
		match self {
			SortArg::Key(column) => vec![column],
			SortArg::Collection(columns) => columns,
		}
	}
}

impl From<Column> for SortArg {
	fn from(column: Column) -> Self {
		SortArg::Key(column)
	}
}

impl From<&str> for SortArg {
	fn from(name: &str) -> Self {
		SortArg::Key(Column::new(name))
	}
}

impl From<String> for SortArg {
	fn from(name: String) -> Self {
		SortArg::Key(Column::new(name))
	}
}

impl<T: Into<Column>> From<Vec<T>> for SortArg {
	fn from(columns: Vec<T>) -> Self {
		SortArg::Collection(columns.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Column>, const N: usize> From<[T; N]> for SortArg {
	fn from(columns: [T; N]) -> Self {
		SortArg::Collection(columns.into_iter().map(Into::into).collect())
	}
}

/// Builds the positional argument list of `sort` from names, columns and
/// arrays: `sort_args!["a", col("b").desc()]` or `sort_args![["a", "b"]]`.
#[macro_export]
macro_rules! sort_args {
	() => {
		::std::vec::Vec::<$crate::sort::SortArg>::new()
	};
	[ $($value:expr),+ $(,)? ] => {
		vec![ $($crate::sort::SortArg::from($value)),+ ]
	};
}

/// How the `ascending` argument applies to the resolved keys.
///
/// | host value          | variant    | effect                                        |
/// |---------------------|------------|-----------------------------------------------|
/// | undefined           | `Unset`    | key's own direction, otherwise ascending      |
/// | boolean             | `Uniform`  | applies to keys without their own direction   |
/// | list of bool / int  | `PerKey`   | positional override of every key's direction  |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Ascending {
	#[default]
	Unset,
	Uniform(bool),
	PerKey(Vec<bool>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SortKey {
	pub expr: Expr,
	pub direction: SortDirection,
	pub nulls: Option<NullOrder>,
}

impl SortKey {
	pub fn new(expr: Expr, direction: SortDirection) -> Self {
		Self {
			expr,
			direction,
			nulls: None,
		}
	}
}

impl Display for SortKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.expr, self.direction)?;
		if let Some(nulls) = &self.nulls {
			write!(f, " {}", nulls)?;
		}
		Ok(())
	}
}

/// Non-empty, ordered list of sort keys.
#[derive(Clone, Debug, PartialEq)]
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
	pub fn new(keys: Vec<SortKey>) -> crate::Result<Self> {
		if keys.is_empty() {
			return_error!(DataFrameError::EmptySortKeys.into_diagnostic());
		}
		Ok(Self(keys))
	}

	pub fn keys(&self) -> &[SortKey] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, SortKey> {
		self.0.iter()
	}
}

impl<'a> IntoIterator for &'a SortSpec {
	type Item = &'a SortKey;
	type IntoIter = std::slice::Iter<'a, SortKey>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl Display for SortSpec {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for (idx, key) in self.0.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(key, f)?;
		}
		Ok(())
	}
}
