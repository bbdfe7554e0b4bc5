// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Reference executor that interprets logical plans over in-memory tables.
//!
//! Identifiers resolve with the same rules the lowering applies, so a plan
//! that lowers to valid SQL resolves here the same way the engine would.

use std::collections::HashMap;

use reifydb_dataframe::{
	Executor, IdentifierCase, LogicalPlan,
	lower::{normalize_identifier, normalize_qualified},
};
use reifydb_type::{IntoValue, Row, Value, error::diagnostic::execute, return_error};
use tracing::{debug, instrument};

mod eval;
mod sort;

pub(crate) use eval::evaluate;

/// Materialized intermediate result: resolved column names plus rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Frame {
	pub columns: Vec<String>,
	pub rows: Vec<Vec<Value>>,
}

#[derive(Clone, Debug)]
struct Table {
	columns: Vec<String>,
	rows: Vec<Vec<Value>>,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryExecutor {
	identifier_case: IdentifierCase,
	tables: HashMap<String, Table>,
}

impl MemoryExecutor {
	pub fn new() -> Self {
		Self::default()
	}

	/// Case folding used to resolve unquoted identifiers; must match the
	/// session that lowers the plans.
	pub fn with_identifier_case(mut self, case: IdentifierCase) -> Self {
		self.identifier_case = case;
		self
	}

	/// Registers a table. Names and columns follow the usual identifier
	/// rules, so `with_table("t", ["a"], ..)` is found by `table("T")`.
	pub fn with_table<C, S, I, R, V>(mut self, name: impl Into<String>, columns: C, rows: I) -> Self
	where
		C: IntoIterator<Item = S>,
		S: Into<String>,
		I: IntoIterator<Item = R>,
		R: IntoIterator<Item = V>,
		V: IntoValue,
	{
		let table = Table {
			columns: columns.into_iter().map(Into::into).collect(),
			rows: rows.into_iter().map(|row| row.into_iter().map(IntoValue::into_value).collect()).collect(),
		};
		self.tables.insert(name.into(), table);
		self
	}

	fn run(&self, plan: &LogicalPlan) -> reifydb_type::Result<Frame> {
		match plan {
			LogicalPlan::Values(node) => Ok(Frame {
				columns: self.resolve_all(&node.columns)?,
				rows: node.rows.clone(),
			}),
			LogicalPlan::Table(node) => self.scan(&node.name),
			LogicalPlan::Rename(node) => {
				let input = self.run(&node.input)?;
				Ok(Frame {
					columns: self.resolve_all(&node.columns)?,
					rows: input.rows,
				})
			}
			LogicalPlan::Sort(node) => {
				let input = self.run(&node.input)?;
				sort::sort(input, &node.spec, self.identifier_case)
			}
			LogicalPlan::Limit(node) => {
				let mut input = self.run(&node.input)?;
				input.rows.truncate(usize::try_from(node.count).unwrap_or(usize::MAX));
				Ok(input)
			}
		}
	}

	fn scan(&self, name: &str) -> reifydb_type::Result<Frame> {
		let wanted = normalize_qualified(name, self.identifier_case)?;
		for (registered, table) in &self.tables {
			if normalize_qualified(registered, self.identifier_case)? == wanted {
				let expected = table.columns.len();
				if let Some((row, values)) =
					table.rows.iter().enumerate().find(|(_, values)| values.len() != expected)
				{
					return_error!(execute::row_arity_mismatch(registered, row, values.len(), expected));
				}
				return Ok(Frame {
					columns: self.resolve_all(&table.columns)?,
					rows: table.rows.clone(),
				});
			}
		}
		return_error!(execute::table_not_found(name))
	}

	fn resolve_all(&self, names: &[String]) -> reifydb_type::Result<Vec<String>> {
		names.iter().map(|name| normalize_identifier(name, self.identifier_case)).collect()
	}
}

impl Executor for MemoryExecutor {
	#[instrument(name = "testing::memory::execute", level = "debug", skip_all)]
	fn execute(&self, plan: &LogicalPlan, sql: &str) -> reifydb_type::Result<Vec<Row>> {
		debug!(sql = %sql, "interpreting plan");
		let frame = self.run(plan)?;
		Ok(frame.rows.into_iter().map(Row::new).collect())
	}
}

#[cfg(test)]
mod tests {
	use reifydb_dataframe::{Session, col};

	use super::*;

	fn session() -> Session {
		Session::builder()
			.with_executor(MemoryExecutor::new().with_table("db.t", ["a", "b"], [[3, 1], [1, 2], [2, 3]]))
			.build()
	}

	#[test]
	fn test_values() {
		let rows = session().create_dataframe([[1, 2], [3, 4]]).unwrap().collect().unwrap();
		assert_eq!(
			rows,
			vec![Row::new(vec![Value::int8(1), Value::int8(2)]), Row::new(vec![Value::int8(3), Value::int8(4)])]
		);
	}

	#[test]
	fn test_table_scan_and_sort() {
		let rows = session().table("DB.T").sort(["a"], ()).unwrap().collect().unwrap();
		let a: Vec<_> = rows.iter().map(|row| row.get_int(0).unwrap()).collect();
		assert_eq!(a, vec![1, 2, 3]);
	}

	#[test]
	fn test_unknown_table() {
		let err = session().table("other").collect().unwrap_err();
		assert_eq!(err.code, "EXECUTE_002");
		assert_eq!(err.statement.as_deref(), Some("SELECT * FROM \"OTHER\""));
	}

	#[test]
	fn test_unknown_column() {
		let err = session().table("db.t").sort([col("c")], ()).unwrap().collect().unwrap_err();
		assert_eq!(err.code, "EXECUTE_001");
		assert_eq!(err.help.as_deref(), Some("available columns: A, B"));
	}

	#[test]
	fn test_quoted_column_is_case_sensitive() {
		let df = session().create_dataframe([[1]]).unwrap().to_df(["a"]).unwrap();
		assert!(df.sort(["\"A\""], ()).unwrap().collect().is_ok());
		assert_eq!(df.sort(["\"a\""], ()).unwrap().collect().unwrap_err().code, "EXECUTE_001");
	}

	#[test]
	fn test_ragged_table() {
		let executor = MemoryExecutor::new().with_table("t", ["a", "b"], vec![vec![1, 2], vec![1]]);
		let session = Session::builder().with_executor(executor).build();

		let err = session.table("t").sort(["b"], ()).unwrap().collect().unwrap_err();
		assert_eq!(err.code, "EXECUTE_005");
		assert_eq!(err.message, "row 1 of table 't' has 1 values, expected 2");
	}

	#[test]
	fn test_limit() {
		let rows = session().table("db.t").sort(["b"], false).unwrap().limit(2).collect().unwrap();
		let b: Vec<_> = rows.iter().map(|row| row.get_int(1).unwrap()).collect();
		assert_eq!(b, vec![3, 2]);
	}

	#[test]
	fn test_lowercase_resolution() {
		let session = Session::builder()
			.configure(|config| config.identifier_case(IdentifierCase::Lower))
			.with_executor(
				MemoryExecutor::new()
					.with_identifier_case(IdentifierCase::Lower)
					.with_table("T", ["A"], [[2], [1]]),
			)
			.build();
		let rows = session.table("t").sort(["a"], ()).unwrap().collect().unwrap();
		assert_eq!(rows[0].get_int(0), Some(1));
	}
}
