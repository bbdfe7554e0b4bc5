// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::{IntoDiagnostic, Value, return_error};
use tracing::{debug, instrument};

use crate::{
	DataFrameError,
	column::Expr,
	config::SessionConfig,
	plan::{LogicalPlan, RenameNode, SortNode, ValuesNode},
	sort::{SortKey, SortSpec},
};

mod identifier;

pub use identifier::{normalize_identifier, normalize_qualified, render_identifier, render_qualified};

/// Lowers a logical plan into the SQL text sent to the engine.
#[instrument(name = "dataframe::lower", level = "debug", skip_all)]
pub fn lower(plan: &LogicalPlan, config: &SessionConfig) -> crate::Result<String> {
	let sql = emit_plan(plan, config)?;
	debug!(sql = %sql, "lowered logical plan");
	Ok(sql)
}

fn emit_plan(plan: &LogicalPlan, config: &SessionConfig) -> crate::Result<String> {
	match plan {
		LogicalPlan::Values(node) => emit_values(node, config),
		LogicalPlan::Table(node) => Ok(format!("SELECT * FROM {}", render_qualified(&node.name, config)?)),
		LogicalPlan::Rename(node) => emit_rename(node, config),
		LogicalPlan::Sort(node) => emit_sort(node, config),
		LogicalPlan::Limit(node) => {
			Ok(format!("SELECT * FROM ({}) LIMIT {}", emit_plan(&node.input, config)?, node.count))
		}
	}
}

fn emit_values(node: &ValuesNode, config: &SessionConfig) -> crate::Result<String> {
	let mut projections = Vec::with_capacity(node.columns.len());
	for (idx, column) in node.columns.iter().enumerate() {
		projections.push(format!("${} AS {}", idx + 1, render_identifier(column, config)?));
	}

	let mut rows = Vec::with_capacity(node.rows.len());
	for row in &node.rows {
		let literals: crate::Result<Vec<_>> = row.iter().map(emit_literal).collect();
		rows.push(format!("({})", literals?.join(", ")));
	}

	Ok(format!("SELECT {} FROM VALUES {}", projections.join(", "), rows.join(", ")))
}

fn emit_rename(node: &RenameNode, config: &SessionConfig) -> crate::Result<String> {
	let Some(source) = node.input.columns() else {
		return_error!(DataFrameError::UnknownColumns.into_diagnostic());
	};

	let mut projections = Vec::with_capacity(node.columns.len());
	for (from, to) in source.iter().zip(node.columns.iter()) {
		projections.push(format!(
			"{} AS {}",
			render_identifier(from, config)?,
			render_identifier(to, config)?
		));
	}

	Ok(format!("SELECT {} FROM ({})", projections.join(", "), emit_plan(&node.input, config)?))
}

fn emit_sort(node: &SortNode, config: &SessionConfig) -> crate::Result<String> {
	let input = emit_plan(&node.input, config)?;
	let order_by = emit_order_by(&node.spec, config)?;
	Ok(format!("SELECT * FROM ({input}) ORDER BY {order_by}"))
}

/// Renders the comma separated key list of an `ORDER BY` clause, preserving
/// key order and repeated keys.
pub fn emit_order_by(spec: &SortSpec, config: &SessionConfig) -> crate::Result<String> {
	let parts: crate::Result<Vec<_>> = spec.iter().map(|key| emit_sort_key(key, config)).collect();
	Ok(parts?.join(", "))
}

fn emit_sort_key(key: &SortKey, config: &SessionConfig) -> crate::Result<String> {
	let mut result = format!("{} {}", emit_expr(&key.expr, config)?, key.direction);
	if let Some(nulls) = &key.nulls {
		result.push(' ');
		result.push_str(&nulls.to_string());
	}
	Ok(result)
}

pub fn emit_expr(expr: &Expr, config: &SessionConfig) -> crate::Result<String> {
	match expr {
		Expr::Column(name) => render_identifier(name, config),
		Expr::Literal(value) => emit_literal(value),
		Expr::Binary {
			op,
			left,
			right,
		} => Ok(format!("({} {} {})", emit_expr(left, config)?, op, emit_expr(right, config)?)),
	}
}

fn emit_literal(value: &Value) -> crate::Result<String> {
	match value {
		Value::Undefined => Ok("NULL".to_string()),
		Value::Boolean(true) => Ok("TRUE".to_string()),
		Value::Boolean(false) => Ok("FALSE".to_string()),
		Value::Int8(value) => Ok(value.to_string()),
		Value::Float8(value) if value.is_nan() => Ok("'NaN'::FLOAT".to_string()),
		Value::Float8(value) if value.is_infinite() => {
			if value.is_sign_positive() {
				Ok("'inf'::FLOAT".to_string())
			} else {
				Ok("'-inf'::FLOAT".to_string())
			}
		}
		Value::Float8(value) => Ok(format!("{:?}", value)),
		Value::Utf8(value) => Ok(format!("'{}'", value.replace('\'', "''"))),
		Value::List(_) => return_error!(
			DataFrameError::UnsupportedLiteral {
				found: value.get_type(),
			}
			.into_diagnostic()
		),
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::{
		col,
		column::{NullOrder, SortDirection},
		config::IdentifierCase,
		lit,
		plan::{LimitNode, TableNode},
	};

	fn values() -> Arc<LogicalPlan> {
		Arc::new(LogicalPlan::Values(ValuesNode {
			columns: vec!["_1".to_string(), "_2".to_string()],
			rows: vec![vec![Value::int8(1), Value::int8(2)], vec![Value::int8(3), Value::Undefined]],
		}))
	}

	fn key(name: &str, direction: SortDirection) -> SortKey {
		SortKey::new(Expr::Column(name.to_string()), direction)
	}

	#[test]
	fn test_values() {
		let sql = lower(&values(), &SessionConfig::default()).unwrap();
		assert_eq!(sql, "SELECT $1 AS \"_1\", $2 AS \"_2\" FROM VALUES (1, 2), (3, NULL)");
	}

	#[test]
	fn test_rename() {
		let plan = LogicalPlan::Rename(RenameNode {
			input: values(),
			columns: vec!["a".to_string(), "b".to_string()],
		});
		let sql = lower(&plan, &SessionConfig::default()).unwrap();
		assert_eq!(
			sql,
			"SELECT \"_1\" AS \"A\", \"_2\" AS \"B\" FROM (SELECT $1 AS \"_1\", $2 AS \"_2\" FROM VALUES (1, 2), (3, NULL))"
		);
	}

	#[test]
	fn test_rename_of_unknown_columns() {
		let plan = LogicalPlan::Rename(RenameNode {
			input: Arc::new(LogicalPlan::Table(TableNode {
				name: "t".to_string(),
			})),
			columns: vec!["a".to_string()],
		});
		assert_eq!(lower(&plan, &SessionConfig::default()).unwrap_err().code, "DATAFRAME_002");
	}

	#[test]
	fn test_sort() {
		let plan = LogicalPlan::Sort(SortNode {
			input: Arc::new(LogicalPlan::Table(TableNode {
				name: "t".to_string(),
			})),
			spec: SortSpec::new(vec![key("a", SortDirection::Asc), key("b", SortDirection::Desc)]).unwrap(),
		});
		let sql = lower(&plan, &SessionConfig::default()).unwrap();
		assert_eq!(sql, "SELECT * FROM (SELECT * FROM \"T\") ORDER BY \"A\" ASC, \"B\" DESC");
	}

	#[test]
	fn test_order_by_keeps_repeated_keys_and_null_order() {
		let spec = SortSpec::new(vec![
			key("a", SortDirection::Asc),
			SortKey {
				expr: Expr::Column("a".to_string()),
				direction: SortDirection::Desc,
				nulls: Some(NullOrder::NullsFirst),
			},
		])
		.unwrap();
		let config = SessionConfig::default().quote_identifiers(false).identifier_case(IdentifierCase::Lower);
		assert_eq!(emit_order_by(&spec, &config).unwrap(), "a ASC, a DESC NULLS FIRST");
	}

	#[test]
	fn test_limit() {
		let plan = LogicalPlan::Limit(LimitNode {
			input: Arc::new(LogicalPlan::Table(TableNode {
				name: "db.t".to_string(),
			})),
			count: 5,
		});
		let sql = lower(&plan, &SessionConfig::default()).unwrap();
		assert_eq!(sql, "SELECT * FROM (SELECT * FROM \"DB\".\"T\") LIMIT 5");
	}

	#[test]
	fn test_expressions() {
		let config = SessionConfig::default();
		let expr = (col("a") + lit(1)) * lit("it's");
		assert_eq!(emit_expr(expr.expr(), &config).unwrap(), "((\"A\" + 1) * 'it''s')");
		assert_eq!(emit_expr(lit(1.5).expr(), &config).unwrap(), "1.5");
		assert_eq!(emit_expr(lit(2.0).expr(), &config).unwrap(), "2.0");
		assert_eq!(emit_expr(lit(f64::NAN).expr(), &config).unwrap(), "'NaN'::FLOAT");
		assert_eq!(emit_expr(lit(f64::NEG_INFINITY).expr(), &config).unwrap(), "'-inf'::FLOAT");
		assert_eq!(emit_expr(lit(false).expr(), &config).unwrap(), "FALSE");
		assert_eq!(emit_expr(lit(()).expr(), &config).unwrap(), "NULL");
	}

	#[test]
	fn test_list_literal_is_rejected() {
		let err = emit_expr(lit(vec![1, 2]).expr(), &SessionConfig::default()).unwrap_err();
		assert_eq!(err.code, "LOWER_001");
	}

	#[test]
	fn test_invalid_identifier_in_sort_key() {
		let plan = LogicalPlan::Sort(SortNode {
			input: values(),
			spec: SortSpec::new(vec![key("", SortDirection::Asc)]).unwrap(),
		});
		assert_eq!(lower(&plan, &SessionConfig::default()).unwrap_err().code, "IDENT_001");
	}
}
