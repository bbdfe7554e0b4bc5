// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_dataframe::{BinaryOp, Expr, IdentifierCase, lower::normalize_identifier};
use reifydb_type::{Value, error::diagnostic::execute, return_error};

/// Evaluates an expression against one row of `columns`.
pub(crate) fn evaluate(
	expr: &Expr,
	columns: &[String],
	row: &[Value],
	case: IdentifierCase,
) -> reifydb_type::Result<Value> {
	match expr {
		Expr::Column(name) => {
			let resolved = normalize_identifier(name, case)?;
			match columns.iter().position(|column| *column == resolved).and_then(|idx| row.get(idx)) {
				Some(value) => Ok(value.clone()),
				None => return_error!(execute::column_not_found(&resolved, columns)),
			}
		}
		Expr::Literal(value) => Ok(value.clone()),
		Expr::Binary {
			op,
			left,
			right,
		} => {
			let left = evaluate(left, columns, row, case)?;
			let right = evaluate(right, columns, row, case)?;
			arithmetic(*op, left, right)
		}
	}
}

fn arithmetic(op: BinaryOp, left: Value, right: Value) -> reifydb_type::Result<Value> {
	match (left, right) {
		(Value::Undefined, _) | (_, Value::Undefined) => Ok(Value::Undefined),
		(Value::Int8(l), Value::Int8(r)) => int_arithmetic(op, l, r),
		(Value::Int8(l), Value::Float8(r)) => float_arithmetic(op, l as f64, r),
		(Value::Float8(l), Value::Int8(r)) => float_arithmetic(op, l, r as f64),
		(Value::Float8(l), Value::Float8(r)) => float_arithmetic(op, l, r),
		(left, right) => {
			return_error!(execute::arithmetic_not_applicable(op.symbol(), left.get_type(), right.get_type()))
		}
	}
}

fn int_arithmetic(op: BinaryOp, l: i64, r: i64) -> reifydb_type::Result<Value> {
	let result = match op {
		BinaryOp::Add => l.checked_add(r),
		BinaryOp::Sub => l.checked_sub(r),
		BinaryOp::Mul => l.checked_mul(r),
		// integer division yields a fraction, as in the engine
		BinaryOp::Div => return float_arithmetic(op, l as f64, r as f64),
	};
	match result {
		Some(value) => Ok(Value::Int8(value)),
		None => float_arithmetic(op, l as f64, r as f64),
	}
}

fn float_arithmetic(op: BinaryOp, l: f64, r: f64) -> reifydb_type::Result<Value> {
	let value = match op {
		BinaryOp::Add => l + r,
		BinaryOp::Sub => l - r,
		BinaryOp::Mul => l * r,
		BinaryOp::Div => {
			if r == 0.0 {
				return_error!(execute::division_by_zero());
			}
			l / r
		}
	};
	Ok(Value::Float8(value))
}

#[cfg(test)]
mod tests {
	use reifydb_dataframe::{col, lit};

	use super::*;

	fn eval(expr: reifydb_dataframe::Column) -> reifydb_type::Result<Value> {
		let columns = vec!["A".to_string(), "B".to_string()];
		let row = vec![Value::int8(6), Value::Undefined];
		evaluate(expr.expr(), &columns, &row, IdentifierCase::Upper)
	}

	#[test]
	fn test_column_and_literal() {
		assert_eq!(eval(col("a")).unwrap(), Value::int8(6));
		assert_eq!(eval(lit("x")).unwrap(), Value::utf8("x"));
	}

	#[test]
	fn test_arithmetic() {
		assert_eq!(eval(col("a") * lit(2) - lit(1)).unwrap(), Value::int8(11));
		assert_eq!(eval(col("a") / lit(4)).unwrap(), Value::float8(1.5));
		assert_eq!(eval(col("a") + lit(0.5)).unwrap(), Value::float8(6.5));
		assert_eq!(eval(col("a") + col("b")).unwrap(), Value::Undefined);
	}

	#[test]
	fn test_overflow_promotes_to_float() {
		assert_eq!(eval(lit(i64::MAX) + lit(1)).unwrap(), Value::float8(i64::MAX as f64 + 1.0));
	}

	#[test]
	fn test_errors() {
		assert_eq!(eval(col("a") / lit(0)).unwrap_err().code, "EXECUTE_004");
		assert_eq!(eval(col("a") + lit("x")).unwrap_err().code, "EXECUTE_003");
		assert_eq!(eval(col("c")).unwrap_err().code, "EXECUTE_001");
	}

	#[test]
	fn test_short_row_is_an_error() {
		let columns = vec!["A".to_string(), "B".to_string()];
		let row = vec![Value::int8(6)];
		let err = evaluate(col("b").expr(), &columns, &row, IdentifierCase::Upper).unwrap_err();
		assert_eq!(err.code, "EXECUTE_001");
	}
}
