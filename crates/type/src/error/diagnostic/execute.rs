// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Type, error::diagnostic::Diagnostic};

pub fn column_not_found(name: &str, available: &[String]) -> Diagnostic {
	Diagnostic {
		code: "EXECUTE_001".to_string(),
		statement: None,
		message: format!("column '{}' not found", name),
		fragment: Some(name.to_string()),
		label: Some("this column does not exist in the current input".to_string()),
		help: Some(format!("available columns: {}", available.join(", "))),
		notes: vec!["unquoted identifiers are case-folded before resolution".to_string()],
		cause: None,
	}
}

pub fn table_not_found(name: &str) -> Diagnostic {
	Diagnostic {
		code: "EXECUTE_002".to_string(),
		statement: None,
		message: format!("table '{}' not found", name),
		fragment: Some(name.to_string()),
		label: Some("unknown table".to_string()),
		help: Some("register the table with the executor before querying it".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn arithmetic_not_applicable(operator: &str, left: Type, right: Type) -> Diagnostic {
	Diagnostic {
		code: "EXECUTE_003".to_string(),
		statement: None,
		message: format!("cannot apply {} to {} and {}", operator, left, right),
		fragment: None,
		label: Some("arithmetic requires numeric operands".to_string()),
		help: Some("cast the operands to a numeric type first".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn division_by_zero() -> Diagnostic {
	Diagnostic {
		code: "EXECUTE_004".to_string(),
		statement: None,
		message: "division by zero".to_string(),
		fragment: None,
		label: None,
		help: Some("filter out zero divisors before dividing".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn row_arity_mismatch(table: &str, row: usize, found: usize, expected: usize) -> Diagnostic {
	Diagnostic {
		code: "EXECUTE_005".to_string(),
		statement: None,
		message: format!("row {} of table '{}' has {} values, expected {}", row, table, found, expected),
		fragment: Some(table.to_string()),
		label: Some("row does not match the table's columns".to_string()),
		help: Some("register every row with one value per column".to_string()),
		notes: vec![],
		cause: None,
	}
}
