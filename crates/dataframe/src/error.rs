// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::{Diagnostic, Error, IntoDiagnostic, Type};

/// Client-side failures raised before any statement reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataFrameError {
	#[error("sort() needs at least one sort expression")]
	EmptySortKeys,

	#[error("ascending can only be boolean or list, but got {found}")]
	InvalidAscendingType {
		found: Type,
	},

	#[error("ascending list can only contain boolean or integer values, but got {found} at position {position}")]
	InvalidAscendingElement {
		position: usize,
		found: Type,
	},

	#[error("The length of col ({keys}) should be same with the length of ascending ({ascending})")]
	AscendingLengthMismatch {
		keys: usize,
		ascending: usize,
	},

	#[error("sort() only accepts one list, but got {count}")]
	MultipleCollectionArguments {
		count: usize,
	},

	#[error("invalid identifier '{name}'")]
	InvalidIdentifier {
		name: String,
	},

	#[error("The number of columns ({columns}) does not match the number of names ({names})")]
	ColumnCountMismatch {
		columns: usize,
		names: usize,
	},

	#[error("to_df() requires the input columns to be known")]
	UnknownColumns,

	#[error("create_dataframe() needs at least one row")]
	EmptyValues,

	#[error("row {row} has {found} values, expected {expected}")]
	RowArityMismatch {
		row: usize,
		found: usize,
		expected: usize,
	},

	#[error("no executor configured for this session")]
	NoExecutor,

	#[error("cannot render {found} literal as SQL")]
	UnsupportedLiteral {
		found: Type,
	},
}

impl IntoDiagnostic for DataFrameError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			DataFrameError::EmptySortKeys => Diagnostic {
				code: "SORT_001".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: Some("pass a column name, a column expression or one list of them".to_string()),
				notes: vec!["an empty list counts as no sort expression".to_string()],
				cause: None,
			},
			DataFrameError::InvalidAscendingType {
				found,
			} => Diagnostic {
				code: "SORT_002".to_string(),
				statement: None,
				message,
				fragment: None,
				label: Some(format!("ascending of type {}", found)),
				help: Some("use true/false for every key, or one flag per key".to_string()),
				notes: vec![],
				cause: None,
			},
			DataFrameError::InvalidAscendingElement { .. } => Diagnostic {
				code: "SORT_005".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: Some("use true/false or 1/0 for each entry".to_string()),
				notes: vec!["non-zero integers count as ascending".to_string()],
				cause: None,
			},
			DataFrameError::AscendingLengthMismatch { .. } => Diagnostic {
				code: "SORT_003".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: Some("pass exactly one ascending flag per sort key".to_string()),
				notes: vec![],
				cause: None,
			},
			DataFrameError::MultipleCollectionArguments { .. } => Diagnostic {
				code: "SORT_004".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: Some("merge the lists into a single list argument".to_string()),
				notes: vec![],
				cause: None,
			},
			DataFrameError::InvalidIdentifier {
				name,
			} => Diagnostic {
				code: "IDENT_001".to_string(),
				statement: None,
				message,
				fragment: Some(name),
				label: Some("identifier must not be empty or contain unbalanced quotes".to_string()),
				help: Some("wrap names containing double quotes in double quotes and double them".to_string()),
				notes: vec![],
				cause: None,
			},
			DataFrameError::ColumnCountMismatch { .. } => Diagnostic {
				code: "DATAFRAME_001".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: Some("pass one name for every column of the input".to_string()),
				notes: vec![],
				cause: None,
			},
			DataFrameError::UnknownColumns => Diagnostic {
				code: "DATAFRAME_002".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: Some("rename columns of inline data, or of a frame derived from it".to_string()),
				notes: vec![],
				cause: None,
			},
			DataFrameError::EmptyValues => Diagnostic {
				code: "DATAFRAME_003".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			DataFrameError::RowArityMismatch { .. } => Diagnostic {
				code: "DATAFRAME_004".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: Some("every row must have as many values as the first row".to_string()),
				notes: vec![],
				cause: None,
			},
			DataFrameError::NoExecutor => Diagnostic {
				code: "DATAFRAME_005".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: Some("build the session with SessionBuilder::with_executor".to_string()),
				notes: vec![],
				cause: None,
			},
			DataFrameError::UnsupportedLiteral { .. } => Diagnostic {
				code: "LOWER_001".to_string(),
				statement: None,
				message,
				fragment: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<DataFrameError> for Error {
	fn from(err: DataFrameError) -> Self {
		Error(err.into_diagnostic())
	}
}
