// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::{IntoDiagnostic, Value, return_error};

use crate::{
	DataFrameError,
	sort::{Ascending, SortArg},
};

/// Checks the raw `sort` arguments and resolves `ascending`.
///
/// The first applicable violation fires, checked in this order: no keys,
/// ascending of the wrong type, ascending list length, more than one
/// collection argument.
pub fn validate(args: &[SortArg], ascending: &Value) -> crate::Result<Ascending> {
	let keys: usize = args.iter().map(SortArg::len).sum();
	if keys == 0 {
		return_error!(DataFrameError::EmptySortKeys.into_diagnostic());
	}

	let ascending = resolve_ascending(ascending)?;

	if let Ascending::PerKey(flags) = &ascending
		&& flags.len() != keys
	{
		return_error!(
			DataFrameError::AscendingLengthMismatch {
				keys,
				ascending: flags.len(),
			}
			.into_diagnostic()
		);
	}

	let collections = args.iter().filter(|arg| arg.is_collection()).count();
	if collections > 1 {
		return_error!(
			DataFrameError::MultipleCollectionArguments {
				count: collections,
			}
			.into_diagnostic()
		);
	}

	Ok(ascending)
}

fn resolve_ascending(value: &Value) -> crate::Result<Ascending> {
	match value {
		Value::Undefined => Ok(Ascending::Unset),
		Value::Boolean(ascending) => Ok(Ascending::Uniform(*ascending)),
		Value::List(values) => {
			let mut flags = Vec::with_capacity(values.len());
			for (position, value) in values.iter().enumerate() {
				match value {
					Value::Boolean(ascending) => flags.push(*ascending),
					Value::Int8(ascending) => flags.push(*ascending != 0),
					other => return_error!(
						DataFrameError::InvalidAscendingElement {
							position,
							found: other.get_type(),
						}
						.into_diagnostic()
					),
				}
			}
			Ok(Ascending::PerKey(flags))
		}
		other => return_error!(
			DataFrameError::InvalidAscendingType {
				found: other.get_type(),
			}
			.into_diagnostic()
		),
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::IntoValue;

	use super::*;
	use crate::{col, sort_args};

	#[test]
	fn test_no_keys() {
		let err = validate(&sort_args![], &Value::Undefined).unwrap_err();
		assert_eq!(err.code, "SORT_001");
		assert!(err.to_string().contains("sort() needs at least one sort expression"));

		let err = validate(&sort_args![Vec::<&str>::new()], &Value::Undefined).unwrap_err();
		assert_eq!(err.code, "SORT_001");
	}

	#[test]
	fn test_ascending_type() {
		let err = validate(&sort_args!["a"], &"ASC".into_value()).unwrap_err();
		assert_eq!(err.code, "SORT_002");
		assert!(err.to_string().contains("ascending can only be boolean or list"));

		let err = validate(&sort_args!["a"], &1.into_value()).unwrap_err();
		assert_eq!(err.code, "SORT_002");
	}

	#[test]
	fn test_ascending_element_type() {
		let err = validate(&sort_args!["a", "b"], &Value::list([Value::bool(true), Value::utf8("x")]))
			.unwrap_err();
		assert_eq!(err.code, "SORT_005");
		assert!(err.message.contains("at position 1"));
	}

	#[test]
	fn test_ascending_length() {
		let err = validate(&sort_args!["a", "b"], &[true, true, true].into_value()).unwrap_err();
		assert_eq!(err.code, "SORT_003");
		assert!(err.to_string().contains("The length of col (2) should be same with the length of ascending (3)"));
	}

	#[test]
	fn test_multiple_collections() {
		let err = validate(&sort_args![["a"], ["b"]], &Value::Undefined).unwrap_err();
		assert_eq!(err.code, "SORT_004");
		assert!(err.to_string().contains("sort() only accepts one list, but got 2"));
	}

	#[test]
	fn test_first_violation_fires() {
		// empty wins over a bad ascending value
		let err = validate(&sort_args![Vec::<&str>::new(), Vec::<&str>::new()], &"ASC".into_value()).unwrap_err();
		assert_eq!(err.code, "SORT_001");

		// ascending type wins over multiple collections
		let err = validate(&sort_args![["a"], ["b"]], &"ASC".into_value()).unwrap_err();
		assert_eq!(err.code, "SORT_002");

		// length mismatch wins over multiple collections
		let err = validate(&sort_args![["a"], ["b"]], &[true].into_value()).unwrap_err();
		assert_eq!(err.code, "SORT_003");
	}

	#[test]
	fn test_resolves_ascending() {
		assert_eq!(validate(&sort_args!["a"], &Value::Undefined).unwrap(), Ascending::Unset);
		assert_eq!(validate(&sort_args!["a"], &false.into_value()).unwrap(), Ascending::Uniform(false));
		assert_eq!(
			validate(&sort_args![["a", "b"], col("c")], &[1, 0, 7].into_value()).unwrap(),
			Ascending::PerKey(vec![true, false, true])
		);
	}
}
