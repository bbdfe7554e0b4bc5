// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::Value;
use tracing::{instrument, trace};

use crate::{
	column::{Column, SortDirection},
	sort::{Ascending, SortArg, SortKey, SortSpec, validate},
};

/// Reduces the positional `sort` arguments and the `ascending` value to one
/// canonical, non-empty list of sort keys.
#[instrument(name = "dataframe::sort::normalize", level = "trace", skip_all)]
pub fn normalize(args: Vec<SortArg>, ascending: &Value) -> crate::Result<SortSpec> {
	let ascending = validate(&args, ascending)?;

	let keys: Vec<SortKey> = args
		.into_iter()
		.flat_map(SortArg::into_columns)
		.enumerate()
		.map(|(position, column)| resolve_key(column, &ascending, position))
		.collect();

	trace!(keys = keys.len(), ?ascending, "normalized sort keys");
	SortSpec::new(keys)
}

fn resolve_key(column: Column, ascending: &Ascending, position: usize) -> SortKey {
	let (expr, order) = column.into_parts();
	let own = order.map(|order| order.direction);

	let direction = match ascending {
		Ascending::Unset => own.unwrap_or_default(),
		Ascending::Uniform(ascending) => own.unwrap_or(SortDirection::from_ascending(*ascending)),
		Ascending::PerKey(flags) => {
			flags.get(position).copied().map(SortDirection::from_ascending).or(own).unwrap_or_default()
		}
	};

	SortKey {
		expr,
		direction,
		nulls: order.and_then(|order| order.nulls),
	}
}
