// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use reifydb_dataframe::{IdentifierCase, NullOrder, SortDirection, SortSpec};
use reifydb_type::Value;

use crate::memory::{Frame, evaluate};

/// Stable multi-key sort. Without an explicit null order, NULLs sort as the
/// highest value: last for ASC, first for DESC.
pub(crate) fn sort(frame: Frame, spec: &SortSpec, case: IdentifierCase) -> reifydb_type::Result<Frame> {
	// evaluate every key once per row
	let mut keys: Vec<Vec<Value>> = Vec::with_capacity(frame.rows.len());
	for row in &frame.rows {
		let mut values = Vec::with_capacity(spec.len());
		for key in spec {
			values.push(evaluate(&key.expr, &frame.columns, row, case)?);
		}
		keys.push(values);
	}

	let mut indices: Vec<usize> = (0..frame.rows.len()).collect();
	indices.sort_by(|&a, &b| {
		for (position, key) in spec.iter().enumerate() {
			let ord = compare(&keys[a][position], &keys[b][position], key.direction, key.nulls);
			if ord != Ordering::Equal {
				return ord;
			}
		}
		Ordering::Equal
	});

	let Frame {
		columns,
		rows,
	} = frame;
	let mut rows: Vec<Option<Vec<Value>>> = rows.into_iter().map(Some).collect();
	let rows = indices.into_iter().filter_map(|idx| rows[idx].take()).collect();

	Ok(Frame {
		columns,
		rows,
	})
}

fn compare(left: &Value, right: &Value, direction: SortDirection, nulls: Option<NullOrder>) -> Ordering {
	let nulls = nulls.unwrap_or(match direction {
		SortDirection::Asc => NullOrder::NullsLast,
		SortDirection::Desc => NullOrder::NullsFirst,
	});

	match (left.is_undefined(), right.is_undefined()) {
		(true, true) => Ordering::Equal,
		(true, false) => match nulls {
			NullOrder::NullsFirst => Ordering::Less,
			NullOrder::NullsLast => Ordering::Greater,
		},
		(false, true) => match nulls {
			NullOrder::NullsFirst => Ordering::Greater,
			NullOrder::NullsLast => Ordering::Less,
		},
		(false, false) => match direction {
			SortDirection::Asc => left.compare(right),
			SortDirection::Desc => left.compare(right).reverse(),
		},
	}
}
