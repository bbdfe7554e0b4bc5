// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_dataframe::{DataFrame, Session};
use reifydb_testing::{MemoryExecutor, init_tracing};
use reifydb_type::Row;

/// Every combination of `a` and `b` in `1..=3`, in insertion order.
pub const GRID: [[i64; 2]; 9] = [[1, 1], [1, 2], [1, 3], [2, 1], [2, 2], [2, 3], [3, 1], [3, 2], [3, 3]];

pub fn session() -> Session {
	init_tracing();
	Session::builder().with_executor(MemoryExecutor::new()).build()
}

/// The grid as a frame with columns `a` and `b`.
pub fn grid() -> reifydb_type::Result<DataFrame> {
	frame(GRID)
}

pub fn frame(rows: impl IntoIterator<Item = [i64; 2]>) -> reifydb_type::Result<DataFrame> {
	session().create_dataframe(rows)?.to_df(["a", "b"])
}

/// Reads `(a, b)` from every row; `None` if any row is not a pair of ints.
pub fn pairs(rows: &[Row]) -> Option<Vec<(i64, i64)>> {
	rows.iter().map(|row| Some((row.get_int(0)?, row.get_int(1)?))).collect()
}
