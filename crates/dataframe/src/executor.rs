// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::Row;

use crate::plan::LogicalPlan;

/// Runs a lowered statement against an engine and materializes the rows.
///
/// Implementations receive both the logical plan and the SQL generated from
/// it; a remote engine uses the text, an embedded one may interpret the plan.
pub trait Executor: Send + Sync {
	fn execute(&self, plan: &LogicalPlan, sql: &str) -> crate::Result<Vec<Row>>;
}
