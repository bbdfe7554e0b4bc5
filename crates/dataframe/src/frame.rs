// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_type::{Error, IntoDiagnostic, IntoValue, Row, Value, return_error};
use tracing::{debug, instrument};

use crate::{
	DataFrameError,
	lower::lower,
	plan::{LimitNode, LogicalPlan, RenameNode, SortNode},
	session::Session,
	sort::{SortArg, normalize},
};

/// A lazily evaluated query. Every transformation returns a new frame
/// wrapping the previous plan; the receiver stays usable.
#[derive(Clone, Debug)]
pub struct DataFrame {
	session: Session,
	plan: Arc<LogicalPlan>,
}

impl DataFrame {
	pub(crate) fn new(session: Session, plan: LogicalPlan) -> Self {
		Self {
			session,
			plan: Arc::new(plan),
		}
	}

	fn derive(&self, plan: LogicalPlan) -> Self {
		Self::new(self.session.clone(), plan)
	}

	/// Orders the frame by the given keys.
	///
	/// Each argument is a column name, a [`Column`](crate::Column), or one
	/// collection of those. `ascending` may be unset (`()`), a boolean, or a
	/// list with one boolean or integer per resolved key.
	#[instrument(name = "dataframe::sort", level = "debug", skip_all)]
	pub fn sort<I, A>(&self, args: I, ascending: impl IntoValue) -> crate::Result<DataFrame>
	where
		I: IntoIterator<Item = A>,
		A: Into<SortArg>,
	{
		let args: Vec<SortArg> = args.into_iter().map(Into::into).collect();
		let ascending: Value = ascending.into_value();

		let spec = normalize(args, &ascending)?;
		debug!(spec = %spec, "sort");

		Ok(self.derive(LogicalPlan::Sort(SortNode {
			input: self.plan.clone(),
			spec,
		})))
	}

	pub fn order_by<I, A>(&self, args: I) -> crate::Result<DataFrame>
	where
		I: IntoIterator<Item = A>,
		A: Into<SortArg>,
	{
		self.sort(args, ())
	}

	/// Renames the columns positionally.
	#[instrument(name = "dataframe::to_df", level = "debug", skip_all)]
	pub fn to_df<I, S>(&self, names: I) -> crate::Result<DataFrame>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let names: Vec<String> = names.into_iter().map(Into::into).collect();

		let Some(columns) = self.plan.columns() else {
			return_error!(DataFrameError::UnknownColumns.into_diagnostic());
		};
		if columns.len() != names.len() {
			return_error!(
				DataFrameError::ColumnCountMismatch {
					columns: columns.len(),
					names: names.len(),
				}
				.into_diagnostic()
			);
		}

		Ok(self.derive(LogicalPlan::Rename(RenameNode {
			input: self.plan.clone(),
			columns: names,
		})))
	}

	pub fn limit(&self, count: u64) -> DataFrame {
		self.derive(LogicalPlan::Limit(LimitNode {
			input: self.plan.clone(),
			count,
		}))
	}

	pub fn plan(&self) -> &LogicalPlan {
		&self.plan
	}

	pub fn columns(&self) -> Option<&[String]> {
		self.plan.columns()
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn sql(&self) -> crate::Result<String> {
		lower(&self.plan, self.session.config())
	}

	pub fn explain(&self) -> String {
		self.plan.to_string()
	}

	/// Lowers the plan and runs it on the session's executor.
	#[instrument(name = "dataframe::collect", level = "debug", skip_all)]
	pub fn collect(&self) -> crate::Result<Vec<Row>> {
		let Some(executor) = self.session.executor() else {
			return_error!(DataFrameError::NoExecutor.into_diagnostic());
		};

		let sql = self.sql()?;
		debug!(sql = %sql, "executing");

		let rows = executor.execute(&self.plan, &sql).map_err(|mut err: Error| {
			err.with_statement(sql.clone());
			err
		})?;

		debug!(rows = rows.len(), "collected");
		Ok(rows)
	}
}
