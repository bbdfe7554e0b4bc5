// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Debug, Formatter},
	sync::Arc,
};

use reifydb_type::{IntoDiagnostic, IntoValue, Value, return_error};
use tracing::{debug, instrument};

use crate::{
	DataFrameError,
	config::SessionConfig,
	executor::Executor,
	frame::DataFrame,
	plan::{LogicalPlan, TableNode, ValuesNode},
};

/// Entry point for building DataFrames. Cheap to clone; all clones share the
/// same configuration and executor.
#[derive(Clone)]
pub struct Session(Arc<SessionInner>);

struct SessionInner {
	config: SessionConfig,
	executor: Option<Arc<dyn Executor>>,
}

impl Session {
	pub fn builder() -> SessionBuilder {
		SessionBuilder::new()
	}

	pub fn config(&self) -> &SessionConfig {
		&self.0.config
	}

	pub(crate) fn executor(&self) -> Option<&Arc<dyn Executor>> {
		self.0.executor.as_ref()
	}

	/// Creates a DataFrame over inline rows. Columns are named `_1`, `_2`, ...
	#[instrument(name = "dataframe::session::create_dataframe", level = "debug", skip_all)]
	pub fn create_dataframe<R, V>(&self, rows: impl IntoIterator<Item = R>) -> crate::Result<DataFrame>
	where
		R: IntoIterator<Item = V>,
		V: IntoValue,
	{
		let rows: Vec<Vec<Value>> =
			rows.into_iter().map(|row| row.into_iter().map(IntoValue::into_value).collect()).collect();

		let Some(first) = rows.first() else {
			return_error!(DataFrameError::EmptyValues.into_diagnostic());
		};
		let expected = first.len();

		for (idx, row) in rows.iter().enumerate() {
			if row.len() != expected {
				return_error!(
					DataFrameError::RowArityMismatch {
						row: idx,
						found: row.len(),
						expected,
					}
					.into_diagnostic()
				);
			}
		}

		let columns = (1..=expected).map(|idx| format!("_{idx}")).collect();
		debug!(rows = rows.len(), columns = expected, "created inline dataframe");

		Ok(DataFrame::new(
			self.clone(),
			LogicalPlan::Values(ValuesNode {
				columns,
				rows,
			}),
		))
	}

	pub fn table(&self, name: impl Into<String>) -> DataFrame {
		DataFrame::new(
			self.clone(),
			LogicalPlan::Table(TableNode {
				name: name.into(),
			}),
		)
	}
}

impl Default for Session {
	fn default() -> Self {
		SessionBuilder::new().build()
	}
}

impl Debug for Session {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("config", &self.0.config)
			.field("executor", &self.0.executor.is_some())
			.finish()
	}
}

pub struct SessionBuilder {
	config: SessionConfig,
	executor: Option<Arc<dyn Executor>>,
}

impl SessionBuilder {
	pub fn new() -> Self {
		Self {
			config: SessionConfig::default(),
			executor: None,
		}
	}

	pub fn with_config(mut self, config: SessionConfig) -> Self {
		self.config = config;
		self
	}

	/// Adjusts the current configuration in place.
	pub fn configure<F>(mut self, configurator: F) -> Self
	where
		F: FnOnce(SessionConfig) -> SessionConfig,
	{
		self.config = configurator(self.config);
		self
	}

	pub fn with_executor<E>(mut self, executor: E) -> Self
	where
		E: Executor + 'static,
	{
		self.executor = Some(Arc::new(executor));
		self
	}

	pub fn with_shared_executor(mut self, executor: Arc<dyn Executor>) -> Self {
		self.executor = Some(executor);
		self
	}

	pub fn build(self) -> Session {
		Session(Arc::new(SessionInner {
			config: self.config,
			executor: self.executor,
		}))
	}
}

impl Default for SessionBuilder {
	fn default() -> Self {
		Self::new()
	}
}
