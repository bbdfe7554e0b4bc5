// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_type::Value;

use crate::sort::SortSpec;

mod explain;

/// Immutable logical query step. Every transformation wraps its input in a
/// new node; existing nodes are never modified.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicalPlan {
	Values(ValuesNode),
	Table(TableNode),
	Rename(RenameNode),
	Sort(SortNode),
	Limit(LimitNode),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValuesNode {
	pub columns: Vec<String>,
	pub rows: Vec<Vec<Value>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableNode {
	pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenameNode {
	pub input: Arc<LogicalPlan>,
	pub columns: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SortNode {
	pub input: Arc<LogicalPlan>,
	pub spec: SortSpec,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LimitNode {
	pub input: Arc<LogicalPlan>,
	pub count: u64,
}

impl LogicalPlan {
	/// Output column names, when they can be derived without the engine.
	pub fn columns(&self) -> Option<&[String]> {
		match self {
			LogicalPlan::Values(node) => Some(&node.columns),
			LogicalPlan::Table(_) => None,
			LogicalPlan::Rename(node) => Some(&node.columns),
			LogicalPlan::Sort(node) => node.input.columns(),
			LogicalPlan::Limit(node) => node.input.columns(),
		}
	}

	pub fn input(&self) -> Option<&Arc<LogicalPlan>> {
		match self {
			LogicalPlan::Values(_) | LogicalPlan::Table(_) => None,
			LogicalPlan::Rename(node) => Some(&node.input),
			LogicalPlan::Sort(node) => Some(&node.input),
			LogicalPlan::Limit(node) => Some(&node.input),
		}
	}
}
