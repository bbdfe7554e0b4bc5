// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::plan::{LimitNode, LogicalPlan, RenameNode, SortNode, TableNode, ValuesNode};

impl Display for LogicalPlan {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut output = String::new();
		render_logical_plan_inner(self, "", true, &mut output);
		f.write_str(&output)
	}
}

fn render_logical_plan_inner(plan: &LogicalPlan, prefix: &str, is_last: bool, output: &mut String) {
	let branch = if is_last {
		"└──"
	} else {
		"├──"
	};
	let child_prefix = format!(
		"{}{}",
		prefix,
		if is_last {
			"    "
		} else {
			"│   "
		}
	);

	match plan {
		LogicalPlan::Values(ValuesNode {
			columns,
			rows,
		}) => {
			output.push_str(&format!(
				"{}{} Values [{}] rows: {}\n",
				prefix,
				branch,
				columns.join(", "),
				rows.len()
			));
		}
		LogicalPlan::Table(TableNode {
			name,
		}) => {
			output.push_str(&format!("{}{} Table {}\n", prefix, branch, name));
		}
		LogicalPlan::Rename(RenameNode {
			input,
			columns,
		}) => {
			output.push_str(&format!("{}{} Rename [{}]\n", prefix, branch, columns.join(", ")));
			render_logical_plan_inner(input, &child_prefix, true, output);
		}
		LogicalPlan::Sort(SortNode {
			input,
			spec,
		}) => {
			output.push_str(&format!("{}{} Sort\n", prefix, branch));
			for key in spec {
				output.push_str(&format!("{}├── by: {}\n", child_prefix, key));
			}
			render_logical_plan_inner(input, &child_prefix, true, output);
		}
		LogicalPlan::Limit(LimitNode {
			input,
			count,
		}) => {
			output.push_str(&format!("{}{} Limit {}\n", prefix, branch, count));
			render_logical_plan_inner(input, &child_prefix, true, output);
		}
	}
}
