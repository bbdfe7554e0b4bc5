// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use reifydb_type::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
	Add,
	Sub,
	Mul,
	Div,
}

impl BinaryOp {
	pub fn symbol(&self) -> &'static str {
		match self {
			BinaryOp::Add => "+",
			BinaryOp::Sub => "-",
			BinaryOp::Mul => "*",
			BinaryOp::Div => "/",
		}
	}
}

impl Display for BinaryOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.symbol())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
	Column(String),
	Literal(Value),
	Binary {
		op: BinaryOp,
		left: Box<Expr>,
		right: Box<Expr>,
	},
}

impl Display for Expr {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Expr::Column(name) => f.write_str(name),
			Expr::Literal(Value::Utf8(value)) => write!(f, "'{}'", value),
			Expr::Literal(value) => Display::fmt(value, f),
			Expr::Binary {
				op,
				left,
				right,
			} => write!(f, "({} {} {})", left, op, right),
		}
	}
}
