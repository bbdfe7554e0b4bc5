// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Add, Div, Mul, Sub},
};

use reifydb_type::IntoValue;

mod expr;
mod order;

pub use expr::{BinaryOp, Expr};
pub use order::{NullOrder, SortDirection, SortOrder};

/// A column expression, optionally carrying the ordering attached through
/// one of the `asc*` / `desc*` builders.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	expr: Expr,
	order: Option<SortOrder>,
}

impl Column {
	pub fn new(name: impl Into<String>) -> Self {
		Self::from_expr(Expr::Column(name.into()))
	}

	pub fn from_expr(expr: Expr) -> Self {
		Self {
			expr,
			order: None,
		}
	}

	pub fn expr(&self) -> &Expr {
		&self.expr
	}

	pub fn order(&self) -> Option<SortOrder> {
		self.order
	}

	pub fn into_parts(self) -> (Expr, Option<SortOrder>) {
		(self.expr, self.order)
	}

	pub fn asc(self) -> Self {
		self.ordered(SortDirection::Asc, None)
	}

	pub fn asc_nulls_first(self) -> Self {
		self.ordered(SortDirection::Asc, Some(NullOrder::NullsFirst))
	}

	pub fn asc_nulls_last(self) -> Self {
		self.ordered(SortDirection::Asc, Some(NullOrder::NullsLast))
	}

	pub fn desc(self) -> Self {
		self.ordered(SortDirection::Desc, None)
	}

	pub fn desc_nulls_first(self) -> Self {
		self.ordered(SortDirection::Desc, Some(NullOrder::NullsFirst))
	}

	pub fn desc_nulls_last(self) -> Self {
		self.ordered(SortDirection::Desc, Some(NullOrder::NullsLast))
	}

	fn ordered(self, direction: SortDirection, nulls: Option<NullOrder>) -> Self {
		Self {
			expr: self.expr,
			order: Some(SortOrder {
				direction,
				nulls,
			}),
		}
	}
}

/// Reference to a column by name.
pub fn col(name: impl Into<String>) -> Column {
	Column::new(name)
}

/// A literal value usable inside column expressions.
pub fn lit(value: impl IntoValue) -> Column {
	Column::from_expr(Expr::Literal(value.into_value()))
}

impl From<&str> for Column {
	fn from(name: &str) -> Self {
		Column::new(name)
	}
}

impl From<String> for Column {
	fn from(name: String) -> Self {
		Column::new(name)
	}
}

impl From<Expr> for Column {
	fn from(expr: Expr) -> Self {
		Column::from_expr(expr)
	}
}

impl Display for Column {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.expr, f)?;
		if let Some(order) = &self.order {
			write!(f, " {}", order)?;
		}
		Ok(())
	}
}

macro_rules! impl_binary_op {
	($trait:ident, $method:ident, $op:expr) => {
		impl $trait for Column {
			type Output = Column;

			fn $method(self, rhs: Column) -> Column {
				Column::from_expr(Expr::Binary {
					op: $op,
					left: Box::new(self.expr),
					right: Box::new(rhs.expr),
				})
			}
		}
	};
}

impl_binary_op!(Add, add, BinaryOp::Add);
impl_binary_op!(Sub, sub, BinaryOp::Sub);
impl_binary_op!(Mul, mul, BinaryOp::Mul);
impl_binary_op!(Div, div, BinaryOp::Div);

#[cfg(test)]
mod tests {
	use reifydb_type::Value;

	use super::*;

	#[test]
	fn test_default_has_no_order() {
		let column = col("a");
		assert_eq!(column.expr(), &Expr::Column("a".to_string()));
		assert_eq!(column.order(), None);
	}

	#[test]
	fn test_builders_attach_order() {
		assert_eq!(col("a").asc().order().unwrap().direction, SortDirection::Asc);
		assert_eq!(col("a").desc().order().unwrap().direction, SortDirection::Desc);

		let order = col("a").desc_nulls_first().order().unwrap();
		assert_eq!(order.direction, SortDirection::Desc);
		assert_eq!(order.nulls, Some(NullOrder::NullsFirst));

		let order = col("a").asc_nulls_last().order().unwrap();
		assert_eq!(order.direction, SortDirection::Asc);
		assert_eq!(order.nulls, Some(NullOrder::NullsLast));
	}

	#[test]
	fn test_builder_returns_new_column() {
		let base = col("a");
		let sorted = base.clone().desc();
		assert_eq!(base.order(), None);
		assert_eq!(sorted.expr(), base.expr());
	}

	#[test]
	fn test_arithmetic_drops_operand_order() {
		let sum = col("a").desc() + lit(1);
		assert_eq!(sum.order(), None);
		assert_eq!(
			sum.expr(),
			&Expr::Binary {
				op: BinaryOp::Add,
				left: Box::new(Expr::Column("a".to_string())),
				right: Box::new(Expr::Literal(Value::Int8(1))),
			}
		);
	}

	#[test]
	fn test_display() {
		assert_eq!(col("a").to_string(), "a");
		assert_eq!(col("a").desc().to_string(), "a DESC");
		assert_eq!((col("a") * col("b")).asc_nulls_first().to_string(), "(a * b) ASC NULLS FIRST");
	}
}
