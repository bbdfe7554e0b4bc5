// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use crate::Value;

impl Value {
	/// Total order over values. Numbers compare numerically across Int8 and
	/// Float8; values of different kinds order by kind; Undefined sorts
	/// above every defined value.
	pub fn compare(&self, other: &Value) -> Ordering {
		match (self, other) {
			(Value::Undefined, Value::Undefined) => Ordering::Equal,
			(Value::Boolean(l), Value::Boolean(r)) => l.cmp(r),
			(Value::Int8(l), Value::Int8(r)) => l.cmp(r),
			(Value::Float8(l), Value::Float8(r)) => l.partial_cmp(r).unwrap_or_else(|| l.total_cmp(r)),
			(Value::Int8(l), Value::Float8(r)) => cmp_int_float(*l, *r),
			(Value::Float8(l), Value::Int8(r)) => cmp_int_float(*r, *l).reverse(),
			(Value::Utf8(l), Value::Utf8(r)) => l.cmp(r),
			(Value::List(l), Value::List(r)) => {
				for (lv, rv) in l.iter().zip(r.iter()) {
					let ord = lv.compare(rv);
					if ord != Ordering::Equal {
						return ord;
					}
				}
				l.len().cmp(&r.len())
			}
			(left, right) => left.get_type().rank().cmp(&right.get_type().rank()),
		}
	}
}

// 2^63; every i64 lies in [-TWO_63, TWO_63)
const TWO_63: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer against a float, without rounding the
/// integer. NaN orders like `f64::total_cmp`: above every number when
/// positive, below when negative.
#[inline]
fn cmp_int_float(i: i64, f: f64) -> Ordering {
	if f.is_nan() {
		return if f.is_sign_negative() {
			Ordering::Greater
		} else {
			Ordering::Less
		};
	}
	if f >= TWO_63 {
		return Ordering::Less;
	}
	if f < -TWO_63 {
		return Ordering::Greater;
	}

	let whole = f.trunc();
	// in range, so the cast is exact
	match i.cmp(&(whole as i64)) {
		Ordering::Equal => whole.partial_cmp(&f).unwrap_or(Ordering::Equal),
		ord => ord,
	}
}
