// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::Value;

pub trait IntoValue {
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl IntoValue for () {
	fn into_value(self) -> Value {
		Value::Undefined
	}
}

impl IntoValue for bool {
	fn into_value(self) -> Value {
		Value::Boolean(self)
	}
}

macro_rules! impl_into_int8 {
	($($t:ty),*) => {
		$(
			impl IntoValue for $t {
				fn into_value(self) -> Value {
					Value::Int8(i64::from(self))
				}
			}
		)*
	};
}

impl_into_int8!(i8, i16, i32, i64, u8, u16, u32);

impl IntoValue for f32 {
	fn into_value(self) -> Value {
		Value::Float8(f64::from(self))
	}
}

impl IntoValue for f64 {
	fn into_value(self) -> Value {
		Value::Float8(self)
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::Utf8(self.to_string())
	}
}

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::Utf8(self)
	}
}

impl IntoValue for &String {
	fn into_value(self) -> Value {
		Value::Utf8(self.clone())
	}
}

impl<T: IntoValue> IntoValue for Option<T> {
	fn into_value(self) -> Value {
		match self {
			Some(value) => value.into_value(),
			None => Value::Undefined,
		}
	}
}

impl<T: IntoValue> IntoValue for Vec<T> {
	fn into_value(self) -> Value {
		Value::List(self.into_iter().map(IntoValue::into_value).collect())
	}
}

impl<T: IntoValue, const N: usize> IntoValue for [T; N] {
	fn into_value(self) -> Value {
		Value::List(self.into_iter().map(IntoValue::into_value).collect())
	}
}

impl<T: IntoValue + Clone> IntoValue for &[T] {
	fn into_value(self) -> Value {
		Value::List(self.iter().cloned().map(IntoValue::into_value).collect())
	}
}
