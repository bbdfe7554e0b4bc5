// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
mod row;
pub mod value;

pub use error::{
	Error,
	diagnostic::{Diagnostic, IntoDiagnostic},
};
pub use row::Row;
pub use value::{IntoValue, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
