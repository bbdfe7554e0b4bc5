// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod column;
pub mod config;
mod error;
pub mod executor;
mod frame;
pub mod lower;
pub mod plan;
mod session;
pub mod sort;

pub use column::{BinaryOp, Column, Expr, NullOrder, SortDirection, SortOrder, col, lit};
pub use config::{IdentifierCase, SessionConfig};
pub use error::DataFrameError;
pub use executor::Executor;
pub use frame::DataFrame;
pub use plan::LogicalPlan;
pub use reifydb_type::{Error, IntoValue, Result, Row, Value};
pub use session::{Session, SessionBuilder};
pub use sort::{Ascending, SortArg, SortKey, SortSpec};
