// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod logging;
pub mod memory;

pub use logging::init_tracing;
pub use memory::MemoryExecutor;
