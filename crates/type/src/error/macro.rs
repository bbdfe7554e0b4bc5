// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an `Error`.
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

/// Returns early with an `Err` carrying the diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::Error($diagnostic))
	};
}

/// Builds an `Err` carrying the diagnostic.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::Error($diagnostic))
	};
}
