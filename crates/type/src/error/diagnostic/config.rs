// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn invalid_configuration(detail: String) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		statement: None,
		message: format!("invalid session configuration: {}", detail),
		fragment: None,
		label: None,
		help: Some("Check the configuration keys and their value types".to_string()),
		notes: vec![
			"Recognised keys are identifier_case and quote_identifiers".to_string(),
			"Missing keys fall back to their defaults".to_string(),
		],
		cause: None,
	}
}
