// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::{IntoDiagnostic, return_error};

use crate::{
	DataFrameError,
	config::{IdentifierCase, SessionConfig},
};

/// Resolves a user supplied name to the identifier the engine sees.
///
/// A name wrapped in double quotes is taken verbatim (with `""` unescaped);
/// any other name is case-folded.
pub fn normalize_identifier(name: &str, case: IdentifierCase) -> crate::Result<String> {
	if let Some(inner) = quoted_inner(name) {
		if inner.is_empty() || has_unescaped_quote(inner) {
			return_error!(invalid(name));
		}
		return Ok(inner.replace("\"\"", "\""));
	}

	if name.is_empty() || name.contains('"') {
		return_error!(invalid(name));
	}

	Ok(case.apply(name))
}

/// Renders a name as it appears in the generated SQL.
///
/// With quoting disabled a name is emitted bare only if it is a plain
/// identifier (`[A-Za-z_][A-Za-z0-9_$]*`) and its case survives the engine's
/// folding; anything else is quoted.
pub fn render_identifier(name: &str, config: &SessionConfig) -> crate::Result<String> {
	let normalized = normalize_identifier(name, config.identifier_case)?;
	let bare = !config.quote_identifiers
		&& quoted_inner(name).is_none()
		&& config.identifier_case != IdentifierCase::Preserve
		&& is_plain(&normalized);

	if bare {
		Ok(normalized)
	} else {
		Ok(format!("\"{}\"", normalized.replace('"', "\"\"")))
	}
}

fn is_plain(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
		_ => return false,
	}
	chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}

/// Renders a possibly qualified object name (`db.schema.table`), treating
/// dots inside double quotes as part of the name.
pub fn render_qualified(name: &str, config: &SessionConfig) -> crate::Result<String> {
	let parts = split_qualified(name);
	let mut rendered = Vec::with_capacity(parts.len());
	for part in parts {
		rendered.push(render_identifier(part, config)?);
	}
	Ok(rendered.join("."))
}

/// Normalizes every part of a possibly qualified object name.
pub fn normalize_qualified(name: &str, case: IdentifierCase) -> crate::Result<Vec<String>> {
	split_qualified(name).into_iter().map(|part| normalize_identifier(part, case)).collect()
}

fn split_qualified(name: &str) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut in_quotes = false;
	let mut start = 0;
	for (idx, ch) in name.char_indices() {
		match ch {
			'"' => in_quotes = !in_quotes,
			'.' if !in_quotes => {
				parts.push(&name[start..idx]);
				start = idx + 1;
			}
			_ => {}
		}
	}
	parts.push(&name[start..]);
	parts
}

fn quoted_inner(name: &str) -> Option<&str> {
	if name.len() >= 2 && name.starts_with('"') && name.ends_with('"') {
		Some(&name[1..name.len() - 1])
	} else {
		None
	}
}

fn has_unescaped_quote(inner: &str) -> bool {
	let mut chars = inner.chars().peekable();
	while let Some(ch) = chars.next() {
		if ch == '"' {
			if chars.peek() == Some(&'"') {
				chars.next();
			} else {
				return true;
			}
		}
	}
	false
}

fn invalid(name: &str) -> reifydb_type::Diagnostic {
	DataFrameError::InvalidIdentifier {
		name: name.to_string(),
	}
	.into_diagnostic()
}
