// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::error::diagnostic::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		render_inner(d, 0, &mut output);
		output
	}
}

fn render_inner(d: &Diagnostic, depth: usize, output: &mut String) {
	let indent = "  ".repeat(depth);

	let _ = writeln!(output, "{indent}error[{}]: {}", d.code, d.message);

	if let Some(statement) = &d.statement {
		let _ = writeln!(output, "{indent}  --> {statement}");
	}

	if let Some(fragment) = &d.fragment {
		let _ = writeln!(output, "{indent}   │ {fragment}");
		let _ = writeln!(output, "{indent}   │ {}", "^".repeat(fragment.chars().count().max(1)));
		if let Some(label) = &d.label {
			let _ = writeln!(output, "{indent}   = {label}");
		}
	} else if let Some(label) = &d.label {
		let _ = writeln!(output, "{indent}   = {label}");
	}

	if let Some(help) = &d.help {
		let _ = writeln!(output, "\n{indent}help: {help}");
	}

	for note in &d.notes {
		let _ = writeln!(output, "{indent}note: {note}");
	}

	if let Some(cause) = &d.cause {
		let _ = writeln!(output, "\n{indent}caused by:");
		render_inner(cause, depth + 1, output);
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_full() {
		let mut diagnostic = Diagnostic::new("SORT_003", "length mismatch");
		diagnostic.fragment = Some("[true]".to_string());
		diagnostic.label = Some("one entry per key".to_string());
		diagnostic.help = Some("pass as many flags as keys".to_string());
		diagnostic.notes = vec!["first note".to_string()];

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.starts_with("error[SORT_003]: length mismatch\n"));
		assert!(out.contains("│ [true]"));
		assert!(out.contains("│ ^^^^^^"));
		assert!(out.contains("= one entry per key"));
		assert!(out.contains("help: pass as many flags as keys"));
		assert!(out.contains("note: first note"));
	}

	#[test]
	fn test_render_cause() {
		let mut outer = Diagnostic::new("OUTER_001", "outer");
		outer.cause = Some(Box::new(Diagnostic::new("INNER_001", "inner")));
		let out = DefaultRenderer::render_string(&outer);
		assert!(out.contains("caused by:"));
		assert!(out.contains("  error[INNER_001]: inner"));
	}
}
