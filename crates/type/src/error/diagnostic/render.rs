// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut output = String::new();
		Self::render(&mut output, diagnostic, 0);
		output
	}

	fn render(output: &mut String, diagnostic: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(output, "{indent}Error {}", diagnostic.code);
		let _ = writeln!(output, "{indent}  {}", diagnostic.message);

		if let Some(label) = &diagnostic.label {
			let _ = writeln!(output, "{indent}  = {label}");
		}

		if let Some(help) = &diagnostic.help {
			let _ = writeln!(output, "{indent}  help: {help}");
		}

		for note in &diagnostic.notes {
			let _ = writeln!(output, "{indent}  note: {note}");
		}

		if let Some(cause) = &diagnostic.cause {
			let _ = writeln!(output, "{indent}  caused by:");
			Self::render(output, cause, depth + 1);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_includes_code_message_and_help() {
		let diagnostic = Diagnostic {
			code: "FUNCTION_002".to_string(),
			message: "Function char_count expects 1 arguments, got 2".to_string(),
			label: Some("wrong number of arguments".to_string()),
			help: Some("Provide exactly 1 arguments to function char_count".to_string()),
			notes: vec!["argument 2 is unexpected".to_string()],
			cause: None,
		};

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.starts_with("Error FUNCTION_002\n"));
		assert!(out.contains("expects 1 arguments, got 2"));
		assert!(out.contains("help: Provide exactly 1"));
		assert!(out.contains("note: argument 2 is unexpected"));
	}

	#[test]
	fn test_render_nested_cause() {
		let cause = Diagnostic {
			code: "INNER".to_string(),
			message: "inner".to_string(),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		};
		let diagnostic = Diagnostic {
			code: "OUTER".to_string(),
			message: "outer".to_string(),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		}
		.with_cause(cause);

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.contains("caused by:\n  Error INNER"));
	}
}
