// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Log filter directive could not be parsed
pub fn invalid_filter(directive: &str, reason: String) -> Diagnostic {
	Diagnostic {
		code: "SUBSYSTEM_001".to_string(),
		message: format!("Invalid log filter '{}': {}", directive, reason),
		label: Some("unparseable filter directive".to_string()),
		help: Some("Use directives such as 'info' or 'strata_function=debug'".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A global subscriber is already installed
pub fn logging_init_failed(reason: String) -> Diagnostic {
	Diagnostic {
		code: "SUBSYSTEM_002".to_string(),
		message: format!("Failed to install tracing subscriber: {}", reason),
		label: None,
		help: Some("The tracing subscriber can only be installed once per process".to_string()),
		notes: vec![],
		cause: None,
	}
}
