// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Configuration document could not be deserialized
pub fn invalid_config(reason: String) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		message: format!("Invalid function configuration: {}", reason),
		label: Some("malformed configuration".to_string()),
		help: Some("Check the configuration document against the expected schema".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Configuration parsed but violates a constraint
pub fn constraint_violation(setting: &str, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_002".to_string(),
		message: format!("Setting {} is invalid: {}", setting, reason),
		label: Some("invalid setting".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
