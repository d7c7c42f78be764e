// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, value::r#type::Type};

/// Text could not be interpreted as a number of the target type
pub fn invalid_number_format(text: &str, target: Type) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_001".to_string(),
		message: format!("'{}' is not a valid {} number", text, target),
		label: Some("invalid number format".to_string()),
		help: Some("Use digits with an optional sign and decimal point".to_string()),
		notes: vec![],
		cause: None,
	}
}
