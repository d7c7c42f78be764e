// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::diagnostic::Diagnostic,
	value::r#type::{Type, TypeCategory},
};

/// Function is not recognized or does not exist
pub fn unknown_function(function: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_001".to_string(),
		message: format!("Unknown function: {}", function),
		label: Some("unknown function".to_string()),
		help: Some("Check the function name and available functions".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Function called with wrong number of arguments
pub fn arity_mismatch(function: &str, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		message: format!("Function {} expects {} arguments, got {}", function, expected, actual),
		label: Some("wrong number of arguments".to_string()),
		help: Some(format!("Provide exactly {} arguments to function {}", expected, function)),
		notes: vec![],
		cause: None,
	}
}

/// Argument belongs to the wrong category (e.g. a list where a primitive is required)
pub fn invalid_argument_category(
	function: &str,
	index: usize,
	expected: TypeCategory,
	actual: TypeCategory,
) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_003".to_string(),
		message: format!(
			"Function {} argument {} must be {}, but {} was passed",
			function,
			index + 1,
			expected,
			actual
		),
		label: Some("invalid argument category".to_string()),
		help: Some(format!("Provide a {} argument", expected)),
		notes: vec![],
		cause: None,
	}
}

/// Argument has invalid type for function
pub fn invalid_argument_type(function: &str, index: usize, expected_one_of: Vec<Type>, actual: Type) -> Diagnostic {
	let expected_types = expected_one_of.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ");

	Diagnostic {
		code: "FUNCTION_004".to_string(),
		message: format!(
			"Function {} argument {} must be {}, but {} was passed",
			function,
			index + 1,
			expected_types,
			actual
		),
		label: Some("invalid argument type".to_string()),
		help: Some(format!("Provide an argument of type: {}", expected_types)),
		notes: vec![],
		cause: None,
	}
}

/// Operation invoked in a stage that does not permit it
pub fn stage_violation(function: &str, operation: &str, stage: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_005".to_string(),
		message: format!("Function {} cannot {} while in stage {}", function, operation, stage),
		label: Some("operation not permitted in this stage".to_string()),
		help: None,
		notes: vec![
			"iterate is only legal in stages that consume raw rows".to_string(),
			"merge is only legal in stages that consume partial aggregates".to_string(),
		],
		cause: None,
	}
}

/// Partial aggregate handed to merge has an unexpected type
pub fn invalid_partial(function: &str, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_006".to_string(),
		message: format!("Function {} received a partial aggregate of type {}", function, actual),
		label: Some("invalid partial aggregate".to_string()),
		help: Some("Partial aggregates must be the integers produced by terminate_partial".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Evaluator used before its stage was initialized
pub fn not_initialized(function: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_007".to_string(),
		message: format!("Function {} was used before it was initialized", function),
		label: Some("evaluator not initialized".to_string()),
		help: Some("This is an internal error - please report this issue".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Evaluator initialized a second time
pub fn already_initialized(function: &str, stage: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_008".to_string(),
		message: format!("Function {} was already initialized in stage {}", function, stage),
		label: Some("evaluator already initialized".to_string()),
		help: Some("Create a new evaluator for every stage".to_string()),
		notes: vec![],
		cause: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_argument_positions_are_one_based() {
		let diagnostic = invalid_argument_category("char_count", 0, TypeCategory::Primitive, TypeCategory::List);
		assert_eq!(diagnostic.code, "FUNCTION_003");
		assert_eq!(diagnostic.message, "Function char_count argument 1 must be PRIMITIVE, but LIST was passed");
	}

	#[test]
	fn test_invalid_argument_type_lists_expected() {
		let diagnostic = invalid_argument_type("char_count", 0, vec![Type::Utf8], Type::Int4);
		assert_eq!(diagnostic.message, "Function char_count argument 1 must be Utf8, but Int4 was passed");
	}
}
