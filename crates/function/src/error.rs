// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{
	Type, TypeCategory,
	error::{Diagnostic, Error, IntoDiagnostic, diagnostic::function},
};

use crate::stage::StageMode;

pub type FunctionResult<T> = std::result::Result<T, FunctionError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
	#[error("Unknown function: {function}")]
	UnknownFunction {
		function: String,
	},

	#[error("Function {function} expects {expected} arguments, got {actual}")]
	ArityMismatch {
		function: String,
		expected: usize,
		actual: usize,
	},

	#[error("Function {function} argument {} must be {expected}, but {actual} was passed", .argument_index + 1)]
	InvalidArgumentCategory {
		function: String,
		argument_index: usize,
		expected: TypeCategory,
		actual: TypeCategory,
	},

	#[error("Function {function} argument {} has invalid type {actual}", .argument_index + 1)]
	InvalidArgumentType {
		function: String,
		argument_index: usize,
		expected: Vec<Type>,
		actual: Type,
	},

	#[error("Function {function} cannot {operation} while in stage {stage}")]
	StageViolation {
		function: String,
		operation: &'static str,
		stage: StageMode,
	},

	#[error("Function {function} received a partial aggregate of type {actual}")]
	InvalidPartial {
		function: String,
		actual: Type,
	},

	#[error("Function {function} was used before it was initialized")]
	NotInitialized {
		function: String,
	},

	#[error("Function {function} was already initialized in stage {stage}")]
	AlreadyInitialized {
		function: String,
		stage: StageMode,
	},
}

impl IntoDiagnostic for FunctionError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			FunctionError::UnknownFunction {
				function,
			} => function::unknown_function(&function),
			FunctionError::ArityMismatch {
				function,
				expected,
				actual,
			} => function::arity_mismatch(&function, expected, actual),
			FunctionError::InvalidArgumentCategory {
				function,
				argument_index,
				expected,
				actual,
			} => function::invalid_argument_category(&function, argument_index, expected, actual),
			FunctionError::InvalidArgumentType {
				function,
				argument_index,
				expected,
				actual,
			} => function::invalid_argument_type(&function, argument_index, expected, actual),
			FunctionError::StageViolation {
				function,
				operation,
				stage,
			} => function::stage_violation(&function, operation, &stage.to_string()),
			FunctionError::InvalidPartial {
				function,
				actual,
			} => function::invalid_partial(&function, actual),
			FunctionError::NotInitialized {
				function,
			} => function::not_initialized(&function),
			FunctionError::AlreadyInitialized {
				function,
				stage,
			} => function::already_initialized(&function, &stage.to_string()),
		}
	}
}

impl From<FunctionError> for Error {
	fn from(err: FunctionError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Rejects any call that does not carry exactly one argument.
pub(crate) fn expect_single<T>(function: &str, args: &[T]) -> FunctionResult<()> {
	if args.len() != 1 {
		return Err(FunctionError::ArityMismatch {
			function: function.to_string(),
			expected: 1,
			actual: args.len(),
		});
	}
	Ok(())
}

/// Rejects a single argument whose type is not a primitive.
pub(crate) fn expect_primitive(function: &str, argument_index: usize, ty: &Type) -> FunctionResult<()> {
	if !ty.is_primitive() {
		return Err(FunctionError::InvalidArgumentCategory {
			function: function.to_string(),
			argument_index,
			expected: TypeCategory::Primitive,
			actual: ty.category(),
		});
	}
	Ok(())
}
