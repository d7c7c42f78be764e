// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{Decimal, Type, Value};
use tracing::{instrument, warn};

use crate::{
	ScalarFunction,
	config::GradeConfig,
	error::{FunctionResult, expect_primitive, expect_single},
};

pub const NAME: &str = "salary_grade";

/// Buckets a salary into one of three grade labels.
///
/// Integer, decimal and integer-encoded text inputs are graded. Any other input, or text that
/// does not parse, degrades to the configured error label instead of failing the query.
pub struct SalaryGrade {
	config: GradeConfig,
	warned: bool,
}

/// The input representations `salary_grade` knows how to grade.
#[derive(Debug, PartialEq)]
enum SalaryInput<'a> {
	Undefined,
	Integer(i64),
	Decimal(&'a Decimal),
	Text(&'a str),
	Unsupported(Type),
}

impl<'a> From<&'a Value> for SalaryInput<'a> {
	fn from(value: &'a Value) -> Self {
		match value {
			Value::Undefined => SalaryInput::Undefined,
			Value::Int4(v) => SalaryInput::Integer(*v as i64),
			Value::Int8(v) => SalaryInput::Integer(*v),
			Value::Decimal(v) => SalaryInput::Decimal(v),
			Value::Utf8(v) => SalaryInput::Text(v),
			other => SalaryInput::Unsupported(other.get_type()),
		}
	}
}

impl SalaryInput<'_> {
	fn as_f64(&self) -> Option<f64> {
		match self {
			SalaryInput::Integer(v) => Some(*v as f64),
			SalaryInput::Decimal(v) => v.to_f64(),
			// text holds a 4-byte integer, wider values do not parse
			SalaryInput::Text(v) => v.parse::<i32>().ok().map(f64::from),
			SalaryInput::Undefined | SalaryInput::Unsupported(_) => None,
		}
	}
}

impl SalaryGrade {
	pub fn new() -> Self {
		Self::with_config(GradeConfig::default())
	}

	pub fn with_config(config: GradeConfig) -> Self {
		Self {
			config,
			warned: false,
		}
	}

	fn degrade(&mut self, input: &SalaryInput<'_>) -> &str {
		if !self.warned {
			self.warned = true;
			warn!(function = NAME, input = ?input, "cannot grade input, returning error label");
		}
		&self.config.error_label
	}

	fn grade(&mut self, input: SalaryInput<'_>) -> String {
		if input == SalaryInput::Undefined {
			return self.config.null_label.clone();
		}

		match input.as_f64() {
			Some(value) => self.config.classify(value).to_string(),
			None => self.degrade(&input).to_string(),
		}
	}
}

impl Default for SalaryGrade {
	fn default() -> Self {
		Self::new()
	}
}

impl ScalarFunction for SalaryGrade {
	#[instrument(name = "function::salary_grade::initialize", level = "debug", skip(self))]
	fn initialize(&mut self, args: &[Type]) -> FunctionResult<Type> {
		expect_single(NAME, args)?;
		expect_primitive(NAME, 0, &args[0])?;
		Ok(Type::Utf8)
	}

	fn evaluate(&mut self, args: &[Value]) -> FunctionResult<Value> {
		expect_single(NAME, args)?;
		let input = SalaryInput::from(&args[0]);
		Ok(Value::utf8(self.grade(input)))
	}

	fn display(&self, args: &[String]) -> String {
		let arg = args.first().map(String::as_str).unwrap_or("salary");
		format!(
			"{NAME}({arg}): {} when {arg} <= {}; {} when {} < {arg} <= {}; {} when {arg} > {}",
			self.config.grade_a,
			self.config.a_max,
			self.config.grade_b,
			self.config.a_max,
			self.config.b_max,
			self.config.grade_c,
			self.config.b_max,
		)
	}
}
