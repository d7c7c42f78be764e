// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_function::{FunctionResult, ScalarFunction};
use strata_type::{Type, Value};

/// Evaluates a scalar function over a column.
pub struct ScalarHost {
	function: Box<dyn ScalarFunction>,
	output: Type,
}

impl ScalarHost {
	pub fn new(mut function: Box<dyn ScalarFunction>, args: &[Type]) -> FunctionResult<Self> {
		let output = function.initialize(args)?;
		Ok(Self {
			function,
			output,
		})
	}

	pub fn output(&self) -> &Type {
		&self.output
	}

	pub fn evaluate(&mut self, value: Value) -> FunctionResult<Value> {
		self.function.evaluate(&[value])
	}

	pub fn evaluate_column(&mut self, column: impl IntoIterator<Item = Value>) -> FunctionResult<Vec<Value>> {
		column.into_iter().map(|value| self.evaluate(value)).collect()
	}
}
