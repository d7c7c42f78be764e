// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_function::{FunctionResult, GeneratorFunction};
use strata_type::{Type, Value};

/// Drives a generator through initialize, one `process` per input row, and `close`.
pub struct GeneratorHost {
	function: Box<dyn GeneratorFunction>,
	schema: Type,
}

impl GeneratorHost {
	pub fn new(mut function: Box<dyn GeneratorFunction>, args: &[Type]) -> FunctionResult<Self> {
		let schema = function.initialize(args)?;
		Ok(Self {
			function,
			schema,
		})
	}

	pub fn schema(&self) -> &Type {
		&self.schema
	}

	/// Output column names, in schema order.
	pub fn columns(&self) -> Vec<&str> {
		self.schema.fields().iter().map(|field| field.name.as_str()).collect()
	}

	/// Runs every input row and closes the stream, returning all forwarded rows in order.
	pub fn run(&mut self, inputs: impl IntoIterator<Item = Value>) -> FunctionResult<Vec<Vec<Value>>> {
		let mut rows: Vec<Vec<Value>> = Vec::new();
		for input in inputs {
			self.function.process(&[input], &mut rows)?;
		}
		self.function.close(&mut rows)?;
		Ok(rows)
	}

	pub fn run_one(&mut self, input: impl Into<Value>) -> FunctionResult<Vec<Vec<Value>>> {
		self.run([input.into()])
	}
}
