// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{GetType, Type, Value};
use tracing::{instrument, trace};

use crate::{
	AggregateEvaluator, AggregateFunction, AggregationBuffer,
	error::{FunctionError, FunctionResult, expect_primitive, expect_single},
	stage::StageMode,
};

pub const NAME: &str = "char_count";

/// Sums the character lengths of a text column.
pub struct CharCount;

impl CharCount {
	pub fn new() -> Self {
		Self
	}
}

impl Default for CharCount {
	fn default() -> Self {
		Self::new()
	}
}

impl AggregateFunction for CharCount {
	fn name(&self) -> &str {
		NAME
	}

	#[instrument(name = "function::char_count::resolve", level = "debug", skip(self))]
	fn resolve(&self, args: &[Type]) -> FunctionResult<Box<dyn AggregateEvaluator>> {
		expect_single(NAME, args)?;
		expect_primitive(NAME, 0, &args[0])?;

		if args[0] != Type::Utf8 {
			return Err(FunctionError::InvalidArgumentType {
				function: NAME.to_string(),
				argument_index: 0,
				expected: vec![Type::Utf8],
				actual: args[0].clone(),
			});
		}

		Ok(Box::new(CharCountEvaluator::new()))
	}
}

/// One stage of `char_count`. The stage is fixed by `init` and gates every other operation.
pub struct CharCountEvaluator {
	mode: Option<StageMode>,
}

impl CharCountEvaluator {
	pub fn new() -> Self {
		Self {
			mode: None,
		}
	}

	fn initialized(&self) -> FunctionResult<StageMode> {
		self.mode.ok_or_else(|| FunctionError::NotInitialized {
			function: NAME.to_string(),
		})
	}

	fn require(&self, operation: &'static str, legal: fn(StageMode) -> bool) -> FunctionResult<()> {
		let mode = self.initialized()?;
		if !legal(mode) {
			return Err(FunctionError::StageViolation {
				function: NAME.to_string(),
				operation,
				stage: mode,
			});
		}
		Ok(())
	}
}

impl Default for CharCountEvaluator {
	fn default() -> Self {
		Self::new()
	}
}

fn char_length(value: &Value) -> i64 {
	let count = match value.as_utf8() {
		Some(s) => s.chars().count(),
		None => value.to_string().chars().count(),
	};
	count as i64
}

impl AggregateEvaluator for CharCountEvaluator {
	#[instrument(name = "function::char_count::init", level = "debug", skip(self))]
	fn init(&mut self, mode: StageMode, args: &[Type]) -> FunctionResult<Type> {
		if let Some(stage) = self.mode {
			return Err(FunctionError::AlreadyInitialized {
				function: NAME.to_string(),
				stage,
			});
		}

		expect_single(NAME, args)?;
		expect_primitive(NAME, 0, &args[0])?;

		let input = &args[0];
		let (accepted, expected) = if mode.consumes_raw() {
			(*input == String::get_type(), vec![String::get_type()])
		} else {
			(input.is_integer(), vec![i32::get_type(), i64::get_type()])
		};

		if !accepted {
			return Err(FunctionError::InvalidArgumentType {
				function: NAME.to_string(),
				argument_index: 0,
				expected,
				actual: input.clone(),
			});
		}

		self.mode = Some(mode);
		Ok(i64::get_type())
	}

	fn mode(&self) -> Option<StageMode> {
		self.mode
	}

	fn new_buffer(&self) -> FunctionResult<AggregationBuffer> {
		self.initialized()?;
		Ok(AggregationBuffer::new())
	}

	fn reset(&self, buffer: &mut AggregationBuffer) -> FunctionResult<()> {
		self.initialized()?;
		buffer.clear();
		Ok(())
	}

	fn iterate(&self, buffer: &mut AggregationBuffer, args: &[Value]) -> FunctionResult<()> {
		self.require("iterate", StageMode::consumes_raw)?;
		expect_single(NAME, args)?;

		if args[0].is_undefined() {
			trace!(function = NAME, "skipping undefined value");
			return Ok(());
		}

		let length = char_length(&args[0]);
		trace!(function = NAME, length, "iterate");
		buffer.add(length);
		Ok(())
	}

	fn merge(&self, buffer: &mut AggregationBuffer, partial: &Value) -> FunctionResult<()> {
		self.require("merge", StageMode::consumes_partial)?;

		if partial.is_undefined() {
			return Ok(());
		}

		match partial.as_int8() {
			Some(sum) if sum >= 0 => {
				trace!(function = NAME, sum, "merge");
				buffer.add(sum);
				Ok(())
			}
			_ => Err(FunctionError::InvalidPartial {
				function: NAME.to_string(),
				actual: partial.get_type(),
			}),
		}
	}

	fn terminate_partial(&self, buffer: &AggregationBuffer) -> FunctionResult<Value> {
		self.require("terminate_partial", StageMode::emits_partial)?;
		Ok(Value::int8(buffer.sum()))
	}

	fn terminate(&self, buffer: &AggregationBuffer) -> FunctionResult<Value> {
		self.require("terminate", StageMode::emits_final)?;
		Ok(Value::int8(buffer.sum()))
	}

	fn display(&self, args: &[String]) -> String {
		format!("{NAME}({})", args.join(", "))
	}
}
