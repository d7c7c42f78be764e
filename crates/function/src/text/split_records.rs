// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use strata_type::{Field, GetType, Type, Value};
use tracing::{debug, instrument, warn};

use crate::{
	Collector, GeneratorFunction,
	config::SplitConfig,
	error::{FunctionResult, expect_primitive, expect_single},
};

pub const NAME: &str = "split_records";

/// Expands `id:lower:upper;id:lower:upper;...` into one row per record.
///
/// Every row has exactly three text columns. Trailing empty fields are dropped before counting,
/// records left with fewer than three fields are skipped, and fields past the third are ignored.
pub struct SplitRecords {
	config: SplitConfig,
}

/// What became of one `;`-separated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome<'a> {
	Row([&'a str; 3]),
	Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
	Empty,
	TooFewFields {
		found: usize,
	},
}

/// Splits `line` into records and classifies each one, in input order.
pub fn parse_records<'a>(
	line: &'a str,
	record_delimiter: char,
	field_delimiter: char,
) -> impl Iterator<Item = RecordOutcome<'a>> + 'a {
	line.split(record_delimiter).map(move |record| parse_record(record, field_delimiter))
}

fn parse_record(record: &str, field_delimiter: char) -> RecordOutcome<'_> {
	let mut fields: Vec<&str> = record.split(field_delimiter).collect();
	// trailing empty fields do not count, "1:a:" has two fields and "::" has none
	while fields.last().is_some_and(|field| field.is_empty()) {
		fields.pop();
	}

	match fields.as_slice() {
		[] => RecordOutcome::Skip(SkipReason::Empty),
		[id, lower, upper, ..] => RecordOutcome::Row([*id, *lower, *upper]),
		short => RecordOutcome::Skip(SkipReason::TooFewFields {
			found: short.len(),
		}),
	}
}

impl SplitRecords {
	pub fn new() -> Self {
		Self::with_config(SplitConfig::default())
	}

	pub fn with_config(config: SplitConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn schema(&self) -> Type {
		Type::Struct(self.config.fields.iter().map(|name| Field::new(name.as_str(), String::get_type())).collect())
	}
}

impl Default for SplitRecords {
	fn default() -> Self {
		Self::new()
	}
}

impl GeneratorFunction for SplitRecords {
	#[instrument(name = "function::split_records::initialize", level = "debug", skip(self))]
	fn initialize(&mut self, args: &[Type]) -> FunctionResult<Type> {
		expect_single(NAME, args)?;
		expect_primitive(NAME, 0, &args[0])?;
		Ok(self.schema())
	}

	#[instrument(name = "function::split_records::process", level = "trace", skip(self, args, collector))]
	fn process(&mut self, args: &[Value], collector: &mut dyn Collector) -> FunctionResult<()> {
		expect_single(NAME, args)?;

		let line = match &args[0] {
			Value::Undefined => {
				debug!(function = NAME, "undefined input, nothing to split");
				return Ok(());
			}
			Value::Utf8(line) => Cow::Borrowed(line.as_str()),
			other => Cow::Owned(other.to_string()),
		};

		for (index, outcome) in
			parse_records(&line, self.config.record_delimiter, self.config.field_delimiter).enumerate()
		{
			match outcome {
				RecordOutcome::Row(fields) => {
					let row = fields.iter().map(|field| Value::utf8(*field)).collect();
					if let Err(err) = collector.collect(row) {
						warn!(function = NAME, record = index, %err, "dropping record, forward failed");
					}
				}
				RecordOutcome::Skip(reason) => {
					debug!(function = NAME, record = index, ?reason, "skipping record");
				}
			}
		}

		Ok(())
	}

	fn display(&self, args: &[String]) -> String {
		format!(
			"{NAME}({}): one ({}) row per '{}'-separated record of '{}'-separated fields",
			args.join(", "),
			self.config.fields.join(", "),
			self.config.record_delimiter,
			self.config.field_delimiter,
		)
	}
}
