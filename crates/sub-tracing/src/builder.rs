// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring the tracing subsystem

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::subsystem::TracingSubsystem;

/// Output layout of formatted events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
	Pretty,
	#[default]
	Compact,
	Json,
}

impl Display for Format {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Format::Pretty => f.write_str("pretty"),
			Format::Compact => f.write_str("compact"),
			Format::Json => f.write_str("json"),
		}
	}
}

/// Builder for configuring the tracing subsystem
pub struct TracingBuilder {
	filter: String,
	format: Format,
	target: bool,
	test_writer: bool,
}

impl TracingBuilder {
	/// Create a new tracing builder with default settings
	pub fn new() -> Self {
		Self {
			filter: "info".to_string(),
			format: Format::default(),
			target: true,
			test_writer: false,
		}
	}

	/// Set the `EnvFilter` directive, e.g. `"strata_function=debug"`
	pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
		self.filter = directive.into();
		self
	}

	pub fn with_format(mut self, format: Format) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, target: bool) -> Self {
		self.target = target;
		self
	}

	/// Route output through the libtest capture instead of stdout
	pub fn with_test_writer(mut self, test_writer: bool) -> Self {
		self.test_writer = test_writer;
		self
	}

	pub fn build(self) -> TracingSubsystem {
		TracingSubsystem::new(self.filter, self.format, self.target, self.test_writer)
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let subsystem = TracingBuilder::default().build();
		assert_eq!(subsystem.filter(), "info");
		assert_eq!(subsystem.format(), Format::Compact);
		assert!(!subsystem.is_installed());
	}

	#[test]
	fn test_overrides() {
		let subsystem = TracingBuilder::new().with_filter("strata_function=trace").with_format(Format::Json).build();
		assert_eq!(subsystem.filter(), "strata_function=trace");
		assert_eq!(subsystem.format(), Format::Json);
	}

	#[test]
	fn test_format_serde() {
		let format: Format = serde_json::from_str("\"pretty\"").unwrap();
		assert_eq!(format, Format::Pretty);
		assert_eq!(Format::Json.to_string(), "json");
	}
}
