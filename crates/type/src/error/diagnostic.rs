// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

pub mod config;
pub mod function;
pub mod number;
pub mod render;
pub mod subsystem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_serializes_for_the_wire() {
		let diagnostic = function::arity_mismatch("char_count", 1, 0).with_cause(config::invalid_config("eof".into()));
		let json = serde_json::to_value(&diagnostic).unwrap();
		assert_eq!(json["code"], "FUNCTION_002");
		assert_eq!(json["cause"]["code"], "CONFIG_001");
	}
}
