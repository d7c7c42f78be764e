// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use strata_type::{
	Result,
	error::diagnostic::config::{constraint_violation, invalid_config},
	return_error,
};

/// Settings for every built-in function, loadable from JSON.
///
/// Missing sections and keys fall back to their defaults, so `{}` is a valid document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionConfig {
	pub grade: GradeConfig,
	pub split: SplitConfig,
}

impl FunctionConfig {
	pub fn from_json(document: &str) -> Result<Self> {
		let config: FunctionConfig =
			serde_json::from_str(document).map_err(|err| strata_type::error!(invalid_config(err.to_string())))?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		self.grade.validate()?;
		self.split.validate()
	}
}

/// Thresholds and labels used by `salary_grade`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeConfig {
	/// Largest value still graded A (inclusive)
	pub a_max: f64,
	/// Largest value still graded B (inclusive)
	pub b_max: f64,
	pub grade_a: String,
	pub grade_b: String,
	pub grade_c: String,
	pub null_label: String,
	pub error_label: String,
}

impl Default for GradeConfig {
	fn default() -> Self {
		Self {
			a_max: 1000.0,
			b_max: 3000.0,
			grade_a: "Grade_A".to_string(),
			grade_b: "Grade_B".to_string(),
			grade_c: "Grade_C".to_string(),
			null_label: "NULL".to_string(),
			error_label: "ERROR".to_string(),
		}
	}
}

impl GradeConfig {
	pub fn validate(&self) -> Result<()> {
		if !self.a_max.is_finite() || !self.b_max.is_finite() {
			return_error!(constraint_violation("grade", "thresholds must be finite"));
		}
		if self.a_max > self.b_max {
			return_error!(constraint_violation("grade.a_max", "must not exceed grade.b_max"));
		}
		Ok(())
	}

	/// Maps a value onto its grade label. A value that matches no band (NaN) yields the null label.
	pub fn classify(&self, value: f64) -> &str {
		if value <= self.a_max {
			&self.grade_a
		} else if value <= self.b_max {
			&self.grade_b
		} else if value > self.b_max {
			&self.grade_c
		} else {
			&self.null_label
		}
	}
}

/// Delimiters and output column names used by `split_records`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
	pub record_delimiter: char,
	pub field_delimiter: char,
	pub fields: [String; 3],
}

impl Default for SplitConfig {
	fn default() -> Self {
		Self {
			record_delimiter: ';',
			field_delimiter: ':',
			fields: ["id".to_string(), "lower".to_string(), "upper".to_string()],
		}
	}
}

impl SplitConfig {
	pub fn validate(&self) -> Result<()> {
		if self.record_delimiter == self.field_delimiter {
			return_error!(constraint_violation("split", "record and field delimiters must differ"));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_document_yields_defaults() {
		let config = FunctionConfig::from_json("{}").unwrap();
		assert_eq!(config, FunctionConfig::default());
	}

	#[test]
	fn test_partial_document_overrides_only_given_keys() {
		let config = FunctionConfig::from_json(r#"{ "grade": { "b_max": 5000.0 }, "split": { "field_delimiter": "=" } }"#)
			.unwrap();
		assert_eq!(config.grade.a_max, 1000.0);
		assert_eq!(config.grade.b_max, 5000.0);
		assert_eq!(config.split.record_delimiter, ';');
		assert_eq!(config.split.field_delimiter, '=');
	}

	#[test]
	fn test_malformed_document() {
		let err = FunctionConfig::from_json("{ grade: ").unwrap_err();
		assert_eq!(err.code, "CONFIG_001");
	}

	#[test]
	fn test_inverted_thresholds_rejected() {
		let err = FunctionConfig::from_json(r#"{ "grade": { "a_max": 4000.0 } }"#).unwrap_err();
		assert_eq!(err.code, "CONFIG_002");
	}

	#[test]
	fn test_identical_delimiters_rejected() {
		let err = FunctionConfig::from_json(r#"{ "split": { "record_delimiter": ":" } }"#).unwrap_err();
		assert_eq!(err.code, "CONFIG_002");
	}

	#[test]
	fn test_classify_boundaries() {
		let grade = GradeConfig::default();
		assert_eq!(grade.classify(-5.0), "Grade_A");
		assert_eq!(grade.classify(1000.0), "Grade_A");
		assert_eq!(grade.classify(1000.5), "Grade_B");
		assert_eq!(grade.classify(3000.0), "Grade_B");
		assert_eq!(grade.classify(3000.01), "Grade_C");
		assert_eq!(grade.classify(f64::NAN), "NULL");
	}
}
