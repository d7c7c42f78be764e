// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod value;

pub use error::{Error, IntoDiagnostic, Result};
pub use value::{
	Value,
	decimal::{Decimal, parse_decimal},
	r#type::{Field, GetType, Type, TypeCategory},
};
