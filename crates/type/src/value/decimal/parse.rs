// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, str::FromStr};

use bigdecimal::BigDecimal;

use crate::{
	Error, Type, error::diagnostic::number::invalid_number_format, return_error, value::decimal::Decimal,
};

pub fn parse_decimal(text: &str) -> Result<Decimal, Error> {
	let needs_trimming = text.as_bytes().first().is_some_and(|b| b.is_ascii_whitespace())
		|| text.as_bytes().last().is_some_and(|b| b.is_ascii_whitespace());
	let has_underscores = text.as_bytes().contains(&b'_');

	let value = match (needs_trimming, has_underscores) {
		(false, false) => Cow::Borrowed(text),
		(true, false) => Cow::Borrowed(text.trim()),
		(false, true) => Cow::Owned(text.replace('_', "")),
		(true, true) => Cow::Owned(text.trim().replace('_', "")),
	};

	if value.is_empty() {
		return_error!(invalid_number_format(text, Type::Decimal));
	}

	let big_decimal =
		BigDecimal::from_str(&value).map_err(|_| crate::error!(invalid_number_format(text, Type::Decimal)))?;

	Ok(Decimal::new(big_decimal))
}
