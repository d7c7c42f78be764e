// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::{decimal::Decimal, r#type::Type};

/// Static type descriptor of a Rust type that maps onto a [`Value`](crate::Value) variant.
pub trait GetType {
	fn get_type() -> Type;
}

macro_rules! impl_get_type {
	($($rust:ty => $variant:ident),* $(,)?) => {
		$(
			impl GetType for $rust {
				fn get_type() -> Type {
					Type::$variant
				}
			}
		)*
	};
}

impl_get_type! {
	bool => Boolean,
	i32 => Int4,
	i64 => Int8,
	f64 => Float8,
	Decimal => Decimal,
	String => Utf8,
	&str => Utf8,
}

impl<T: GetType> GetType for Vec<T> {
	fn get_type() -> Type {
		Type::list(T::get_type())
	}
}

/// An optional value has the type of its payload; absence is `Value::Undefined` at runtime.
impl<T: GetType> GetType for Option<T> {
	fn get_type() -> Type {
		T::get_type()
	}
}
