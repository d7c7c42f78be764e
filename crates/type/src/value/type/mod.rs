// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// Broad shape of a type, as reported to functions during argument negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCategory {
	Primitive,
	List,
	Map,
	Struct,
}

impl Display for TypeCategory {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			TypeCategory::Primitive => f.write_str("PRIMITIVE"),
			TypeCategory::List => f.write_str("LIST"),
			TypeCategory::Map => f.write_str("MAP"),
			TypeCategory::Struct => f.write_str("STRUCT"),
		}
	}
}

/// A named member of a struct type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
	pub name: String,
	pub ty: Type,
}

impl Field {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

/// Type descriptor the host hands to functions for every argument and result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// Type of a value that is not defined
	Undefined,
	/// A boolean: true or false
	Boolean,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte floating point
	Float8,
	/// An arbitrary-precision decimal
	Decimal,
	/// A UTF-8 encoded text
	Utf8,
	/// An ordered list of values of one type
	List(Box<Type>),
	/// A mapping from key type to value type
	Map(Box<Type>, Box<Type>),
	/// A record of named fields
	Struct(Vec<Field>),
}

impl Type {
	pub fn category(&self) -> TypeCategory {
		match self {
			Type::List(_) => TypeCategory::List,
			Type::Map(_, _) => TypeCategory::Map,
			Type::Struct(_) => TypeCategory::Struct,
			_ => TypeCategory::Primitive,
		}
	}

	pub fn is_primitive(&self) -> bool {
		self.category() == TypeCategory::Primitive
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int4 | Type::Int8)
	}

	pub fn list(element: Type) -> Self {
		Type::List(Box::new(element))
	}

	pub fn map(key: Type, value: Type) -> Self {
		Type::Map(Box::new(key), Box::new(value))
	}

	pub fn fields(&self) -> &[Field] {
		match self {
			Type::Struct(fields) => fields,
			_ => &[],
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("Undefined"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Float8 => f.write_str("Float8"),
			Type::Decimal => f.write_str("Decimal"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::List(element) => write!(f, "List<{}>", element),
			Type::Map(key, value) => write!(f, "Map<{}, {}>", key, value),
			Type::Struct(fields) => {
				f.write_str("Struct<")?;
				for (i, field) in fields.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", field.name, field.ty)?;
				}
				f.write_str(">")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_category() {
		assert_eq!(Type::Utf8.category(), TypeCategory::Primitive);
		assert_eq!(Type::Decimal.category(), TypeCategory::Primitive);
		assert_eq!(Type::list(Type::Utf8).category(), TypeCategory::List);
		assert_eq!(Type::map(Type::Utf8, Type::Int4).category(), TypeCategory::Map);
		assert_eq!(Type::Struct(vec![]).category(), TypeCategory::Struct);
	}

	#[test]
	fn test_display_struct() {
		let ty = Type::Struct(vec![Field::new("id", Type::Utf8), Field::new("n", Type::Int8)]);
		assert_eq!(ty.to_string(), "Struct<id: Utf8, n: Int8>");
		assert_eq!(ty.fields()[1].name, "n");
		assert!(Type::Utf8.fields().is_empty());
	}

	#[test]
	fn test_is_integer() {
		assert!(Type::Int4.is_integer());
		assert!(Type::Int8.is_integer());
		assert!(!Type::Decimal.is_integer());
		assert!(!Type::Utf8.is_integer());
	}

	#[test]
	fn test_get_type() {
		assert_eq!(String::get_type(), Type::Utf8);
		assert_eq!(<Vec<i64>>::get_type(), Type::list(Type::Int8));
	}
}
