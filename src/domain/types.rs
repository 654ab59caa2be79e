//! Value types shared by the catalog domain.
//!
//! Keys and request values are checked when built. Text read back from the
//! database is wrapped as is.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be positive was zero/negative or invalid.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A numeric value required to be non-negative was negative or not finite.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Positive `i32` row key.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

/// Text read back from a catalog column, kept byte for byte.
///
/// Stored rows are never judged on the read path, so any string is accepted,
/// including blank or padded ones.
macro_rules! stored_text_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: Into<String>>(value: S) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

macro_rules! non_negative_f64_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Constructs a finite numeric value that is zero or greater.
            pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
                if value.is_finite() && value >= 0.0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `f64` value.
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

macro_rules! positive_usize_newtype {
    ($name:ident, $doc:expr, $field:expr, $default:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Constructs a value that must be greater than zero.
            pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveNumber($field))
                }
            }

            /// Returns the raw `usize` value.
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Untrimmed, non-empty text used as an exact-match filter value.
///
/// Surrounding whitespace is significant: `" Road "` and `"Road"` are
/// different filter values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FilterText(String);

impl FilterText {
    /// Wraps `value`, rejecting the empty string.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.is_empty() {
            Err(TypeConstraintError::EmptyString("filter"))
        } else {
            Ok(Self(value))
        }
    }

    /// Maps the empty string to `None`.
    pub fn from_optional<S: Into<String>>(value: Option<S>) -> Option<Self> {
        value.and_then(|v| Self::new(v).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `stored` equals this value under Unicode lowercase folding.
    pub fn matches_ignoring_case(&self, stored: &str) -> bool {
        self.0.to_lowercase() == stored.to_lowercase()
    }
}

impl Display for FilterText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FilterText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for FilterText {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

id_newtype!(ProductId, "`products.id`.", "product_id");
id_newtype!(CategoryId, "`product_categories.id`.", "category_id");
id_newtype!(SubcategoryId, "`product_subcategories.id`.", "subcategory_id");
id_newtype!(ModelId, "`product_models.id`.", "model_id");
id_newtype!(DescriptionId, "`product_descriptions.id`.", "description_id");
id_newtype!(PhotoId, "`product_photos.id`.", "photo_id");

stored_text_newtype!(ProductName, "Product name as stored.");
stored_text_newtype!(ProductNumber, "Product number as stored.");
stored_text_newtype!(CategoryName, "Category name as stored.");

non_negative_f64_newtype!(
    StandardCost,
    "Non-negative standard cost in currency units.",
    "standard cost"
);
non_negative_f64_newtype!(ProductWeight, "Non-negative product weight.", "weight");

positive_usize_newtype!(PageNumber, "One-based page number.", "page number", 1);
positive_usize_newtype!(PageSize, "Number of rows per page.", "page size", 10);
