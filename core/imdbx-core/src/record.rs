//! Row Parser: typed records decoded from tab-separated lines.
//!
//! A schema is a plain struct deriving [`TsvRecord`](imdbx_derive::TsvRecord). Each field is
//! decoded through [`FromField`], which is where the null sentinel is handled:
//!
//! | Field type            | `\N`                  | other values                  |
//! |-----------------------|-----------------------|-------------------------------|
//! | `String`              | copied as-is          | copied as-is                  |
//! | `Option<T>`           | `None`                | `Some(T)`                     |
//! | integers, `f64`       | error                 | strict parse                  |
//! | `Vec<String>`         | empty list            | split on the column separator |
//! | `bool`                | `false`               | `true` only for `1`           |

use std::num::{ParseFloatError, ParseIntError};
use std::path::Path;

use smallvec::SmallVec;
use thiserror::Error;

use crate::error::{ImdbxError, ImdbxResult};
use crate::source::Line;

/// Literal two-character token marking an absent value.
pub const NULL_SENTINEL: &str = "\\N";

/// Field delimiter of every snapshot file.
pub const FIELD_DELIMITER: char = '\t';

/// Why a single raw value could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseFieldError {
    #[error("invalid integer {value:?}: {source}")]
    Integer {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid float {value:?}: {source}")]
    Float {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("non-finite float {value:?}")]
    NonFinite { value: String },

    #[error("null value in a required column")]
    UnexpectedNull,

    #[error("column missing from row")]
    Missing,
}

/// A [`ParseFieldError`] tagged with the column it came from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("column '{column}': {kind}")]
pub struct FieldError {
    pub column: &'static str,
    #[source]
    pub kind: ParseFieldError,
}

impl FieldError {
    pub fn new(column: &'static str, kind: ParseFieldError) -> Self {
        Self { column, kind }
    }
}

/// Conversion from one raw field to its semantic type.
pub trait FromField: Sized {
    /// `separator` is the column's list separator; scalar types ignore it.
    fn from_field(raw: &str, separator: &str) -> Result<Self, ParseFieldError>;
}

impl FromField for String {
    fn from_field(raw: &str, _separator: &str) -> Result<Self, ParseFieldError> {
        Ok(raw.to_string())
    }
}

impl FromField for bool {
    fn from_field(raw: &str, _separator: &str) -> Result<Self, ParseFieldError> {
        Ok(raw == "1")
    }
}

macro_rules! impl_from_field_int {
    ($($ty:ty),*) => {
        $(
            impl FromField for $ty {
                fn from_field(raw: &str, _separator: &str) -> Result<Self, ParseFieldError> {
                    if raw == NULL_SENTINEL {
                        return Err(ParseFieldError::UnexpectedNull);
                    }
                    raw.parse::<$ty>().map_err(|source| ParseFieldError::Integer {
                        value: raw.to_string(),
                        source,
                    })
                }
            }
        )*
    };
}

impl_from_field_int!(i32, i64, u32, u64);

impl FromField for f64 {
    fn from_field(raw: &str, _separator: &str) -> Result<Self, ParseFieldError> {
        if raw == NULL_SENTINEL {
            return Err(ParseFieldError::UnexpectedNull);
        }
        let value = raw.parse::<f64>().map_err(|source| ParseFieldError::Float {
            value: raw.to_string(),
            source,
        })?;
        if !value.is_finite() {
            return Err(ParseFieldError::NonFinite {
                value: raw.to_string(),
            });
        }
        Ok(value)
    }
}

/// Title genres: absence is an empty list, not `None`.
impl FromField for Vec<String> {
    fn from_field(raw: &str, separator: &str) -> Result<Self, ParseFieldError> {
        if raw == NULL_SENTINEL {
            return Ok(Vec::new());
        }
        Ok(raw.split(separator).map(str::to_string).collect())
    }
}

impl<T: FromField> FromField for Option<T> {
    fn from_field(raw: &str, separator: &str) -> Result<Self, ParseFieldError> {
        if raw == NULL_SENTINEL {
            Ok(None)
        } else {
            T::from_field(raw, separator).map(Some)
        }
    }
}

/// Decodes column `idx` of a split row. Called by `#[derive(TsvRecord)]` expansions.
pub fn decode_field<T: FromField>(
    fields: &[&str],
    idx: usize,
    column: &'static str,
    separator: &str,
) -> Result<T, FieldError> {
    let raw = fields
        .get(idx)
        .ok_or_else(|| FieldError::new(column, ParseFieldError::Missing))?;
    T::from_field(raw, separator).map_err(|kind| FieldError::new(column, kind))
}

/// A record bound to one snapshot file layout.
pub trait TsvRecord: Sized {
    /// Expected header columns, in file order.
    const HEADER: &'static [&'static str];
    /// Standard file name of the snapshot.
    const FILE_NAME: &'static str;

    /// Builds a record from an already split row of exactly `HEADER.len()` fields.
    fn from_fields(fields: &[&str]) -> Result<Self, FieldError>;
}

/// A record stored in a single-key index.
pub trait FlatRecord: TsvRecord {
    fn key(&self) -> &str;
}

/// A record stored in a two-level index: entity id, then ordering.
pub trait NestedRecord: TsvRecord {
    fn primary_key(&self) -> &str;
    fn ordering(&self) -> i32;
}

/// Splits `line` on tabs and decodes it as `R`.
///
/// Fails with `Format` when the field count differs from the header width and with
/// `Value` when a field does not convert.
pub fn parse_row<R: TsvRecord>(path: &Path, line: &Line<'_>) -> ImdbxResult<R> {
    let fields: SmallVec<[&str; 16]> = line.text.split(FIELD_DELIMITER).collect();
    if fields.len() != R::HEADER.len() {
        return Err(ImdbxError::format(
            path,
            format!(
                "line {}: expected {} fields, found {}",
                line.number,
                R::HEADER.len(),
                fields.len()
            ),
        ));
    }

    R::from_fields(&fields).map_err(|source| ImdbxError::Value {
        path: path.to_path_buf(),
        line: line.number,
        source,
    })
}
