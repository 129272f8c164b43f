//! Conversion of resolved strings into typed field values

use serde::{Deserialize, Serialize};

use crate::error::{Bound, EnvError};
use crate::grammar::keyword;
use crate::tag::TagOptions;

/// Which textual forms are accepted for `bool` fields.
///
/// All forms are matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolSyntax {
    /// `true`, `false`, `1`, `0`
    #[default]
    Strict,
    /// `Strict` plus `t`/`f`, `y`/`n`, `yes`/`no`, `on`/`off`
    Extended,
}

impl BoolSyntax {
    /// Parse `value` as a boolean, `None` if it is not an accepted token.
    pub fn parse(self, value: &str) -> Option<bool> {
        let lowered = value.to_ascii_lowercase();
        match (self, lowered.as_str()) {
            (_, "true" | "1") => Some(true),
            (_, "false" | "0") => Some(false),
            (BoolSyntax::Extended, "t" | "y" | "yes" | "on") => Some(true),
            (BoolSyntax::Extended, "f" | "n" | "no" | "off") => Some(false),
            _ => None,
        }
    }
}

/// The closed set of scalar kinds a field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    SignedInt,
    UnsignedInt,
    Float,
    Bool,
}

impl ValueKind {
    /// Whether `min`/`max` apply to this kind
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ValueKind::SignedInt | ValueKind::UnsignedInt | ValueKind::Float
        )
    }
}

/// Per-field context for a conversion.
#[derive(Debug, Clone, Copy)]
pub struct Coercion<'a> {
    /// Declared name of the field, used in errors
    pub field: &'a str,
    pub options: &'a TagOptions,
    pub bool_syntax: BoolSyntax,
}

/// A type that a single resolved string converts into.
pub trait Scalar: Sized {
    const KIND: ValueKind;

    fn coerce(value: &str, ctx: &Coercion<'_>) -> Result<Self, EnvError>;
}

impl Scalar for String {
    const KIND: ValueKind = ValueKind::String;

    fn coerce(value: &str, _ctx: &Coercion<'_>) -> Result<Self, EnvError> {
        Ok(value.to_string())
    }
}

impl Scalar for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn coerce(value: &str, ctx: &Coercion<'_>) -> Result<Self, EnvError> {
        ctx.bool_syntax
            .parse(value)
            .ok_or_else(|| EnvError::InvalidBool {
                field: ctx.field.to_string(),
                value: value.to_string(),
            })
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const KIND: ValueKind = ValueKind::SignedInt;

                fn coerce(value: &str, ctx: &Coercion<'_>) -> Result<Self, EnvError> {
                    let number = value
                        .parse::<$t>()
                        .map_err(|e| EnvError::invalid_number::<$t>(ctx.field, value, e))?;
                    check_bounds(number as f64, value, ctx)?;
                    Ok(number)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const KIND: ValueKind = ValueKind::UnsignedInt;

                fn coerce(value: &str, ctx: &Coercion<'_>) -> Result<Self, EnvError> {
                    // `str::parse` tolerates a leading '+' for unsigned types
                    if value.starts_with('+') {
                        return Err(EnvError::invalid_number::<$t>(
                            ctx.field,
                            value,
                            "sign not allowed for unsigned value",
                        ));
                    }
                    let number = value
                        .parse::<$t>()
                        .map_err(|e| EnvError::invalid_number::<$t>(ctx.field, value, e))?;
                    check_bounds(number as f64, value, ctx)?;
                    Ok(number)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const KIND: ValueKind = ValueKind::Float;

                fn coerce(value: &str, ctx: &Coercion<'_>) -> Result<Self, EnvError> {
                    let number = value
                        .parse::<$t>()
                        .map_err(|e| EnvError::invalid_number::<$t>(ctx.field, value, e))?;
                    check_bounds(f64::from(number), value, ctx)?;
                    Ok(number)
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

/// Enforce the inclusive `min` and `max` options, `min` first.
fn check_bounds(number: f64, value: &str, ctx: &Coercion<'_>) -> Result<(), EnvError> {
    for (bound, key) in [(Bound::Min, keyword::MIN), (Bound::Max, keyword::MAX)] {
        let Some(raw) = ctx.options.get(key) else {
            continue;
        };
        let limit: f64 = raw.parse().map_err(|_| EnvError::InvalidBound {
            field: ctx.field.to_string(),
            bound,
            value: raw.to_string(),
        })?;

        let violated = match bound {
            Bound::Min => number < limit,
            Bound::Max => number > limit,
        };
        if violated {
            return Err(EnvError::OutOfRange {
                field: ctx.field.to_string(),
                value: value.to_string(),
                bound,
                limit,
            });
        }
    }
    Ok(())
}

/// Split `value` on `separator` and convert every non-empty item.
///
/// Items are trimmed unless `notrim` is set; emptiness is judged after that.
pub fn coerce_list<T: Scalar>(
    value: &str,
    separator: &str,
    notrim: bool,
    ctx: &Coercion<'_>,
) -> Result<Vec<T>, EnvError> {
    value
        .split(separator)
        .map(|item| if notrim { item } else { item.trim() })
        .filter(|item| !item.is_empty())
        .map(|item| T::coerce(item, ctx))
        .collect()
}
