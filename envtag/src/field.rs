//! Field descriptors and the traits generated by `#[derive(Populate)]`

use crate::engine::Resolver;
use crate::error::EnvError;
use crate::parser::Parser;

/// Compile-time description of one struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared field name, used as the base lookup key
    pub name: &'static str,
    /// Raw `#[env(...)]` annotation; `None` when the field has none
    pub tag: Option<&'static str>,
    /// `false` for non-`pub` fields, which are never touched
    pub settable: bool,
}

/// A struct whose fields can be populated from a [`Source`].
///
/// Implemented with `#[derive(Populate)]`; see the crate documentation.
///
/// [`Source`]: crate::Source
pub trait Populate {
    /// Every field in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Populate settable fields in declaration order, stopping at the first
    /// error.
    fn populate(&mut self, resolver: &Resolver<'_>) -> Result<(), EnvError>;

    /// Build `Self::default()` and populate it from the process environment
    /// with a default [`Parser`].
    fn from_env() -> Result<Self, EnvError>
    where
        Self: Default + Sized,
    {
        let mut value = Self::default();
        Parser::new().unmarshal(&mut value)?;
        Ok(value)
    }
}

/// Static dispatch from a field's type to the matching resolution path.
///
/// Scalars and `Vec`s of scalars are provided here; the derive implements it
/// for every `Populate` struct so that nested structs recurse.
pub trait EnvField {
    fn visit(&mut self, field: &FieldDescriptor, resolver: &Resolver<'_>) -> Result<(), EnvError>;
}

macro_rules! impl_scalar_field {
    ($($t:ty),*) => {
        $(
            impl EnvField for $t {
                fn visit(
                    &mut self,
                    field: &FieldDescriptor,
                    resolver: &Resolver<'_>,
                ) -> Result<(), EnvError> {
                    resolver.scalar(self, field)
                }
            }

            impl EnvField for Vec<$t> {
                fn visit(
                    &mut self,
                    field: &FieldDescriptor,
                    resolver: &Resolver<'_>,
                ) -> Result<(), EnvError> {
                    resolver.sequence(self, field)
                }
            }
        )*
    };
}

impl_scalar_field!(
    String, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
