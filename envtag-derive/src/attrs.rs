//! Attribute parsing for `#[env(...)]` annotations.
//!
//! The annotation string itself is kept raw: its separators are a runtime
//! setting of the parser, so it can only be split when the struct is
//! populated.

use syn::parse::{Parse, ParseStream};
use syn::{Expr, ExprLit, Field, Ident, Lit, LitStr, Meta};

/// Parsed `#[env(...)]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw annotation string.
    ///
    /// - `None`: no `#[env]` attribute
    /// - `Some("")`: bare `#[env]` or `#[env("")]`
    pub tag: Option<String>,

    /// `#[env(skip)]`: never visit this field.
    pub skip: bool,
}

/// Argument inside `#[env(...)]`
enum EnvArg {
    Tag(LitStr),
    Skip,
}

impl Parse for EnvArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(EnvArg::Tag(input.parse()?));
        }
        if input.peek(Ident) {
            let ident: Ident = input.parse()?;
            if ident == "skip" {
                return Ok(EnvArg::Skip);
            }
            return Err(syn::Error::new(
                ident.span(),
                "unknown env attribute, expected an annotation string or `skip`",
            ));
        }
        Err(input.error("expected an annotation string literal"))
    }
}

impl FieldAttrs {
    /// Extract the `#[env(...)]` attribute of a struct field.
    ///
    /// A second `#[env]` on the same field is an error.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();
        let mut seen = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }
            if seen {
                return Err(syn::Error::new_spanned(attr, "duplicate env attribute"));
            }
            seen = true;

            match &attr.meta {
                // #[env]
                Meta::Path(_) => attrs.tag = Some(String::new()),

                // #[env = "..."]
                Meta::NameValue(nv) => match &nv.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }) => attrs.tag = Some(s.value()),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "expected an annotation string literal",
                        ))
                    }
                },

                // #[env("...")] or #[env(skip)]
                Meta::List(list) => match list.parse_args::<EnvArg>()? {
                    EnvArg::Tag(s) => attrs.tag = Some(s.value()),
                    EnvArg::Skip => attrs.skip = true,
                },
            }
        }

        Ok(attrs)
    }
}
