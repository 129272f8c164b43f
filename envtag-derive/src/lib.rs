//! Derive macro implementation for envtag

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericParam, Visibility};

mod attrs;

use attrs::FieldAttrs;

/// `Populate` derive macro
///
/// Generates the field descriptor table (`Populate::FIELDS`), the
/// `populate()` body that visits every `pub` field in declaration order,
/// and an `EnvField` impl so the struct can itself be nested.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env("options")]` or `#[env = "options"]`: annotation string, e.g.
///   `#[env("name=PORT,min=1024,default=8080")]`
/// - `#[env]`: annotated with no options
/// - `#[env(skip)]`: never visit the field
///
/// Fields without `#[env]` are still visited so that nested structs recurse;
/// scalar and list fields without an annotation are left untouched.
///
/// # Example
///
/// See the `envtag` crate documentation for usage examples.
#[proc_macro_derive(Populate, attributes(env))]
pub fn derive_populate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(
                    fields,
                    "Populate only supports structs with named fields",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Populate only supports structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Populate only supports structs",
            ));
        }
    };

    // Lifetimes are fine; type and const parameters have no EnvField impl to pick
    if let Some(param) = input
        .generics
        .params
        .iter()
        .find(|p| !matches!(p, GenericParam::Lifetime(_)))
    {
        return Err(syn::Error::new_spanned(
            param,
            "Populate does not support type or const generic parameters",
        ));
    }

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut visits = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let attrs = FieldAttrs::from_field(field)?;

        // r#type is looked up as "type"
        let name = field_ident.unraw().to_string();
        let settable = matches!(field.vis, Visibility::Public(_)) && !attrs.skip;
        let tag = match &attrs.tag {
            Some(tag) => quote! { ::core::option::Option::Some(#tag) },
            None => quote! { ::core::option::Option::None },
        };

        descriptors.push(quote! {
            ::envtag::FieldDescriptor {
                name: #name,
                tag: #tag,
                settable: #settable,
            }
        });

        let descriptor = quote! { &<Self as ::envtag::Populate>::FIELDS[#index] };
        visits.push(if settable {
            quote! {
                ::envtag::EnvField::visit(&mut self.#field_ident, #descriptor, resolver)?;
            }
        } else {
            quote! {
                resolver.skip(#descriptor)?;
            }
        });
    }

    if visits.is_empty() {
        visits.push(quote! { let _ = resolver; });
    }

    let expanded = quote! {
        impl #impl_generics ::envtag::Populate for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::envtag::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            fn populate(
                &mut self,
                resolver: &::envtag::Resolver<'_>,
            ) -> ::core::result::Result<(), ::envtag::EnvError> {
                #(#visits)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics ::envtag::EnvField for #struct_name #ty_generics #where_clause {
            fn visit(
                &mut self,
                field: &::envtag::FieldDescriptor,
                resolver: &::envtag::Resolver<'_>,
            ) -> ::core::result::Result<(), ::envtag::EnvError> {
                resolver.nested(self, field)
            }
        }
    };

    Ok(expanded)
}
