//! Implementation of the `#[derive(Variant)]` macro.
//!
//! Generates a `Variant` impl (axis name, every value, value mapping), a
//! `From<Enum> for VariantValue` conversion and, when one variant is marked
//! `#[variant(default)]`, a `Default` impl.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_enum_attrs, parse_variant_attrs, to_kebab_case, ValueAttr};

pub fn variant_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let enum_name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(Error::new(
                input.span(),
                "Variant can only be derived for enums",
            ))
        }
    };
    if data.variants.is_empty() {
        return Err(Error::new(
            input.span(),
            "Variant requires at least one enum variant",
        ));
    }

    let enum_attrs = parse_enum_attrs(&input.attrs)?;
    let axis = enum_attrs
        .axis
        .map(|lit| lit.value())
        .unwrap_or_else(|| to_kebab_case(&enum_name.to_string()));

    let mut idents = Vec::new();
    let mut values = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    let mut default = None;

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new(
                variant.span(),
                "Variant can only be derived for enums with unit variants",
            ));
        }
        let attrs = parse_variant_attrs(&variant.attrs)?;
        let value = attrs
            .value
            .unwrap_or_else(|| ValueAttr::Str(to_kebab_case(&variant.ident.to_string())));

        let key = match &value {
            ValueAttr::Str(s) => format!("s:{s}"),
            ValueAttr::Int(i) => format!("i:{i}"),
            ValueAttr::Bool(b) => format!("b:{b}"),
        };
        if seen.contains(&key) {
            return Err(Error::new(
                variant.span(),
                "two variants map to the same value",
            ));
        }
        seen.push(key);

        if attrs.default {
            if default.is_some() {
                return Err(Error::new(
                    variant.span(),
                    "only one variant can be marked #[variant(default)]",
                ));
            }
            default = Some(variant.ident.clone());
        }

        let value_expr = match value {
            ValueAttr::Str(s) => {
                quote! { ::tailor::VariantValue::Str(::std::string::String::from(#s)) }
            }
            ValueAttr::Int(i) => quote! { ::tailor::VariantValue::Int(#i) },
            ValueAttr::Bool(b) => quote! { ::tailor::VariantValue::Bool(#b) },
        };
        idents.push(variant.ident.clone());
        values.push(value_expr);
    }

    let default_impl = default.map(|ident| {
        quote! {
            impl ::std::default::Default for #enum_name {
                fn default() -> Self {
                    #enum_name::#ident
                }
            }
        }
    });

    Ok(quote! {
        impl ::tailor::Variant for #enum_name {
            const AXIS: &'static str = #axis;
            const ALL: &'static [Self] = &[#(#enum_name::#idents),*];

            fn value(&self) -> ::tailor::VariantValue {
                match self {
                    #(#enum_name::#idents => #values,)*
                }
            }
        }

        impl ::std::convert::From<#enum_name> for ::tailor::VariantValue {
            fn from(value: #enum_name) -> Self {
                <#enum_name as ::tailor::Variant>::value(&value)
            }
        }

        #default_impl
    })
}
