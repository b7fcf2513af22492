//! Parsing of `#[variant(...)]` attributes.

use syn::{Attribute, Lit, LitStr, Result};

/// Container attributes: `#[variant(axis = "size")]`.
#[derive(Debug, Default)]
pub struct EnumAttrs {
    pub axis: Option<LitStr>,
}

/// The value a variant maps to.
#[derive(Debug, Clone)]
pub enum ValueAttr {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// Variant attributes: `#[variant(rename = "2xl")]`, `#[variant(value = 4)]`,
/// `#[variant(default)]`.
#[derive(Debug, Default)]
pub struct VariantAttrs {
    pub value: Option<ValueAttr>,
    pub default: bool,
}

pub fn parse_enum_attrs(attrs: &[Attribute]) -> Result<EnumAttrs> {
    let mut result = EnumAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("variant") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("axis") {
                result.axis = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `axis = \"...\"`"))
            }
        })?;
    }
    Ok(result)
}

pub fn parse_variant_attrs(attrs: &[Attribute]) -> Result<VariantAttrs> {
    let mut result = VariantAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("variant") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                result.value = Some(ValueAttr::Str(name.value()));
                Ok(())
            } else if meta.path.is_ident("value") {
                let lit: Lit = meta.value()?.parse()?;
                result.value = Some(match lit {
                    Lit::Str(s) => ValueAttr::Str(s.value()),
                    Lit::Int(i) => ValueAttr::Int(i.base10_parse()?),
                    Lit::Bool(b) => ValueAttr::Bool(b.value),
                    other => {
                        return Err(syn::Error::new(
                            other.span(),
                            "expected a string, integer or boolean literal",
                        ))
                    }
                });
                Ok(())
            } else if meta.path.is_ident("default") {
                result.default = true;
                Ok(())
            } else {
                Err(meta.error("expected `rename`, `value` or `default`"))
            }
        })?;
    }
    Ok(result)
}

/// Converts `ExtraLarge` to `extra-large` and `Xl2` to `xl2`.
pub fn to_kebab_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '_' {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn kebab_case() {
        assert_eq!(to_kebab_case("Primary"), "primary");
        assert_eq!(to_kebab_case("ExtraLarge"), "extra-large");
        assert_eq!(to_kebab_case("ButtonSize"), "button-size");
        assert_eq!(to_kebab_case("auto_fill"), "auto-fill");
    }

    #[test]
    fn parses_axis() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[variant(axis = "size")])];
        let parsed = parse_enum_attrs(&attrs).unwrap();
        assert_eq!(parsed.axis.unwrap().value(), "size");
    }

    #[test]
    fn parses_variant_values() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[variant(value = 12, default)])];
        let parsed = parse_variant_attrs(&attrs).unwrap();
        assert!(matches!(parsed.value, Some(ValueAttr::Int(12))));
        assert!(parsed.default);

        let attrs: Vec<Attribute> = vec![parse_quote!(#[variant(rename = "2xl")])];
        let parsed = parse_variant_attrs(&attrs).unwrap();
        assert!(matches!(parsed.value, Some(ValueAttr::Str(ref s)) if s == "2xl"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[variant(colour = "red")])];
        assert!(parse_variant_attrs(&attrs).is_err());
    }
}
