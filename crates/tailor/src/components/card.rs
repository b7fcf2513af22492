//! Cards.

use crate::{CompoundRule, TableError, Variant, VariantAxis, VariantTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "padding")]
pub enum Padding {
    None,
    Sm,
    #[variant(default)]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "elevation")]
pub enum Elevation {
    Flat,
    #[variant(default)]
    Raised,
    Floating,
}

/// The `card` table.
pub fn card() -> Result<VariantTable, TableError> {
    VariantTable::builder()
        .base("rounded-xl border bg-card text-card-foreground")
        .axis(VariantAxis::typed(|padding: Padding| match padding {
            Padding::None => "p-0",
            Padding::Sm => "p-4",
            Padding::Md => "p-6",
            Padding::Lg => "p-8",
        }))
        .axis(VariantAxis::typed(|elevation: Elevation| match elevation {
            Elevation::Flat => "shadow-none",
            Elevation::Raised => "shadow-sm",
            Elevation::Floating => "shadow-lg",
        }))
        .axis(
            VariantAxis::new("interactive")
                .value(true, "cursor-pointer transition-shadow")
                .value(false, ""),
        )
        .compound(
            CompoundRule::new("hover:shadow-md")
                .when_any("elevation", [Elevation::Flat, Elevation::Raised])
                .when("interactive", true),
        )
        .compound(
            CompoundRule::new("hover:shadow-xl")
                .when_variant(Elevation::Floating)
                .when("interactive", true),
        )
        .default_variant(Padding::default())
        .default_variant(Elevation::default())
        .default_value("interactive", false)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropAssignment;

    #[test]
    fn test_interactive_hover_depends_on_elevation() {
        let table = card().unwrap();
        let flat = table.resolve(
            &PropAssignment::new()
                .with(Elevation::Flat)
                .set("interactive", true),
        );
        assert!(flat.contains("hover:shadow-md"));
        assert!(!flat.contains("hover:shadow-xl"));

        let floating = table.resolve(
            &PropAssignment::new()
                .with(Elevation::Floating)
                .set("interactive", true),
        );
        assert!(floating.contains("hover:shadow-xl"));
        assert!(!floating.contains("hover:shadow-md"));
    }

    #[test]
    fn test_padding_none() {
        let classes = card()
            .unwrap()
            .resolve(&PropAssignment::new().with(Padding::None));
        assert!(classes.contains("p-0"));
        assert!(!classes.contains("p-6"));
    }
}
