//! Badges.

use crate::{CompoundRule, TableError, Variant, VariantAxis, VariantTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "variant")]
pub enum BadgeVariant {
    #[variant(default)]
    Default,
    Secondary,
    Destructive,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "size")]
pub enum BadgeSize {
    Sm,
    #[variant(default)]
    Md,
}

/// The `badge` table. `interactive` adds hover and pointer styles.
pub fn badge() -> Result<VariantTable, TableError> {
    VariantTable::builder()
        .base("inline-flex items-center rounded-md border font-semibold transition-colors")
        .axis(VariantAxis::typed(|variant: BadgeVariant| match variant {
            BadgeVariant::Default => "border-transparent bg-primary text-primary-foreground",
            BadgeVariant::Secondary => "border-transparent bg-secondary text-secondary-foreground",
            BadgeVariant::Destructive => {
                "border-transparent bg-destructive text-destructive-foreground"
            }
            BadgeVariant::Outline => "text-foreground",
        }))
        .axis(VariantAxis::typed(|size: BadgeSize| match size {
            BadgeSize::Sm => "px-2 py-0 text-xs",
            BadgeSize::Md => "px-2.5 py-0.5 text-xs",
        }))
        .axis(
            VariantAxis::new("interactive")
                .value(true, "cursor-pointer")
                .value(false, ""),
        )
        .compound(
            CompoundRule::new("hover:bg-primary/80")
                .when_variant(BadgeVariant::Default)
                .when("interactive", true),
        )
        .compound(
            CompoundRule::new("hover:bg-accent hover:text-accent-foreground")
                .when_variant(BadgeVariant::Outline)
                .when("interactive", true),
        )
        .default_variant(BadgeVariant::default())
        .default_variant(BadgeSize::default())
        .default_value("interactive", false)
        .build()
}
