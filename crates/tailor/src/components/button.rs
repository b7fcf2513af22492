//! Buttons.

use crate::{CompoundRule, TableError, Variant, VariantAxis, VariantTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "variant")]
pub enum ButtonVariant {
    #[variant(default)]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "size")]
pub enum ButtonSize {
    Sm,
    #[variant(default)]
    Md,
    Lg,
    Icon,
}

/// The `button` table.
///
/// Axes: `variant`, `size`, and the boolean `block` (full width).
pub fn button() -> Result<VariantTable, TableError> {
    VariantTable::builder()
        .base(
            "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md \
             text-sm font-medium transition-colors focus-visible:outline-none \
             focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none \
             disabled:opacity-50",
        )
        .axis(VariantAxis::typed(|variant: ButtonVariant| match variant {
            ButtonVariant::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Secondary => {
                "bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            ButtonVariant::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90"
            }
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
            ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
        }))
        .axis(VariantAxis::typed(|size: ButtonSize| match size {
            ButtonSize::Sm => "h-8 px-3 text-xs",
            ButtonSize::Md => "h-9 px-4 py-2",
            ButtonSize::Lg => "h-10 px-8",
            ButtonSize::Icon => "size-9",
        }))
        .axis(
            VariantAxis::new("block")
                .value(true, "w-full")
                .value(false, ""),
        )
        .compound(
            CompoundRule::new("rounded-full")
                .when_variant(ButtonVariant::Ghost)
                .when_variant(ButtonSize::Icon),
        )
        .compound(CompoundRule::new("h-auto px-0").when_variant(ButtonVariant::Link))
        .default_variant(ButtonVariant::default())
        .default_variant(ButtonSize::default())
        .default_value("block", false)
        .build()
}
