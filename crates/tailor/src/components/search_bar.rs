//! Search bar chrome: the input wrapper and suggestion rows.
//!
//! The boolean axes mirror [`SearchBar`](crate::search::SearchBar) state, so a
//! host can feed `is_open()` and `highlight()` straight into the assignment.

use crate::{CompoundRule, TableError, Variant, VariantAxis, VariantTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "size")]
pub enum SearchSize {
    Sm,
    #[variant(default)]
    Md,
    Lg,
}

/// The `search_bar` table. Axes: `size`, `open`, `disabled`.
pub fn search_bar() -> Result<VariantTable, TableError> {
    VariantTable::builder()
        .base(
            "relative flex w-full items-center rounded-md border border-input bg-background \
             focus-within:ring-2 focus-within:ring-ring",
        )
        .axis(VariantAxis::typed(|size: SearchSize| match size {
            SearchSize::Sm => "h-8 px-2 text-xs",
            SearchSize::Md => "h-9 px-3 text-sm",
            SearchSize::Lg => "h-11 px-4 text-base",
        }))
        .axis(
            VariantAxis::new("open")
                .value(true, "rounded-b-none")
                .value(false, ""),
        )
        .axis(
            VariantAxis::new("disabled")
                .value(true, "cursor-not-allowed opacity-50")
                .value(false, ""),
        )
        .default_variant(SearchSize::default())
        .default_value("open", false)
        .default_value("disabled", false)
        .build()
}

/// The `search_suggestion` table: one row of the suggestion list.
pub fn search_suggestion() -> Result<VariantTable, TableError> {
    VariantTable::builder()
        .base("flex cursor-pointer select-none items-center rounded-sm px-2 py-1.5 text-sm")
        .axis(
            VariantAxis::new("highlighted")
                .value(true, "bg-accent text-accent-foreground")
                .value(false, "text-foreground"),
        )
        .axis(
            VariantAxis::new("recent")
                .value(true, "text-muted-foreground")
                .value(false, ""),
        )
        .compound(
            CompoundRule::new("text-accent-foreground")
                .when("highlighted", true)
                .when("recent", true),
        )
        .default_value("highlighted", false)
        .default_value("recent", false)
        .build()
}
