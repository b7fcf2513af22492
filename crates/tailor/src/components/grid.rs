//! Grid containers and items.
//!
//! Column counts, spans and start lines are integer axes, so breakpoint
//! overrides read naturally: `md_columns=3` in templates or
//! `BreakpointOverrides::new().set(Breakpoint::Md, "columns", 3)` in code.

use crate::{TableError, Variant, VariantAxis, VariantTable};

/// Track count for `grid`. The keyword entries size tracks to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "columns")]
pub enum Columns {
    #[variant(value = 1, default)]
    One,
    #[variant(value = 2)]
    Two,
    #[variant(value = 3)]
    Three,
    #[variant(value = 4)]
    Four,
    #[variant(value = 5)]
    Five,
    #[variant(value = 6)]
    Six,
    #[variant(value = 7)]
    Seven,
    #[variant(value = 8)]
    Eight,
    #[variant(value = 9)]
    Nine,
    #[variant(value = 10)]
    Ten,
    #[variant(value = 11)]
    Eleven,
    #[variant(value = 12)]
    Twelve,
    AutoFill,
    AutoFit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "gap")]
pub enum Gap {
    None,
    Sm,
    #[variant(default)]
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "flow")]
pub enum Flow {
    Row,
    Col,
    Dense,
}

const MAX_TRACKS: i64 = 12;

fn columns(columns: Columns) -> String {
    match columns {
        Columns::AutoFill => "grid-cols-[repeat(auto-fill,minmax(16rem,1fr))]".to_string(),
        Columns::AutoFit => "grid-cols-[repeat(auto-fit,minmax(16rem,1fr))]".to_string(),
        n => format!("grid-cols-{}", n.value()),
    }
}

/// The `grid` table.
pub fn grid() -> Result<VariantTable, TableError> {
    VariantTable::builder()
        .base("grid")
        .axis(VariantAxis::typed(columns))
        .axis(VariantAxis::typed(|gap: Gap| match gap {
            Gap::None => "gap-0",
            Gap::Sm => "gap-2",
            Gap::Md => "gap-4",
            Gap::Lg => "gap-6",
            Gap::Xl => "gap-8",
        }))
        .axis(VariantAxis::typed(|flow: Flow| match flow {
            Flow::Row => "grid-flow-row",
            Flow::Col => "grid-flow-col",
            Flow::Dense => "grid-flow-dense",
        }))
        .default_variant(Columns::default())
        .default_variant(Gap::default())
        .build()
}

/// The `grid_item` table: `span` 1–12 or `full`, `start` 1–13 or `auto`.
pub fn grid_item() -> Result<VariantTable, TableError> {
    let mut span = VariantAxis::new("span");
    for n in 1..=MAX_TRACKS {
        span = span.value(n, format!("col-span-{n}"));
    }
    span = span.value("full", "col-span-full");

    let mut start = VariantAxis::new("start");
    for n in 1..=MAX_TRACKS + 1 {
        start = start.value(n, format!("col-start-{n}"));
    }
    start = start.value("auto", "col-start-auto");

    VariantTable::builder()
        .base("min-w-0")
        .axis(span)
        .axis(start)
        .build()
}
