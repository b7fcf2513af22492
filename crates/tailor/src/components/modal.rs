//! Overlays: centered dialogs, bottom drawers and edge sheets.

use crate::{CompoundRule, TableError, Variant, VariantAxis, VariantTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "kind")]
pub enum ModalKind {
    #[variant(default)]
    Dialog,
    Drawer,
    Sheet,
}

/// Edge a sheet slides in from. Ignored by dialogs and drawers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "side")]
pub enum Side {
    Top,
    #[variant(default)]
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "size")]
pub enum ModalSize {
    Sm,
    #[variant(default)]
    Md,
    Lg,
    Xl,
    Full,
}

/// The `modal` table.
///
/// `kind` picks the placement, `side` only matters for sheets and `size`
/// bounds the content width (height for top and bottom sheets).
pub fn modal() -> Result<VariantTable, TableError> {
    VariantTable::builder()
        .base("fixed z-50 grid gap-4 border bg-background p-6 shadow-lg")
        .axis(VariantAxis::typed(|kind: ModalKind| match kind {
            ModalKind::Dialog => "left-1/2 top-1/2 w-full -translate-x-1/2 -translate-y-1/2 rounded-lg",
            ModalKind::Drawer => "inset-x-0 bottom-0 max-h-[80vh] rounded-t-xl",
            ModalKind::Sheet => "gap-0",
        }))
        .axis(VariantAxis::typed(|_: Side| ""))
        .axis(VariantAxis::typed(|size: ModalSize| match size {
            ModalSize::Sm => "max-w-sm",
            ModalSize::Md => "max-w-lg",
            ModalSize::Lg => "max-w-2xl",
            ModalSize::Xl => "max-w-4xl",
            ModalSize::Full => "max-w-none",
        }))
        .compound(
            CompoundRule::new("inset-x-0 top-0 border-b")
                .when_variant(ModalKind::Sheet)
                .when_variant(Side::Top),
        )
        .compound(
            CompoundRule::new("inset-y-0 right-0 h-full w-3/4 border-l")
                .when_variant(ModalKind::Sheet)
                .when_variant(Side::Right),
        )
        .compound(
            CompoundRule::new("inset-x-0 bottom-0 border-t")
                .when_variant(ModalKind::Sheet)
                .when_variant(Side::Bottom),
        )
        .compound(
            CompoundRule::new("inset-y-0 left-0 h-full w-3/4 border-r")
                .when_variant(ModalKind::Sheet)
                .when_variant(Side::Left),
        )
        .compound(
            CompoundRule::new("w-screen h-screen rounded-none")
                .when_variant(ModalKind::Dialog)
                .when_variant(ModalSize::Full),
        )
        .default_variant(ModalKind::default())
        .default_variant(Side::default())
        .default_variant(ModalSize::default())
        .build()
}
