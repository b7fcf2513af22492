//! Headings and body text.

use crate::{TableError, Variant, VariantAxis, VariantTable};

/// Heading level, `h1` through `h4`. Lower levels share `h4` styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "level")]
pub enum Level {
    #[variant(value = 1)]
    H1,
    #[variant(value = 2, default)]
    H2,
    #[variant(value = 3)]
    H3,
    #[variant(value = 4)]
    H4,
}

/// Text color role, shared by headings and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "tone")]
pub enum Tone {
    #[variant(default)]
    Default,
    Muted,
    Primary,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "size")]
pub enum TextSize {
    Xs,
    Sm,
    #[variant(default)]
    Base,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "weight")]
pub enum Weight {
    #[variant(default)]
    Normal,
    Medium,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "align")]
pub enum Align {
    #[variant(default)]
    Start,
    Center,
    End,
}

fn tone() -> VariantAxis {
    VariantAxis::typed(|tone: Tone| match tone {
        Tone::Default => "text-foreground",
        Tone::Muted => "text-muted-foreground",
        Tone::Primary => "text-primary",
        Tone::Destructive => "text-destructive",
    })
}

fn align() -> VariantAxis {
    VariantAxis::typed(|align: Align| match align {
        Align::Start => "text-start",
        Align::Center => "text-center",
        Align::End => "text-end",
    })
}

/// The `heading` table. Levels above 4 fall back to the `h4` styling.
pub fn heading() -> Result<VariantTable, TableError> {
    VariantTable::builder()
        .base("scroll-m-20 tracking-tight")
        .axis(
            VariantAxis::typed(|level: Level| match level {
                Level::H1 => "text-4xl font-extrabold lg:text-5xl",
                Level::H2 => "text-3xl font-semibold",
                Level::H3 => "text-2xl font-semibold",
                Level::H4 => "text-xl font-semibold",
            })
            .fallback("text-xl font-semibold"),
        )
        .axis(tone())
        .axis(align())
        .default_variant(Level::default())
        .default_variant(Tone::default())
        .build()
}

/// The `text` table.
pub fn text() -> Result<VariantTable, TableError> {
    VariantTable::builder()
        .base("leading-7")
        .axis(VariantAxis::typed(|size: TextSize| match size {
            TextSize::Xs => "text-xs",
            TextSize::Sm => "text-sm",
            TextSize::Base => "text-base",
            TextSize::Lg => "text-lg",
            TextSize::Xl => "text-xl",
        }))
        .axis(VariantAxis::typed(|weight: Weight| match weight {
            Weight::Normal => "font-normal",
            Weight::Medium => "font-medium",
            Weight::Semibold => "font-semibold",
            Weight::Bold => "font-bold",
        }))
        .axis(tone())
        .axis(align())
        .axis(
            VariantAxis::new("truncate")
                .value(true, "truncate")
                .value(false, ""),
        )
        .default_variant(TextSize::default())
        .default_variant(Weight::default())
        .default_variant(Tone::default())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropAssignment;

    #[test]
    fn test_heading_levels_are_numeric() {
        let table = heading().unwrap();
        let h1 = table.resolve(&PropAssignment::new().set("level", 1));
        assert!(h1.contains("text-4xl"));
        assert_eq!(Level::H3.value(), crate::VariantValue::Int(3));
    }

    #[test]
    fn test_deep_heading_uses_fallback() {
        let table = heading().unwrap();
        let h6 = table.resolve(&PropAssignment::new().set("level", 6));
        assert!(h6.contains("text-xl"));
        assert!(h6.contains("font-semibold"));
    }

    #[test]
    fn test_text_defaults_leave_align_unset() {
        let classes = text().unwrap().resolve(&PropAssignment::new());
        assert_eq!(
            classes.to_string(),
            "leading-7 text-base font-normal text-foreground"
        );
    }
}
