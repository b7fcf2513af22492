//! `#[derive(Variant)]` from the outside.

use tailor::{CompoundRule, PropAssignment, Variant, VariantAxis, VariantTable, VariantValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
enum ButtonTone {
    #[variant(default)]
    Neutral,
    ExtraLoud,
    #[variant(rename = "2xl")]
    Huge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
#[variant(axis = "elevated")]
enum Elevated {
    #[variant(value = true)]
    Yes,
    #[variant(value = false, default)]
    No,
}

#[test]
fn axis_name_defaults_to_kebab_case() {
    assert_eq!(ButtonTone::AXIS, "button-tone");
    assert_eq!(Elevated::AXIS, "elevated");
}

#[test]
fn values_follow_attributes() {
    assert_eq!(ButtonTone::Neutral.value(), VariantValue::from("neutral"));
    assert_eq!(ButtonTone::ExtraLoud.value(), VariantValue::from("extra-loud"));
    assert_eq!(ButtonTone::Huge.value(), VariantValue::from("2xl"));
    assert_eq!(Elevated::Yes.value(), VariantValue::Bool(true));
    assert_eq!(VariantValue::from(Elevated::No), VariantValue::Bool(false));
}

#[test]
fn all_lists_variants_in_declaration_order() {
    assert_eq!(
        ButtonTone::ALL,
        &[ButtonTone::Neutral, ButtonTone::ExtraLoud, ButtonTone::Huge]
    );
}

#[test]
fn default_attribute_derives_default() {
    assert_eq!(ButtonTone::default(), ButtonTone::Neutral);
    assert_eq!(Elevated::default(), Elevated::No);
}

#[test]
fn typed_table_round_trip() {
    let table = VariantTable::builder()
        .axis(VariantAxis::typed(|tone: ButtonTone| match tone {
            ButtonTone::Neutral => "text-foreground",
            ButtonTone::ExtraLoud => "text-lg font-bold",
            ButtonTone::Huge => "text-2xl font-black",
        }))
        .axis(VariantAxis::typed(|elevated: Elevated| match elevated {
            Elevated::Yes => "shadow-md",
            Elevated::No => "",
        }))
        .compound(
            CompoundRule::new("ring-2")
                .when_variant(ButtonTone::Huge)
                .when_variant(Elevated::Yes),
        )
        .default_variant(ButtonTone::default())
        .default_variant(Elevated::default())
        .build()
        .unwrap();

    assert_eq!(table.resolve(&PropAssignment::new()).to_string(), "text-foreground");
    assert_eq!(
        table
            .resolve(&PropAssignment::new().with(ButtonTone::Huge).with(Elevated::Yes))
            .to_string(),
        "text-2xl font-black shadow-md ring-2"
    );
}
