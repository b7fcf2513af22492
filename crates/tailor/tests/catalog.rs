//! The built-in catalog, extended and overridden the way an application would.

use std::fs;

use proptest::prelude::*;
use tailor::components::{self, ButtonSize, ButtonVariant, Columns, ModalKind, Side};
use tailor::{Breakpoint, BreakpointOverrides, PropAssignment, Responsive, Variant};
use tempfile::TempDir;

#[test]
fn typed_props_through_the_registry() {
    let registry = components::registry().unwrap();
    let class = registry
        .class_name(
            "button",
            &PropAssignment::new()
                .with(ButtonVariant::Destructive)
                .with(ButtonSize::Lg),
            "w-40",
        )
        .unwrap();
    assert!(class.contains("bg-destructive"));
    assert!(class.contains("h-10"));
    assert!(class.ends_with("w-40"));
}

#[test]
fn sheet_directory_overrides_a_builtin() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("brand.yaml"),
        "button:\n  base: btn\n  variants:\n    variant:\n      primary: btn-primary\n  defaults:\n    variant: primary\n",
    )
    .unwrap();

    let mut registry = components::registry().unwrap();
    let before = registry.len();
    assert_eq!(registry.add_dir(dir.path()).unwrap(), 1);
    assert_eq!(registry.len(), before);

    let class = registry
        .class_name("button", &PropAssignment::new(), None::<&str>)
        .unwrap();
    assert_eq!(class, "btn btn-primary");
}

#[test]
fn sheet_modal_side_only_matters_for_sheets() {
    let registry = components::registry().unwrap();
    let dialog = registry
        .class_name("modal", &PropAssignment::new().with(Side::Left), None::<&str>)
        .unwrap();
    let sheet = registry
        .class_name(
            "modal",
            &PropAssignment::new().with(ModalKind::Sheet).with(Side::Left),
            None::<&str>,
        )
        .unwrap();
    assert!(!dialog.contains("border-r"));
    assert!(sheet.contains("border-r"));
}

fn column() -> impl Strategy<Value = Columns> {
    proptest::sample::select(Columns::ALL.to_vec())
}

fn breakpoint() -> impl Strategy<Value = Breakpoint> {
    proptest::sample::select(Breakpoint::ALL.to_vec())
}

proptest! {
    #[test]
    fn grid_classes_are_deterministic(
        base in column(),
        overrides in proptest::collection::vec((breakpoint(), column()), 0..6),
    ) {
        let registry = components::registry().unwrap();
        let mut bp = BreakpointOverrides::new();
        for (breakpoint, columns) in &overrides {
            bp.insert(*breakpoint, Columns::AXIS, *columns);
        }
        let layout = Responsive::new(PropAssignment::new().with(base)).with_overrides(bp);

        let first = registry.class_name_responsive("grid", &layout, None::<&str>).unwrap();
        let second = registry.class_name_responsive("grid", &layout, None::<&str>).unwrap();
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn responsive_prefixes_follow_breakpoint_order(
        overrides in proptest::collection::vec((breakpoint(), column()), 1..6),
    ) {
        let registry = components::registry().unwrap();
        let mut bp = BreakpointOverrides::new();
        for (breakpoint, columns) in &overrides {
            bp.insert(*breakpoint, Columns::AXIS, *columns);
        }
        let layout = Responsive::new(PropAssignment::new()).with_overrides(bp);
        let class = registry.class_name_responsive("grid", &layout, None::<&str>).unwrap();

        let positions: Vec<usize> = class
            .split(' ')
            .filter_map(|token| token.split_once(':'))
            .filter_map(|(prefix, _)| Breakpoint::parse(prefix))
            .map(|bp| Breakpoint::ALL.iter().position(|b| *b == bp).unwrap())
            .collect();
        prop_assert!(!positions.is_empty());
        prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }
}
