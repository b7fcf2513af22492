//! End-to-end resolution through sheets, the registry and the merger.

use std::fs;

use tailor_variants::{
    Breakpoint, BreakpointOverrides, CompoundRule, PropAssignment, Responsive, TableError,
    TableRegistry, TokenMerger, VariantAxis, VariantTable,
};
use tempfile::TempDir;

const COMPONENTS: &str = r#"
button:
  base: inline-flex items-center justify-center rounded-md text-sm font-medium
  variants:
    variant:
      default: bg-primary text-primary-foreground shadow-xs
      outline: border bg-background shadow-xs
      ghost: hover:bg-accent
    size:
      sm: h-8 gap-1.5 px-3
      default: h-9 px-4 py-2
      lg: h-10 px-6
      icon: size-9
  defaults:
    variant: default
    size: default
  compound:
    - when: { variant: ghost, size: icon }
      class: rounded-full

grid:
  base: grid
  variants:
    columns:
      1: grid-cols-1
      2: grid-cols-2
      3: grid-cols-3
      4: grid-cols-4
      auto-fill: grid-cols-[repeat(auto-fill,minmax(0,1fr))]
    gap:
      none: gap-0
      md: gap-4
  defaults:
    columns: 1
    gap: md
"#;

fn registry() -> TableRegistry {
    let mut registry = TableRegistry::new();
    registry.add_sheet(COMPONENTS).unwrap();
    registry
}

#[test]
fn defaults_apply_when_nothing_is_assigned() {
    let class = registry()
        .class_name("button", &PropAssignment::new(), None::<&str>)
        .unwrap();
    assert_eq!(
        class,
        "inline-flex items-center justify-center rounded-md text-sm font-medium bg-primary text-primary-foreground shadow-xs h-9 px-4 py-2"
    );
}

#[test]
fn caller_classes_override_table_tokens() {
    let class = registry()
        .class_name(
            "button",
            &PropAssignment::new().set("size", "lg"),
            "px-8 bg-destructive",
        )
        .unwrap();
    assert!(class.ends_with("h-10 px-8 bg-destructive"));
    assert!(!class.contains("px-6"));
    assert!(!class.contains("bg-primary"));
}

#[test]
fn compound_rule_applies_only_for_exact_combination() {
    let registry = registry();
    let ghost_icon = PropAssignment::new()
        .set("variant", "ghost")
        .set("size", "icon");
    let class = registry.class_name("button", &ghost_icon, None::<&str>).unwrap();
    assert!(class.contains("rounded-full"));
    assert!(!class.contains("rounded-md"));

    let ghost_sm = PropAssignment::new()
        .set("variant", "ghost")
        .set("size", "sm");
    let class = registry.class_name("button", &ghost_sm, None::<&str>).unwrap();
    assert!(!class.contains("rounded-full"));
}

#[test]
fn undeclared_value_contributes_nothing() {
    let table = registry().get("button").unwrap().clone();
    let classes = table.resolve(&PropAssignment::new().set("size", "huge"));
    assert!(!classes.iter().any(|t| t.starts_with("h-")));
}

#[test]
fn responsive_grid_breakpoints_are_ordered() {
    let registry = registry();
    let responsive = Responsive::new(PropAssignment::new().set("columns", 1)).with_overrides(
        BreakpointOverrides::new()
            .set(Breakpoint::Xl, "columns", "auto-fill")
            .set(Breakpoint::Md, "columns", 3)
            .set(Breakpoint::Sm, "columns", 2),
    );
    let class = registry
        .class_name_responsive("grid", &responsive, None::<&str>)
        .unwrap();
    assert_eq!(
        class,
        "grid grid-cols-1 gap-4 sm:grid-cols-2 md:grid-cols-3 xl:grid-cols-[repeat(auto-fill,minmax(0,1fr))]"
    );
}

#[test]
fn responsive_overrides_from_pairs() {
    let table = registry().get("grid").unwrap().clone();
    let overrides = BreakpointOverrides::from_pairs([
        ("lg", PropAssignment::new().set("columns", 4)),
        ("sm", PropAssignment::new().set("columns", 2)),
    ]);
    assert_eq!(
        table.responsive(&overrides).tokens(),
        &["sm:grid-cols-2", "lg:grid-cols-4"]
    );
}

#[test]
fn sheets_load_from_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("components.yaml"), COMPONENTS).unwrap();
    fs::create_dir(dir.path().join("extra")).unwrap();
    fs::write(
        dir.path().join("extra/badge.yml"),
        "badge:\n  base: inline-flex rounded-md border px-2 py-0.5 text-xs\n",
    )
    .unwrap();

    let mut registry = TableRegistry::new();
    assert_eq!(registry.add_dir(dir.path()).unwrap(), 3);
    assert!(registry.contains("badge"));
    assert!(registry.contains("grid"));
}

#[test]
fn programmatic_table_matches_sheet_table() {
    let built = VariantTable::builder()
        .base("grid")
        .axis(
            VariantAxis::new("columns")
                .value(1, "grid-cols-1")
                .value(2, "grid-cols-2"),
        )
        .compound(CompoundRule::new("gap-2").when("columns", 2))
        .build()
        .unwrap();

    let mut registry = TableRegistry::with_merger(TokenMerger::new());
    registry.add_table("grid", built);
    let class = registry
        .class_name("grid", &PropAssignment::new().set("columns", 2), None::<&str>)
        .unwrap();
    assert_eq!(class, "grid grid-cols-2 gap-2");
}

#[test]
fn invalid_tables_are_rejected_at_build_time() {
    let err = VariantTable::builder()
        .axis(VariantAxis::new("size").value("sm", "h-8"))
        .compound(CompoundRule::new("px-2").when("size", "xl"))
        .build()
        .unwrap_err();
    assert!(matches!(err, TableError::UnknownValue { .. }));
}
