//! Integration tests for `embed_tables!`.

use tailor::{embed_tables, PropAssignment};

#[test]
fn embeds_nested_sheets() {
    let registry = embed_tables!("tests/fixtures/tables");

    assert!(registry.contains("stack"));
    assert!(registry.contains("panel"));
    assert!(registry.contains("input"));
    assert_eq!(registry.len(), 3);
}

#[test]
fn embedded_tables_resolve() {
    let registry = embed_tables!("tests/fixtures/tables");

    let class = registry
        .class_name(
            "stack",
            &PropAssignment::new().set("align", "center"),
            None::<&str>,
        )
        .unwrap();
    assert_eq!(class, "flex flex-col gap-4 items-center");

    let class = registry
        .class_name(
            "panel",
            &PropAssignment::new().set("tone", "danger").set("padded", true),
            None::<&str>,
        )
        .unwrap();
    assert_eq!(
        class,
        "rounded-lg border border-destructive bg-destructive/10 p-6 pl-8"
    );
}

#[test]
fn embedded_merge_groups_apply() {
    let registry = embed_tables!("tests/fixtures/tables");
    let merged = registry.merger().merge("tone-ring-a tone-ring-b").join();
    assert_eq!(merged, "tone-ring-b");
}

#[test]
fn fallback_from_embedded_sheet() {
    let registry = embed_tables!("tests/fixtures/tables");
    let class = registry
        .class_name(
            "input",
            &PropAssignment::new().set("size", "xl"),
            None::<&str>,
        )
        .unwrap();
    assert!(class.contains("h-9"));
}
