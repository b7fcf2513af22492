//! Built-in conflict groups for common utility-class families.

use once_cell::sync::Lazy;

use super::{ConflictGroup, TokenMerger};

const SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const RADII: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

const SHADOWS: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "none", "inner"];

/// Keyword values accepted by spacing utilities besides the numeric scale.
const SPACING_KEYWORDS: &[&str] = &["px", "auto"];

/// A spacing group matching only scale, keyword and bracketed values, so
/// custom classes such as `p-card` stay out of the slot.
fn spacing_group(name: &str) -> ConflictGroup {
    let prefix = format!("{name}-");
    ConflictGroup::new(name)
        .numeric(&prefix)
        .values(&prefix, SPACING_KEYWORDS)
}

/// Spacing families: a shorthand group plus per-side groups it overrides.
fn spacing(groups: &mut Vec<ConflictGroup>, short: &str) {
    let sides = ["x", "y", "t", "r", "b", "l", "s", "e"];
    let side_groups: Vec<String> = sides.iter().map(|s| format!("{short}{s}")).collect();

    groups.push(spacing_group(short).overrides(&side_groups));
    groups.push(
        spacing_group(&format!("{short}x")).overrides([format!("{short}r"), format!("{short}l")]),
    );
    groups.push(
        spacing_group(&format!("{short}y")).overrides([format!("{short}t"), format!("{short}b")]),
    );
    for side in ["t", "r", "b", "l", "s", "e"] {
        groups.push(spacing_group(&format!("{short}{side}")));
    }
}

/// Per-side border widths: `border-t`, `border-x-2`, ... overridden by
/// `border-width`.
fn border_sides(groups: &mut Vec<ConflictGroup>) {
    groups.push(
        ConflictGroup::new("border-w-x")
            .exact(["border-x"])
            .numeric("border-x-")
            .overrides(["border-w-r", "border-w-l"]),
    );
    groups.push(
        ConflictGroup::new("border-w-y")
            .exact(["border-y"])
            .numeric("border-y-")
            .overrides(["border-w-t", "border-w-b"]),
    );
    for side in ["t", "r", "b", "l", "s", "e"] {
        groups.push(
            ConflictGroup::new(&format!("border-w-{side}"))
                .exact([format!("border-{side}")])
                .numeric(&format!("border-{side}-")),
        );
    }
}

fn default_groups() -> Vec<ConflictGroup> {
    let mut groups = vec![
        ConflictGroup::new("display").exact([
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "grid",
            "inline-grid",
            "table",
            "contents",
            "flow-root",
            "hidden",
        ]),
        ConflictGroup::new("position").exact(["static", "fixed", "absolute", "relative", "sticky"]),
        ConflictGroup::new("visibility").exact(["visible", "invisible", "collapse"]),
        ConflictGroup::new("inset")
            .prefix("inset-")
            .overrides(["inset-x", "inset-y", "top", "right", "bottom", "left"]),
        ConflictGroup::new("inset-x")
            .prefix("inset-x-")
            .overrides(["right", "left"]),
        ConflictGroup::new("inset-y")
            .prefix("inset-y-")
            .overrides(["top", "bottom"]),
        ConflictGroup::new("top").prefix("top-"),
        ConflictGroup::new("right").prefix("right-"),
        ConflictGroup::new("bottom").prefix("bottom-"),
        ConflictGroup::new("left").prefix("left-"),
        ConflictGroup::new("z-index").prefix("z-"),
        ConflictGroup::new("size").prefix("size-").overrides(["w", "h"]),
        ConflictGroup::new("w").prefix("w-"),
        ConflictGroup::new("min-w").prefix("min-w-"),
        ConflictGroup::new("max-w").prefix("max-w-"),
        ConflictGroup::new("h").prefix("h-"),
        ConflictGroup::new("min-h").prefix("min-h-"),
        ConflictGroup::new("max-h").prefix("max-h-"),
        ConflictGroup::new("gap")
            .prefix("gap-")
            .overrides(["gap-x", "gap-y"]),
        ConflictGroup::new("gap-x").prefix("gap-x-"),
        ConflictGroup::new("gap-y").prefix("gap-y-"),
        ConflictGroup::new("grid-cols").prefix("grid-cols-"),
        ConflictGroup::new("grid-rows").prefix("grid-rows-"),
        ConflictGroup::new("grid-flow").prefix("grid-flow-"),
        ConflictGroup::new("col-span")
            .exact(["col-auto"])
            .prefix("col-span-"),
        ConflictGroup::new("col-start").prefix("col-start-"),
        ConflictGroup::new("col-end").prefix("col-end-"),
        ConflictGroup::new("row-span")
            .exact(["row-auto"])
            .prefix("row-span-"),
        ConflictGroup::new("row-start").prefix("row-start-"),
        ConflictGroup::new("row-end").prefix("row-end-"),
        ConflictGroup::new("flex-direction").exact([
            "flex-row",
            "flex-row-reverse",
            "flex-col",
            "flex-col-reverse",
        ]),
        ConflictGroup::new("flex-wrap").exact(["flex-wrap", "flex-wrap-reverse", "flex-nowrap"]),
        ConflictGroup::new("flex").values("flex-", ["1", "auto", "initial", "none"]),
        ConflictGroup::new("grow").exact(["grow"]).numeric("grow-"),
        ConflictGroup::new("shrink").exact(["shrink"]).numeric("shrink-"),
        ConflictGroup::new("align-items").values(
            "items-",
            ["start", "end", "center", "baseline", "stretch"],
        ),
        ConflictGroup::new("justify-content").values(
            "justify-",
            ["normal", "start", "end", "center", "between", "around", "evenly", "stretch"],
        ),
        ConflictGroup::new("justify-items").prefix("justify-items-"),
        ConflictGroup::new("justify-self").prefix("justify-self-"),
        ConflictGroup::new("align-self").prefix("self-"),
        ConflictGroup::new("font-size").values("text-", SIZES),
        ConflictGroup::new("text-align").exact([
            "text-left",
            "text-center",
            "text-right",
            "text-justify",
            "text-start",
            "text-end",
        ]),
        ConflictGroup::new("text-wrap").exact([
            "text-wrap",
            "text-nowrap",
            "text-balance",
            "text-pretty",
        ]),
        ConflictGroup::new("text-overflow").exact(["truncate", "text-ellipsis", "text-clip"]),
        ConflictGroup::new("text-color").prefix("text-"),
        ConflictGroup::new("font-weight").values("font-", WEIGHTS),
        ConflictGroup::new("font-family").exact(["font-sans", "font-serif", "font-mono"]),
        ConflictGroup::new("leading").prefix("leading-"),
        ConflictGroup::new("tracking").prefix("tracking-"),
        ConflictGroup::new("whitespace").prefix("whitespace-"),
        ConflictGroup::new("text-transform").exact([
            "uppercase",
            "lowercase",
            "capitalize",
            "normal-case",
        ]),
        ConflictGroup::new("bg-color").prefix("bg-"),
        ConflictGroup::new("rounded")
            .exact(["rounded"])
            .values("rounded-", RADII)
            .numeric("rounded-"),
        ConflictGroup::new("border-width")
            .exact(["border"])
            .numeric("border-")
            .overrides([
                "border-w-x",
                "border-w-y",
                "border-w-t",
                "border-w-r",
                "border-w-b",
                "border-w-l",
                "border-w-s",
                "border-w-e",
            ]),
        ConflictGroup::new("border-style").exact([
            "border-solid",
            "border-dashed",
            "border-dotted",
            "border-double",
            "border-hidden",
            "border-none",
        ]),
        ConflictGroup::new("border-color").prefix("border-"),
        ConflictGroup::new("ring-width").exact(["ring"]).numeric("ring-"),
        ConflictGroup::new("ring-color").prefix("ring-"),
        ConflictGroup::new("ring-offset-width").numeric("ring-offset-"),
        ConflictGroup::new("shadow")
            .exact(["shadow"])
            .values("shadow-", SHADOWS),
        ConflictGroup::new("shadow-color").prefix("shadow-"),
        ConflictGroup::new("opacity").numeric("opacity-"),
        ConflictGroup::new("overflow")
            .values("overflow-", ["auto", "hidden", "clip", "visible", "scroll"])
            .overrides(["overflow-x", "overflow-y"]),
        ConflictGroup::new("overflow-x").prefix("overflow-x-"),
        ConflictGroup::new("overflow-y").prefix("overflow-y-"),
        ConflictGroup::new("cursor").prefix("cursor-"),
        ConflictGroup::new("pointer-events").prefix("pointer-events-"),
        ConflictGroup::new("select").prefix("select-"),
        ConflictGroup::new("outline-style").exact([
            "outline",
            "outline-none",
            "outline-hidden",
            "outline-dashed",
            "outline-dotted",
            "outline-double",
        ]),
        ConflictGroup::new("transition").exact([
            "transition",
            "transition-none",
            "transition-all",
            "transition-colors",
            "transition-opacity",
            "transition-shadow",
            "transition-transform",
        ]),
        ConflictGroup::new("duration").numeric("duration-"),
        ConflictGroup::new("aspect").prefix("aspect-"),
        ConflictGroup::new("object-fit").values(
            "object-",
            ["contain", "cover", "fill", "none", "scale-down"],
        ),
    ];

    spacing(&mut groups, "p");
    spacing(&mut groups, "m");
    border_sides(&mut groups);
    groups
}

pub(super) static DEFAULT_MERGER: Lazy<TokenMerger> = Lazy::new(|| {
    let mut merger = TokenMerger::new();
    for group in default_groups() {
        merger.add_group(group);
    }
    merger
});
