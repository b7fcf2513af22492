//! # Tailor - Variant-Driven Classes for Utility-CSS Design Systems
//!
//! Tailor turns component props into class strings. A component is described
//! once as a [`VariantTable`]: base tokens, named axes (`variant`, `size`,
//! `columns`, ...) mapping values to tokens, defaults, and compound rules for
//! combinations. Rendering resolves an assignment against the table, appends
//! breakpoint-prefixed overrides and caller classes, then collapses
//! conflicting utilities so the last one wins.
//!
//! ## Crates
//!
//! This facade re-exports:
//!
//! - the resolution core (`tailor-variants`): tables, resolution, merging,
//!   responsive overrides, YAML sheets and the registry
//! - the derive and embed macros (`tailor-macros`)
//! - the search widget controllers as [`search`] (`tailor-search`)
//!
//! and adds the built-in [`components`] and the MiniJinja [`template`]
//! integration.
//!
//! ## Quick Start
//!
//! ```rust
//! use tailor::{Breakpoint, BreakpointOverrides, PropAssignment, Responsive};
//! use tailor::components::{self, Columns, Gap};
//!
//! let registry = components::registry()?;
//!
//! let layout = Responsive::new(PropAssignment::new().with(Columns::One).with(Gap::Lg))
//!     .with_overrides(
//!         BreakpointOverrides::new()
//!             .set(Breakpoint::Lg, "columns", 4)
//!             .set(Breakpoint::Md, "columns", 2),
//!     );
//!
//! let class = registry.class_name_responsive("grid", &layout, None::<&str>)?;
//! assert_eq!(class, "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Typed Axes
//!
//! `#[derive(Variant)]` turns a fieldless enum into a typed axis, usable in
//! assignments, table builders and compound rules:
//!
//! ```rust
//! use tailor::{PropAssignment, Variant, VariantAxis, VariantTable};
//!
//! #[derive(Clone, Copy, Variant)]
//! #[variant(axis = "density")]
//! enum Density {
//!     Compact,
//!     #[variant(default)]
//!     Comfortable,
//! }
//!
//! let table = VariantTable::builder()
//!     .axis(VariantAxis::typed(|d: Density| match d {
//!         Density::Compact => "py-1",
//!         Density::Comfortable => "py-3",
//!     }))
//!     .default_variant(Density::default())
//!     .build()?;
//!
//! assert_eq!(table.resolve(&PropAssignment::new()).to_string(), "py-3");
//! assert_eq!(table.resolve(&PropAssignment::new().with(Density::Compact)).to_string(), "py-1");
//! # Ok::<(), tailor::TableError>(())
//! ```
//!
//! ## Sheets
//!
//! Tables can also live in YAML, loaded at runtime with
//! [`TableRegistry::add_dir`] or embedded at compile time with
//! [`embed_tables!`]. See the [`sheet`] module for the format.

// Generated code from the macros names `::tailor`.
extern crate self as tailor;

pub mod components;
pub mod template;

pub use tailor_variants::sheet;
pub use tailor_variants::{
    parse_table, split_tokens, walk_sheet_dir, Breakpoint, BreakpointOverrides, ClassList,
    CompoundRule, ConflictGroup, GroupDef, IntoTokens, Matcher, PropAssignment, RegistryError,
    Responsive, Sheet, SheetError, TableError, TableRegistry, TokenMerger, TokenMergerBuilder,
    UnknownBreakpoint, Variant, VariantAxis, VariantTable, VariantTableBuilder, VariantValue,
    SHEET_EXTENSIONS,
};

pub use tailor_macros::{embed_tables, Variant};

pub use tailor_search as search;

pub use template::{register_functions, register_filters, ClassRenderer};
