//! Variant tables and class-token resolution.
//!
//! A component's appearance is described once, as data: base tokens, named
//! axes (`variant`, `size`, ...) mapping each value to tokens, defaults, and
//! compound rules that apply only when several axes hold together. This crate
//! turns such a table plus a prop assignment into an ordered class list.
//!
//! - [`VariantTable`]: the table, built and validated by [`VariantTableBuilder`]
//! - [`PropAssignment`]: the axis values chosen for one render
//! - [`TokenMerger`]: last-wins merging of conflicting utility tokens
//! - [`BreakpointOverrides`]: per-breakpoint values expanded to `md:`-style tokens
//! - [`TableRegistry`]: named tables loaded from code or YAML sheets
//!
//! # Example
//!
//! ```rust
//! use tailor_variants::{PropAssignment, TokenMerger, VariantAxis, VariantTable};
//!
//! let table = VariantTable::builder()
//!     .axis(
//!         VariantAxis::new("size")
//!             .value("sm", "h-8")
//!             .value("md", "h-9")
//!             .value("lg", "h-10")
//!             .default_value("md"),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let classes = table.resolve_with(&PropAssignment::new().set("size", "lg"), "custom");
//! assert_eq!(classes.tokens(), &["h-10", "custom"]);
//!
//! let merged = table.class_name(&PropAssignment::new(), "h-12", &TokenMerger::tailwind());
//! assert_eq!(merged, "h-12");
//! ```
//!
//! Resolution never fails: tables are validated when built, and values an
//! axis does not declare contribute nothing (or the axis fallback).

mod assignment;
mod error;
mod merge;
mod registry;
mod resolve;
mod responsive;
pub mod sheet;
mod table;
mod tokens;
mod value;

pub use assignment::PropAssignment;
pub use error::{RegistryError, SheetError, TableError};
pub use merge::{ConflictGroup, GroupDef, Matcher, TokenMerger, TokenMergerBuilder};
pub use registry::{walk_sheet_dir, TableRegistry, SHEET_EXTENSIONS};
pub use responsive::{Breakpoint, BreakpointOverrides, Responsive, UnknownBreakpoint};
pub use sheet::{parse_table, Sheet};
pub use table::{CompoundRule, VariantAxis, VariantTable, VariantTableBuilder};
pub use tokens::{split_tokens, ClassList, IntoTokens};
pub use value::{Variant, VariantValue};
