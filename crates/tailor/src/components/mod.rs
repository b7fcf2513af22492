//! Built-in component tables.
//!
//! Each function returns a validated [`VariantTable`]; [`registry`] loads all
//! of them under their component names. Tables can be replaced or extended
//! afterwards with [`TableRegistry::add_table`] or YAML sheets.
//!
//! # Example
//!
//! ```rust
//! use tailor::components::{self, ButtonSize, ButtonVariant};
//! use tailor::PropAssignment;
//!
//! let registry = components::registry()?;
//! let class = registry.class_name(
//!     "button",
//!     &PropAssignment::new().with(ButtonVariant::Outline).with(ButtonSize::Sm),
//!     "ml-auto",
//! )?;
//! assert!(class.ends_with("ml-auto"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod badge;
mod button;
mod card;
mod grid;
mod modal;
mod search_bar;
mod typography;

use tracing::debug;

use crate::{TableError, TableRegistry, VariantTable};

pub use badge::{badge, BadgeSize, BadgeVariant};
pub use button::{button, ButtonSize, ButtonVariant};
pub use card::{card, Elevation, Padding};
pub use grid::{grid, grid_item, Columns, Flow, Gap};
pub use modal::{modal, ModalKind, ModalSize, Side};
pub use search_bar::{search_bar, search_suggestion, SearchSize};
pub use typography::{heading, text, Align, Level, TextSize, Tone, Weight};

type TableFn = fn() -> Result<VariantTable, TableError>;

/// Every built-in component, by registry name.
pub const COMPONENTS: &[(&str, TableFn)] = &[
    ("badge", badge),
    ("button", button),
    ("card", card),
    ("grid", grid),
    ("grid_item", grid_item),
    ("heading", heading),
    ("modal", modal),
    ("search_bar", search_bar),
    ("search_suggestion", search_suggestion),
    ("text", text),
];

/// Builds a registry holding every built-in component, with the default
/// utility-class merger.
pub fn registry() -> Result<TableRegistry, TableError> {
    let mut registry = TableRegistry::new();
    for (name, table) in COMPONENTS {
        registry.add_table(*name, table()?);
    }
    debug!(count = registry.len(), "loaded built-in components");
    Ok(registry)
}
