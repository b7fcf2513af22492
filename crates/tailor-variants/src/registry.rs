//! Registry of component tables.
//!
//! [`TableRegistry`] maps component names to [`VariantTable`]s and owns the
//! [`TokenMerger`] used to produce final class strings. Tables come from
//! three sources:
//!
//! 1. **Programmatic** tables added with [`TableRegistry::add_table`]
//! 2. **Inline** YAML added with [`TableRegistry::add_inline`] or
//!    [`TableRegistry::add_sheet`]
//! 3. **Directories** of sheet files added with [`TableRegistry::add_dir`]
//!
//! # Collision Handling
//!
//! Programmatic and inline additions replace an existing table of the same
//! name, so applications can override a stock component. Sheet files loaded
//! from directories are stricter: a component defined by two different files
//! is an error naming both paths.
//!
//! # Example
//!
//! ```rust
//! use tailor_variants::{PropAssignment, TableRegistry};
//!
//! let mut registry = TableRegistry::new();
//! registry
//!     .add_inline("badge", "base: inline-flex px-2.5\nvariants:\n  size:\n    sm: px-2\n")
//!     .unwrap();
//!
//! let class = registry
//!     .class_name("badge", &PropAssignment::new().set("size", "sm"), "font-semibold")
//!     .unwrap();
//! assert_eq!(class, "inline-flex px-2 font-semibold");
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::assignment::PropAssignment;
use crate::error::{RegistryError, SheetError};
use crate::merge::TokenMerger;
use crate::responsive::Responsive;
use crate::sheet::{parse_table, Sheet};
use crate::table::VariantTable;
use crate::tokens::IntoTokens;

/// Recognized sheet file extensions.
pub const SHEET_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// Component tables plus the merger applied to their output.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: BTreeMap<String, VariantTable>,
    sources: BTreeMap<String, PathBuf>,
    merger: TokenMerger,
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRegistry {
    /// Creates an empty registry using the built-in merger.
    pub fn new() -> Self {
        Self::with_merger(TokenMerger::tailwind())
    }

    /// Creates an empty registry with a custom merger.
    pub fn with_merger(merger: TokenMerger) -> Self {
        Self {
            tables: BTreeMap::new(),
            sources: BTreeMap::new(),
            merger,
        }
    }

    /// Registers a table, replacing one with the same name.
    pub fn add_table(&mut self, name: impl Into<String>, table: VariantTable) {
        let name = name.into();
        self.sources.remove(&name);
        self.tables.insert(name, table);
    }

    /// Parses a single table definition and registers it under `name`.
    pub fn add_inline(&mut self, name: &str, yaml: &str) -> Result<(), SheetError> {
        let table = parse_table(name, yaml)?;
        self.add_table(name, table);
        Ok(())
    }

    /// Parses a sheet and registers every component in it, along with its
    /// merge groups. Returns the number of components added.
    pub fn add_sheet(&mut self, yaml: &str) -> Result<usize, SheetError> {
        let sheet = Sheet::from_yaml(yaml)?;
        let count = sheet.tables.len();
        self.absorb(sheet, None);
        Ok(count)
    }

    /// Loads every `.yaml`/`.yml` sheet below `dir`, recursively.
    ///
    /// Files are visited in path order. Returns the number of components
    /// added.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Io`] if the directory cannot be walked
    /// - [`RegistryError::Sheet`] if a file fails to parse or validate
    /// - [`RegistryError::Duplicate`] if two files define the same component
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let dir = dir.as_ref();
        let files = walk_sheet_dir(dir).map_err(|source| RegistryError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut count = 0;
        for path in files {
            let content = std::fs::read_to_string(&path).map_err(|source| RegistryError::Io {
                path: path.clone(),
                source,
            })?;
            let sheet = Sheet::from_yaml(&content).map_err(|source| RegistryError::Sheet {
                path: path.clone(),
                source,
            })?;

            for component in sheet.tables.keys() {
                if let Some(first) = self.sources.get(component) {
                    return Err(RegistryError::Duplicate {
                        component: component.clone(),
                        first: first.clone(),
                        second: path.clone(),
                    });
                }
            }

            count += sheet.tables.len();
            debug!(path = %path.display(), components = sheet.tables.len(), "loaded sheet");
            self.absorb(sheet, Some(&path));
        }
        Ok(count)
    }

    fn absorb(&mut self, sheet: Sheet, path: Option<&Path>) {
        for group in sheet.groups {
            self.merger.add_group(group);
        }
        for (name, table) in sheet.tables {
            match path {
                Some(path) => {
                    self.sources.insert(name.clone(), path.to_path_buf());
                }
                None => {
                    self.sources.remove(&name);
                }
            }
            self.tables.insert(name, table);
        }
    }

    /// Looks up a table.
    pub fn get(&self, name: &str) -> Result<&VariantTable, RegistryError> {
        self.tables
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            })
    }

    /// Returns whether a component is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Component names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no components are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The merger applied by [`class_name`](Self::class_name).
    pub fn merger(&self) -> &TokenMerger {
        &self.merger
    }

    /// Mutable access to the merger, to add conflict groups.
    pub fn merger_mut(&mut self) -> &mut TokenMerger {
        &mut self.merger
    }

    /// Resolves a component and merges the result into a class string.
    pub fn class_name(
        &self,
        component: &str,
        assignment: &PropAssignment,
        extra: impl IntoTokens,
    ) -> Result<String, RegistryError> {
        let table = self.get(component)?;
        Ok(table.class_name(assignment, extra, &self.merger))
    }

    /// Like [`class_name`](Self::class_name), with breakpoint overrides.
    pub fn class_name_responsive(
        &self,
        component: &str,
        responsive: &Responsive,
        extra: impl IntoTokens,
    ) -> Result<String, RegistryError> {
        let table = self.get(component)?;
        Ok(self
            .merger
            .merge(table.resolve_responsive(responsive, extra))
            .join())
    }
}

/// Returns all sheet files below `root`, sorted by path.
pub fn walk_sheet_dir(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    walk_dir_recursive(root.as_ref(), &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_dir_recursive(current: &Path, files: &mut Vec<PathBuf>) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir_recursive(&path, files)?;
        } else if path.is_file() && is_sheet_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_sheet_file(path: &Path) -> bool {
    let name = path.to_string_lossy();
    SHEET_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
