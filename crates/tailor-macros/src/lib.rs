//! Proc macros for Tailor.
//!
//! # Macros
//!
//! - [`derive@Variant`] - Typed axis enums usable wherever an axis value is expected
//! - [`embed_tables!`] - Embed YAML table sheets (`.yaml`, `.yml`), validated at compile time
//!
//! Generated code refers to `::tailor`, so these macros are meant to be used
//! through the `tailor` crate, which re-exports them.
//!
//! # Example
//!
//! ```rust,ignore
//! use tailor::{embed_tables, PropAssignment, Variant};
//!
//! #[derive(Clone, Copy, Variant)]
//! #[variant(axis = "size")]
//! enum Size {
//!     Sm,
//!     #[variant(default)]
//!     Md,
//!     Lg,
//! }
//!
//! let registry = embed_tables!("./tables");
//! let class = registry.class_name("button", &PropAssignment::new().with(Size::Lg), None::<&str>)?;
//! ```

use proc_macro::TokenStream;
use quote::quote;
use std::path::{Path, PathBuf};
use syn::{parse_macro_input, DeriveInput, LitStr};

mod variant;

/// Sheet file extensions.
const SHEET_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// Derives `tailor::Variant` for a fieldless enum.
///
/// # Attributes
///
/// - `#[variant(axis = "size")]` on the enum: the axis name. Defaults to the
///   enum name in kebab case (`ButtonSize` → `"button-size"`).
/// - `#[variant(rename = "2xl")]` on a variant: the string value. Defaults
///   to the variant name in kebab case (`ExtraLarge` → `"extra-large"`).
/// - `#[variant(value = 4)]` on a variant: an integer, boolean or string value.
/// - `#[variant(default)]` on one variant: also derives `Default`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Variant)]
/// #[variant(axis = "columns")]
/// enum Columns {
///     #[variant(value = 1, default)]
///     One,
///     #[variant(value = 2)]
///     Two,
///     AutoFill,
/// }
///
/// assert_eq!(Columns::AutoFill.value(), VariantValue::from("auto-fill"));
/// ```
#[proc_macro_derive(Variant, attributes(variant))]
pub fn variant_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    variant::variant_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Embeds all sheet files from a directory at compile time.
///
/// Walks the directory (relative to the calling crate's manifest), parses
/// and validates every `.yaml`/`.yml` sheet, and expands to a
/// `tailor::TableRegistry` with all components loaded. A malformed sheet or
/// a component defined in two files is a compile error.
///
/// # Example
///
/// ```rust,ignore
/// use tailor::embed_tables;
///
/// let registry = embed_tables!("./tables");
/// assert!(registry.contains("button"));
/// ```
///
/// # Compile-Time Errors
///
/// - Directory doesn't exist or is not readable
/// - File content is not valid UTF-8
/// - A sheet fails to parse or validate
/// - Two files define the same component
#[proc_macro]
pub fn embed_tables(input: TokenStream) -> TokenStream {
    let path_lit = parse_macro_input!(input as LitStr);
    let dir_path = resolve_path(&path_lit.value());

    let files = match collect_files(&dir_path, SHEET_EXTENSIONS).and_then(|files| {
        validate_sheets(&files)?;
        Ok(files)
    }) {
        Ok(files) => files,
        Err(e) => {
            return syn::Error::new(path_lit.span(), e)
                .to_compile_error()
                .into();
        }
    };

    let entries: Vec<_> = files
        .iter()
        .map(|(name, content)| {
            let message = format!("embedded sheet '{name}' was validated at compile time");
            quote! {
                registry.add_sheet(#content).expect(#message);
            }
        })
        .collect();

    let expanded = quote! {
        {
            let mut registry = ::tailor::TableRegistry::new();
            #(#entries)*
            registry
        }
    };

    expanded.into()
}

/// Resolves a path relative to the calling crate's manifest directory.
fn resolve_path(path: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR should be set during compilation");

    Path::new(&manifest_dir).join(path)
}

/// Parses every sheet and checks that component names are unique.
fn validate_sheets(files: &[(String, String)]) -> Result<(), String> {
    let mut owners: std::collections::BTreeMap<String, &str> = std::collections::BTreeMap::new();
    for (name, content) in files {
        let sheet = tailor_variants::Sheet::from_yaml(content)
            .map_err(|e| format!("Invalid sheet {}: {}", name, e))?;
        for component in sheet.tables.keys() {
            if let Some(first) = owners.insert(component.clone(), name.as_str()) {
                return Err(format!(
                    "Component '{}' is defined in both {} and {}",
                    component, first, name
                ));
            }
        }
    }
    Ok(())
}

/// Collects all files from a directory with matching extensions.
///
/// Returns `(relative name with extension, content)` pairs sorted by name.
fn collect_files(dir: &Path, extensions: &[&str]) -> Result<Vec<(String, String)>, String> {
    if !dir.exists() {
        return Err(format!("Directory not found: {}", dir.display()));
    }

    if !dir.is_dir() {
        return Err(format!("Path is not a directory: {}", dir.display()));
    }

    let mut files = Vec::new();
    collect_files_recursive(dir, dir, extensions, &mut files)?;
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn collect_files_recursive(
    current: &Path,
    root: &Path,
    extensions: &[&str],
    files: &mut Vec<(String, String)>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(current)
        .map_err(|e| format!("Failed to read {}: {}", current.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() {
            collect_files_recursive(&path, root, extensions, files)?;
        } else if path.is_file() {
            if let Some(name) = relative_name(&path, root, extensions) {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
                files.push((name, content));
            }
        }
    }

    Ok(())
}

fn relative_name(path: &Path, root: &Path, extensions: &[&str]) -> Option<String> {
    let path_str = path.to_string_lossy();
    if !extensions.iter().any(|ext| path_str.ends_with(ext)) {
        return None;
    }
    let relative = path.strip_prefix(root).ok()?;
    Some(
        relative
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/"),
    )
}
