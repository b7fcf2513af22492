//! MiniJinja integration.
//!
//! Server-rendered markup can compute classes from the same tables as Rust
//! code:
//!
//! ```jinja
//! <button class="{{ cx('button', variant='outline', size='sm', class='ml-auto') }}">
//! <div class="{{ cx('grid', columns=1, md_columns=2, lg_columns=4) }}">
//! <div class="{{ 'p-2 p-4 text-sm' | merge_classes }}">
//! ```
//!
//! `cx` keyword arguments form the assignment. `class` supplies extra tokens
//! (a string or a list of strings). A key made of a breakpoint name, `_` and an
//! axis name (`md_columns`, `xxl_span`) becomes a breakpoint override. Other
//! underscores map to `-` when the table declares no axis with the literal
//! name. `none` values are skipped.

use std::sync::Arc;

use minijinja::value::{Kwargs, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};
use serde::Serialize;
use tracing::trace;

use crate::{
    Breakpoint, BreakpointOverrides, PropAssignment, Responsive, TableRegistry, VariantTable,
    VariantValue,
};

const CLASS_KEY: &str = "class";

/// Registers the `cx` function on a MiniJinja environment.
pub fn register_functions(env: &mut Environment<'static>, registry: Arc<TableRegistry>) {
    env.add_function(
        "cx",
        move |component: String, kwargs: Kwargs| -> Result<String, Error> {
            let table = registry.get(&component).map_err(|e| {
                Error::new(ErrorKind::InvalidOperation, e.to_string()).with_source(e)
            })?;
            let (responsive, extra) = assignment_from_kwargs(table, &kwargs)?;
            Ok(registry
                .merger()
                .merge(table.resolve_responsive(&responsive, extra))
                .join())
        },
    );
}

/// Registers the `merge_classes` filter on a MiniJinja environment.
///
/// Accepts a class string or a list of class strings.
pub fn register_filters(env: &mut Environment<'static>, registry: Arc<TableRegistry>) {
    env.add_filter(
        "merge_classes",
        move |value: Value| -> Result<String, Error> {
            let tokens = tokens_from_value(&value)?;
            Ok(registry.merger().merge(tokens).join())
        },
    );
}

fn assignment_from_kwargs(
    table: &VariantTable,
    kwargs: &Kwargs,
) -> Result<(Responsive, Vec<String>), Error> {
    let mut base = PropAssignment::new();
    let mut overrides = BreakpointOverrides::new();
    let mut extra = Vec::new();

    for key in kwargs.args() {
        let value: Value = kwargs.get(key)?;
        if key == CLASS_KEY {
            extra = tokens_from_value(&value)?;
            continue;
        }
        let Some(value) = variant_value(key, &value)? else {
            continue;
        };

        if table.axis(key).is_some() {
            base.insert(key, value);
            continue;
        }
        match key.split_once('_') {
            Some((prefix, axis)) if !axis.is_empty() => match Breakpoint::parse(prefix) {
                Some(breakpoint) => {
                    overrides.insert(breakpoint, &axis_name(table, axis), value);
                }
                None => base.insert(&axis_name(table, key), value),
            },
            _ => base.insert(&axis_name(table, key), value),
        }
    }

    Ok((Responsive::new(base).with_overrides(overrides), extra))
}

/// Maps a template identifier to the axis it names.
fn axis_name(table: &VariantTable, key: &str) -> String {
    if table.axis(key).is_some() {
        return key.to_string();
    }
    let dashed = key.replace('_', "-");
    if table.axis(&dashed).is_none() {
        trace!(key, "keyword names no axis of this table");
    }
    dashed
}

fn variant_value(key: &str, value: &Value) -> Result<Option<VariantValue>, Error> {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(None),
        ValueKind::Bool => Ok(Some(VariantValue::Bool(value.is_true()))),
        ValueKind::Number => i64::try_from(value.clone())
            .map(|n| Some(VariantValue::Int(n)))
            .map_err(|_| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!("'{key}' must be an integer, got {value}"),
                )
            }),
        ValueKind::String => Ok(value.as_str().map(VariantValue::from)),
        _ => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("'{key}' must be a string, integer or boolean"),
        )),
    }
}

fn tokens_from_value(value: &Value) -> Result<Vec<String>, Error> {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(Vec::new()),
        ValueKind::Seq | ValueKind::Iterable => {
            let mut tokens = Vec::new();
            for item in value.try_iter()? {
                tokens.extend(crate::split_tokens(&item.to_string()).map(str::to_string));
            }
            Ok(tokens)
        }
        _ => Ok(crate::split_tokens(&value.to_string())
            .map(str::to_string)
            .collect()),
    }
}

/// A MiniJinja environment with `cx` and `merge_classes` registered.
///
/// # Example
///
/// ```rust
/// use minijinja::context;
/// use tailor::{components, ClassRenderer};
///
/// let renderer = ClassRenderer::new(components::registry()?);
/// let html = renderer.render_str(
///     r#"<div class="{{ cx('grid', columns=1, lg_columns=3, gap='lg') }}"></div>"#,
///     context! {},
/// )?;
/// assert_eq!(html, r#"<div class="grid grid-cols-1 gap-6 lg:grid-cols-3"></div>"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ClassRenderer {
    env: Environment<'static>,
    registry: Arc<TableRegistry>,
}

impl ClassRenderer {
    /// Creates a renderer over the given tables.
    pub fn new(registry: impl Into<Arc<TableRegistry>>) -> Self {
        let registry = registry.into();
        let mut env = Environment::new();
        register_functions(&mut env, Arc::clone(&registry));
        register_filters(&mut env, Arc::clone(&registry));
        Self { env, registry }
    }

    /// The tables this renderer resolves against.
    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Renders a one-off template source.
    pub fn render_str<T: Serialize>(&self, source: &str, data: T) -> Result<String, Error> {
        self.env.render_str(source, data)
    }

    /// The underlying environment, for registering more filters or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl std::fmt::Debug for ClassRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassRenderer")
            .field("components", &self.registry.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VariantAxis;
    use minijinja::context;

    fn renderer() -> ClassRenderer {
        let mut registry = TableRegistry::new();
        registry.add_table(
            "field",
            VariantTable::builder()
                .base("rounded-md")
                .axis(VariantAxis::new("size").value("sm", "h-8").value("md", "h-9"))
                .axis(VariantAxis::new("full-width").value(true, "w-full"))
                .axis(VariantAxis::new("columns").value(1, "grid-cols-1").value(2, "grid-cols-2"))
                .default_value("size", "md")
                .build()
                .unwrap(),
        );
        ClassRenderer::new(registry)
    }

    #[test]
    fn test_cx_defaults_and_extra() {
        let out = renderer()
            .render_str("{{ cx('field', class='h-12 ml-2') }}", context! {})
            .unwrap();
        assert_eq!(out, "rounded-md h-12 ml-2");
    }

    #[test]
    fn test_cx_underscore_maps_to_dashed_axis() {
        let out = renderer()
            .render_str("{{ cx('field', full_width=true) }}", context! {})
            .unwrap();
        assert_eq!(out, "rounded-md h-9 w-full");
    }

    #[test]
    fn test_cx_breakpoint_keys() {
        let out = renderer()
            .render_str(
                "{{ cx('field', xxl_columns=2, sm_columns=1, size=none) }}",
                context! {},
            )
            .unwrap();
        assert_eq!(out, "rounded-md h-9 sm:grid-cols-1 2xl:grid-cols-2");
    }

    #[test]
    fn test_cx_class_list() {
        let out = renderer()
            .render_str(
                "{{ cx('field', size='sm', class=['ml-2', extra]) }}",
                serde_json::json!({"extra": "mr-2"}),
            )
            .unwrap();
        assert_eq!(out, "rounded-md h-8 ml-2 mr-2");
    }

    #[test]
    fn test_cx_unknown_component() {
        let err = renderer()
            .render_str("{{ cx('nope') }}", context! {})
            .unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_cx_rejects_float() {
        let err = renderer()
            .render_str("{{ cx('field', columns=1.5) }}", context! {})
            .unwrap_err();
        assert!(err.to_string().contains("columns"));
    }

    #[test]
    fn test_merge_classes_filter() {
        let out = renderer()
            .render_str("{{ 'p-2 text-sm p-4' | merge_classes }}", context! {})
            .unwrap();
        assert_eq!(out, "text-sm p-4");
    }

    #[test]
    fn test_named_template() {
        let mut renderer = renderer();
        renderer
            .add_template("input.html", "<input class=\"{{ cx('field', size=size) }}\">")
            .unwrap();
        let out = renderer
            .render("input.html", serde_json::json!({"size": "sm"}))
            .unwrap();
        assert_eq!(out, "<input class=\"rounded-md h-8\">");
    }
}
