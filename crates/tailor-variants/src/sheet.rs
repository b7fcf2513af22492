//! YAML table sheets.
//!
//! A sheet keeps component tables as data. Each top-level key names a
//! component; the reserved `merge` key adds conflict groups.
//!
//! ```yaml
//! button:
//!   base: inline-flex items-center justify-center rounded-md
//!   variants:
//!     variant:
//!       primary: bg-primary text-primary-foreground
//!       ghost: hover:bg-accent
//!     size:
//!       sm: h-8 px-3
//!       md: h-9 px-4
//!     interactive:
//!       true: cursor-pointer
//!   defaults:
//!     variant: primary
//!     size: md
//!   compound:
//!     - when: { variant: ghost, size: [sm, md] }
//!       class: px-2
//!
//! merge:
//!   - name: tone
//!     prefix: ["tone-"]
//! ```
//!
//! Token values may be a string (split on whitespace) or a list of strings.
//! Value keys keep their YAML type: `true` is a boolean, `4` a number,
//! `auto-fill` a string. Declaration order is preserved.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::SheetError;
use crate::merge::{ConflictGroup, GroupDef};
use crate::table::{CompoundRule, VariantAxis, VariantTable};
use crate::value::VariantValue;

/// Serialized form of one component table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    #[serde(default)]
    pub base: Option<Value>,
    #[serde(default)]
    pub variants: Mapping,
    #[serde(default)]
    pub defaults: Mapping,
    #[serde(default)]
    pub fallback: Mapping,
    #[serde(default)]
    pub compound: Vec<CompoundDef>,
}

/// Serialized form of one compound rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompoundDef {
    pub when: Mapping,
    pub class: Value,
}

#[derive(Debug, Deserialize)]
struct SheetDef {
    #[serde(default)]
    merge: Vec<GroupDef>,
    #[serde(flatten)]
    components: BTreeMap<String, TableDef>,
}

/// A parsed and validated sheet.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    /// Component tables keyed by name.
    pub tables: BTreeMap<String, VariantTable>,
    /// Conflict groups declared under `merge`.
    pub groups: Vec<ConflictGroup>,
}

impl Sheet {
    /// Parses a sheet from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Parse`] for malformed YAML, [`SheetError::Invalid`]
    /// for wrongly shaped values and [`SheetError::Table`] when a table fails
    /// validation.
    pub fn from_yaml(source: &str) -> Result<Self, SheetError> {
        let def: SheetDef = serde_yaml::from_str(source)?;
        let mut tables = BTreeMap::new();
        for (name, table) in def.components {
            let table = table.build(&name)?;
            tables.insert(name, table);
        }
        let groups: Vec<ConflictGroup> = def.merge.into_iter().map(ConflictGroup::from).collect();
        debug!(
            tables = tables.len(),
            groups = groups.len(),
            "parsed table sheet"
        );
        Ok(Sheet { tables, groups })
    }
}

/// Parses a single table definition (without the component key).
///
/// ```rust
/// use tailor_variants::{sheet::parse_table, PropAssignment};
///
/// let table = parse_table("card", "base: rounded-xl border\nvariants:\n  padded:\n    true: p-6\n").unwrap();
/// let classes = table.resolve(&PropAssignment::new().set("padded", true));
/// assert_eq!(classes.to_string(), "rounded-xl border p-6");
/// ```
pub fn parse_table(component: &str, source: &str) -> Result<VariantTable, SheetError> {
    let def: TableDef = serde_yaml::from_str(source)?;
    def.build(component)
}

impl TableDef {
    /// Converts the definition into a validated table.
    pub fn build(self, component: &str) -> Result<VariantTable, SheetError> {
        let invalid = |message: String| SheetError::Invalid {
            component: component.to_string(),
            message,
        };

        let mut builder = VariantTable::builder();
        if let Some(base) = &self.base {
            builder = builder.base(tokens(base).map_err(&invalid)?);
        }

        for (axis_key, values) in &self.variants {
            let axis_name = axis_name(axis_key).map_err(&invalid)?;
            let values = values
                .as_mapping()
                .ok_or_else(|| invalid(format!("values of axis '{}' must be a mapping", axis_name)))?;
            let mut axis = VariantAxis::new(&axis_name);
            for (value_key, value_tokens) in values {
                let value = variant_value(value_key).map_err(&invalid)?;
                axis = axis.value(value, tokens(value_tokens).map_err(&invalid)?);
            }
            if let Some(fallback) = self.fallback.get(axis_key) {
                axis = axis.fallback(tokens(fallback).map_err(&invalid)?);
            }
            builder = builder.axis(axis);
        }

        for (axis_key, _) in &self.fallback {
            if !self.variants.contains_key(axis_key) {
                let name = axis_name(axis_key).map_err(&invalid)?;
                return Err(invalid(format!("fallback for undeclared axis '{}'", name)));
            }
        }

        for (axis_key, value) in &self.defaults {
            let name = axis_name(axis_key).map_err(&invalid)?;
            builder = builder.default_value(&name, variant_value(value).map_err(&invalid)?);
        }

        for rule in &self.compound {
            let mut compound = CompoundRule::new(tokens(&rule.class).map_err(&invalid)?);
            for (axis_key, accepted) in &rule.when {
                let name = axis_name(axis_key).map_err(&invalid)?;
                compound = match accepted {
                    Value::Sequence(items) => {
                        let values = items
                            .iter()
                            .map(variant_value)
                            .collect::<Result<Vec<_>, _>>()
                            .map_err(&invalid)?;
                        compound.when_any(&name, values)
                    }
                    other => compound.when(&name, variant_value(other).map_err(&invalid)?),
                };
            }
            builder = builder.compound(compound);
        }

        builder.build().map_err(|source| SheetError::Table {
            component: component.to_string(),
            source,
        })
    }
}

fn axis_name(key: &Value) -> Result<String, String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        other => Err(format!("axis names must be strings, found {:?}", other)),
    }
}

fn variant_value(value: &Value) -> Result<VariantValue, String> {
    match value {
        Value::Bool(b) => Ok(VariantValue::Bool(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(VariantValue::Int)
            .ok_or_else(|| format!("axis value {} is not an integer", n)),
        Value::String(s) => Ok(VariantValue::Str(s.clone())),
        other => Err(format!("unsupported axis value {:?}", other)),
    }
}

fn tokens(value: &Value) -> Result<Vec<String>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(s.split_whitespace().map(str::to_string).collect()),
        Value::Sequence(items) => {
            let mut out = Vec::new();
            for item in items {
                match item {
                    Value::String(s) => out.extend(s.split_whitespace().map(str::to_string)),
                    other => return Err(format!("tokens must be strings, found {:?}", other)),
                }
            }
            Ok(out)
        }
        other => Err(format!(
            "tokens must be a string or a list of strings, found {:?}",
            other
        )),
    }
}
