//! Response normalization
//!
//! Converts untrusted, loosely-shaped JSON from language-model vendors
//! into total records. Each `FieldSpec` names a canonical output field,
//! the alias spellings vendors use for it, a value constraint, and a
//! default. Normalization never fails: a field whose candidates are all
//! missing or invalid takes its default, so every schema field is present
//! in the output exactly once.

use serde_json::{Map, Value};

/// Constraint a candidate value must satisfy to be accepted.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Finite number within `[min, max]` inclusive. Numeric strings are
    /// accepted and converted.
    NumberInRange { min: f64, max: f64 },
    /// Non-negative whole number representable as `u64`. Floats with a
    /// zero fraction and numeric strings are accepted and converted.
    NonNegativeInt,
    /// String equal to one of the allowed values, compared and emitted in
    /// lowercase.
    OneOf(&'static [&'static str]),
    /// Array with at least one non-blank string. Blank and non-string
    /// elements are dropped.
    NonEmptyStringList,
    /// String that is non-blank after trimming.
    NonEmptyText,
}

/// How one canonical output field is sourced from vendor JSON.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Canonical field name in the output record.
    pub name: &'static str,
    /// Alternative keys checked after the canonical name, in order.
    pub aliases: Vec<&'static str>,
    pub constraint: Constraint,
    /// Value used when no candidate satisfies the constraint.
    pub default: Value,
}

impl FieldSpec {
    pub fn new(name: &'static str, constraint: Constraint, default: Value) -> Self {
        Self {
            name,
            aliases: Vec::new(),
            constraint,
            default,
        }
    }

    /// Accept `alias` as an additional key for this field.
    pub fn alias(mut self, alias: &'static str) -> Self {
        self.aliases.push(alias);
        self
    }
}

/// Normalize `raw` against `schema`, producing a record in which every
/// schema field is present.
///
/// `raw` may be absent or a non-object; both count as "no candidates"
/// and every field takes its default. Keys in `raw` that no `FieldSpec`
/// claims are discarded.
pub fn normalize(raw: Option<&Value>, schema: &[FieldSpec]) -> Map<String, Value> {
    let source = raw.and_then(Value::as_object);
    let mut record = Map::with_capacity(schema.len());
    for spec in schema {
        let value = source
            .and_then(|obj| lookup(obj, spec))
            .unwrap_or_else(|| spec.default.clone());
        record.insert(spec.name.to_string(), value);
    }
    record
}

/// First key (canonical name, then aliases in order) whose value
/// satisfies the field's constraint.
fn lookup(obj: &Map<String, Value>, spec: &FieldSpec) -> Option<Value> {
    std::iter::once(spec.name)
        .chain(spec.aliases.iter().copied())
        .find_map(|key| obj.get(key).and_then(|value| accept(value, &spec.constraint)))
}

/// Validate `value` against `constraint`, returning the accepted value in
/// canonical form, or `None` to fall through to the next candidate.
fn accept(value: &Value, constraint: &Constraint) -> Option<Value> {
    match constraint {
        Constraint::NumberInRange { min, max } => {
            let n = as_number(value)?;
            (n.is_finite() && n >= *min && n <= *max).then(|| Value::from(n))
        }
        Constraint::NonNegativeInt => {
            let n = as_number(value)?;
            // The upper bound keeps the cast exact; u64::MAX as f64 is 2^64.
            (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n < u64::MAX as f64)
                .then(|| Value::from(n as u64))
        }
        Constraint::OneOf(allowed) => {
            let lowered = value.as_str()?.trim().to_lowercase();
            allowed
                .contains(&lowered.as_str())
                .then(|| Value::String(lowered))
        }
        Constraint::NonEmptyStringList => {
            let items: Vec<Value> = value
                .as_array()?
                .iter()
                .filter(|item| item.as_str().is_some_and(|s| !s.trim().is_empty()))
                .cloned()
                .collect();
            (!items.is_empty()).then(|| Value::Array(items))
        }
        Constraint::NonEmptyText => {
            let s = value.as_str()?;
            (!s.trim().is_empty()).then(|| value.clone())
        }
    }
}

/// Read a JSON number, accepting numeric strings such as `"85"`.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
