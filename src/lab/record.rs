use super::kind::{CalculationKind, FieldSource};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Numeric inputs of one submission, keyed by their JSON key.
pub type Inputs = BTreeMap<&'static str, f64>;

/// Body of a successful service response, minus the envelope flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.0.get(name).and_then(Value::as_f64)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Display text of a field. Numbers go through [`format_field_value`],
    /// strings are shown verbatim.
    pub fn display(&self, name: &str) -> String {
        match self.0.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) => format_field_value(v),
                None => n.to_string(),
            },
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Null) | None => "—".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Rows of a table response. Malformed rows are skipped.
    pub fn table_rows(&self) -> Vec<TableRow> {
        match self.0.get("tabla") {
            Some(Value::Array(rows)) => rows
                .iter()
                .filter_map(|row| TableRow::deserialize(row).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One row of a generated table. Cooling rows carry `temperatura`, decay
/// rows carry `N` and `porcentaje`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableRow {
    pub tiempo: f64,
    #[serde(alias = "temperatura", alias = "N")]
    pub value: f64,
    #[serde(default)]
    pub porcentaje: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("{kind}: la respuesta no contiene el campo numérico `{field}`")]
    MissingField { kind: CalculationKind, field: &'static str },
}

/// The named numeric outputs of one successful computation.
///
/// Built once from the submitted inputs and the success payload, then never
/// mutated; a later success of the same kind replaces it as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    kind: CalculationKind,
    values: BTreeMap<&'static str, f64>,
}

impl ResultRecord {
    /// Collect the kind's record schema out of the posted inputs and the
    /// response. Optional fields that are missing or non-numeric are skipped.
    pub fn capture(
        kind: CalculationKind,
        inputs: &Inputs,
        payload: &Payload,
    ) -> Result<Self, CaptureError> {
        let mut values = BTreeMap::new();
        for field in kind.record_fields() {
            let value = match field.source {
                FieldSource::Input => inputs.get(field.name).copied(),
                FieldSource::Response => payload.number(field.name),
            };
            match value {
                Some(v) => {
                    values.insert(field.name, v);
                }
                None if field.required => {
                    return Err(CaptureError::MissingField { kind, field: field.name });
                }
                None => {}
            }
        }
        Ok(Self { kind, values })
    }

    pub fn kind(&self) -> CalculationKind {
        self.kind
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Format a number the way a browser prints it: shortest round-trip
/// representation, no trailing `.0`. Used for every number on screen and for
/// values written into inputs.
pub fn format_field_value(value: f64) -> String {
    format!("{}", value)
}
