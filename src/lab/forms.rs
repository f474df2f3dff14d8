use super::kind::{CalculationKind, Lab};
use super::record::Inputs;
use std::collections::BTreeMap;

/// Raw text of every input of a lab page, keyed by input id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<&'static str, String>,
}

impl FormValues {
    /// One empty entry per input of every form in `lab`.
    pub fn for_lab(lab: Lab) -> Self {
        let values = lab
            .kinds()
            .iter()
            .flat_map(|kind| kind.inputs())
            .map(|field| (field.id, String::new()))
            .collect();
        Self { values }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Overwrite the text of an existing input. Unknown ids are ignored.
    pub fn set(&mut self, id: &str, value: String) -> bool {
        match self.values.get_mut(id) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Parse the inputs of `kind` into the JSON body to post.
    ///
    /// Every field must hold a finite number; the first one that does not is
    /// returned as the error.
    pub fn numeric_inputs(&self, kind: CalculationKind) -> Result<Inputs, &'static str> {
        let mut inputs = Inputs::new();
        for field in kind.inputs() {
            let raw = self.get(field.id).unwrap_or_default().trim();
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => {
                    inputs.insert(field.key, v);
                }
                _ => return Err(field.id),
            }
        }
        Ok(inputs)
    }
}

/// Target quantity for the decay "fraction of N₀" shortcuts.
///
/// Returns `None` unless `n0` parses as a positive number.
pub fn fraction_of(n0: &str, fraction: f64) -> Option<String> {
    match n0.trim().parse::<f64>() {
        Ok(v) if v > 0.0 && v.is_finite() => Some(format!("{:.4}", v * fraction)),
        _ => None,
    }
}

/// Shortcut buttons offered next to the decay target quantity.
pub const QUICK_FRACTIONS: [(&str, f64); 3] = [("50%", 0.5), ("25%", 0.25), ("10%", 0.1)];
