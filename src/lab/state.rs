use super::kind::CalculationKind;
use super::record::ResultRecord;
use std::collections::HashMap;

/// Last successful [`ResultRecord`] per calculation kind for one lab page.
///
/// Created empty when the page mounts and dropped with it. A kind only has an
/// entry once one of its computations succeeded; there is no removal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossTabState {
    records: HashMap<CalculationKind, ResultRecord>,
}

impl CrossTabState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its kind, replacing any earlier one.
    pub fn put(&mut self, record: ResultRecord) {
        tracing::debug!(kind = %record.kind(), fields = record.len(), "result stored");
        self.records.insert(record.kind(), record);
    }

    pub fn get(&self, kind: CalculationKind) -> Option<&ResultRecord> {
        self.records.get(&kind)
    }

    pub fn contains(&self, kind: CalculationKind) -> bool {
        self.records.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::record::{Inputs, Payload};
    use serde_json::json;

    fn half_life_record(k: f64, t_media: f64) -> ResultRecord {
        let body = json!({"k": k, "t_media": t_media});
        let payload = Payload::new(body.as_object().cloned().unwrap_or_default());
        ResultRecord::capture(CalculationKind::DecayConstantFromHalfLife, &Inputs::new(), &payload)
            .unwrap()
    }

    #[test]
    fn test_new_state_is_empty_for_every_kind() {
        let state = CrossTabState::new();
        for lab in crate::lab::Lab::ALL {
            for kind in lab.kinds() {
                assert!(state.get(*kind).is_none());
            }
        }
        assert!(state.is_empty());
    }

    #[test]
    fn test_put_then_get_returns_same_record() {
        let mut state = CrossTabState::new();
        let record = half_life_record(0.0693, 10.0);
        state.put(record.clone());
        assert_eq!(state.get(CalculationKind::DecayConstantFromHalfLife), Some(&record));
        assert!(!state.contains(CalculationKind::DecayConstantFromData));
    }

    #[test]
    fn test_second_put_replaces_wholesale() {
        let mut state = CrossTabState::new();
        state.put(half_life_record(0.0693, 10.0));

        let body = json!({"k": 0.1386, "N0": 100.0, "t": 5.0, "t_media": "infinito"});
        let payload = Payload::new(body.as_object().cloned().unwrap_or_default());
        let data_record =
            ResultRecord::capture(CalculationKind::DecayConstantFromData, &Inputs::new(), &payload)
                .unwrap();
        state.put(data_record);

        let newer = half_life_record(0.0347, 20.0);
        state.put(newer.clone());
        let stored = state.get(CalculationKind::DecayConstantFromHalfLife).unwrap();
        assert_eq!(stored, &newer);
        assert_eq!(stored.get("k"), Some(0.0347));
        assert_eq!(state.len(), 2);
    }
}
