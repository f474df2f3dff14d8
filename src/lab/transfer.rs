//! Copying a stored result into another form of the same lab.
//!
//! Which record field lands in which target input is declared once per
//! (source, target) pair in [`TransferTable::standard`]. Kinds only share some
//! fields and the same field lands under different input ids per target, so
//! nothing is matched by name.

use super::forms::FormValues;
use super::kind::{CalculationKind, Lab};
use super::record::format_field_value;
use super::state::CrossTabState;
use super::tabs::TabController;
use thiserror::Error;

pub const TRANSFER_CONFIRMATION: &str = "Datos transferidos correctamente";

/// Field list for one (source, target) pair: record field → target input id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub source: CalculationKind,
    pub target: CalculationKind,
    pub fields: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("{source_kind} → {target}: the two kinds belong to different labs")]
    CrossLab { source_kind: CalculationKind, target: CalculationKind },
    #[error("{source_kind} → {target}: a kind cannot transfer into itself")]
    SelfTransfer { source_kind: CalculationKind, target: CalculationKind },
    #[error("{source_kind} → {target}: `{field}` is not a required field of the source record")]
    UnknownRecordField {
        source_kind: CalculationKind,
        target: CalculationKind,
        field: &'static str,
    },
    #[error("{source_kind} → {target}: `{input}` is not an input of the target form")]
    UnknownTargetInput {
        source_kind: CalculationKind,
        target: CalculationKind,
        input: &'static str,
    },
    #[error("{source_kind} → {target}: declared twice")]
    Duplicate { source_kind: CalculationKind, target: CalculationKind },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// Transfer requested before the kind ever succeeded.
    #[error("{}", .0.nothing_computed_message())]
    NothingToTransfer(CalculationKind),
    #[error("{} no puede transferir datos a {}", .source_kind.title(), .target.title())]
    RouteNotDeclared { source_kind: CalculationKind, target: CalculationKind },
    #[error("{} no tiene destinos de transferencia", .0.title())]
    NoTargets(CalculationKind),
}

/// What a successful transfer did, for the confirmation toast and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReport {
    pub target: CalculationKind,
    pub panel: &'static str,
    pub written: Vec<(&'static str, String)>,
}

const fn route(
    source: CalculationKind,
    target: CalculationKind,
    fields: &'static [(&'static str, &'static str)],
) -> FieldMapping {
    FieldMapping { source, target, fields }
}

/// The validated mapping table of one lab.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferTable {
    lab: Lab,
    routes: Vec<FieldMapping>,
}

impl TransferTable {
    /// Validate `routes` against the record and form schemas.
    pub fn new(lab: Lab, routes: Vec<FieldMapping>) -> Result<Self, MappingError> {
        for (i, route) in routes.iter().enumerate() {
            let (source_kind, target) = (route.source, route.target);
            if source_kind.lab() != lab || target.lab() != lab {
                return Err(MappingError::CrossLab { source_kind, target });
            }
            if source_kind == target {
                return Err(MappingError::SelfTransfer { source_kind, target });
            }
            if routes[..i].iter().any(|r| r.source == source_kind && r.target == target) {
                return Err(MappingError::Duplicate { source_kind, target });
            }
            for &(field, input) in route.fields {
                match source_kind.record_field(field) {
                    Some(f) if f.required => {}
                    _ => {
                        return Err(MappingError::UnknownRecordField {
                            source_kind,
                            target,
                            field,
                        })
                    }
                }
                if target.input(input).is_none() {
                    return Err(MappingError::UnknownTargetInput { source_kind, target, input });
                }
            }
        }
        Ok(Self { lab, routes })
    }

    /// A table with no routes; nothing is ever offered.
    pub fn empty(lab: Lab) -> Self {
        Self { lab, routes: Vec::new() }
    }

    /// The lab's declared transfers.
    pub fn standard(lab: Lab) -> Result<Self, MappingError> {
        use CalculationKind::*;
        const COOLING_TEMP: &[(&str, &str)] = &[("Tm", "temp-Tm"), ("C", "temp-C"), ("K", "temp-K")];
        const COOLING_TIME: &[(&str, &str)] =
            &[("Tm", "tiempo-Tm"), ("C", "tiempo-C"), ("K", "tiempo-K")];
        const COOLING_TABLE: &[(&str, &str)] =
            &[("Tm", "tabla-Tm"), ("C", "tabla-C"), ("K", "tabla-K")];

        let routes = match lab {
            Lab::Cooling => vec![
                route(CoolingTemperature, CoolingTime, COOLING_TIME),
                route(CoolingTemperature, CoolingTable, COOLING_TABLE),
                route(CoolingTime, CoolingTemperature, COOLING_TEMP),
                route(CoolingTime, CoolingTable, COOLING_TABLE),
                route(CoolingConstantK, CoolingTemperature, COOLING_TEMP),
                route(CoolingConstantK, CoolingTime, COOLING_TIME),
                route(CoolingConstantK, CoolingTable, COOLING_TABLE),
                route(CoolingConstantC, CoolingTemperature, &[("Tm", "temp-Tm"), ("C", "temp-C")]),
                route(CoolingConstantC, CoolingTime, &[("Tm", "tiempo-Tm"), ("C", "tiempo-C")]),
                route(CoolingConstantC, CoolingTable, &[("Tm", "tabla-Tm"), ("C", "tabla-C")]),
            ],
            Lab::Decay => vec![
                route(DecayQuantity, DecayTable, &[("N0", "tabla-N0"), ("k", "tabla-k")]),
                route(
                    DecayTime,
                    DecayTable,
                    &[("N0", "tabla-N0"), ("k", "tabla-k"), ("tiempo", "tabla-tiempo-total")],
                ),
                route(DecayConstantFromHalfLife, DecayQuantity, &[("k", "n-k")]),
                route(DecayConstantFromHalfLife, DecayTime, &[("k", "tiempo-k")]),
                route(DecayConstantFromHalfLife, DecayTable, &[("k", "tabla-k")]),
                route(DecayConstantFromData, DecayQuantity, &[("N0", "n-N0"), ("k", "n-k")]),
                route(
                    DecayConstantFromData,
                    DecayTime,
                    &[("N0", "tiempo-N0"), ("k", "tiempo-k")],
                ),
                route(
                    DecayConstantFromData,
                    DecayTable,
                    &[("N0", "tabla-N0"), ("k", "tabla-k")],
                ),
                route(DecayInitialQuantity, DecayQuantity, &[("N0", "n-N0"), ("k", "n-k")]),
                route(DecayInitialQuantity, DecayTable, &[("N0", "tabla-N0"), ("k", "tabla-k")]),
            ],
        };
        Self::new(lab, routes)
    }

    pub fn lab(&self) -> Lab {
        self.lab
    }

    pub fn routes(&self) -> &[FieldMapping] {
        &self.routes
    }

    /// Targets `source` can be copied into, in declaration order.
    pub fn eligible_targets(&self, source: CalculationKind) -> Vec<CalculationKind> {
        self.routes
            .iter()
            .filter(|r| r.source == source)
            .map(|r| r.target)
            .collect()
    }

    pub fn mapping(&self, source: CalculationKind, target: CalculationKind) -> Option<&FieldMapping> {
        self.routes.iter().find(|r| r.source == source && r.target == target)
    }

    /// Check the precondition of a transfer and list the destinations to
    /// offer. Fails when `source` never succeeded.
    pub fn offer(
        &self,
        state: &CrossTabState,
        source: CalculationKind,
    ) -> Result<Vec<CalculationKind>, TransferError> {
        if !state.contains(source) {
            return Err(TransferError::NothingToTransfer(source));
        }
        let targets = self.eligible_targets(source);
        if targets.is_empty() {
            return Err(TransferError::NoTargets(source));
        }
        Ok(targets)
    }

    /// Switch to the target's panel and write every mapped value into its
    /// input. Nothing is touched when the precondition fails.
    pub fn apply(
        &self,
        state: &CrossTabState,
        source: CalculationKind,
        target: CalculationKind,
        tabs: &mut TabController,
        forms: &mut FormValues,
    ) -> Result<TransferReport, TransferError> {
        let record = state.get(source).ok_or(TransferError::NothingToTransfer(source))?;
        let mapping = self
            .mapping(source, target)
            .ok_or(TransferError::RouteNotDeclared { source_kind: source, target })?;

        let mut written = Vec::with_capacity(mapping.fields.len());
        for &(field, input) in mapping.fields {
            // Validated at construction: every mapped field is required.
            let Some(value) = record.get(field) else {
                return Err(TransferError::NothingToTransfer(source));
            };
            written.push((input, format_field_value(value)));
        }

        tabs.select(target.panel());
        for (input, value) in &written {
            forms.set(input, value.clone());
        }
        tracing::info!(%source, %target, fields = written.len(), "values transferred");

        Ok(TransferReport { target, panel: target.panel(), written })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::record::{Inputs, Payload, ResultRecord};
    use serde_json::json;

    fn store_with(kind: CalculationKind, body: serde_json::Value, inputs: Inputs) -> CrossTabState {
        let payload = Payload::new(body.as_object().cloned().unwrap_or_default());
        let mut state = CrossTabState::new();
        state.put(ResultRecord::capture(kind, &inputs, &payload).unwrap());
        state
    }

    #[test]
    fn test_standard_tables_validate() {
        for lab in Lab::ALL {
            let table = TransferTable::standard(lab).expect("standard table must validate");
            assert!(!table.routes().is_empty());
        }
    }

    #[test]
    fn test_every_mapping_is_total() {
        for lab in Lab::ALL {
            let table = TransferTable::standard(lab).unwrap();
            for route in table.routes() {
                assert!(!route.fields.is_empty());
                for (field, input) in route.fields {
                    let f = route.source.record_field(field).expect("field in record schema");
                    assert!(f.required);
                    assert!(route.target.input(input).is_some(), "{input} not in target form");
                }
            }
        }
    }

    #[test]
    fn test_tables_have_no_targets() {
        let cooling = TransferTable::standard(Lab::Cooling).unwrap();
        let decay = TransferTable::standard(Lab::Decay).unwrap();
        assert!(cooling.eligible_targets(CalculationKind::CoolingTable).is_empty());
        assert!(decay.eligible_targets(CalculationKind::DecayTable).is_empty());
    }

    #[test]
    fn test_decay_constant_maps_into_three_targets_under_different_ids() {
        let table = TransferTable::standard(Lab::Decay).unwrap();
        let source = CalculationKind::DecayConstantFromHalfLife;
        let targets = table.eligible_targets(source);
        assert_eq!(
            targets,
            vec![
                CalculationKind::DecayQuantity,
                CalculationKind::DecayTime,
                CalculationKind::DecayTable
            ]
        );
        let ids: Vec<&str> = targets
            .iter()
            .map(|t| table.mapping(source, *t).unwrap().fields[0].1)
            .collect();
        assert_eq!(ids, vec!["n-k", "tiempo-k", "tabla-k"]);
    }

    #[test]
    fn test_rejects_unknown_record_field() {
        let routes = vec![FieldMapping {
            source: CalculationKind::DecayQuantity,
            target: CalculationKind::DecayTable,
            fields: &[("porcentaje", "tabla-N0")],
        }];
        let err = TransferTable::new(Lab::Decay, routes).unwrap_err();
        assert!(matches!(err, MappingError::UnknownRecordField { field: "porcentaje", .. }));
    }

    #[test]
    fn test_rejects_optional_record_field() {
        let routes = vec![FieldMapping {
            source: CalculationKind::DecayConstantFromData,
            target: CalculationKind::DecayTable,
            fields: &[("t_media", "tabla-k")],
        }];
        assert!(matches!(
            TransferTable::new(Lab::Decay, routes),
            Err(MappingError::UnknownRecordField { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_target_input() {
        let routes = vec![FieldMapping {
            source: CalculationKind::DecayQuantity,
            target: CalculationKind::DecayTable,
            fields: &[("k", "n-k")],
        }];
        assert!(matches!(
            TransferTable::new(Lab::Decay, routes),
            Err(MappingError::UnknownTargetInput { input: "n-k", .. })
        ));
    }

    #[test]
    fn test_rejects_cross_lab_self_and_duplicate_routes() {
        let cross = vec![FieldMapping {
            source: CalculationKind::CoolingConstantK,
            target: CalculationKind::DecayTable,
            fields: &[],
        }];
        assert!(matches!(
            TransferTable::new(Lab::Cooling, cross),
            Err(MappingError::CrossLab { .. })
        ));

        let own = vec![FieldMapping {
            source: CalculationKind::CoolingTime,
            target: CalculationKind::CoolingTime,
            fields: &[],
        }];
        assert!(matches!(
            TransferTable::new(Lab::Cooling, own),
            Err(MappingError::SelfTransfer { .. })
        ));

        let twice = vec![
            FieldMapping {
                source: CalculationKind::CoolingTime,
                target: CalculationKind::CoolingTable,
                fields: &[("K", "tabla-K")],
            },
            FieldMapping {
                source: CalculationKind::CoolingTime,
                target: CalculationKind::CoolingTable,
                fields: &[("C", "tabla-C")],
            },
        ];
        assert!(matches!(
            TransferTable::new(Lab::Cooling, twice),
            Err(MappingError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_transfer_before_any_result_is_rejected_and_changes_nothing() {
        for lab in Lab::ALL {
            let table = TransferTable::standard(lab).unwrap();
            let state = CrossTabState::new();
            for kind in lab.kinds() {
                assert_eq!(
                    table.offer(&state, *kind),
                    Err(TransferError::NothingToTransfer(*kind))
                );
                for target in table.eligible_targets(*kind) {
                    let mut tabs = TabController::new(lab.panels(), kind.panel());
                    let mut forms = FormValues::for_lab(lab);
                    let (tabs_before, forms_before) = (tabs.clone(), forms.clone());
                    let err = table.apply(&state, *kind, target, &mut tabs, &mut forms);
                    assert_eq!(err, Err(TransferError::NothingToTransfer(*kind)));
                    assert_eq!(tabs, tabs_before);
                    assert_eq!(forms, forms_before);
                }
            }
        }
    }

    #[test]
    fn test_nothing_to_transfer_message_is_user_facing() {
        let err = TransferError::NothingToTransfer(CalculationKind::CoolingConstantK);
        assert_eq!(err.to_string(), "Primero debes calcular la constante K");
    }

    #[test]
    fn test_half_life_transfer_into_quantity_form() {
        let table = TransferTable::standard(Lab::Decay).unwrap();
        let state = store_with(
            CalculationKind::DecayConstantFromHalfLife,
            json!({"k": 0.0693, "t_media": 10, "formula": "k = ln(2) / 10 = 0.0693"}),
            Inputs::new(),
        );
        let mut tabs = TabController::new(Lab::Decay.panels(), "calcular-k");
        let mut forms = FormValues::for_lab(Lab::Decay);
        forms.set("n-N0", "100".to_string());

        let report = table
            .apply(
                &state,
                CalculationKind::DecayConstantFromHalfLife,
                CalculationKind::DecayQuantity,
                &mut tabs,
                &mut forms,
            )
            .unwrap();

        assert_eq!(tabs.active(), Some("calcular-n"));
        assert_eq!(forms.get("n-k"), Some("0.0693"));
        // Unmapped inputs keep what the user typed.
        assert_eq!(forms.get("n-N0"), Some("100"));
        assert_eq!(forms.get("tiempo-k"), Some(""));
        assert_eq!(report.panel, "calcular-n");
        assert_eq!(report.written, vec![("n-k", "0.0693".to_string())]);
    }

    #[test]
    fn test_cooling_temperature_transfer_uses_submitted_inputs() {
        let table = TransferTable::standard(Lab::Cooling).unwrap();
        let inputs: Inputs = [("Tm", 20.0), ("C", 70.0), ("K", -0.05), ("t", 10.0)]
            .into_iter()
            .collect();
        let state = store_with(
            CalculationKind::CoolingTemperature,
            json!({"temperatura": 62.46, "tiempo": 10.0}),
            inputs,
        );
        let mut tabs = TabController::new(Lab::Cooling.panels(), "calcular-temp");
        let mut forms = FormValues::for_lab(Lab::Cooling);
        table
            .apply(
                &state,
                CalculationKind::CoolingTemperature,
                CalculationKind::CoolingTable,
                &mut tabs,
                &mut forms,
            )
            .unwrap();
        assert_eq!(tabs.active(), Some("generar-tabla"));
        assert_eq!(forms.get("tabla-Tm"), Some("20"));
        assert_eq!(forms.get("tabla-C"), Some("70"));
        assert_eq!(forms.get("tabla-K"), Some("-0.05"));
        assert_eq!(forms.get("tabla-tiempo-total"), Some(""));
    }

    #[test]
    fn test_undeclared_route_is_rejected() {
        let table = TransferTable::standard(Lab::Decay).unwrap();
        let state = store_with(
            CalculationKind::DecayQuantity,
            json!({"N": 50.0, "N0": 100.0, "k": 0.0693, "t": 10.0}),
            Inputs::new(),
        );
        let mut tabs = TabController::new(Lab::Decay.panels(), "calcular-n");
        let mut forms = FormValues::for_lab(Lab::Decay);
        let err = table.apply(
            &state,
            CalculationKind::DecayQuantity,
            CalculationKind::DecayTime,
            &mut tabs,
            &mut forms,
        );
        assert!(matches!(err, Err(TransferError::RouteNotDeclared { .. })));
        assert_eq!(tabs.active(), Some("calcular-n"));
    }

    #[test]
    fn test_table_source_has_record_but_no_targets() {
        let table = TransferTable::standard(Lab::Decay).unwrap();
        let state = store_with(
            CalculationKind::DecayTable,
            json!({"N0": 100.0, "k": 0.0693, "t_media": 10.0, "tabla": []}),
            Inputs::new(),
        );
        assert_eq!(
            table.offer(&state, CalculationKind::DecayTable),
            Err(TransferError::NoTargets(CalculationKind::DecayTable))
        );
    }
}
