//! The closed set of calculations each lab offers, with the wire and form
//! schema attached to every variant.

use std::fmt;

/// One of the two calculator applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lab {
    Cooling,
    Decay,
}

impl Lab {
    pub const ALL: [Lab; 2] = [Lab::Cooling, Lab::Decay];

    /// Forms hosted by this lab, in the order their panels appear.
    pub fn kinds(self) -> &'static [CalculationKind] {
        use CalculationKind::*;
        match self {
            Lab::Cooling => &[
                CoolingTemperature,
                CoolingTime,
                CoolingConstantK,
                CoolingConstantC,
                CoolingTable,
            ],
            Lab::Decay => &[
                DecayQuantity,
                DecayTime,
                DecayConstantFromHalfLife,
                DecayConstantFromData,
                DecayInitialQuantity,
                DecayTable,
            ],
        }
    }

    /// Panel ids in display order. The first one starts active.
    pub fn panels(self) -> Vec<&'static str> {
        let mut panels: Vec<&'static str> = Vec::new();
        for kind in self.kinds() {
            if !panels.contains(&kind.panel()) {
                panels.push(kind.panel());
            }
        }
        panels
    }

    /// Tab button label for a panel id.
    pub fn panel_label(self, panel: &str) -> &'static str {
        match (self, panel) {
            (Lab::Cooling, "calcular-temp") => "🌡️ Calcular Temperatura",
            (Lab::Cooling, "calcular-tiempo") => "⏱️ Calcular Tiempo",
            (Lab::Cooling, "calcular-k") => "🔢 Calcular K",
            (Lab::Cooling, "calcular-c") => "➖ Calcular C",
            (Lab::Decay, "calcular-n") => "⚛️ Calcular N(t)",
            (Lab::Decay, "calcular-tiempo") => "⏱️ Calcular Tiempo",
            (Lab::Decay, "calcular-k") => "🔢 Calcular k",
            (Lab::Decay, "calcular-n0") => "🧪 Calcular N₀",
            (_, "generar-tabla") => "📊 Generar Tabla",
            _ => "",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Lab::Cooling => "Ley de Enfriamiento de Newton",
            Lab::Decay => "Desintegración Radiactiva",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Lab::Cooling => "/newton",
            Lab::Decay => "/radiactiva",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Lab::Cooling => "Enfriamiento",
            Lab::Decay => "Radiactiva",
        }
    }

    /// True when `pathname` is this lab's route or below it.
    pub fn is_current(self, pathname: &str) -> bool {
        pathname
            .strip_prefix(self.route())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

/// A form input: DOM id, the JSON key it is posted under, and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputField {
    pub id: &'static str,
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

const fn input(
    id: &'static str,
    key: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> InputField {
    InputField { id, key, label, placeholder }
}

/// Where a record field is read from once a computation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// The numeric value that was posted for this key.
    Input,
    /// A numeric field of the success response.
    Response,
}

/// One field of a kind's [`ResultRecord`](super::ResultRecord) schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordField {
    pub name: &'static str,
    pub source: FieldSource,
    /// Optional fields may be absent or non-numeric (e.g. `"infinito"`) and
    /// cannot be referenced by a transfer mapping.
    pub required: bool,
}

const fn from_input(name: &'static str) -> RecordField {
    RecordField { name, source: FieldSource::Input, required: true }
}

const fn from_response(name: &'static str) -> RecordField {
    RecordField { name, source: FieldSource::Response, required: true }
}

const fn maybe_from_response(name: &'static str) -> RecordField {
    RecordField { name, source: FieldSource::Response, required: false }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalculationKind {
    CoolingTemperature,
    CoolingTime,
    CoolingConstantK,
    CoolingConstantC,
    CoolingTable,
    DecayQuantity,
    DecayTime,
    DecayConstantFromHalfLife,
    DecayConstantFromData,
    DecayInitialQuantity,
    DecayTable,
}

impl CalculationKind {
    pub fn lab(self) -> Lab {
        use CalculationKind::*;
        match self {
            CoolingTemperature | CoolingTime | CoolingConstantK | CoolingConstantC
            | CoolingTable => Lab::Cooling,
            _ => Lab::Decay,
        }
    }

    /// Tab panel hosting this form.
    pub fn panel(self) -> &'static str {
        use CalculationKind::*;
        match self {
            CoolingTemperature => "calcular-temp",
            CoolingTime | DecayTime => "calcular-tiempo",
            CoolingConstantK | DecayConstantFromHalfLife | DecayConstantFromData => "calcular-k",
            CoolingConstantC => "calcular-c",
            DecayQuantity => "calcular-n",
            DecayInitialQuantity => "calcular-n0",
            CoolingTable | DecayTable => "generar-tabla",
        }
    }

    pub fn form_id(self) -> &'static str {
        use CalculationKind::*;
        match self {
            CoolingTemperature => "form-calcular-temp",
            CoolingTime | DecayTime => "form-calcular-tiempo",
            CoolingConstantK => "form-calcular-k",
            CoolingConstantC => "form-calcular-c",
            DecayQuantity => "form-calcular-n",
            DecayConstantFromHalfLife => "form-calcular-k-tmedia",
            DecayConstantFromData => "form-calcular-k-datos",
            DecayInitialQuantity => "form-calcular-n0",
            CoolingTable | DecayTable => "form-generar-tabla",
        }
    }

    /// Id of the container the outcome of this form is rendered into.
    pub fn container_id(self) -> &'static str {
        use CalculationKind::*;
        match self {
            CoolingTemperature => "resultado-temp",
            CoolingTime | DecayTime => "resultado-tiempo",
            CoolingConstantK => "resultado-k",
            CoolingConstantC => "resultado-c",
            DecayQuantity => "resultado-n",
            DecayConstantFromHalfLife => "resultado-k-tmedia",
            DecayConstantFromData => "resultado-k-datos",
            DecayInitialQuantity => "resultado-n0",
            CoolingTable | DecayTable => "resultado-tabla",
        }
    }

    /// Server endpoint. Fixed by the backend.
    pub fn endpoint(self) -> &'static str {
        use CalculationKind::*;
        match self {
            CoolingTemperature => "/api/calcular-temperatura",
            CoolingTime => "/api/calcular-tiempo",
            CoolingConstantK => "/api/calcular-k",
            CoolingConstantC => "/api/calcular-c",
            CoolingTable => "/api/generar-tabla",
            DecayQuantity => "/api/radiactiva/calcular-n",
            DecayTime => "/api/radiactiva/calcular-tiempo",
            DecayConstantFromHalfLife | DecayConstantFromData => "/api/radiactiva/calcular-k",
            DecayInitialQuantity => "/api/radiactiva/calcular-n0",
            DecayTable => "/api/radiactiva/generar-tabla",
        }
    }

    /// Human name used in chooser options and headings.
    pub fn title(self) -> &'static str {
        use CalculationKind::*;
        match self {
            CoolingTemperature => "🌡️ Calcular Temperatura",
            CoolingTime | DecayTime => "⏱️ Calcular Tiempo",
            CoolingConstantK => "🔢 Calcular Constante K",
            CoolingConstantC => "➖ Calcular Constante C",
            DecayQuantity => "⚛️ Calcular N(t)",
            DecayConstantFromHalfLife => "🔢 Calcular k desde vida media",
            DecayConstantFromData => "🔢 Calcular k desde datos",
            DecayInitialQuantity => "🧪 Calcular N₀",
            CoolingTable | DecayTable => "📊 Generar Tabla",
        }
    }

    pub fn is_table(self) -> bool {
        matches!(self, CalculationKind::CoolingTable | CalculationKind::DecayTable)
    }

    /// Submit button label while idle.
    pub fn submit_label(self) -> &'static str {
        if self.is_table() {
            "Generar Tabla"
        } else {
            "Calcular"
        }
    }

    /// Submit button label while the request is in flight.
    pub fn busy_label(self) -> &'static str {
        if self.is_table() {
            "Generando..."
        } else {
            "Calculando..."
        }
    }

    pub fn inputs(self) -> &'static [InputField] {
        use CalculationKind::*;
        match self {
            CoolingTemperature => const { &[
                input("temp-Tm", "Tm", "Temperatura ambiente Tm (°C)", "20"),
                input("temp-C", "C", "Constante C", "70"),
                input("temp-K", "K", "Constante K (1/min)", "-0.05"),
                input("temp-t", "t", "Tiempo t (min)", "10"),
            ] },
            CoolingTime => const { &[
                input("tiempo-Tm", "Tm", "Temperatura ambiente Tm (°C)", "20"),
                input("tiempo-C", "C", "Constante C", "70"),
                input("tiempo-K", "K", "Constante K (1/min)", "-0.05"),
                input("tiempo-T-objetivo", "T_objetivo", "Temperatura objetivo (°C)", "40"),
            ] },
            CoolingConstantK => const { &[
                input("k-T0", "T0", "Temperatura inicial T₀ (°C)", "90"),
                input("k-Tm", "Tm", "Temperatura ambiente Tm (°C)", "20"),
                input("k-T-en-t", "T_en_t", "Temperatura medida en t (°C)", "60"),
                input("k-t", "t", "Tiempo t (min)", "10"),
            ] },
            CoolingConstantC => const { &[
                input("c-T-inicial", "T_inicial", "Temperatura inicial (°C)", "90"),
                input("c-Tm", "Tm", "Temperatura ambiente Tm (°C)", "20"),
            ] },
            CoolingTable => const { &[
                input("tabla-Tm", "Tm", "Temperatura ambiente Tm (°C)", "20"),
                input("tabla-C", "C", "Constante C", "70"),
                input("tabla-K", "K", "Constante K (1/min)", "-0.05"),
                input("tabla-tiempo-total", "tiempo_total", "Tiempo total (min)", "60"),
                input("tabla-intervalo", "intervalo", "Intervalo (min)", "5"),
            ] },
            DecayQuantity => const { &[
                input("n-N0", "N0", "Cantidad inicial N₀", "100"),
                input("n-k", "k", "Constante de desintegración k", "0.0693"),
                input("n-t", "t", "Tiempo t", "10"),
            ] },
            DecayTime => const { &[
                input("tiempo-N0", "N0", "Cantidad inicial N₀", "100"),
                input("tiempo-N-objetivo", "N_objetivo", "Cantidad objetivo N", "50"),
                input("tiempo-k", "k", "Constante de desintegración k", "0.0693"),
            ] },
            DecayConstantFromHalfLife => const { &[
                input("k-tmedia", "t_media", "Vida media t½", "10"),
            ] },
            DecayConstantFromData => const { &[
                input("k-N0", "N0", "Cantidad inicial N₀", "100"),
                input("k-N-en-t", "N_en_t", "Cantidad medida en t", "50"),
                input("k-t", "t", "Tiempo t", "10"),
            ] },
            DecayInitialQuantity => const { &[
                input("n0-N", "N", "Cantidad actual N", "25"),
                input("n0-k", "k", "Constante de desintegración k", "0.0693"),
                input("n0-t", "t", "Tiempo transcurrido t", "20"),
            ] },
            DecayTable => const { &[
                input("tabla-N0", "N0", "Cantidad inicial N₀", "100"),
                input("tabla-k", "k", "Constante de desintegración k", "0.0693"),
                input("tabla-tiempo-total", "tiempo_total", "Tiempo total", "50"),
                input("tabla-intervalo", "intervalo", "Intervalo", "5"),
            ] },
        }
    }

    /// Schema of the record captured when this kind succeeds.
    pub fn record_fields(self) -> &'static [RecordField] {
        use CalculationKind::*;
        match self {
            CoolingTemperature | CoolingTime => const { &[
                from_input("Tm"),
                from_input("C"),
                from_input("K"),
                from_response("tiempo"),
            ] },
            CoolingConstantK => const { &[
                from_response("K"),
                from_response("C"),
                from_response("Tm"),
                from_response("T0"),
            ] },
            CoolingConstantC => const { &[
                from_response("C"),
                from_response("Tm"),
                from_response("T_inicial"),
            ] },
            CoolingTable => const { &[from_response("Tm"), from_response("C"), from_response("K")] },
            DecayQuantity => const { &[
                from_response("N0"),
                from_response("k"),
                from_response("t"),
                from_response("N"),
            ] },
            DecayTime => const { &[from_response("N0"), from_response("k"), from_response("tiempo")] },
            DecayConstantFromHalfLife => const { &[from_response("k"), from_response("t_media")] },
            DecayConstantFromData => const { &[
                from_response("k"),
                from_response("N0"),
                from_response("t"),
                maybe_from_response("t_media"),
            ] },
            DecayInitialQuantity => const { &[from_response("N0"), from_response("k")] },
            DecayTable => const { &[from_response("N0"), from_response("k"), from_response("t_media")] },
        }
    }

    pub fn input(self, id: &str) -> Option<&'static InputField> {
        self.inputs().iter().find(|field| field.id == id)
    }

    pub fn record_field(self, name: &str) -> Option<&'static RecordField> {
        self.record_fields().iter().find(|field| field.name == name)
    }

    /// Message shown when a transfer is attempted before this kind has a value.
    pub fn nothing_computed_message(self) -> &'static str {
        use CalculationKind::*;
        match self {
            CoolingTemperature => "Primero debes calcular una temperatura",
            CoolingTime | DecayTime => "Primero debes calcular un tiempo",
            CoolingConstantK => "Primero debes calcular la constante K",
            CoolingConstantC => "Primero debes calcular la constante C",
            DecayQuantity => "Primero debes calcular una cantidad N(t)",
            DecayConstantFromHalfLife | DecayConstantFromData => {
                "Primero debes calcular la constante k"
            }
            DecayInitialQuantity => "Primero debes calcular la cantidad inicial N₀",
            CoolingTable | DecayTable => "Primero debes generar una tabla",
        }
    }
}

/// Variant name; form ids repeat across labs.
impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_belongs_to_its_lab() {
        for lab in Lab::ALL {
            for kind in lab.kinds() {
                assert_eq!(kind.lab(), lab, "{kind} listed under the wrong lab");
            }
        }
    }

    #[test]
    fn test_panels_are_unique_and_labelled() {
        for lab in Lab::ALL {
            let panels = lab.panels();
            for (i, panel) in panels.iter().enumerate() {
                assert!(!panels[i + 1..].contains(panel), "duplicate panel {panel}");
                assert!(!lab.panel_label(panel).is_empty(), "panel {panel} has no label");
            }
        }
        assert_eq!(Lab::Cooling.panels().len(), 5);
        // Both constant forms share the k panel.
        assert_eq!(Lab::Decay.panels().len(), 5);
    }

    #[test]
    fn test_input_ids_unique_within_lab() {
        for lab in Lab::ALL {
            let mut seen: Vec<&str> = Vec::new();
            for kind in lab.kinds() {
                for field in kind.inputs() {
                    assert!(!seen.contains(&field.id), "input id {} reused", field.id);
                    seen.push(field.id);
                }
            }
        }
    }

    #[test]
    fn test_input_sourced_record_fields_are_posted() {
        for lab in Lab::ALL {
            for kind in lab.kinds() {
                for field in kind.record_fields() {
                    if field.source == FieldSource::Input {
                        assert!(
                            kind.inputs().iter().any(|i| i.key == field.name),
                            "{kind}: record field {} is not a posted key",
                            field.name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_display_tells_labs_apart() {
        let cooling = CalculationKind::CoolingTime;
        let decay = CalculationKind::DecayTime;
        assert_eq!(cooling.form_id(), decay.form_id());
        assert_ne!(cooling.to_string(), decay.to_string());
        assert_eq!(decay.to_string(), "DecayTime");
    }

    #[test]
    fn test_schemas_are_static_tables() {
        fn both(kind: CalculationKind) -> (&'static [InputField], &'static [RecordField]) {
            (kind.inputs(), kind.record_fields())
        }
        let (inputs, fields) = both(CalculationKind::CoolingTable);
        assert_eq!(inputs.len(), 5);
        assert_eq!(fields.len(), 3);
        let (inputs, fields) = both(CalculationKind::DecayConstantFromHalfLife);
        assert_eq!(inputs[0].id, "k-tmedia");
        assert_eq!(fields[1].name, "t_media");
        for lab in Lab::ALL {
            for kind in lab.kinds() {
                let (inputs, fields) = both(*kind);
                assert!(!inputs.is_empty(), "{kind} has no inputs");
                assert!(!fields.is_empty(), "{kind} has no record fields");
            }
        }
    }

    #[test]
    fn test_nav_matches_lab_routes() {
        let labels: Vec<_> = Lab::ALL.iter().map(|lab| lab.nav_label()).collect();
        assert_eq!(labels, ["Enfriamiento", "Radiactiva"]);
        assert!(Lab::Decay.is_current("/radiactiva"));
        assert!(Lab::Decay.is_current("/radiactiva/"));
        assert!(!Lab::Decay.is_current("/radiactivas"));
        assert!(!Lab::Cooling.is_current("/"));
        assert!(!Lab::Cooling.is_current("/radiactiva"));
    }

    #[test]
    fn test_constant_forms_share_endpoint() {
        assert_eq!(
            CalculationKind::DecayConstantFromHalfLife.endpoint(),
            CalculationKind::DecayConstantFromData.endpoint()
        );
        assert_ne!(
            CalculationKind::DecayConstantFromHalfLife.container_id(),
            CalculationKind::DecayConstantFromData.container_id()
        );
    }
}
