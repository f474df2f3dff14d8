//! Outcome → view description. No DOM here; `components::ResultPanel`
//! turns a [`ResultView`] into markup.

use super::kind::CalculationKind;
use super::outcome::Outcome;
use super::record::{format_field_value, Payload};

/// Approximation of ln 2 used for the derived half-life display.
const LN_2_DISPLAY: f64 = 0.693;

pub const TRANSFER_BUTTON_LABEL: &str = "📋 Usar estos valores en otro cálculo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "resultado success",
            Tone::Error => "resultado error",
            Tone::Warning => "resultado warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewItem {
    pub label: String,
    pub value: String,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub class: &'static str,
    pub points: Vec<(f64, f64)>,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<ChartSeries>,
}

/// The "use these values" button and the destinations it will offer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferAffordance {
    pub source: CalculationKind,
    pub targets: Vec<CalculationKind>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub container: &'static str,
    pub tone: Tone,
    pub heading: String,
    pub items: Vec<ViewItem>,
    pub formula: Option<String>,
    pub notes: Vec<String>,
    pub table: Option<TableView>,
    pub chart: Option<ChartView>,
    pub transfer: Option<TransferAffordance>,
}

impl ResultView {
    fn new(kind: CalculationKind, tone: Tone, heading: impl Into<String>) -> Self {
        Self {
            container: kind.container_id(),
            tone,
            heading: heading.into(),
            items: Vec::new(),
            formula: None,
            notes: Vec::new(),
            table: None,
            chart: None,
            transfer: None,
        }
    }

    fn item(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.items.push(ViewItem { label: label.into(), value: value.into(), highlight: false });
        self
    }

    fn highlight(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.items.push(ViewItem { label: label.into(), value: value.into(), highlight: true });
        self
    }

    fn note(&mut self, line: impl Into<String>) -> &mut Self {
        self.notes.push(line.into());
        self
    }
}

/// Describe what `kind`'s container shows for `outcome`.
///
/// `targets` are the kinds a success may be transferred into; the transfer
/// button is only attached to a success with at least one target.
pub fn render(kind: CalculationKind, outcome: &Outcome, targets: &[CalculationKind]) -> ResultView {
    match outcome {
        Outcome::Failure(message) => {
            let mut view = ResultView::new(kind, Tone::Error, "❌ Error");
            view.note(message.as_str());
            view
        }
        Outcome::Warning(message) => {
            let mut view = ResultView::new(kind, Tone::Warning, "⚠️ Advertencia");
            view.note(message.as_str());
            view
        }
        Outcome::Success(payload) => {
            let mut view = render_success(kind, payload);
            if !targets.is_empty() {
                view.transfer = Some(TransferAffordance { source: kind, targets: targets.to_vec() });
            }
            view
        }
    }
}

fn render_success(kind: CalculationKind, p: &Payload) -> ResultView {
    use CalculationKind::*;
    match kind {
        CoolingTemperature => {
            let mut view = ResultView::new(kind, Tone::Success, "✅ Resultado");
            view.highlight(
                format!("Temperatura después de {} minutos", p.display("tiempo")),
                format!("{}°C", p.display("temperatura")),
            );
            view.formula = p.text("formula").map(str::to_string);
            view
        }
        CoolingTime => {
            let mut view = ResultView::new(kind, Tone::Success, "✅ Resultado");
            view.highlight(
                "Tiempo necesario",
                format!("{} minutos ({} horas)", p.display("tiempo"), p.display("tiempo_horas")),
            );
            view.note(format!(
                "Para alcanzar la temperatura objetivo de {}°C",
                p.display("temperatura_objetivo")
            ));
            view
        }
        CoolingConstantK => {
            let mut view = ResultView::new(kind, Tone::Success, "✅ Resultado");
            view.highlight("Constante K", format!("{} (1/min)", p.display("K")))
                .item("Constante C", format!("{} °C", p.display("C")));
            view.formula = p.text("formula").map(str::to_string);
            let process = p.text("tipo_proceso").unwrap_or_default();
            view.note(format!("{} Tipo de proceso: {}", process_icon(process), process))
                .note(format!(
                    "✓ Verificación en t={} min: T = {}°C",
                    p.display("t_verificacion"),
                    p.display("T_verificacion")
                ));
            view
        }
        CoolingConstantC => {
            let mut view = ResultView::new(kind, Tone::Success, "✅ Resultado");
            view.highlight("Constante C", p.display("C"))
                .item("Temperatura inicial", format!("{}°C", p.display("T_inicial")))
                .item("Temperatura ambiente (Tₘ)", format!("{}°C", p.display("Tm")));
            view.formula = p.text("formula").map(str::to_string);
            if let Some(interp) = p.get("interpretacion") {
                for key in ["descripcion", "comportamiento"] {
                    if let Some(line) = interp.get(key).and_then(|v| v.as_str()) {
                        view.note(line);
                    }
                }
            }
            view
        }
        CoolingTable => render_cooling_table(kind, p),
        DecayQuantity => {
            let mut view = ResultView::new(kind, Tone::Success, "✅ Resultado - Cantidad N(t)");
            view.highlight(format!("Cantidad en t = {}", p.display("t")), p.display("N"))
                .item("Porcentaje restante", format!("{}%", p.display("porcentaje")));
            if let Some(remaining) = p.number("porcentaje") {
                view.item("Porcentaje desintegrado", format!("{:.2}%", 100.0 - remaining));
            }
            view.formula = p.text("formula").map(str::to_string);
            view.note("Parámetros:")
                .note(format!("• N₀ = {}", p.display("N0")))
                .note(format!("• k = {}", p.display("k")))
                .note(format!("• t = {}", p.display("t")));
            view
        }
        DecayTime => {
            let mut view = ResultView::new(kind, Tone::Success, "✅ Resultado - Tiempo Necesario");
            view.highlight("Tiempo necesario", p.display("tiempo")).item(
                "Para alcanzar N =",
                format!("{} ({}% de N₀)", p.display("N_objetivo"), p.display("porcentaje")),
            );
            if let (Some(k), Some(elapsed)) = (p.number("k"), p.number("tiempo")) {
                if k > 0.0 {
                    let half_life = LN_2_DISPLAY / k;
                    view.item("Equivale a:", format!("{:.2} vidas medias", elapsed / half_life));
                    view.formula = Some(format!("Vida media (t½): {:.4}", half_life));
                }
            }
            view.note("Parámetros:")
                .note(format!("• N₀ = {}", p.display("N0")))
                .note(format!("• k = {}", p.display("k")))
                .note(format!("• N objetivo = {}", p.display("N_objetivo")));
            view
        }
        DecayConstantFromHalfLife => {
            let mut view = ResultView::new(kind, Tone::Success, "✅ Constante k Calculada");
            view.highlight("Constante k", p.display("k"))
                .item("Vida media (t½)", p.display("t_media"));
            view.formula = p.text("formula").map(str::to_string);
            view
        }
        DecayConstantFromData => {
            let mut view =
                ResultView::new(kind, Tone::Success, "✅ Constante k Calculada desde Datos");
            view.highlight("Constante k", p.display("k"))
                .item("Vida media (t½)", p.display("t_media"))
                .item("Porcentaje medido", format!("{}%", p.display("porcentaje")));
            view.formula = p.text("formula").map(str::to_string);
            view.note("Verificación:")
                .note(format!("Con k = {}, en t = {}:", p.display("k"), p.display("t")))
                .note(format!(
                    "N calculado = {} (esperado: {})",
                    p.display("N_verificacion"),
                    p.display("N_en_t")
                ));
            view
        }
        DecayInitialQuantity => {
            let mut view = ResultView::new(kind, Tone::Success, "✅ Cantidad Inicial N₀ Calculada");
            view.highlight("Cantidad inicial N₀", p.display("N0"))
                .item("Cantidad actual N", p.display("N"))
                .item("Tiempo transcurrido", p.display("t"));
            view.formula = p.text("formula").map(str::to_string);
            view.note("Interpretación:")
                .note(format!("En t=0 había {} unidades de sustancia.", p.display("N0")))
                .note(format!(
                    "Después de {} unidades de tiempo, quedaron {} unidades.",
                    p.display("t"),
                    p.display("N")
                ));
            view
        }
        DecayTable => render_decay_table(kind, p),
    }
}

fn process_icon(process: &str) -> &'static str {
    match process.to_lowercase().as_str() {
        "enfriamiento" => "📉",
        "calentamiento" => "📈",
        _ => "➡️",
    }
}

/// Process name and chart class from the sign of K.
fn cooling_process(k: f64) -> (&'static str, &'static str) {
    if k < 0.0 {
        ("Enfriamiento", "cooling")
    } else if k > 0.0 {
        ("Calentamiento", "heating")
    } else {
        ("Temperatura constante", "steady")
    }
}

fn render_cooling_table(kind: CalculationKind, p: &Payload) -> ResultView {
    let k = p.number("K").unwrap_or_default();
    let (process, class) = cooling_process(k);
    let mut view = ResultView::new(kind, Tone::Success, format!("📊 Tabla y Gráfico de {process}"));
    if let (Some(tm), Some(c)) = (p.number("Tm"), p.number("C")) {
        view.item("Temperatura inicial (T₀)", format!("{:.2}°C", tm + c));
    }
    view.item("Temperatura ambiente (Tₘ)", format!("{}°C", p.display("Tm")))
        .item("Constante C", p.display("C"))
        .item("Constante K", format!("{} (1/min)", p.display("K")))
        .item("Tipo de proceso", format!("{} {}", process_icon(process), process))
        .item("Puntos de datos", p.display("num_puntos"));

    let rows = p.table_rows();
    view.table = Some(TableView {
        headers: vec!["Tiempo (min)", "Temperatura (°C)"],
        rows: rows
            .iter()
            .map(|r| vec![format_field_value(r.tiempo), format_field_value(r.value)])
            .collect(),
    });

    let mut series = vec![ChartSeries {
        label: "Temperatura (°C)".to_string(),
        class,
        points: rows.iter().map(|r| (r.tiempo, r.value)).collect(),
        dashed: false,
    }];
    if let Some(tm) = p.number("Tm") {
        series.push(ChartSeries {
            label: "Temperatura ambiente (Tₘ)".to_string(),
            class: "ambient",
            points: rows.iter().map(|r| (r.tiempo, tm)).collect(),
            dashed: true,
        });
    }
    view.chart = Some(ChartView {
        title: format!("Curva de {process} - Ley de Newton"),
        x_label: "Tiempo (min)",
        y_label: "Temperatura (°C)",
        series,
    });
    view
}

fn render_decay_table(kind: CalculationKind, p: &Payload) -> ResultView {
    let mut view = ResultView::new(kind, Tone::Success, "📊 Tabla de Desintegración Radiactiva");
    view.note("Parámetros:")
        .note(format!("• N₀ = {}", p.display("N0")))
        .note(format!("• k = {}", p.display("k")))
        .note(format!("• Vida media (t½) = {}", p.display("t_media")))
        .note(format!("• Puntos de datos: {}", p.display("num_puntos")));

    let rows = p.table_rows();
    view.table = Some(TableView {
        headers: vec!["Tiempo (t)", "Cantidad N(t)", "Porcentaje (%)"],
        rows: rows
            .iter()
            .map(|r| {
                let pct = r.porcentaje.map(|v| format!("{}%", format_field_value(v))).unwrap_or_default();
                vec![format_field_value(r.tiempo), format_field_value(r.value), pct]
            })
            .collect(),
    });
    view.chart = Some(ChartView {
        title: "Desintegración Radiactiva en el Tiempo".to_string(),
        x_label: "Tiempo (t)",
        y_label: "Cantidad N(t)",
        series: vec![ChartSeries {
            label: "Cantidad N(t)".to_string(),
            class: "decay",
            points: rows.iter().map(|r| (r.tiempo, r.value)).collect(),
            dashed: false,
        }],
    });
    view
}
