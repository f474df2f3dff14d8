use crate::lab::ChartView;
use leptos::*;

// SVG coordinate space within viewBox="0 0 400 200"
pub(crate) const CHART_LEFT: f64 = 40.0;
pub(crate) const CHART_WIDTH: f64 = 350.0;
pub(crate) const CHART_RIGHT: f64 = CHART_LEFT + CHART_WIDTH;
pub(crate) const CHART_BOTTOM: f64 = 165.0;
pub(crate) const CHART_HEIGHT: f64 = 145.0;

/// Data extent of every series in a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartBounds {
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    /// `None` when the chart has no points at all.
    pub(crate) fn of(chart: &ChartView) -> Option<Self> {
        let mut points = chart.series.iter().flat_map(|s| s.points.iter());
        let &(x0, y0) = points.next()?;
        let mut bounds = Self { x_max: x0, y_min: y0, y_max: y0 };
        for &(x, y) in points {
            bounds.x_max = bounds.x_max.max(x);
            bounds.y_min = bounds.y_min.min(y);
            bounds.y_max = bounds.y_max.max(y);
        }
        // A flat series still needs a visible band.
        if (bounds.y_max - bounds.y_min).abs() < 1e-6 {
            bounds.y_min -= 1.0;
            bounds.y_max += 1.0;
        }
        Some(bounds)
    }
}

/// Convert (x, y) data points to SVG polyline coordinates.
pub(crate) fn to_chart_points(data: &[(f64, f64)], bounds: ChartBounds) -> String {
    let y_range = bounds.y_max - bounds.y_min;
    if y_range.abs() < 1e-6 {
        return String::new();
    }
    data.iter()
        .map(|(x, y)| {
            let px = if bounds.x_max > 0.0 {
                CHART_LEFT + (x / bounds.x_max) * CHART_WIDTH
            } else {
                CHART_LEFT
            };
            let py = CHART_BOTTOM - ((y - bounds.y_min) / y_range * CHART_HEIGHT);
            format!("{:.1},{:.1}", px, py)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn axis_value(v: f64) -> String {
    if v.abs() >= 100.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}

/// Line chart of a generated table.
#[component]
pub fn TrendChart(chart: ChartView) -> impl IntoView {
    let Some(bounds) = ChartBounds::of(&chart) else {
        return view! { <p class="chart-empty">"Sin datos para graficar"</p> }.into_view();
    };
    let ChartView { title, x_label, y_label, series } = chart;

    let lines = series
        .iter()
        .map(|s| {
            let class = format!("trend-line {}", s.class);
            view! {
                <polyline
                    class=class
                    class:dashed=s.dashed
                    points=to_chart_points(&s.points, bounds)
                />
            }
        })
        .collect_view();

    let legend = series
        .into_iter()
        .map(|s| {
            let class = format!("legend-item {}", s.class);
            view! { <span class=class class:dashed=s.dashed>{s.label}</span> }
        })
        .collect_view();

    view! {
        <div class="chart-container">
            <h4>{title.clone()}</h4>
            <svg viewBox="0 0 400 200" class="trend-chart" role="img">
                <title>{title}</title>
                <text x="5" y="20" class="axis-label">{axis_value(bounds.y_max)}</text>
                <text x="5" y="168" class="axis-label">{axis_value(bounds.y_min)}</text>
                <text x="40" y="195" class="axis-label">"0"</text>
                <text x="380" y="195" class="axis-label">{axis_value(bounds.x_max)}</text>
                <line x1=CHART_LEFT y1=CHART_BOTTOM x2=CHART_RIGHT y2=CHART_BOTTOM class="grid-line"/>
                {lines}
            </svg>
            <div class="chart-legend">
                <span class="legend-label">{y_label}" vs "{x_label}</span>
                {legend}
            </div>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::ChartSeries;

    fn chart(series: Vec<Vec<(f64, f64)>>) -> ChartView {
        ChartView {
            title: "t".into(),
            x_label: "x",
            y_label: "y",
            series: series
                .into_iter()
                .map(|points| ChartSeries { label: "s".into(), class: "c", points, dashed: false })
                .collect(),
        }
    }

    #[test]
    fn test_bounds_span_all_series() {
        let c = chart(vec![vec![(0.0, 90.0), (60.0, 25.0)], vec![(0.0, 20.0), (60.0, 20.0)]]);
        let b = ChartBounds::of(&c).unwrap();
        assert_eq!(b, ChartBounds { x_max: 60.0, y_min: 20.0, y_max: 90.0 });
    }

    #[test]
    fn test_empty_chart_has_no_bounds() {
        assert!(ChartBounds::of(&chart(vec![vec![]])).is_none());
    }

    #[test]
    fn test_flat_series_gets_band() {
        let b = ChartBounds::of(&chart(vec![vec![(0.0, 5.0), (10.0, 5.0)]])).unwrap();
        assert!(b.y_max > b.y_min);
    }

    #[test]
    fn test_points_map_to_corners() {
        let b = ChartBounds { x_max: 60.0, y_min: 20.0, y_max: 90.0 };
        let pts = to_chart_points(&[(0.0, 90.0), (60.0, 20.0)], b);
        assert_eq!(pts, "40.0,20.0 390.0,165.0");
    }

    #[test]
    fn test_single_point_at_zero_time() {
        let b = ChartBounds { x_max: 0.0, y_min: 0.0, y_max: 1.0 };
        assert_eq!(to_chart_points(&[(0.0, 1.0)], b), "40.0,20.0");
    }
}
