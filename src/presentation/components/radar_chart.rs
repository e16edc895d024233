use crate::domain::chart::RadarGeometry;
use crate::domain::stocks::StockScore;
use leptos::*;

/// One color per factor axis, in radar order
const FACTOR_COLORS: [&str; 5] = ["#00ff88", "#4d9fff", "#ffc14d", "#ff8c4d", "#c77dff"];

const POLYGON_FILL: &str = "rgba(0, 255, 136, 0.2)";
const POLYGON_STROKE: &str = "#00ff88";

/// Hand-rolled SVG radar of the five factor scores. Vertices sit along axes
/// spaced 72° apart starting at the top; scores above 100 render outside the
/// outer ring.
#[component]
pub fn StockRadarChart(score: StockScore) -> impl IntoView {
    let geometry = RadarGeometry::default();
    let center = geometry.center();
    let factors = score.factors();

    let scores: [f64; 5] = [
        f64::from(score.valuation_score.value()),
        f64::from(score.profitability_score.value()),
        f64::from(score.growth_score.value()),
        f64::from(score.momentum_score.value()),
        f64::from(score.revision_score.value()),
    ];
    let polygon = geometry.polygon_points(&scores);

    let rings = (0..geometry.levels)
        .map(|level| {
            let radius = geometry.ring_radius(level);
            let value = geometry.ring_value(level);
            view! {
                <circle
                    cx=center.x
                    cy=center.y
                    r=radius
                    fill="none"
                    stroke="#2e2e2e"
                    stroke-width="1"
                ></circle>
                <text
                    x={center.x + radius + 5.0}
                    y=center.y
                    class="radar-ring-label"
                >
                    {format!("{value:.0}")}
                </text>
            }
        })
        .collect_view();

    let axes = (0..factors.len())
        .map(|axis| {
            let end = geometry.axis_end(axis);
            view! {
                <line
                    x1=center.x
                    y1=center.y
                    x2=end.x
                    y2=end.y
                    stroke="#2e2e2e"
                    stroke-width="1"
                ></line>
            }
        })
        .collect_view();

    let vertices = factors
        .iter()
        .enumerate()
        .map(|(axis, (_, value))| {
            let point = geometry.vertex(axis, f64::from(value.value()));
            view! {
                <circle
                    cx=point.x
                    cy=point.y
                    r="5"
                    fill=FACTOR_COLORS[axis]
                    stroke="#1a1a1a"
                    stroke-width="2"
                ></circle>
                <text x=point.x y={point.y - 10.0} text-anchor="middle" class="radar-value-label">
                    {value.value().to_string()}
                </text>
            }
        })
        .collect_view();

    let labels = factors
        .iter()
        .enumerate()
        .map(|(axis, (label, _))| {
            let position = geometry.label_position(axis);
            view! {
                <text
                    x=position.x
                    y=position.y
                    text-anchor=geometry.label_anchor(axis)
                    dominant-baseline="middle"
                    class="radar-axis-label"
                >
                    {*label}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="radar-chart">
            <svg viewBox=format!("0 0 {} {}", geometry.size, geometry.size)>
                {rings}
                {axes}
                <polygon
                    points=polygon
                    fill=POLYGON_FILL
                    stroke=POLYGON_STROKE
                    stroke-width="2"
                ></polygon>
                {vertices}
                {labels}
            </svg>

            <div class="radar-legend">
                {factors
                    .iter()
                    .enumerate()
                    .map(|(axis, (label, value))| {
                        view! {
                            <div class="radar-legend-item">
                                <div class="radar-legend-name">
                                    <div
                                        class="chip"
                                        style=format!("background-color: {}", FACTOR_COLORS[axis])
                                    ></div>
                                    <span>{*label}</span>
                                </div>
                                <div class="mono bold">{value.value().to_string()}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
