use crate::domain::stocks::FinancialSummary;
use leptos::*;

/// Compact money formatting: trillions down to thousands, two decimals
pub fn format_compact(value: Option<f64>) -> String {
    let Some(value) = value else { return "N/A".to_string() };
    let abs = value.abs();
    if abs >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{value:.2}")
    }
}

pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}"),
        None => "N/A".to_string(),
    }
}

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}%"),
        None => "N/A".to_string(),
    }
}

/// Qualitative read of the P/E ratio
pub fn per_hint(per: f64) -> &'static str {
    if per < 15.0 {
        "Undervalued"
    } else if per > 25.0 {
        "Overvalued"
    } else {
        "Fair"
    }
}

/// Qualitative read of return on equity
pub fn roe_hint(roe: f64) -> &'static str {
    if roe > 15.0 {
        "Strong"
    } else if roe < 5.0 {
        "Weak"
    } else {
        "Average"
    }
}

struct MetricRow {
    label: &'static str,
    description: &'static str,
    value: String,
    hint: Option<&'static str>,
    color: &'static str,
}

/// Fundamental ratios panel on the stock detail page
#[component]
pub fn FinancialSummaryPanel(financials: FinancialSummary) -> impl IntoView {
    let rows = vec![
        MetricRow {
            label: "P/E Ratio",
            description: "Price to Earnings",
            value: format_ratio(financials.per),
            hint: financials.per.map(per_hint),
            color: "chart-1",
        },
        MetricRow {
            label: "P/B Ratio",
            description: "Price to Book",
            value: format_ratio(financials.pbr),
            hint: None,
            color: "chart-2",
        },
        MetricRow {
            label: "ROE",
            description: "Return on Equity",
            value: format_percent(financials.roe),
            hint: financials.roe.map(roe_hint),
            color: "chart-3",
        },
        MetricRow {
            label: "Revenue",
            description: "Annual Revenue",
            value: format_compact(financials.revenue),
            hint: None,
            color: "chart-4",
        },
        MetricRow {
            label: "Net Income",
            description: "Annual Net Income",
            value: format_compact(financials.net_income),
            hint: None,
            color: "chart-5",
        },
    ];

    view! {
        <div class="metric-list">
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="metric-row">
                            <div class="metric-name">
                                <div class=format!("chip bg-{}", row.color)></div>
                                <div>
                                    <div class="metric-label">{row.label}</div>
                                    <div class="metric-description">{row.description}</div>
                                </div>
                            </div>
                            <div class="metric-value">
                                <div class=format!("mono bold text-{}", row.color)>{row.value}</div>
                                {row.hint.map(|hint| view! { <div class="metric-hint">{hint}</div> })}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
