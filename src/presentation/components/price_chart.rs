use crate::application::{FetchState, RequestGuard};
use crate::domain::logging::{get_logger, LogComponent};
use crate::domain::market_data::PriceSeries;
use crate::domain::stocks::Ticker;
use crate::infrastructure::api::ApiClient;
use crate::infrastructure::rendering::PriceChartRenderer;
use crate::presentation::components::status_panels::ErrorPanel;
use leptos::html::{Canvas, Div};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

const CANVAS_ID: &str = "price-chart-canvas";
const CHART_HEIGHT: u32 = 420;
const FALLBACK_WIDTH: i32 = 800;

/// Candlestick + volume chart for one ticker. The renderer is constructed
/// once per mount, re-fed whenever the ticker changes, resized with the
/// viewport, and torn down with the component.
#[component]
pub fn PriceChart(#[prop(into)] ticker: Signal<Ticker>) -> impl IntoView {
    let (series, set_series) = create_signal(FetchState::<PriceSeries>::Idle);
    let (retries, set_retries) = create_signal(0u32);
    let guard = RequestGuard::new();

    let container_ref = create_node_ref::<Div>();
    let canvas_ref = create_node_ref::<Canvas>();
    let renderer = Rc::new(RefCell::new(PriceChartRenderer::new(
        CANVAS_ID.to_string(),
        FALLBACK_WIDTH as u32,
        CHART_HEIGHT,
    )));

    // Fetch whenever the ticker changes or a retry is requested
    create_effect(move |_| {
        let ticker = ticker.get();
        retries.track();
        if ticker.is_empty() {
            return;
        }

        let token = guard.begin();
        set_series.set(FetchState::Loading);
        spawn_local(async move {
            let result = ApiClient::new().price_history(&ticker).await;
            if !token.is_current() {
                get_logger().debug(
                    LogComponent::Presentation("PriceChart"),
                    &format!("Dropping stale price response for {ticker}"),
                );
                return;
            }
            match result {
                Ok(data) if data.is_empty() => {
                    set_series.set(FetchState::Failed("No price data available".to_string()));
                }
                Ok(data) => set_series.set(FetchState::Ready(data)),
                Err(err) => set_series.set(FetchState::Failed(err.user_message())),
            }
        });
    });

    let render_series = {
        let renderer = Rc::clone(&renderer);
        move || {
            if let FetchState::Ready(data) = series.get() {
                let width = container_ref
                    .get_untracked()
                    .map(|el| el.client_width())
                    .filter(|w| *w > 0)
                    .unwrap_or(FALLBACK_WIDTH) as u32;

                let mut renderer = renderer.borrow_mut();
                renderer.set_dimensions(width, CHART_HEIGHT);
                if let Err(err) = renderer.render(ticker.get_untracked().value(), &data) {
                    crate::log_error!(
                        LogComponent::Presentation("PriceChart"),
                        "Chart render failed: {err:?}"
                    );
                }
            }
        }
    };

    // Redraw once the canvas is mounted and whenever the data snapshot moves
    create_effect({
        let render_series = render_series.clone();
        move |_| {
            if canvas_ref.get().is_some() {
                render_series();
            }
        }
    });

    // Keep the chart fitted to its container across viewport resizes
    let resize_handle = window_event_listener(ev::resize, {
        let render_series = render_series.clone();
        move |_| render_series()
    });
    on_cleanup(move || resize_handle.remove());

    view! {
        <div class="price-chart" node_ref=container_ref>
            {move || match series.get() {
                FetchState::Idle | FetchState::Loading => {
                    view! {
                        <div class="chart-overlay">
                            <div class="pulse-dots">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                            <p class="mono muted">
                                {move || format!("Loading {}", ticker.get())}
                            </p>
                        </div>
                    }
                        .into_view()
                }
                FetchState::Failed(message) => {
                    view! {
                        <ErrorPanel
                            message=message
                            on_retry=Callback::new(move |()| set_retries.update(|r| *r += 1))
                        />
                    }
                        .into_view()
                }
                FetchState::Ready(_) => ().into_view(),
            }}

            <canvas id=CANVAS_ID node_ref=canvas_ref></canvas>

            <div class="chart-legend mono muted">
                <span class="legend-swatch swatch-up"></span>
                <span>"OHLC"</span>
                <span class="legend-swatch swatch-volume"></span>
                <span>"Volume"</span>
            </div>
        </div>
    }
}
