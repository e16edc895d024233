use crate::application::{FetchState, RequestGuard};
use crate::domain::stocks::{StockDetail, StockScore, Ticker};
use crate::infrastructure::api::ApiClient;
use crate::presentation::components::{
    outlook_badge_class, ErrorPanel, FinancialSummaryPanel, PriceChart, SkeletonRows,
    StockRadarChart, WatchlistButton,
};
use leptos::*;
use leptos_router::use_params_map;

/// Detail page composing three independent fetch surfaces: stock metadata
/// (this page), the price history (PriceChart) and watchlist membership
/// (WatchlistButton). Each carries its own loading/error state.
#[component]
pub fn StockDetailPage() -> impl IntoView {
    let params = use_params_map();
    let ticker = create_memo(move |_| {
        params.with(|map| Ticker::from(map.get("ticker").cloned().unwrap_or_default()))
    });

    let (detail, set_detail) = create_signal(FetchState::<StockDetail>::Idle);
    let (retries, set_retries) = create_signal(0u32);
    let guard = RequestGuard::new();

    create_effect(move |_| {
        let ticker = ticker.get();
        retries.track();
        if ticker.is_empty() {
            return;
        }

        let token = guard.begin();
        set_detail.set(FetchState::Loading);
        spawn_local(async move {
            let result = ApiClient::new().stock_detail(&ticker).await;
            if !token.is_current() {
                return;
            }
            match result {
                Ok(data) => set_detail.set(FetchState::Ready(data)),
                Err(err) => set_detail.set(FetchState::Failed(err.user_message())),
            }
        });
    });

    view! {
        {move || {
            detail
                .get()
                .error()
                .map(|message| {
                    view! {
                        <ErrorPanel
                            message=message.to_string()
                            on_retry=Callback::new(move |()| set_retries.update(|r| *r += 1))
                        />
                    }
                })
        }}

        <section class="stock-header">
            {move || match detail.get() {
                FetchState::Idle | FetchState::Loading => {
                    view! { <SkeletonRows count=2/> }.into_view()
                }
                FetchState::Ready(stock) => view_header(&stock).into_view(),
                FetchState::Failed(_) => ().into_view(),
            }}
        </section>

        <div class="detail-grid">
            <div class="detail-main">
                <section>
                    <h2 class="section-title">"Price History"</h2>
                    <PriceChart ticker=ticker/>
                </section>

                <section>
                    <h2 class="section-title">"Factor Analysis"</h2>
                    <div class="panel panel-padded">
                        {move || match detail.get() {
                            FetchState::Idle | FetchState::Loading => {
                                view! {
                                    <div class="chart-overlay">
                                        <div class="pulse-dots">
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </div>
                                        <p class="mono muted">"Loading Analysis"</p>
                                    </div>
                                }
                                    .into_view()
                            }
                            FetchState::Ready(stock) => {
                                match stock.latest_score {
                                    Some(score) => {
                                        view! { <StockRadarChart score=score/> }.into_view()
                                    }
                                    None => {
                                        view! {
                                            <div class="dashed-panel mono muted">
                                                "No score data available"
                                            </div>
                                        }
                                            .into_view()
                                    }
                                }
                            }
                            FetchState::Failed(_) => ().into_view(),
                        }}
                    </div>
                </section>
            </div>

            <div class="detail-side">
                <section>
                    <WatchlistButton ticker=ticker/>
                </section>

                <section>
                    <h2 class="section-title">"Financials"</h2>
                    <div class="panel">
                        {move || match detail.get() {
                            FetchState::Idle | FetchState::Loading => {
                                view! { <SkeletonRows count=5/> }.into_view()
                            }
                            FetchState::Ready(stock) => {
                                match stock.latest_financials {
                                    Some(financials) => {
                                        view! { <FinancialSummaryPanel financials=financials/> }
                                            .into_view()
                                    }
                                    None => {
                                        view! {
                                            <div class="dashed-panel mono muted">
                                                "No financial data available"
                                            </div>
                                        }
                                            .into_view()
                                    }
                                }
                            }
                            FetchState::Failed(_) => ().into_view(),
                        }}
                    </div>
                </section>

                {move || {
                    detail
                        .get()
                        .data()
                        .and_then(|stock| stock.latest_score)
                        .map(|score| view_score_breakdown(&score))
                }}
            </div>
        </div>
    }
}

fn view_header(stock: &StockDetail) -> impl IntoView {
    let score = stock.latest_score;
    view! {
        <div class="panel panel-padded stock-title">
            <div>
                <div class="stock-title-row">
                    <h1 class="mono">{stock.ticker.to_string()}</h1>
                    {score
                        .map(|s| {
                            view! {
                                <span class=outlook_badge_class(s.grade)>{s.grade.to_string()}</span>
                            }
                        })}
                </div>
                <p class="muted stock-name">{stock.name.clone()}</p>
                <div class="mono muted stock-meta">
                    <span>{stock.market.clone()}</span>
                    {stock.sector.clone().map(|sector| view! { <span>{sector}</span> })}
                </div>
            </div>

            {score
                .map(|s| {
                    view! {
                        <div class="total-score">
                            <div class="score-label muted">"Total Score"</div>
                            <div class="score-value mono accent">{s.total_score.to_string()}</div>
                            <div class="muted">"out of 100"</div>
                        </div>
                    }
                })}
        </div>
    }
}

fn view_score_breakdown(score: &StockScore) -> impl IntoView + use<> {
    view! {
        <section>
            <div class="panel panel-padded">
                <h3 class="section-subtitle muted">"Score Breakdown"</h3>
                <div class="breakdown-list">
                    {score
                        .factors()
                        .iter()
                        .enumerate()
                        .map(|(idx, (label, value))| {
                            view! {
                                <div class="breakdown-row">
                                    <div class="metric-name">
                                        <div class=format!("chip bg-chart-{}", idx + 1)></div>
                                        <span>{*label}</span>
                                    </div>
                                    <span class="mono bold">{value.to_string()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
