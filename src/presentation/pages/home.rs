use crate::application::FetchState;
use crate::domain::logging::LogComponent;
use crate::domain::stocks::{Category, Recommendation};
use crate::infrastructure::api::ApiClient;
use crate::presentation::components::{grade_badge_class, SkeletonRows};
use leptos::*;
use leptos_router::A;

const FEATURES: [(&str, &str); 4] = [
    ("Multi-Factor Scoring", "Combines valuation, profitability, growth, and momentum metrics"),
    ("Real-Time Data", "Daily price updates and fundamental data from Korean and US markets"),
    ("Smart Recommendations", "Algorithmic strategies for undervalued, growth, and momentum plays"),
    ("Instant Analysis", "Comprehensive stock profiles with historical performance metrics"),
];

/// Landing page: hero, today's top picks preview, feature grid. The preview
/// section disappears quietly when the fetch fails.
#[component]
pub fn HomePage() -> impl IntoView {
    let (top_picks, set_top_picks) = create_signal(FetchState::<Vec<Recommendation>>::Idle);

    create_effect(move |_| {
        set_top_picks.set(FetchState::Loading);
        spawn_local(async move {
            match ApiClient::new().recommendations(Category::TopPicks, 5).await {
                Ok(rows) => set_top_picks.set(FetchState::Ready(rows)),
                Err(err) => {
                    crate::log_warn!(
                        LogComponent::Presentation("Home"),
                        "Failed to fetch top picks: {err}"
                    );
                    set_top_picks.set(FetchState::Failed(err.user_message()));
                }
            }
        });
    });

    view! {
        <section class="hero">
            <h1>
                <span class="block">"Data-Driven"</span>
                <span class="block accent">"Stock Analysis"</span>
            </h1>
            <p class="hero-copy">
                "AI-powered insights for Korean and US markets. Make informed investment \
                 decisions with real-time data, fundamental analysis, and algorithmic scoring."
            </p>
            <div class="hero-actions">
                <A href="/recommendations" class="btn btn-accent btn-lg">
                    "View Recommendations"
                </A>
                <A href="/search" class="btn btn-outline btn-lg">
                    "Search Stocks"
                </A>
            </div>
        </section>

        <section class="top-picks">
            <div class="section-header">
                <h2>"Top Picks " <span class="accent">"Today"</span></h2>
                <A href="/recommendations" class="btn btn-outline">
                    "View All"
                </A>
            </div>

            {move || match top_picks.get() {
                FetchState::Idle | FetchState::Loading => {
                    view! { <SkeletonRows count=5/> }.into_view()
                }
                FetchState::Ready(rows) if !rows.is_empty() => {
                    view! {
                        <div class="pick-list">
                            {rows
                                .into_iter()
                                .enumerate()
                                .map(|(idx, row)| view_pick_row(idx, row))
                                .collect_view()}
                        </div>
                    }
                        .into_view()
                }
                // Failed or empty: the preview simply does not render
                _ => ().into_view(),
            }}
        </section>

        <section class="feature-grid">
            {FEATURES
                .iter()
                .map(|(title, description)| {
                    view! {
                        <div class="feature-card">
                            <h3>{*title}</h3>
                            <p class="muted">{*description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn view_pick_row(idx: usize, row: Recommendation) -> impl IntoView {
    let href = format!("/stock/{}", row.ticker);
    view! {
        <A href=href class="pick-row">
            <div class="pick-rank mono">{format!("#{}", idx + 1)}</div>
            <div class="pick-identity">
                <div class="pick-ticker mono">{row.ticker.to_string()}</div>
                <div class="pick-name muted">{row.name}</div>
            </div>
            <div class="pick-score">
                <div class="score-label muted">"Score"</div>
                <div class="mono bold">{row.total_score.to_string()}</div>
            </div>
            <span class=grade_badge_class(row.grade)>{row.grade.to_string()}</span>
        </A>
    }
}
