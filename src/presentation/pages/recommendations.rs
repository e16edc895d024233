use crate::application::{FetchState, RequestGuard};
use crate::domain::stocks::{sorted, Category, Recommendation, SortField, SortSpec};
use crate::infrastructure::api::ApiClient;
use crate::presentation::components::{grade_badge_class, EmptyPanel, ErrorPanel, SkeletonRows};
use leptos::*;
use leptos_router::A;
use strum::IntoEnumIterator;

const PAGE_LIMIT: u32 = 30;

/// Ranked recommendation table with category tabs and client-side sorting.
/// Switching tabs refetches; sorting never touches the network.
#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let (category, set_category) = create_signal(Category::TopPicks);
    let (rows, set_rows) = create_signal(FetchState::<Vec<Recommendation>>::Idle);
    let (sort_spec, set_sort_spec) = create_signal(SortSpec::default());
    let (retries, set_retries) = create_signal(0u32);
    let guard = RequestGuard::new();

    create_effect(move |_| {
        let active = category.get();
        retries.track();
        let token = guard.begin();
        set_rows.set(FetchState::Loading);
        spawn_local(async move {
            let result = ApiClient::new().recommendations(active, PAGE_LIMIT).await;
            if !token.is_current() {
                return;
            }
            match result {
                Ok(data) => set_rows.set(FetchState::Ready(data)),
                Err(err) => set_rows.set(FetchState::Failed(err.user_message())),
            }
        });
    });

    let on_sort = Callback::new(move |field: SortField| {
        set_sort_spec.update(|spec| *spec = spec.clicked(field));
    });

    view! {
        <div class="page-hero">
            <h1>
                <span class="block">"Stock"</span>
                <span class="block accent">"Recommendations"</span>
            </h1>
            <p class="muted">
                "Algorithmically ranked stocks based on valuation, profitability, growth, \
                 and momentum metrics."
            </p>
        </div>

        <div class="tab-list">
            {Category::iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab"
                            class=("tab-active", move || category.get() == tab)
                            on:click=move |_| set_category.set(tab)
                        >
                            <span class=format!("tab-icon text-{}", tab.accent_class())>
                                {tab.icon()}
                            </span>
                            <span class="tab-label">{tab.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>

        {move || match rows.get() {
            FetchState::Idle | FetchState::Loading => view! { <SkeletonRows count=5/> }.into_view(),
            FetchState::Failed(message) => {
                view! {
                    <ErrorPanel
                        message=message
                        on_retry=Callback::new(move |()| set_retries.update(|r| *r += 1))
                    />
                }
                    .into_view()
            }
            FetchState::Ready(data) if data.is_empty() => {
                view! {
                    <EmptyPanel
                        title="No Data Available"
                        message="No recommendations found for this category. Check back later."
                    />
                }
                    .into_view()
            }
            FetchState::Ready(data) => view_table(&data, sort_spec.get(), on_sort).into_view(),
        }}
    }
}

fn view_table(
    data: &[Recommendation],
    spec: SortSpec,
    on_sort: Callback<SortField>,
) -> impl IntoView {
    let last_updated = data.first().map(|row| row.score_date.format("%m/%d/%Y").to_string());
    let sorted_rows = sorted(data, spec);

    view! {
        <div class="panel">
            <div class="stats-bar">
                <div class="stats-count">
                    <span class="mono stats-number">{data.len()}</span>
                    <span class="muted">"Stocks Found"</span>
                </div>
                {last_updated
                    .map(|date| {
                        view! {
                            <div class="mono muted stats-date">
                                <span>"Last Updated: "</span>
                                <span class="bold">{date}</span>
                            </div>
                        }
                    })}
            </div>

            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            <SortHeader label="Ticker" field=SortField::Ticker on_sort=on_sort/>
                            <th>"Company"</th>
                            <th>"Sector"</th>
                            <SortHeader label="Val" field=SortField::Valuation on_sort=on_sort/>
                            <SortHeader
                                label="Prof"
                                field=SortField::Profitability
                                on_sort=on_sort
                            />
                            <SortHeader label="Growth" field=SortField::Growth on_sort=on_sort/>
                            <SortHeader label="Mom" field=SortField::Momentum on_sort=on_sort/>
                            <SortHeader label="Total" field=SortField::Total on_sort=on_sort/>
                            <th class="center">"Grade"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {sorted_rows.into_iter().map(view_row).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn SortHeader(
    label: &'static str,
    field: SortField,
    on_sort: Callback<SortField>,
) -> impl IntoView {
    view! {
        <th>
            <button class="sort-button" on:click=move |_| on_sort.call(field)>
                {label}
                <span class="sort-glyph">"\u{21C5}"</span>
            </button>
        </th>
    }
}

fn view_row(row: Recommendation) -> impl IntoView {
    let href = format!("/stock/{}", row.ticker);
    view! {
        <tr>
            <td class="mono bold">
                <A href=href>{row.ticker.to_string()}</A>
            </td>
            <td>{row.name}</td>
            <td class="muted">{row.sector.unwrap_or_else(|| "\u{2014}".to_string())}</td>
            <td class="mono right">{row.valuation_score.to_string()}</td>
            <td class="mono right">{row.profitability_score.to_string()}</td>
            <td class="mono right">{row.growth_score.to_string()}</td>
            <td class="mono right">{row.momentum_score.to_string()}</td>
            <td class="mono right bold">{row.total_score.to_string()}</td>
            <td class="center">
                <span class=grade_badge_class(row.grade)>{row.grade.to_string()}</span>
            </td>
        </tr>
    }
}
