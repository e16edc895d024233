use crate::domain::stocks::{Grade, Outlook};
use leptos::*;

/// Pulsing placeholder rows shown while a list surface is loading
#[component]
pub fn SkeletonRows(#[prop(default = 5)] count: usize) -> impl IntoView {
    view! {
        <div class="skeleton-list">
            {(0..count)
                .map(|_| view! { <div class="skeleton-row"></div> })
                .collect_view()}
        </div>
    }
}

/// Typed error panel with an optional retry affordance
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-panel">
            <div class="error-panel-header">
                <div class="error-block"></div>
                <h3>"Error Loading Data"</h3>
            </div>
            <p class="error-message">{move || message.get()}</p>
            {on_retry.map(|retry| {
                view! {
                    <button class="btn btn-destructive" on:click=move |_| retry.call(())>
                        "Retry"
                    </button>
                }
            })}
        </div>
    }
}

/// Empty-state panel for a valid 2xx response with zero items
#[component]
pub fn EmptyPanel(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="empty-panel">
            <div class="empty-block"></div>
            <h3>{title}</h3>
            <p>{message}</p>
        </div>
    }
}

/// Badge styling for recommendation letter grades
pub fn grade_badge_class(grade: Grade) -> &'static str {
    match grade {
        Grade::APlus => "badge badge-grade-a-plus",
        Grade::A => "badge badge-grade-a",
        Grade::BPlus => "badge badge-grade-b-plus",
        Grade::B => "badge badge-grade-b",
        Grade::CPlus => "badge badge-grade-c-plus",
        Grade::C => "badge badge-grade-c",
        Grade::D => "badge badge-grade-d",
        Grade::F => "badge badge-grade-f",
    }
}

/// Badge styling for the detail page's outlook rating
pub fn outlook_badge_class(outlook: Outlook) -> &'static str {
    match outlook {
        Outlook::StrongBuy => "badge badge-strong-buy",
        Outlook::Buy => "badge badge-buy",
        Outlook::Hold => "badge badge-hold",
        Outlook::Sell => "badge badge-sell",
    }
}
