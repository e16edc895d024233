use crate::application::routing::{decide_route, GuardDecision};
use crate::application::session::init_session;
use crate::domain::logging::{get_logger, LogComponent};
use crate::infrastructure::cookies;
use crate::presentation::components::Navbar;
use crate::presentation::pages::{
    HomePage, LoginPage, RecommendationsPage, RegisterPage, SearchPage, StockDetailPage,
    WatchlistPage,
};
use leptos::*;
use leptos_router::{use_location, use_navigate, Route, Router, Routes};

/// Root component: creates the session context, runs the auth probe once,
/// and wires the route table behind the cookie guard.
#[component]
pub fn App() -> impl IntoView {
    let session = init_session();
    spawn_local(async move {
        session.check_auth().await;
    });

    view! {
        <style>{STYLESHEET}</style>
        <Router>
            <RouteGuard/>
            <Navbar/>
            <main class="container">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/search" view=SearchPage/>
                    <Route path="/recommendations" view=RecommendationsPage/>
                    <Route path="/stock/:ticker" view=StockDetailPage/>
                    <Route path="/watchlist" view=WatchlistPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Evaluates the guard on every navigation, before the target page renders.
/// Presence check only: a stale token still passes and is caught by the API.
#[component]
fn RouteGuard() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    create_effect(move |_| {
        let path = location.pathname.get();
        match decide_route(&path, cookies::has_session_token()) {
            GuardDecision::RedirectToLogin => {
                get_logger().info(
                    LogComponent::Application("RouteGuard"),
                    &format!("Redirecting {path} to /login"),
                );
                navigate("/login", Default::default());
            }
            GuardDecision::RedirectToWatchlist => {
                navigate("/watchlist", Default::default());
            }
            GuardDecision::Proceed => {}
        }
    });
}

const STYLESHEET: &str = r#"
:root {
    --background: #111111;
    --card: #1a1a1a;
    --border: #2e2e2e;
    --foreground: #f5f5f5;
    --muted: #9a9a9a;
    --accent: #00ff88;
    --accent-foreground: #0a0a0a;
    --destructive: #ff4444;
    --chart-1: #00ff88;
    --chart-2: #4d9fff;
    --chart-3: #ffc14d;
    --chart-4: #ff8c4d;
    --chart-5: #c77dff;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--background);
    color: var(--foreground);
    font-family: 'Inter', system-ui, sans-serif;
}

.mono { font-family: 'IBM Plex Mono', monospace; }
.muted { color: var(--muted); }
.accent { color: var(--accent); }
.bold { font-weight: 700; }
.block { display: block; }
.center { text-align: center; }
.right { text-align: right; }

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2.5rem 1rem;
}

/* Navbar */
.navbar {
    position: sticky;
    top: 0;
    z-index: 50;
    border-bottom: 4px solid var(--border);
    background: rgba(17, 17, 17, 0.95);
}
.navbar-inner {
    max-width: 1100px;
    margin: 0 auto;
    padding: 0 1rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.navbar-brand {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    font-weight: 700;
    font-size: 1.2rem;
    text-transform: uppercase;
    color: var(--foreground);
    text-decoration: none;
}
.brand-mark { width: 0.8rem; height: 0.8rem; background: var(--accent); }
.navbar-links { display: flex; align-items: center; gap: 0.4rem; }
.navbar-user { margin: 0 0.4rem; }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.6rem 1.2rem;
    border: 2px solid var(--border);
    border-radius: 0;
    background: transparent;
    color: var(--foreground);
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
}
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-accent {
    background: var(--accent);
    border-color: var(--accent);
    color: var(--accent-foreground);
}
.btn-outline:hover { border-color: var(--accent); }
.btn-ghost { border-color: transparent; }
.btn-destructive {
    background: var(--destructive);
    border-color: var(--destructive);
    color: var(--foreground);
}
.btn-danger:hover { border-color: var(--destructive); color: var(--destructive); }
.btn-block { width: 100%; height: 3.5rem; font-size: 1.05rem; }
.btn-lg { height: 3.5rem; padding: 0 2rem; font-size: 1.1rem; }

/* Hero sections */
.hero h1, .page-hero h1 {
    font-size: clamp(2.4rem, 6vw, 4.2rem);
    letter-spacing: -0.02em;
    margin: 0 0 1rem;
}
.hero-copy { font-size: 1.2rem; color: var(--muted); max-width: 42rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 1.5rem; }
.page-hero { margin-bottom: 2.5rem; }

/* Panels */
.panel { border: 4px solid var(--border); background: var(--card); }
.panel-padded { padding: 1.5rem; }
.dashed-panel {
    border: 2px dashed var(--border);
    padding: 4rem 1rem;
    text-align: center;
}

/* Skeletons */
.skeleton-list { display: grid; gap: 1rem; }
.skeleton-row {
    height: 4rem;
    border: 2px solid var(--border);
    background: rgba(255, 255, 255, 0.04);
    animation: pulse 1.4s ease-in-out infinite;
}
@keyframes pulse { 50% { opacity: 0.4; } }

/* Error and empty states */
.error-panel {
    border: 4px solid var(--destructive);
    background: rgba(255, 68, 68, 0.08);
    padding: 2rem;
}
.error-panel-header { display: flex; align-items: center; gap: 1rem; }
.error-block { width: 3rem; height: 3rem; background: var(--destructive); }
.error-message { font-size: 1.1rem; color: var(--muted); }
.empty-panel {
    border: 4px solid var(--border);
    background: rgba(255, 255, 255, 0.03);
    padding: 3rem 1rem;
    text-align: center;
}
.empty-block {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.5rem;
    background: rgba(255, 255, 255, 0.08);
}
.form-error {
    border: 2px solid var(--destructive);
    background: rgba(255, 68, 68, 0.1);
    padding: 0.8rem;
    text-align: center;
    text-transform: uppercase;
    font-family: 'IBM Plex Mono', monospace;
    font-size: 0.85rem;
    color: var(--destructive);
}

/* Tabs */
.tab-list {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
    gap: 1rem;
    margin-bottom: 2rem;
}
.tab {
    border: 4px solid var(--border);
    background: transparent;
    color: var(--foreground);
    padding: 1rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    cursor: pointer;
    text-transform: uppercase;
    font-weight: 700;
}
.tab-active { border-color: var(--accent); background: rgba(0, 255, 136, 0.08); }
.tab-icon { font-size: 1.4rem; }

/* Table */
.stats-bar {
    border-bottom: 4px solid var(--border);
    padding: 1.2rem 1.5rem;
    display: flex;
    align-items: baseline;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 1rem;
    background: rgba(255, 255, 255, 0.03);
}
.stats-count { display: flex; align-items: baseline; gap: 0.8rem; }
.stats-number { font-size: 2.2rem; font-weight: 700; }
.table-wrap { overflow-x: auto; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 0.8rem 1rem; text-align: left; }
thead tr { border-bottom: 2px solid var(--border); }
tbody tr { border-bottom: 1px solid var(--border); }
tbody tr:hover { background: rgba(0, 255, 136, 0.05); }
th { text-transform: uppercase; font-size: 0.8rem; letter-spacing: 0.06em; }
td a { color: var(--foreground); }
td a:hover { color: var(--accent); }
.sort-button {
    background: none;
    border: none;
    color: inherit;
    font: inherit;
    text-transform: inherit;
    cursor: pointer;
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
}
.sort-button:hover { color: var(--accent); }
.sort-glyph { opacity: 0.6; }

/* Badges */
.badge {
    display: inline-block;
    padding: 0.25rem 0.8rem;
    font-family: 'IBM Plex Mono', monospace;
    font-weight: 700;
    font-size: 0.85rem;
}
.badge-grade-a-plus, .badge-grade-a, .badge-strong-buy, .badge-buy {
    background: var(--chart-1); color: var(--accent-foreground);
}
.badge-grade-b-plus, .badge-grade-b, .badge-hold {
    background: var(--chart-3); color: var(--accent-foreground);
}
.badge-grade-c-plus, .badge-grade-c {
    background: var(--chart-2); color: var(--accent-foreground);
}
.badge-grade-d, .badge-grade-f, .badge-sell {
    background: var(--destructive); color: var(--foreground);
}

/* Home */
.top-picks { margin: 4rem 0; }
.section-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1.5rem;
}
.pick-list { border: 4px solid var(--border); background: var(--card); }
.pick-row {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    padding: 1.2rem 1.5rem;
    border-bottom: 2px solid var(--border);
    color: var(--foreground);
    text-decoration: none;
}
.pick-row:last-child { border-bottom: none; }
.pick-row:hover { background: rgba(0, 255, 136, 0.05); }
.pick-rank {
    width: 3rem;
    height: 3rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 255, 136, 0.2);
    font-weight: 700;
}
.pick-identity { flex: 1; min-width: 0; }
.pick-ticker { font-weight: 700; font-size: 1.15rem; }
.pick-score { text-align: right; }
.score-label { text-transform: uppercase; font-size: 0.75rem; letter-spacing: 0.06em; }
.feature-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    gap: 1rem;
}
.feature-card { border: 4px solid var(--border); background: var(--card); padding: 1.5rem; }

/* Search and watchlist cards */
.search-form { display: flex; gap: 1rem; margin-bottom: 2rem; }
.search-input {
    flex: 1;
    height: 3.5rem;
    padding: 0 1rem;
    border: 4px solid var(--border);
    background: var(--card);
    color: var(--foreground);
    font-size: 1.05rem;
}
.search-input:focus { outline: none; border-color: var(--accent); }
.result-list { display: grid; gap: 1rem; }
.result-count { text-transform: uppercase; letter-spacing: 0.06em; font-size: 0.85rem; }
.result-card {
    border: 4px solid var(--border);
    background: var(--card);
    padding: 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}
.result-card:hover { border-color: var(--accent); }
.result-title { display: flex; align-items: center; gap: 1rem; }
.result-ticker {
    font-size: 1.4rem;
    font-weight: 700;
    text-transform: uppercase;
    color: var(--foreground);
    text-decoration: none;
}
.result-ticker:hover { color: var(--accent); }
.market-tag {
    border: 2px solid var(--border);
    background: rgba(255, 255, 255, 0.06);
    padding: 0.15rem 0.5rem;
    font-size: 0.75rem;
    text-transform: uppercase;
}
.result-actions { display: flex; align-items: center; gap: 0.8rem; }
.dot-sep { margin: 0 0.5rem; }

/* Auth */
.auth-page { display: flex; justify-content: center; padding: 3rem 0; }
.auth-card {
    width: 100%;
    max-width: 28rem;
    border: 4px solid var(--border);
    background: var(--card);
}
.auth-card-header { border-bottom: 4px solid var(--border); padding: 1.5rem; }
.auth-card form { padding: 1.5rem; display: grid; gap: 1.4rem; }
.auth-card-footer {
    border-top: 2px solid var(--border);
    padding: 1.2rem;
    text-align: center;
}
.field { display: grid; gap: 0.5rem; }
.field label {
    text-transform: uppercase;
    font-size: 0.75rem;
    font-weight: 700;
    letter-spacing: 0.08em;
}
.field input, .password-row input {
    width: 100%;
    height: 3rem;
    padding: 0 0.8rem;
    border: 2px solid var(--border);
    background: var(--background);
    color: var(--foreground);
}
.field input:focus { outline: none; border-color: var(--accent); }
.password-row { display: flex; gap: 0.5rem; }
.field-error {
    margin: 0;
    font-family: 'IBM Plex Mono', monospace;
    font-size: 0.75rem;
    text-transform: uppercase;
    color: var(--destructive);
}

/* Stock detail */
.detail-grid {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 1.5rem;
    align-items: start;
}
@media (max-width: 900px) { .detail-grid { grid-template-columns: 1fr; } }
.detail-main, .detail-side { display: grid; gap: 1.5rem; }
.section-title {
    text-transform: uppercase;
    letter-spacing: 0.05em;
    font-size: 1.1rem;
    margin: 0 0 1rem;
}
.section-subtitle {
    text-transform: uppercase;
    letter-spacing: 0.05em;
    font-size: 0.85rem;
    margin: 0 0 1rem;
}
.stock-header { margin-bottom: 2rem; }
.stock-title {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1.5rem;
    flex-wrap: wrap;
}
.stock-title-row { display: flex; align-items: center; gap: 1rem; }
.stock-title h1 { margin: 0; font-size: 2.8rem; }
.stock-name { font-size: 1.2rem; }
.stock-meta { display: flex; gap: 1rem; text-transform: uppercase; font-size: 0.85rem; }
.total-score { text-align: right; }
.score-value { font-size: 3.4rem; font-weight: 700; }
.breakdown-list { display: grid; gap: 0.8rem; }
.breakdown-row { display: flex; align-items: center; justify-content: space-between; }

/* Metrics */
.metric-list > .metric-row { border-bottom: 2px solid var(--border); }
.metric-list > .metric-row:last-child { border-bottom: none; }
.metric-row {
    padding: 1.2rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.metric-name { display: flex; align-items: center; gap: 0.8rem; }
.metric-label { font-weight: 600; }
.metric-description {
    text-transform: uppercase;
    font-size: 0.7rem;
    letter-spacing: 0.06em;
    color: var(--muted);
}
.metric-value { text-align: right; font-size: 1.3rem; }
.metric-hint { font-size: 0.75rem; color: var(--muted); }
.chip { width: 0.75rem; height: 0.75rem; }
.bg-chart-1 { background: var(--chart-1); }
.bg-chart-2 { background: var(--chart-2); }
.bg-chart-3 { background: var(--chart-3); }
.bg-chart-4 { background: var(--chart-4); }
.bg-chart-5 { background: var(--chart-5); }
.text-chart-1 { color: var(--chart-1); }
.text-chart-2 { color: var(--chart-2); }
.text-chart-3 { color: var(--chart-3); }
.text-chart-4 { color: var(--chart-4); }
.text-chart-5 { color: var(--chart-5); }

/* Charts */
.price-chart {
    position: relative;
    min-height: 420px;
    border: 4px solid var(--border);
    background: var(--card);
}
.price-chart canvas { display: block; width: 100%; }
.chart-overlay {
    position: absolute;
    inset: 0;
    z-index: 10;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    background: var(--card);
}
.pulse-dots { display: inline-flex; gap: 0.3rem; }
.pulse-dots span {
    width: 0.75rem;
    height: 0.75rem;
    background: var(--accent);
    animation: pulse 1.2s ease-in-out infinite;
}
.pulse-dots span:nth-child(2) { animation-delay: 150ms; }
.pulse-dots span:nth-child(3) { animation-delay: 300ms; }
.chart-legend {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.6rem 1rem;
    border-top: 2px solid var(--border);
    text-transform: uppercase;
    font-size: 0.75rem;
}
.legend-swatch { width: 0.6rem; height: 0.6rem; }
.swatch-up { background: var(--chart-1); }
.swatch-volume { background: var(--muted); }

/* Radar */
.radar-chart svg { width: 100%; max-width: 400px; margin: 0 auto; display: block; }
.radar-ring-label { font-size: 10px; fill: var(--muted); font-family: monospace; }
.radar-value-label { font-size: 12px; font-weight: 700; fill: var(--accent); font-family: monospace; }
.radar-axis-label { font-size: 14px; font-weight: 600; fill: var(--foreground); }
.radar-legend {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(7rem, 1fr));
    gap: 0.8rem;
    margin-top: 1.5rem;
    padding-top: 1.5rem;
    border-top: 2px solid var(--border);
}
.radar-legend-item { text-align: center; }
.radar-legend-name {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.4rem;
    text-transform: uppercase;
    font-size: 0.7rem;
    color: var(--muted);
}
"#;
