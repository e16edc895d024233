pub mod auth_form;
pub mod financial_summary;
pub mod navbar;
pub mod price_chart;
pub mod radar_chart;
pub mod status_panels;
pub mod watchlist_button;

pub use auth_form::{AuthForm, AuthFormKind, AuthSubmission};
pub use financial_summary::FinancialSummaryPanel;
pub use navbar::Navbar;
pub use price_chart::PriceChart;
pub use radar_chart::StockRadarChart;
pub use status_panels::{grade_badge_class, outlook_badge_class, EmptyPanel, ErrorPanel, SkeletonRows};
pub use watchlist_button::WatchlistButton;
