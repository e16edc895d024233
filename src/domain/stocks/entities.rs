pub use super::value_objects::{Grade, Outlook, Score, Ticker};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Authenticated account held by the session context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Listing row shared by search results and watchlist entries.
/// Watchlist payloads embed it without the ticker (the item carries it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub ticker: Ticker,
    pub name: String,
    #[serde(default)]
    pub sector: Option<String>,
    pub market: String,
}

/// One scored row per ticker per category per date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub ticker: Ticker,
    pub name: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    pub valuation_score: Score,
    pub profitability_score: Score,
    pub growth_score: Score,
    pub momentum_score: Score,
    pub total_score: Score,
    pub grade: Grade,
    pub score_date: NaiveDate,
}

/// Latest score breakdown attached to a stock detail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockScore {
    pub total_score: Score,
    pub grade: Outlook,
    pub valuation_score: Score,
    pub profitability_score: Score,
    pub growth_score: Score,
    pub momentum_score: Score,
    pub revision_score: Score,
}

impl StockScore {
    /// Factor axes in radar order, starting at the top axis
    pub fn factors(&self) -> [(&'static str, Score); 5] {
        [
            ("Valuation", self.valuation_score),
            ("Profitability", self.profitability_score),
            ("Growth", self.growth_score),
            ("Momentum", self.momentum_score),
            ("Revision", self.revision_score),
        ]
    }
}

/// Fundamental ratios; every field may be missing upstream
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    #[serde(default)]
    pub per: Option<f64>,
    #[serde(default)]
    pub pbr: Option<f64>,
    #[serde(default)]
    pub roe: Option<f64>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub net_income: Option<f64>,
}

/// Full detail payload for one ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDetail {
    pub ticker: Ticker,
    pub name: String,
    pub market: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub latest_financials: Option<FinancialSummary>,
    #[serde(default)]
    pub latest_score: Option<StockScore>,
}

/// Per-user saved ticker; uniqueness of ticker per user is server-enforced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub id: i64,
    pub ticker: Ticker,
    pub stock: Stock,
    pub added_at: String,
}

impl WatchlistItem {
    /// Calendar date the item was saved, when the timestamp parses
    pub fn added_date(&self) -> Option<NaiveDate> {
        self.added_at.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}
