use stock_dashboard_wasm::domain::market_data::{PricePoint, PriceSeries};
use stock_dashboard_wasm::domain::stocks::{
    sorted, Grade, Outlook, Recommendation, Score, SortSpec, StockDetail, WatchlistItem,
};
use stock_dashboard_wasm::infrastructure::api::dto::{ApiErrorBody, AuthResponse};

const RECOMMENDATIONS_FIXTURE: &str = r#"[
    {
        "ticker": "AAPL", "name": "Apple Inc.", "sector": "Technology",
        "industry": "Consumer Electronics",
        "valuation_score": 75, "profitability_score": 88, "growth_score": 82,
        "momentum_score": 79, "total_score": 81, "grade": "A",
        "score_date": "2024-02-14"
    },
    {
        "ticker": "MSFT", "name": "Microsoft Corporation", "sector": "Technology",
        "industry": "Software",
        "valuation_score": 72, "profitability_score": 85, "growth_score": 78,
        "momentum_score": 80, "total_score": 79, "grade": "A",
        "score_date": "2024-02-14"
    },
    {
        "ticker": "GOOGL", "name": "Alphabet Inc.", "sector": "Technology",
        "industry": "Internet Services",
        "valuation_score": 80, "profitability_score": 82, "growth_score": 76,
        "momentum_score": 75, "total_score": 78, "grade": "B+",
        "score_date": "2024-02-14"
    }
]"#;

#[test]
fn recommendations_payload_parses_and_ranks() {
    let rows: Vec<Recommendation> = serde_json::from_str(RECOMMENDATIONS_FIXTURE).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].ticker.value(), "AAPL");
    assert_eq!(rows[0].total_score.value(), 81);
    assert_eq!(rows[2].grade, Grade::BPlus);

    // Default sort (total descending) puts the fixture in ranking order
    let ordered = sorted(&rows, SortSpec::default());
    let tickers: Vec<&str> = ordered.iter().map(|r| r.ticker.value()).collect();
    assert_eq!(tickers, ["AAPL", "MSFT", "GOOGL"]);
}

#[test]
fn stock_detail_tolerates_missing_sections() {
    let payload = r#"{
        "ticker": "AAPL", "name": "Apple Inc.", "market": "NASDAQ", "sector": null,
        "latest_financials": null, "latest_score": null
    }"#;
    let detail: StockDetail = serde_json::from_str(payload).unwrap();
    assert!(detail.sector.is_none());
    assert!(detail.latest_financials.is_none());
    assert!(detail.latest_score.is_none());
}

#[test]
fn stock_detail_parses_score_and_financials() {
    let payload = r#"{
        "ticker": "AAPL", "name": "Apple Inc.", "market": "NASDAQ",
        "sector": "Technology",
        "latest_financials": {
            "per": 28.5, "pbr": 45.1, "roe": 147.2,
            "revenue": 383285000000, "net_income": 96995000000
        },
        "latest_score": {
            "total_score": 81, "grade": "Strong Buy",
            "valuation_score": 75, "profitability_score": 88,
            "growth_score": 82, "momentum_score": 79, "revision_score": 70
        }
    }"#;
    let detail: StockDetail = serde_json::from_str(payload).unwrap();
    let score = detail.latest_score.unwrap();
    assert_eq!(score.grade, Outlook::StrongBuy);
    assert_eq!(score.factors()[0], ("Valuation", Score::new(75)));
    assert_eq!(detail.latest_financials.unwrap().per, Some(28.5));
}

#[test]
fn watchlist_item_embeds_the_stock_without_its_own_ticker() {
    let payload = r#"{
        "id": 7, "ticker": "AAPL",
        "stock": {"name": "Apple Inc.", "market": "NASDAQ", "sector": "Technology"},
        "added_at": "2024-02-14T09:30:00"
    }"#;
    let item: WatchlistItem = serde_json::from_str(payload).unwrap();
    assert_eq!(item.id, 7);
    assert_eq!(item.ticker.value(), "AAPL");
    assert_eq!(item.stock.name, "Apple Inc.");
    assert_eq!(
        item.added_date(),
        chrono::NaiveDate::from_ymd_opt(2024, 2, 14),
    );
}

#[test]
fn price_points_parse_and_order_chronologically() {
    let payload = r#"[
        {"date": "2024-02-14", "open": 182.0, "high": 185.1, "low": 181.2, "close": 184.4, "volume": 51000000},
        {"date": "2024-02-13", "open": 180.0, "high": 183.0, "low": 179.0, "close": 182.1, "volume": 49000000}
    ]"#;
    let points: Vec<PricePoint> = serde_json::from_str(payload).unwrap();
    let series = PriceSeries::from_points(points);
    assert_eq!(series.len(), 2);
    assert_eq!(series.points()[0].close, 182.1);
    assert_eq!(series.latest().unwrap().close, 184.4);
}

#[test]
fn auth_envelope_unwraps_the_user() {
    let payload = r#"{"user": {"id": 3, "username": "trader", "email": "trader@example.com"}}"#;
    let envelope: AuthResponse = serde_json::from_str(payload).unwrap();
    assert_eq!(envelope.user.username, "trader");
}

#[test]
fn error_body_message_is_optional() {
    let with_message: ApiErrorBody = serde_json::from_str(r#"{"message": "Invalid credentials"}"#).unwrap();
    assert_eq!(with_message.message.as_deref(), Some("Invalid credentials"));

    let without: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert!(without.message.is_none());
}
