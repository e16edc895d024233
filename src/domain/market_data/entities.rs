use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PricePoint {
    /// Up-day rule shared by candle bodies and volume bar coloring
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Immutable daily price history for one ticker
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from API rows, restoring chronological order
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by(|a, b| a.date.cmp(&b.date));
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Lowest low and highest high across the series
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for point in &self.points {
            min_price = min_price.min(point.low);
            max_price = max_price.max(point.high);
        }
        Some((min_price, max_price))
    }

    pub fn max_volume(&self) -> f64 {
        self.points.iter().fold(0.0, |acc, p| acc.max(p.volume))
    }
}
