use crate::domain::market_data::{PricePoint, PriceSeries};

/// Fraction of the drawable height given to the price pane; the volume band
/// sits below it with a small gap
const PRICE_BAND: f64 = 0.68;
const VOLUME_BAND: f64 = 0.25;

/// Scaling parameters computed once for the whole chart
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleParams {
    pub padding: f64,
    pub text_space: f64,
    pub chart_width: f64,
    pub price_height: f64,
    pub volume_height: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub price_range: f64,
    pub max_volume: f64,
    pub candle_width: f64,
    pub height: f64,
}

impl ScaleParams {
    /// None when the series is empty; a flat series still gets a non-zero
    /// range so every candle stays drawable
    pub fn compute(width: u32, height: u32, series: &PriceSeries) -> Option<Self> {
        let (min_price, max_price) = series.price_range()?;
        let padding = 50.0;
        let text_space = 80.0;
        let chart_width = f64::from(width) - (padding * 2.0) - text_space;
        let drawable = f64::from(height) - (padding * 2.0);
        let price_range = if max_price > min_price { max_price - min_price } else { 1.0 };

        Some(Self {
            padding,
            text_space,
            chart_width,
            price_height: drawable * PRICE_BAND,
            volume_height: drawable * VOLUME_BAND,
            min_price,
            max_price,
            price_range,
            max_volume: series.max_volume(),
            candle_width: chart_width / series.len() as f64,
            height: f64::from(height),
        })
    }

    /// Convert a price to a Y coordinate (inverted because Y grows down)
    pub fn price_y(&self, price: f64) -> f64 {
        self.padding + ((self.max_price - price) / self.price_range) * self.price_height
    }

    /// Center X of the candle at the given index
    pub fn candle_x(&self, index: usize) -> f64 {
        self.padding + (index as f64 * self.candle_width) + (self.candle_width / 2.0)
    }

    /// Baseline the volume histogram grows up from
    pub fn volume_base_y(&self) -> f64 {
        self.height - self.padding
    }

    /// Bar height proportional to the series maximum
    pub fn volume_bar_height(&self, volume: f64) -> f64 {
        if self.max_volume <= 0.0 {
            return 0.0;
        }
        (volume / self.max_volume) * self.volume_height
    }

    /// Horizontal grid line positions with their price labels
    pub fn grid_levels(&self, count: usize) -> Vec<(f64, f64)> {
        (0..=count)
            .map(|i| {
                let price =
                    self.max_price - (i as f64 / count as f64) * (self.max_price - self.min_price);
                (self.price_y(price), price)
            })
            .collect()
    }
}

/// Precomputed geometry for one candle plus its volume bar
#[derive(Debug, Clone, PartialEq)]
pub struct CandleLayout {
    pub x: f64,
    pub high_y: f64,
    pub low_y: f64,
    pub body_top: f64,
    pub body_height: f64,
    pub body_width: f64,
    pub volume_top: f64,
    pub volume_height: f64,
    pub is_up: bool,
}

impl CandleLayout {
    pub fn compute(index: usize, point: &PricePoint, params: &ScaleParams) -> Self {
        let open_y = params.price_y(point.open);
        let close_y = params.price_y(point.close);
        let volume_height = params.volume_bar_height(point.volume);

        Self {
            x: params.candle_x(index),
            high_y: params.price_y(point.high),
            low_y: params.price_y(point.low),
            body_top: open_y.min(close_y),
            body_height: (open_y - close_y).abs(),
            body_width: params.candle_width * 0.6,
            volume_top: params.volume_base_y() - volume_height,
            volume_height,
            is_up: point.is_up(),
        }
    }
}
