pub mod price_chart;

pub use price_chart::{ChartTheme, PriceChartRenderer};
