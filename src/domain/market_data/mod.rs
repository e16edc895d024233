pub mod entities;

pub use entities::{PricePoint, PriceSeries};
