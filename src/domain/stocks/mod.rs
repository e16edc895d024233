pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{
    FinancialSummary, Recommendation, Stock, StockDetail, StockScore, User, WatchlistItem,
};
pub use services::{sorted, SortDirection, SortField, SortSpec};
pub use value_objects::{Category, Grade, Outlook, Score, Ticker};
