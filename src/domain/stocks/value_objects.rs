use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// Value Object - uppercase stock symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deref, Display, Serialize, Deserialize)]
#[serde(from = "String")]
#[display(fmt = "{}", _0)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(ticker: String) -> Result<Self, String> {
        if ticker.trim().is_empty() {
            return Err("Ticker cannot be empty".to_string());
        }
        Ok(Self(ticker.trim().to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Self(value.trim().to_uppercase())
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Value Object - factor/total score on the 0-100 scale
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, From, Into, Display, Serialize,
    Deserialize,
)]
#[display(fmt = "{}", _0)]
pub struct Score(u8);

impl Score {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Fraction of the full scale; scores above 100 exceed 1.0 on purpose
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

/// Letter grade attached to recommendation rows by the scoring engine
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum Grade {
    #[strum(serialize = "A+")]
    #[serde(rename = "A+")]
    APlus,
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    #[strum(serialize = "B")]
    B,
    #[strum(serialize = "C+")]
    #[serde(rename = "C+")]
    CPlus,
    #[strum(serialize = "C")]
    C,
    #[strum(serialize = "D")]
    D,
    #[strum(serialize = "F")]
    F,
}

/// Coarse rating used by the detail page's latest score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum Outlook {
    #[strum(serialize = "Strong Buy")]
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    #[strum(serialize = "Buy")]
    Buy,
    #[strum(serialize = "Hold")]
    Hold,
    #[strum(serialize = "Sell")]
    Sell,
}

/// Recommendation categories exposed by the API
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    IntoStaticStr, Serialize, Deserialize,
)]
pub enum Category {
    #[strum(serialize = "top_picks")]
    #[serde(rename = "top_picks")]
    TopPicks,
    #[strum(serialize = "undervalued")]
    #[serde(rename = "undervalued")]
    Undervalued,
    #[strum(serialize = "growth")]
    #[serde(rename = "growth")]
    Growth,
    #[strum(serialize = "momentum")]
    #[serde(rename = "momentum")]
    Momentum,
}

impl Category {
    /// Query-string value for `GET /recommendations?category=`
    pub fn query_value(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::TopPicks => "Top Picks",
            Category::Undervalued => "Undervalued",
            Category::Growth => "Growth",
            Category::Momentum => "Momentum",
        }
    }

    /// Glyph drawn on the category tab
    pub fn icon(&self) -> &'static str {
        match self {
            Category::TopPicks => "\u{25CE}",
            Category::Undervalued => "$",
            Category::Growth => "\u{2197}",
            Category::Momentum => "\u{26A1}",
        }
    }

    pub fn accent_class(&self) -> &'static str {
        match self {
            Category::TopPicks => "chart-1",
            Category::Undervalued => "chart-2",
            Category::Growth => "chart-3",
            Category::Momentum => "chart-4",
        }
    }
}
