use super::entities::Recommendation;
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Sortable recommendation-table columns
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
)]
pub enum SortField {
    #[strum(serialize = "ticker")]
    Ticker,
    #[strum(serialize = "valuation_score")]
    Valuation,
    #[strum(serialize = "profitability_score")]
    Profitability,
    #[strum(serialize = "growth_score")]
    Growth,
    #[strum(serialize = "momentum_score")]
    Momentum,
    #[strum(serialize = "total_score")]
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active column/direction pair; recomputed against the loaded rows on every
/// render, never against the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self { field: SortField::Total, direction: SortDirection::Descending }
    }
}

impl SortSpec {
    /// Header-click rule: same column flips direction, a new column selects
    /// it and resets to descending
    pub fn clicked(self, field: SortField) -> Self {
        if self.field == field {
            Self { field, direction: self.direction.toggled() }
        } else {
            Self { field, direction: SortDirection::Descending }
        }
    }
}

fn compare_rows(a: &Recommendation, b: &Recommendation, field: SortField) -> Ordering {
    match field {
        SortField::Ticker => {
            a.ticker.value().to_lowercase().cmp(&b.ticker.value().to_lowercase())
        }
        SortField::Valuation => a.valuation_score.cmp(&b.valuation_score),
        SortField::Profitability => a.profitability_score.cmp(&b.profitability_score),
        SortField::Growth => a.growth_score.cmp(&b.growth_score),
        SortField::Momentum => a.momentum_score.cmp(&b.momentum_score),
        SortField::Total => a.total_score.cmp(&b.total_score),
    }
}

/// Stable sort of the loaded snapshot under the given spec
pub fn sorted(rows: &[Recommendation], spec: SortSpec) -> Vec<Recommendation> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| {
        let ordering = compare_rows(a, b, spec.field);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    out
}
