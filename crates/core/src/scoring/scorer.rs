use crate::domain::metrics::Ratios;
use crate::scoring::bands::{
    band_points, CURRENT_RATIO_BANDS, DEBT_EQUITY_BANDS, PE_RATIO_BANDS, PROFIT_MARGIN_BANDS,
    REVENUE_GROWTH_BANDS, ROE_BANDS,
};

/// Ceiling applied to the summed sub-scores. The current bands top out at
/// exactly this value; the clamp keeps the bound if they are re-tuned.
pub const MAX_TOTAL_SCORE: f64 = 100.0;

/// Per-ratio points before summation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub pe_ratio: f64,
    pub profit_margin: f64,
    pub roe: f64,
    pub debt_equity: f64,
    pub current_ratio: f64,
    pub revenue_growth: f64,
}

impl SubScores {
    pub fn from_ratios(ratios: &Ratios) -> Self {
        Self {
            pe_ratio: band_points(PE_RATIO_BANDS, ratios.pe_ratio),
            profit_margin: band_points(PROFIT_MARGIN_BANDS, ratios.profit_margin),
            roe: band_points(ROE_BANDS, ratios.roe),
            debt_equity: band_points(DEBT_EQUITY_BANDS, ratios.debt_equity),
            current_ratio: band_points(CURRENT_RATIO_BANDS, ratios.current_ratio),
            revenue_growth: band_points(REVENUE_GROWTH_BANDS, ratios.revenue_growth),
        }
    }

    pub fn total(&self) -> f64 {
        let sum = self.pe_ratio
            + self.profit_margin
            + self.roe
            + self.debt_equity
            + self.current_ratio
            + self.revenue_growth;
        sum.min(MAX_TOTAL_SCORE)
    }
}

pub fn total_score(ratios: &Ratios) -> f64 {
    SubScores::from_ratios(ratios).total()
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
