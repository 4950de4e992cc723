use crate::domain::recommendation::RiskTier;

const HIGH_DEBT_EQUITY: f64 = 3.0;
const HIGH_CURRENT_RATIO_FLOOR: f64 = 1.0;
const MEDIUM_DEBT_EQUITY: f64 = 2.0;
const MEDIUM_CURRENT_RATIO_FLOOR: f64 = 1.5;

/// Leverage/liquidity risk tier. The clauses overlap, so HIGH is checked first.
pub fn classify_risk(debt_equity: f64, current_ratio: f64) -> RiskTier {
    if debt_equity > HIGH_DEBT_EQUITY || current_ratio < HIGH_CURRENT_RATIO_FLOOR {
        RiskTier::High
    } else if debt_equity > MEDIUM_DEBT_EQUITY || current_ratio < MEDIUM_CURRENT_RATIO_FLOOR {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
