use crate::domain::recommendation::{Recommendation, RiskTier};

const STRONG_BUY_MIN: f64 = 80.0;
const BUY_MIN: f64 = 70.0;
const HOLD_MIN: f64 = 50.0;
const WEAK_SELL_MIN: f64 = 30.0;

/// Score × risk decision table. STRONG BUY additionally requires LOW risk;
/// otherwise an 80+ score falls through to BUY.
pub fn recommend(total_score: f64, risk: RiskTier) -> Recommendation {
    if total_score >= STRONG_BUY_MIN && risk == RiskTier::Low {
        Recommendation::StrongBuy
    } else if total_score >= BUY_MIN {
        Recommendation::Buy
    } else if total_score >= HOLD_MIN {
        Recommendation::Hold
    } else if total_score >= WEAK_SELL_MIN {
        Recommendation::WeakSell
    } else {
        Recommendation::Sell
    }
}
