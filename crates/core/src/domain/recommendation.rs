use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "WEAK SELL")]
    WeakSell,
    #[serde(rename = "SELL")]
    Sell,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "STRONG BUY",
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::WeakSell => "WEAK SELL",
            Recommendation::Sell => "SELL",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display strings for the ratios shown next to a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedMetrics {
    pub pe: String,
    pub profit_margin: String,
    pub roe: String,
    pub debt_equity: String,
    pub current_ratio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub total_score: f64,
    pub recommendation: Recommendation,
    pub risk: RiskTier,
    pub metrics: FormattedMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_names() {
        let result = ScoreResult {
            ticker: "X".to_string(),
            name: "N/A".to_string(),
            price: 0.0,
            total_score: 100.0,
            recommendation: Recommendation::StrongBuy,
            risk: RiskTier::Low,
            metrics: FormattedMetrics {
                pe: "20.0x".to_string(),
                profit_margin: "25.0%".to_string(),
                roe: "18.0%".to_string(),
                debt_equity: "0.50".to_string(),
                current_ratio: "2.00".to_string(),
            },
        };

        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(
            v,
            json!({
                "ticker": "X",
                "name": "N/A",
                "price": 0.0,
                "totalScore": 100.0,
                "recommendation": "STRONG BUY",
                "risk": "LOW",
                "metrics": {
                    "pe": "20.0x",
                    "profitMargin": "25.0%",
                    "roe": "18.0%",
                    "debtEquity": "0.50",
                    "currentRatio": "2.00",
                }
            })
        );
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(Recommendation::WeakSell.to_string(), "WEAK SELL");
        assert_eq!(RiskTier::Medium.to_string(), "MEDIUM");
        let parsed: Recommendation = serde_json::from_value(json!("STRONG BUY")).unwrap();
        assert_eq!(parsed, Recommendation::StrongBuy);
    }
}
