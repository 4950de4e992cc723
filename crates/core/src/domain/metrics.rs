use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

pub const NAME_PLACEHOLDER: &str = "N/A";
pub const DEFAULT_PRICE: f64 = 0.0;

/// Ratios substituted whenever an input record omits one (or sends null).
pub const DEFAULT_RATIOS: Ratios = Ratios {
    pe_ratio: 20.0,
    profit_margin: 0.15,
    roe: 0.15,
    debt_equity: 1.0,
    current_ratio: 2.0,
    revenue_growth: 0.10,
};

/// One entity's metrics as handed over by the upstream data collaborator.
///
/// Every field is optional on the wire, and an explicit `null` counts as absent
/// for scoring. Emptiness is decided by the keys that were sent, not by their
/// values: `{"ticker": null}` is a malformed record, not an empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsRecord {
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub profit_margin: Option<f64>,
    pub roe: Option<f64>,
    pub debt_equity: Option<f64>,
    pub current_ratio: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub extra: BTreeMap<String, serde_json::Value>,
    /// Number of keys present in the source object, nulls included.
    pub key_count: usize,
}

/// Wire shape of [`MetricsRecord`]; camelCase with snake_case aliases.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    ticker: Option<String>,
    name: Option<String>,
    price: Option<f64>,
    #[serde(alias = "pe_ratio")]
    pe_ratio: Option<f64>,
    #[serde(alias = "profit_margin")]
    profit_margin: Option<f64>,
    roe: Option<f64>,
    #[serde(alias = "debt_equity")]
    debt_equity: Option<f64>,
    #[serde(alias = "current_ratio")]
    current_ratio: Option<f64>,
    #[serde(alias = "revenue_growth")]
    revenue_growth: Option<f64>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl<'de> Deserialize<'de> for MetricsRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let key_count = object.len();
        let wire = serde_json::from_value::<WireRecord>(serde_json::Value::Object(object))
            .map_err(serde::de::Error::custom)?;

        Ok(Self {
            ticker: wire.ticker,
            name: wire.name,
            price: wire.price,
            pe_ratio: wire.pe_ratio,
            profit_margin: wire.profit_margin,
            roe: wire.roe,
            debt_equity: wire.debt_equity,
            current_ratio: wire.current_ratio,
            revenue_growth: wire.revenue_growth,
            extra: wire.extra,
            key_count,
        })
    }
}

impl MetricsRecord {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: Some(ticker.into()),
            ..Self::default()
        }
    }

    /// True when the record carries no keys at all.
    pub fn is_empty(&self) -> bool {
        self.key_count == 0
            && self.ticker.is_none()
            && self.name.is_none()
            && self.price.is_none()
            && self.pe_ratio.is_none()
            && self.profit_margin.is_none()
            && self.roe.is_none()
            && self.debt_equity.is_none()
            && self.current_ratio.is_none()
            && self.revenue_growth.is_none()
            && self.extra.is_empty()
    }

    pub fn resolved_ratios(&self) -> Ratios {
        let d = DEFAULT_RATIOS;
        Ratios {
            pe_ratio: self.pe_ratio.unwrap_or(d.pe_ratio),
            profit_margin: self.profit_margin.unwrap_or(d.profit_margin),
            roe: self.roe.unwrap_or(d.roe),
            debt_equity: self.debt_equity.unwrap_or(d.debt_equity),
            current_ratio: self.current_ratio.unwrap_or(d.current_ratio),
            revenue_growth: self.revenue_growth.unwrap_or(d.revenue_growth),
        }
    }

    /// Ratios as sent, with absent values shown as zero.
    pub fn displayed_ratios(&self) -> Ratios {
        Ratios {
            pe_ratio: self.pe_ratio.unwrap_or(0.0),
            profit_margin: self.profit_margin.unwrap_or(0.0),
            roe: self.roe.unwrap_or(0.0),
            debt_equity: self.debt_equity.unwrap_or(0.0),
            current_ratio: self.current_ratio.unwrap_or(0.0),
            revenue_growth: self.revenue_growth.unwrap_or(0.0),
        }
    }
}

/// The six financial ratios the engine scores, all present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub pe_ratio: f64,
    pub profit_margin: f64,
    pub roe: f64,
    pub debt_equity: f64,
    pub current_ratio: f64,
    pub revenue_growth: f64,
}

/// A record after identifier validation and default substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMetrics {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub ratios: Ratios,
    pub displayed: Ratios,
}

/// Envelope accepted by the adapters: `{"companies": [ {...}, null, ... ]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsBatch {
    #[serde(default)]
    pub companies: Vec<Option<MetricsRecord>>,
}
