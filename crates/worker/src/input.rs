use anyhow::Context;
use serde_json::Value;
use std::path::Path;
use wealth_core::domain::metrics::{MetricsBatch, MetricsRecord};

pub fn read_batch(path: &Path) -> anyhow::Result<MetricsBatch> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_batch(&text).with_context(|| format!("invalid metrics batch in {}", path.display()))
}

/// Accepts either the `{"companies": [...]}` envelope or a bare array.
pub fn parse_batch(text: &str) -> anyhow::Result<MetricsBatch> {
    let raw = serde_json::from_str::<Value>(text).context("input is not valid JSON")?;

    if raw.is_array() {
        let companies = serde_json::from_value::<Vec<Option<MetricsRecord>>>(raw)
            .context("failed to parse metrics array")?;
        return Ok(MetricsBatch { companies });
    }

    anyhow::ensure!(raw.is_object(), "expected a JSON array or object, got {raw}");
    serde_json::from_value::<MetricsBatch>(raw).context("failed to parse metrics envelope")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array_with_nulls() {
        let batch = parse_batch(r#"[{"ticker": "AAPL", "pe_ratio": 29.1}, null]"#).unwrap();
        assert_eq!(batch.companies.len(), 2);
        assert_eq!(
            batch.companies[0].as_ref().and_then(|r| r.pe_ratio),
            Some(29.1)
        );
        assert!(batch.companies[1].is_none());
    }

    #[test]
    fn parses_envelope() {
        let batch = parse_batch(r#"{"companies": [{"ticker": "NVDA"}]}"#).unwrap();
        assert_eq!(batch.companies.len(), 1);
    }

    #[test]
    fn rejects_scalars_and_non_numeric_ratios() {
        assert!(parse_batch("42").is_err());
        assert!(parse_batch("not json").is_err());
        assert!(parse_batch(r#"[{"ticker": "X", "roe": "0.2"}]"#).is_err());
    }
}
