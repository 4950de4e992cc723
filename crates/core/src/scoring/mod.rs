//! Deterministic scoring engine: metric bands, risk tier, recommendation and
//! ranking. Everything here is a pure function of its inputs.

pub mod bands;
pub mod error;
pub mod format;
pub mod mapper;
pub mod risk;
pub mod scorer;

use crate::domain::metrics::{MetricsRecord, ResolvedMetrics};
use crate::domain::recommendation::{FormattedMetrics, ScoreResult};
use error::MissingIdentifierError;

pub fn score_resolved(metrics: ResolvedMetrics) -> ScoreResult {
    let ratios = metrics.ratios;
    let total = scorer::total_score(&ratios);
    let risk = risk::classify_risk(ratios.debt_equity, ratios.current_ratio);
    let recommendation = mapper::recommend(total, risk);

    ScoreResult {
        ticker: metrics.ticker,
        name: metrics.name,
        price: metrics.price,
        total_score: scorer::round_one_decimal(total),
        recommendation,
        risk,
        metrics: FormattedMetrics::from_ratios(&metrics.displayed),
    }
}

/// Scores a single record. `position` only feeds the error report.
pub fn score_company(
    record: &MetricsRecord,
    position: usize,
) -> Result<ScoreResult, MissingIdentifierError> {
    Ok(score_resolved(record.validate_and_resolve(position)?))
}

/// Drops empty entries, scores the rest and ranks them by descending score.
///
/// The sort is stable: entities with equal scores keep their input order. The
/// first non-empty record without a ticker aborts the whole batch.
pub fn analyze_companies(
    batch: &[Option<MetricsRecord>],
) -> Result<Vec<ScoreResult>, MissingIdentifierError> {
    let mut results = Vec::with_capacity(batch.len());
    for (position, entry) in batch.iter().enumerate() {
        let Some(record) = entry.as_ref().filter(|r| !r.is_empty()) else {
            continue;
        };
        results.push(score_company(record, position)?);
    }

    results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

    tracing::debug!(
        input_len = batch.len(),
        scored = results.len(),
        dropped = batch.len() - results.len(),
        "ranked metrics batch"
    );

    Ok(results)
}
