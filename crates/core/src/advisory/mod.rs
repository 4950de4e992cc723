use crate::domain::recommendation::ScoreResult;
use anyhow::{ensure, Context};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_TOP_N: usize = 5;

/// Payload handed to the external narrative-generation collaborator: the top
/// ranked results, verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryInput {
    pub generated_at: DateTime<Utc>,
    pub top: Vec<ScoreResult>,
}

impl AdvisoryInput {
    pub fn try_new(
        generated_at: DateTime<Utc>,
        ranked: &[ScoreResult],
        top_n: usize,
    ) -> anyhow::Result<Self> {
        ensure!(top_n >= 1, "advisory top_n must be >= 1 (got {top_n})");

        Ok(Self {
            generated_at,
            top: ranked.iter().take(top_n).cloned().collect(),
        })
    }

    pub fn top_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(&self.top).context("failed to serialize advisory top entries")
    }

    /// Prompt the collaborator sends to its language model.
    pub fn prompt(&self) -> anyhow::Result<String> {
        Ok([
            "You are a professional investment advisor. Based on these analysis results,",
            "provide 3-4 sentence investment advice:",
            "",
            "TOP OPPORTUNITIES:",
            &self.top_json()?,
            "",
            "Provide advice that:",
            "1. Identifies the best investment opportunity",
            "2. Notes any risks",
            "3. Suggests diversification",
            "4. Explains why for small company investors",
            "",
            "Keep it practical and concise.",
        ]
        .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::MetricsRecord;
    use crate::scoring::analyze_companies;
    use chrono::TimeZone;

    fn ranked(n: usize) -> Vec<ScoreResult> {
        let batch: Vec<_> = (0..n)
            .map(|i| Some(MetricsRecord::new(format!("T{i:02}"))))
            .collect();
        analyze_companies(&batch).unwrap()
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 27, 10, 0, 0).unwrap()
    }

    #[test]
    fn takes_top_n_in_rank_order() {
        let results = ranked(8);
        let input = AdvisoryInput::try_new(at(), &results, DEFAULT_TOP_N).unwrap();
        assert_eq!(input.top.len(), 5);
        assert_eq!(input.top[..], results[..5]);
    }

    #[test]
    fn short_lists_are_passed_whole() {
        let results = ranked(2);
        let input = AdvisoryInput::try_new(at(), &results, DEFAULT_TOP_N).unwrap();
        assert_eq!(input.top.len(), 2);
    }

    #[test]
    fn rejects_zero_top_n() {
        assert!(AdvisoryInput::try_new(at(), &ranked(3), 0).is_err());
    }

    #[test]
    fn prompt_embeds_top_entries() {
        let input = AdvisoryInput::try_new(at(), &ranked(1), 1).unwrap();
        let prompt = input.prompt().unwrap();
        assert!(prompt.starts_with("You are a professional investment advisor."));
        assert!(prompt.contains("\"ticker\": \"T00\""));
        assert!(prompt.contains("\"recommendation\": \"STRONG BUY\""));
    }
}
