use crate::domain::metrics::{MetricsRecord, ResolvedMetrics, DEFAULT_PRICE, NAME_PLACEHOLDER};
use crate::scoring::error::MissingIdentifierError;

impl MetricsRecord {
    /// Checks the identifier and substitutes defaults for every absent field.
    ///
    /// `position` is the record's index in the caller's batch and is only used
    /// for the error report.
    pub fn validate_and_resolve(
        &self,
        position: usize,
    ) -> Result<ResolvedMetrics, MissingIdentifierError> {
        let ticker = self
            .ticker
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| MissingIdentifierError {
                position,
                name: self.name.clone(),
            })?
            .to_string();

        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(NAME_PLACEHOLDER)
            .to_string();

        Ok(ResolvedMetrics {
            ticker,
            name,
            price: self.price.unwrap_or(DEFAULT_PRICE),
            ratios: self.resolved_ratios(),
            displayed: self.displayed_ratios(),
        })
    }
}
