use crate::domain::metrics::Ratios;
use crate::domain::recommendation::FormattedMetrics;

pub fn multiple(value: f64) -> String {
    format!("{value:.1}x")
}

pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn ratio(value: f64) -> String {
    format!("{value:.2}")
}

impl FormattedMetrics {
    pub fn from_ratios(ratios: &Ratios) -> Self {
        Self {
            pe: multiple(ratios.pe_ratio),
            profit_margin: percent(ratios.profit_margin),
            roe: percent(ratios.roe),
            debt_equity: ratio(ratios.debt_equity),
            current_ratio: ratio(ratios.current_ratio),
        }
    }
}
