//! Ordered point bands for each scored ratio.
//!
//! Bands within a group overlap, so they are evaluated top to bottom and the
//! first matching band wins. The last band of every group matches anything
//! (NaN included), which guarantees every input maps to exactly one band.

#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub matches: fn(f64) -> bool,
    pub points: f64,
}

pub const PE_RATIO_BANDS: &[Band] = &[
    Band {
        matches: |x| (15.0..=25.0).contains(&x),
        points: 25.0,
    },
    Band {
        matches: |x| x < 50.0,
        points: 15.0,
    },
    Band {
        matches: |_| true,
        points: 5.0,
    },
];

pub const PROFIT_MARGIN_BANDS: &[Band] = &[
    Band {
        matches: |x| x > 0.20,
        points: 20.0,
    },
    Band {
        matches: |x| x > 0.10,
        points: 15.0,
    },
    Band {
        matches: |_| true,
        points: 5.0,
    },
];

pub const ROE_BANDS: &[Band] = &[
    Band {
        matches: |x| x > 0.15,
        points: 20.0,
    },
    Band {
        matches: |x| x > 0.10,
        points: 15.0,
    },
    Band {
        matches: |_| true,
        points: 5.0,
    },
];

pub const DEBT_EQUITY_BANDS: &[Band] = &[
    Band {
        matches: |x| x < 1.0,
        points: 15.0,
    },
    Band {
        matches: |x| x < 2.0,
        points: 10.0,
    },
    Band {
        matches: |_| true,
        points: 5.0,
    },
];

pub const CURRENT_RATIO_BANDS: &[Band] = &[
    Band {
        matches: |x| (1.5..=3.0).contains(&x),
        points: 10.0,
    },
    Band {
        matches: |x| x > 1.0,
        points: 5.0,
    },
    Band {
        matches: |_| true,
        points: 2.0,
    },
];

pub const REVENUE_GROWTH_BANDS: &[Band] = &[
    Band {
        matches: |x| x > 0.15,
        points: 10.0,
    },
    Band {
        matches: |x| x > 0.05,
        points: 5.0,
    },
    Band {
        matches: |_| true,
        points: 2.0,
    },
];

/// Points of the first band whose condition holds.
pub fn band_points(bands: &[Band], value: f64) -> f64 {
    bands
        .iter()
        .find(|band| (band.matches)(value))
        .map(|band| band.points)
        .unwrap_or(0.0)
}
