//! Chart descriptions for the dashboard.
//!
//! Everything here is a stateless pure function: charts are recomputed from
//! scratch on every view refresh, either from the latest prediction or from
//! mock aggregate counts. The structs are plain serde-serializable
//! descriptions — the HTTP surface ships them as JSON and the TUI draws them
//! natively.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::borough::{BOROUGH_COUNT, Borough};
use crate::classifier::Prediction;

/// Mock per-borough complaint counts are drawn from this range, matching the
/// aggregate volumes the real feed produces in a day.
pub const MOCK_COUNT_MIN: u64 = 50;
pub const MOCK_COUNT_MAX: u64 = 300;

/// One bar in a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// A bar chart description: labels on one axis, values on the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    /// Fixed value-axis range.
    pub range: (f64, f64),
    pub bars: Vec<Bar>,
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Fraction of the total, in [0, 1].
    pub share: f64,
}

/// A pie chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

/// Bar chart of one prediction's probability vector. Value axis fixed to
/// [0, 1] so consecutive predictions are visually comparable.
pub fn probability_bars(prediction: &Prediction) -> BarChart {
    BarChart {
        title: "Borough probabilities".to_string(),
        range: (0.0, 1.0),
        bars: Borough::ALL
            .iter()
            .map(|b| Bar {
                label: b.label().to_string(),
                value: prediction.probabilities[b.index()],
            })
            .collect(),
    }
}

/// Draw fresh mock complaint counts, one per borough. Resampled on every
/// dashboard view — there is no real aggregate feed yet.
pub fn mock_complaint_counts<R: Rng>(rng: &mut R) -> [u64; BOROUGH_COUNT] {
    let mut counts = [0u64; BOROUGH_COUNT];
    for c in &mut counts {
        *c = rng.random_range(MOCK_COUNT_MIN..MOCK_COUNT_MAX);
    }
    counts
}

/// Total complaints per borough as a bar chart.
pub fn complaint_bars(counts: &[u64; BOROUGH_COUNT]) -> BarChart {
    let max = counts.iter().copied().max().unwrap_or(0);
    BarChart {
        title: "Total Complaints by Borough".to_string(),
        range: (0.0, max as f64),
        bars: Borough::ALL
            .iter()
            .map(|b| Bar {
                label: b.label().to_string(),
                value: counts[b.index()] as f64,
            })
            .collect(),
    }
}

/// Complaint distribution per borough as a pie chart.
pub fn complaint_pie(counts: &[u64; BOROUGH_COUNT]) -> PieChart {
    let total: u64 = counts.iter().sum();
    PieChart {
        title: "Complaint Distribution by Borough".to_string(),
        slices: Borough::ALL
            .iter()
            .map(|b| {
                let value = counts[b.index()] as f64;
                Slice {
                    label: b.label().to_string(),
                    value,
                    share: if total == 0 { 0.0 } else { value / total as f64 },
                }
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_prediction() -> Prediction {
        Prediction {
            borough: Borough::Queens,
            probabilities: [0.1, 0.15, 0.4, 0.2, 0.15],
        }
    }

    #[test]
    fn probability_bars_cover_every_borough_in_order() {
        let chart = probability_bars(&sample_prediction());
        assert_eq!(chart.range, (0.0, 1.0));
        assert_eq!(chart.bars.len(), BOROUGH_COUNT);
        for (bar, borough) in chart.bars.iter().zip(Borough::ALL) {
            assert_eq!(bar.label, borough.label());
        }
        assert_eq!(chart.bars[2].value, 0.4);
    }

    #[test]
    fn mock_counts_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            for count in mock_complaint_counts(&mut rng) {
                assert!((MOCK_COUNT_MIN..MOCK_COUNT_MAX).contains(&count));
            }
        }
    }

    #[test]
    fn mock_counts_resample_each_call() {
        let mut rng = StdRng::seed_from_u64(8);
        let a = mock_complaint_counts(&mut rng);
        let b = mock_complaint_counts(&mut rng);
        assert_ne!(a, b, "independent draws should differ");
    }

    #[test]
    fn complaint_bars_match_counts() {
        let counts = [100, 200, 150, 75, 50];
        let chart = complaint_bars(&counts);
        assert_eq!(chart.range, (0.0, 200.0));
        assert_eq!(chart.bars[1].value, 200.0);
        assert_eq!(chart.bars[4].label, "Staten Island");
    }

    #[test]
    fn pie_shares_sum_to_one() {
        let counts = [100, 200, 150, 75, 50];
        let pie = complaint_pie(&counts);
        let total: f64 = pie.slices.iter().map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pie_handles_zero_totals() {
        let pie = complaint_pie(&[0; BOROUGH_COUNT]);
        for slice in &pie.slices {
            assert_eq!(slice.share, 0.0);
        }
    }

    #[test]
    fn charts_serialize_to_json() {
        let chart = probability_bars(&sample_prediction());
        let json = serde_json::to_string(&chart).unwrap();
        let back: BarChart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chart);
    }
}
