//! Borough prediction.
//!
//! The classifier owns the loaded model manifest and exposes the inference
//! boundary — complaint text in, borough plus probability vector out. The
//! probabilities are currently a symmetric Dirichlet(1,..,1) draw (uniform
//! over the probability simplex), sampled as five unit-exponential variates
//! normalized to sum 1. The manifest is loaded and validated anyway so a
//! real model can take over behind the same signature.

use std::io;
use std::path::Path;

use rand::Rng;
use serde::Serialize;

use crate::borough::{BOROUGH_COUNT, Borough};
use crate::model::ModelManifest;

/// Result of one classifier call.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Argmax borough.
    pub borough: Borough,
    /// Probability per borough, in [`Borough::ALL`] order. Sums to 1.
    pub probabilities: [f64; BOROUGH_COUNT],
}

impl Prediction {
    /// Probability assigned to the predicted borough.
    pub fn confidence(&self) -> f64 {
        self.probabilities[self.borough.index()]
    }
}

/// Complaint-to-borough classifier.
#[derive(Debug)]
pub struct Classifier {
    manifest: ModelManifest,
}

impl Classifier {
    /// Load the model artifact from disk. Fatal on failure — the dashboard
    /// has no degraded mode without it.
    pub fn load(path: &Path) -> io::Result<Classifier> {
        Ok(Classifier {
            manifest: ModelManifest::load(path)?,
        })
    }

    /// Build a classifier from an already-validated manifest.
    pub fn from_manifest(manifest: ModelManifest) -> Classifier {
        Classifier { manifest }
    }

    /// The loaded manifest.
    pub fn manifest(&self) -> &ModelManifest {
        &self.manifest
    }

    /// Predict the borough for a complaint using the thread-local RNG.
    pub fn predict(&self, text: &str) -> Prediction {
        self.predict_with(&mut rand::rng(), text)
    }

    /// Predict with an explicit RNG (seedable in tests).
    ///
    /// Always succeeds. Empty input is accepted — the draw does not consult
    /// the text at all yet.
    // TODO: run the loaded BiLSTM artifact over `text` instead of the
    // Dirichlet draw once inference lands.
    pub fn predict_with<R: Rng>(&self, rng: &mut R, text: &str) -> Prediction {
        let probabilities = dirichlet_uniform(rng);
        let borough = Borough::ALL[argmax(&probabilities)];
        log::debug!(
            "predicted {borough} (p={:.3}) from {} input chars",
            probabilities[borough.index()],
            text.len()
        );
        Prediction {
            borough,
            probabilities,
        }
    }
}

/// Draw a probability vector uniformly from the simplex — Dirichlet(1,..,1).
///
/// Gamma(1,1) is the unit exponential, so normalizing five `-ln(1-u)` draws
/// gives exactly the symmetric Dirichlet with all concentrations 1.
fn dirichlet_uniform<R: Rng>(rng: &mut R) -> [f64; BOROUGH_COUNT] {
    let mut v = [0.0f64; BOROUGH_COUNT];
    for x in &mut v {
        let u: f64 = rng.random();
        // u < 1.0 always, so 1 - u > 0; clamp away a zero-sum edge anyway.
        *x = (-(1.0 - u).ln()).max(f64::MIN_POSITIVE);
    }
    let sum: f64 = v.iter().sum();
    for x in &mut v {
        *x /= sum;
    }
    v
}

/// Index of the maximum value, first occurrence winning ties.
fn argmax(values: &[f64; BOROUGH_COUNT]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn classifier() -> Classifier {
        Classifier::from_manifest(ModelManifest::placeholder())
    }

    // -----------------------------------------------------------------------
    // Probability vector tests
    // -----------------------------------------------------------------------

    #[test]
    fn probabilities_sum_to_one() {
        let c = classifier();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = c.predict_with(&mut rng, "Street light not working");
            let sum: f64 = p.probabilities.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "sum {sum}");
        }
    }

    #[test]
    fn probabilities_are_all_positive() {
        let c = classifier();
        let mut rng = StdRng::seed_from_u64(11);
        let p = c.predict_with(&mut rng, "x");
        for prob in p.probabilities {
            assert!(prob > 0.0);
        }
    }

    #[test]
    fn predicted_borough_is_the_argmax() {
        let c = classifier();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let p = c.predict_with(&mut rng, "Water leak in public street");
            let max = p
                .probabilities
                .iter()
                .cloned()
                .fold(f64::MIN, f64::max);
            assert_eq!(p.probabilities[p.borough.index()], max);
        }
    }

    #[test]
    fn confidence_matches_argmax_probability() {
        let c = classifier();
        let mut rng = StdRng::seed_from_u64(5);
        let p = c.predict_with(&mut rng, "Overflowing trash on sidewalk");
        assert_eq!(p.confidence(), p.probabilities[p.borough.index()]);
    }

    #[test]
    fn empty_input_predicts_without_error() {
        let c = classifier();
        let mut rng = StdRng::seed_from_u64(1);
        let p = c.predict_with(&mut rng, "");
        let sum: f64 = p.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let c = classifier();
        let a = c.predict_with(&mut StdRng::seed_from_u64(42), "same");
        let b = c.predict_with(&mut StdRng::seed_from_u64(42), "same");
        assert_eq!(a.borough, b.borough);
        assert_eq!(a.probabilities, b.probabilities);
    }

    #[test]
    fn draws_eventually_cover_every_borough() {
        // Uniform over the simplex: each borough wins 1/5 of the time, so
        // 500 draws missing one borough would be astronomically unlikely.
        let c = classifier();
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; BOROUGH_COUNT];
        for _ in 0..500 {
            seen[c.predict_with(&mut rng, "t").borough.index()] = true;
        }
        assert_eq!(seen, [true; BOROUGH_COUNT]);
    }

    // -----------------------------------------------------------------------
    // argmax tests
    // -----------------------------------------------------------------------

    #[test]
    fn argmax_picks_first_on_ties() {
        assert_eq!(argmax(&[0.2, 0.2, 0.2, 0.2, 0.2]), 0);
        assert_eq!(argmax(&[0.1, 0.3, 0.3, 0.2, 0.1]), 1);
    }

    #[test]
    fn argmax_picks_clear_maximum() {
        assert_eq!(argmax(&[0.1, 0.1, 0.6, 0.1, 0.1]), 2);
        assert_eq!(argmax(&[0.0, 0.0, 0.0, 0.0, 1.0]), 4);
    }
}
