//! Integration tests for borocast-core.
//!
//! These tests verify the full dashboard pipeline:
//! model artifact → classifier → session state → charts and map document.

use borocast_core::{
    Borough, Classifier, ModelManifest, SessionState, charts,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn classifier_from_disk() -> Classifier {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("borocast-model.json");
    ModelManifest::placeholder().write(&path).unwrap();
    Classifier::load(&path).unwrap()
}

#[test]
fn startup_fails_fast_on_missing_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let err = Classifier::load(&dir.path().join("no-such-model.json")).unwrap_err();
    assert!(err.to_string().contains("no-such-model.json"));
}

#[test]
fn startup_fails_fast_on_foreign_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let mut manifest = ModelManifest::placeholder();
    manifest.labels = vec!["North".into(), "South".into()];
    // Bypass validation on write; load must still reject it.
    std::fs::write(&path, serde_json::to_string(&manifest).unwrap()).unwrap();
    assert!(Classifier::load(&path).is_err());
}

#[test]
fn n_predictions_grow_both_stores_to_n() {
    let classifier = classifier_from_disk();
    let mut rng = StdRng::seed_from_u64(2);
    let mut session = SessionState::new();

    for n in 1..=25 {
        let text = format!("pothole on {n}th avenue");
        let prediction = classifier.predict_with(&mut rng, &text);
        session.record_prediction(&text, &prediction);
        assert_eq!(session.history().len(), n);
        assert_eq!(session.heatmap().point_count(), n);
    }
}

#[test]
fn predicted_point_is_the_predicted_centroid() {
    let classifier = classifier_from_disk();
    let mut rng = StdRng::seed_from_u64(4);
    let mut session = SessionState::new();

    let text = "Noise complaint from construction site";
    let prediction = classifier.predict_with(&mut rng, text);
    session.record_prediction(text, &prediction);

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].complaint, text);
    assert_eq!(session.history()[0].borough, prediction.borough);
    assert_eq!(
        session.heatmap().points(),
        &[prediction.borough.centroid()]
    );
}

#[test]
fn map_cache_hits_until_points_change() {
    let classifier = classifier_from_disk();
    let mut rng = StdRng::seed_from_u64(6);
    let mut session = SessionState::new();

    let prediction = classifier.predict_with(&mut rng, "broken hydrant");
    session.record_prediction("broken hydrant", &prediction);

    let first = session.heatmap_mut().render().to_string();
    let second = session.heatmap_mut().render().to_string();
    assert_eq!(first, second);

    let prediction = classifier.predict_with(&mut rng, "flooded basement");
    session.record_prediction("flooded basement", &prediction);
    assert!(!session.heatmap().cache_valid());

    let third = session.heatmap_mut().render().to_string();
    assert!(third.contains("data-points=\"2\""));
}

#[test]
fn clear_resets_heatmap_but_not_history() {
    let classifier = classifier_from_disk();
    let mut rng = StdRng::seed_from_u64(9);
    let mut session = SessionState::new();

    for text in ["a", "b", "c"] {
        let prediction = classifier.predict_with(&mut rng, text);
        session.record_prediction(text, &prediction);
    }
    let _ = session.heatmap_mut().render();

    session.heatmap_mut().clear();
    assert_eq!(session.heatmap().point_count(), 0);
    assert!(!session.heatmap().cache_valid());
    assert_eq!(session.history().len(), 3);
}

#[test]
fn clear_on_a_fresh_session_is_harmless() {
    let mut session = SessionState::new();
    session.heatmap_mut().clear();
    assert!(session.heatmap().is_empty());
    assert!(!session.heatmap().cache_valid());
    assert!(session.history().is_empty());
}

#[test]
fn every_prediction_is_a_probability_vector() {
    let classifier = classifier_from_disk();
    let mut rng = StdRng::seed_from_u64(12);

    for _ in 0..100 {
        let p = classifier.predict_with(&mut rng, "rats in the alley");
        let sum: f64 = p.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "probabilities sum to {sum}");
        let max = p.probabilities.iter().cloned().fold(f64::MIN, f64::max);
        assert_eq!(p.probabilities[p.borough.index()], max);
    }
}

#[test]
fn dashboard_charts_build_from_mock_counts() {
    let mut rng = StdRng::seed_from_u64(20);
    let counts = charts::mock_complaint_counts(&mut rng);
    let bars = charts::complaint_bars(&counts);
    let pie = charts::complaint_pie(&counts);

    assert_eq!(bars.bars.len(), Borough::ALL.len());
    assert_eq!(pie.slices.len(), Borough::ALL.len());
    let share_total: f64 = pie.slices.iter().map(|s| s.share).sum();
    assert!((share_total - 1.0).abs() < 1e-9);
}
