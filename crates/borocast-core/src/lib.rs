//! # borocast-core
//!
//! **One session, one dashboard: complaint text in, borough out.**
//!
//! `borocast-core` is the state and rendering library behind the NYC 311
//! complaint borough dashboard. It owns the fixed borough model, the
//! classifier boundary, the append-only prediction history, the heatmap
//! point accumulator with its memoized map document, and the stateless
//! chart builders.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use borocast_core::{Classifier, SessionState, charts};
//!
//! // Load the model artifact once at startup — fatal if it fails.
//! let classifier = Classifier::load(Path::new("borocast-model.json")).unwrap();
//! let mut session = SessionState::new();
//!
//! // One user action: predict, then log into history and heatmap together.
//! let prediction = classifier.predict("Noise complaint from construction site");
//! session.record_prediction("Noise complaint from construction site", &prediction);
//!
//! let chart = charts::probability_bars(&prediction);
//! let map_html = session.heatmap_mut().render();
//! assert!(map_html.contains("data-points=\"1\""));
//! assert_eq!(chart.bars.len(), 5);
//! ```
//!
//! ## Architecture
//!
//! Input → Classifier → {History, Heatmap points} → {Charts, Map document}
//!
//! The classifier is a placeholder: it validates and retains the model
//! manifest but draws probabilities from a uniform Dirichlet until real
//! inference is wired in behind the same text-in/probabilities-out boundary.
//! The map document is the only cached artifact — rebuilding it is the
//! expensive step, and points are append-only, so a point-count comparison
//! decides cache validity.

pub mod borough;
pub mod charts;
pub mod classifier;
pub mod heatmap;
pub mod model;
pub mod session;

pub use borough::{BOROUGH_COUNT, Borough, EXAMPLE_COMPLAINTS, NYC_CENTER, NYC_ZOOM};
pub use charts::{Bar, BarChart, PieChart, Slice};
pub use classifier::{Classifier, Prediction};
pub use heatmap::HeatmapState;
pub use model::{DEFAULT_MODEL_PATH, ModelManifest};
pub use session::{PredictionRecord, SessionState};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
