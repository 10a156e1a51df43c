//! Session-scoped dashboard state.
//!
//! One interactive session owns one [`SessionState`]: the append-only
//! prediction history and the heatmap point accumulator. Both grow without
//! bound for the life of the session — an accepted cost, since sessions are
//! interactive and short-lived — and nothing survives the session ending.
//! There is no process-wide singleton; whoever runs the session (TUI app,
//! HTTP server state) owns the value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::borough::Borough;
use crate::classifier::Prediction;
use crate::heatmap::HeatmapState;

/// One logged prediction. Never mutated, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// The complaint text as entered, verbatim.
    pub complaint: String,
    /// The borough the classifier picked.
    pub borough: Borough,
}

/// All mutable state for one interactive session.
#[derive(Debug)]
pub struct SessionState {
    id: String,
    history: Vec<PredictionRecord>,
    heatmap: HeatmapState,
}

impl SessionState {
    /// Fresh, empty session with a random id.
    pub fn new() -> SessionState {
        let id = Uuid::new_v4().to_string();
        log::info!("session {id} started");
        SessionState {
            id,
            history: Vec::new(),
            heatmap: HeatmapState::new(),
        }
    }

    /// Session id, for health endpoints and exports.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Log one prediction: appends to the history and to the heatmap point
    /// list together, which is what keeps `points.len() == history.len()`
    /// across every user action.
    pub fn record_prediction(&mut self, complaint: &str, prediction: &Prediction) {
        self.history.push(PredictionRecord {
            complaint: complaint.to_string(),
            borough: prediction.borough,
        });
        self.heatmap.record(prediction.borough);
        debug_assert_eq!(self.history.len(), self.heatmap.point_count());
    }

    /// The full ordered history, oldest first. No filtering, no pagination.
    pub fn history(&self) -> &[PredictionRecord] {
        &self.history
    }

    pub fn prediction_count(&self) -> usize {
        self.history.len()
    }

    /// Boroughs predicted so far, tallied in canonical order.
    pub fn borough_tally(&self) -> [u64; crate::borough::BOROUGH_COUNT] {
        let mut tally = [0u64; crate::borough::BOROUGH_COUNT];
        for record in &self.history {
            tally[record.borough.index()] += 1;
        }
        tally
    }

    pub fn heatmap(&self) -> &HeatmapState {
        &self.heatmap
    }

    pub fn heatmap_mut(&mut self) -> &mut HeatmapState {
        &mut self.heatmap
    }
}

impl Default for SessionState {
    fn default() -> SessionState {
        SessionState::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
