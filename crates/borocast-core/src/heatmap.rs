//! Geographic point accumulation and the cached density map.
//!
//! Every prediction appends the predicted borough's centroid to the point
//! list. Rendering the map rebuilds a self-contained Leaflet document, which
//! is the expensive step, so the markup is cached and only regenerated when
//! the point count has changed since the last render. Points are only ever
//! appended or wiped wholesale by [`HeatmapState::clear`], so the length
//! comparison is a sound invalidation key.

use std::fmt::Write;

use crate::borough::{Borough, NYC_CENTER, NYC_ZOOM};

/// Density overlay radius in pixels.
pub const HEAT_RADIUS: u32 = 20;

/// Density overlay blur in pixels.
pub const HEAT_BLUR: u32 = 15;

/// Minimum opacity of the density overlay.
pub const HEAT_MIN_OPACITY: f64 = 0.4;

/// Borough marker radius in pixels.
pub const MARKER_RADIUS: u32 = 6;

/// Borough marker color.
pub const MARKER_COLOR: &str = "#2a9df4";

/// Accumulated heatmap points plus the memoized rendered document.
#[derive(Debug, Default)]
pub struct HeatmapState {
    points: Vec<(f64, f64)>,
    rendered_len: usize,
    cached_html: Option<String>,
}

impl HeatmapState {
    pub fn new() -> HeatmapState {
        HeatmapState::default()
    }

    /// Append the borough's centroid to the point list.
    pub fn record(&mut self, borough: Borough) {
        self.points.push(borough.centroid());
    }

    /// All accumulated points, oldest first.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the cached markup still matches the point list.
    pub fn cache_valid(&self) -> bool {
        self.cached_html.is_some() && self.rendered_len == self.points.len()
    }

    /// Drop every point and invalidate the cache. History elsewhere is not
    /// touched — the heatmap is an independent store.
    pub fn clear(&mut self) {
        let dropped = self.points.len();
        self.points.clear();
        self.rendered_len = 0;
        self.cached_html = None;
        log::info!("cleared heatmap ({dropped} points dropped)");
    }

    /// Return the map document, rebuilding it only if points were added (or
    /// cleared) since the last render.
    pub fn render(&mut self) -> &str {
        if !self.cache_valid() {
            log::debug!("rebuilding map markup for {} points", self.points.len());
            self.cached_html = Some(build_map_html(&self.points));
            self.rendered_len = self.points.len();
        } else {
            log::debug!("map cache hit at {} points", self.rendered_len);
        }
        self.cached_html.as_deref().unwrap_or_default()
    }
}

/// Build the full Leaflet document: Positron base map centered on the city,
/// a heat layer over the accumulated points, and one fixed circle marker per
/// borough.
fn build_map_html(points: &[(f64, f64)]) -> String {
    let mut html = String::with_capacity(2048 + points.len() * 24);

    html.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "<head>\n",
        "<meta charset=\"utf-8\"/>\n",
        "<title>Complaint density</title>\n",
        "<link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.css\"/>\n",
        "<script src=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.js\"></script>\n",
        "<script src=\"https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js\"></script>\n",
        "<style>html, body, #map { margin: 0; width: 100%; height: 100%; }</style>\n",
        "</head>\n",
        "<body>\n",
    ));

    let _ = writeln!(html, "<div id=\"map\" data-points=\"{}\"></div>", points.len());

    html.push_str("<script>\n");
    let (lat, lon) = NYC_CENTER;
    let _ = writeln!(
        html,
        "var map = L.map(\"map\").setView([{lat}, {lon}], {NYC_ZOOM});"
    );
    html.push_str(concat!(
        "L.tileLayer(\"https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png\", ",
        "{attribution: \"&copy; OpenStreetMap contributors &copy; CARTO\"}).addTo(map);\n",
    ));

    html.push_str("var points = [");
    for (i, (plat, plon)) in points.iter().enumerate() {
        if i > 0 {
            html.push_str(", ");
        }
        let _ = write!(html, "[{plat}, {plon}]");
    }
    html.push_str("];\n");

    if !points.is_empty() {
        let _ = writeln!(
            html,
            "L.heatLayer(points, {{radius: {HEAT_RADIUS}, blur: {HEAT_BLUR}, minOpacity: {HEAT_MIN_OPACITY}}}).addTo(map);"
        );
    }

    for borough in Borough::ALL {
        let (blat, blon) = borough.centroid();
        let _ = writeln!(
            html,
            "L.circleMarker([{blat}, {blon}], {{radius: {MARKER_RADIUS}, color: \"{MARKER_COLOR}\", fill: true, fillColor: \"{MARKER_COLOR}\"}}).bindPopup(\"{}\").addTo(map);",
            borough.label()
        );
    }

    html.push_str("</script>\n</body>\n</html>\n");
    html
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
