pub const DEFAULT_CELL_EDGE_SIZE: i64 = 30; // cm between centers of two cells
pub const DEFAULT_PANEL_HEIGHT: i32 = 10; // grid rows; also the floor row index
pub const DEFAULT_NEXT_POSITION_AUDIO: &str = "next_position.mp3";
pub const DEFAULT_END_AUDIO: &str = "end_of_track.mp3";

/// One diagonal cell step.
pub fn close_limit_for(edge: i64) -> f64 {
    let e = edge as f64;
    (2.0 * e.powi(2)).sqrt()
}

/// A knight's move: two cells along one axis, one along the other.
pub fn far_limit_for(edge: i64) -> f64 {
    let e = edge as f64;
    ((2.0 * e).powi(2) + e.powi(2)).sqrt()
}

/// Constants the route pipeline depends on. Built once and shared read-only.
///
/// Build it through [`RouteConfig::with_cell_edge`] or `Default` so the
/// distance thresholds match the cell edge.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteConfig {
    pub cell_edge_size: i64,
    pub close_limit_distance: f64,
    pub far_limit_distance: f64,
    pub panel_height: i32,
    pub next_position_audio: String,
    pub end_audio: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::with_cell_edge(DEFAULT_CELL_EDGE_SIZE)
    }
}

impl RouteConfig {
    /// Default config with both distance thresholds derived from `edge`.
    pub fn with_cell_edge(edge: i64) -> Self {
        Self {
            cell_edge_size: edge,
            close_limit_distance: close_limit_for(edge),
            far_limit_distance: far_limit_for(edge),
            panel_height: DEFAULT_PANEL_HEIGHT,
            next_position_audio: DEFAULT_NEXT_POSITION_AUDIO.to_string(),
            end_audio: DEFAULT_END_AUDIO.to_string(),
        }
    }

    pub fn panel_height(mut self, rows: i32) -> Self {
        self.panel_height = rows;
        self
    }
}
