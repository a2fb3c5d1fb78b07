use crate::models::{Coordinate, Direction, Distance, HeightLevel};
use crate::options::RouteConfig;

/// Stateless geometry over grid coordinates, scaled by the configured cell edge.
#[derive(Clone, Copy, Debug)]
pub struct Geometry<'a> {
    config: &'a RouteConfig,
}

impl<'a> Geometry<'a> {
    pub fn new(config: &'a RouteConfig) -> Self {
        Self { config }
    }

    /// Physical euclidean distance between two cells.
    pub fn physical_distance(&self, dest: Coordinate, src: Coordinate) -> f64 {
        let edge = self.config.cell_edge_size as f64;
        let dx = (dest.x as f64 - src.x as f64) * edge;
        let dy = (dest.y as f64 - src.y as f64) * edge;
        (dx.powi(2) + dy.powi(2)).sqrt()
    }

    /// `None` when the move exceeds the far threshold.
    pub fn compute_distance(&self, dest: Coordinate, src: Coordinate) -> Option<Distance> {
        let d = self.physical_distance(dest, src);
        if d <= self.config.close_limit_distance {
            Some(Distance::Close)
        } else if d <= self.config.far_limit_distance {
            Some(Distance::Far)
        } else {
            None
        }
    }

    /// Equal columns resolve to `Left`.
    pub fn compute_direction(&self, dest: Coordinate, src: Coordinate) -> Direction {
        if src.y < dest.y {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// Height of `dest` above the reference row, one cell counting as the first bucket.
    pub fn height_centimeters(&self, dest: Coordinate, lowest_x: i32) -> i64 {
        (lowest_x as i64 - dest.x as i64 + 1).saturating_mul(self.config.cell_edge_size)
    }

    pub fn compute_height_level(&self, dest: Coordinate, lowest_x: i32) -> Option<HeightLevel> {
        HeightLevel::from_centimeters(self.height_centimeters(dest, lowest_x))
    }
}
