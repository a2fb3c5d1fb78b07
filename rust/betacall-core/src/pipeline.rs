use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, RouteError};
use crate::models::{Matrix, Position, ProcessedPosition};
use crate::options::RouteConfig;
use crate::process::process_positions;
use crate::text::generate_texts;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRouteRequest {
    pub matrix: Matrix,
    pub positions: Vec<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRouteResult {
    pub processed_positions: Vec<ProcessedPosition>,
    pub generated_texts: Vec<String>,
}

/// Checks shared by every path that runs positions through the geometry:
/// at least one position, every member placed, no negative cell indices.
pub fn validate_positions(positions: &[Position]) -> Result<()> {
    if positions.is_empty() {
        return Err(RouteError::MalformedInput("route has no positions".into()));
    }
    for (i, position) in positions.iter().enumerate() {
        for (member, c) in position.iter() {
            if c.is_unset() {
                return Err(RouteError::MalformedInput(format!("position {i} has no hold for {member}")));
            }
            if c.x < 0 || c.y < 0 {
                return Err(RouteError::MalformedInput(format!("position {i} puts {member} off the panel at {c}")));
            }
        }
    }
    Ok(())
}

impl ProcessRouteRequest {
    /// Reject requests that cannot describe a climbable route.
    pub fn validate(&self) -> Result<()> {
        validate_positions(&self.positions)?;
        if self.matrix.is_empty() {
            return Err(RouteError::MalformedInput("route has no matrix".into()));
        }
        if matches!(self.route_name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(RouteError::MalformedInput("route name is empty".into()));
        }
        for (i, position) in self.positions.iter().enumerate() {
            for (member, c) in position.iter() {
                let in_matrix = usize::try_from(c.x)
                    .ok()
                    .zip(usize::try_from(c.y).ok())
                    .is_some_and(|(row, col)| self.matrix.get(row).is_some_and(|r| col < r.len()));
                if !in_matrix {
                    return Err(RouteError::MalformedInput(format!("position {i} puts {member} outside the matrix at {c}")));
                }
            }
        }
        Ok(())
    }
}

/// Pure stage of route processing: geometry plus instruction text, no I/O.
pub fn compute_route(request: &ProcessRouteRequest, config: &RouteConfig) -> Result<ProcessRouteResult> {
    request.validate()?;
    let processed_positions = process_positions(&request.positions, config)?;
    let generated_texts = generate_texts(&processed_positions);
    info!(positions = processed_positions.len(), texts = generated_texts.len(), "route computed");
    Ok(ProcessRouteResult { processed_positions, generated_texts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn request(positions: Vec<Position>) -> ProcessRouteRequest {
        ProcessRouteRequest { matrix: vec![vec![None; 15]; 10], positions, route_name: Some("Warmup".into()) }
    }

    fn p0() -> Position {
        Position {
            left_hand: Coordinate::new(7, 3),
            right_hand: Coordinate::new(7, 5),
            left_foot: Coordinate::new(9, 2),
            right_foot: Coordinate::new(9, 6),
        }
    }

    #[test]
    fn rejects_unset_coordinates() {
        let mut p = p0();
        p.left_foot = Coordinate::UNSET;
        let err = request(vec![p]).validate().unwrap_err();
        assert_eq!(err, RouteError::MalformedInput("position 0 has no hold for left-foot".into()));
    }

    #[test]
    fn rejects_empty_matrix_and_blank_name() {
        let mut r = request(vec![p0()]);
        r.route_name = Some("  ".into());
        assert!(matches!(r.validate(), Err(RouteError::MalformedInput(_))));
        r.route_name = None;
        assert!(r.validate().is_ok());
        r.matrix.clear();
        assert!(matches!(r.validate(), Err(RouteError::MalformedInput(_))));
    }

    #[test]
    fn extreme_coordinates_are_malformed() {
        let mut far_up = p0();
        far_up.left_hand = Coordinate::new(i32::MIN, 3);
        let err = compute_route(&request(vec![p0(), far_up]), &RouteConfig::default()).unwrap_err();
        assert!(matches!(err, RouteError::MalformedInput(_)), "{err:?}");

        let mut far_right = p0();
        far_right.left_hand = Coordinate::new(7, i32::MAX);
        let err = compute_route(&request(vec![far_right]), &RouteConfig::default()).unwrap_err();
        assert_eq!(err, RouteError::MalformedInput(format!("position 0 puts left-hand outside the matrix at (7, {})", i32::MAX)));
    }

    #[test]
    fn coordinates_must_fall_inside_the_matrix() {
        let mut below = p0();
        below.right_foot = Coordinate::new(10, 6);
        assert!(matches!(request(vec![below]).validate(), Err(RouteError::MalformedInput(_))));

        let mut wide = p0();
        wide.right_hand = Coordinate::new(7, 15);
        assert!(matches!(request(vec![wide]).validate(), Err(RouteError::MalformedInput(_))));

        let mut corner = p0();
        corner.right_foot = Coordinate::new(9, 14);
        assert!(request(vec![corner]).validate().is_ok());
    }

    #[test]
    fn shared_position_checks() {
        assert_eq!(validate_positions(&[]), Err(RouteError::MalformedInput("route has no positions".into())));
        let mut negative = p0();
        negative.left_hand = Coordinate::new(-3, 2);
        assert!(matches!(validate_positions(&[p0(), negative]), Err(RouteError::MalformedInput(_))));
        assert!(validate_positions(&[p0()]).is_ok());
    }

    #[test]
    fn computes_four_texts_per_position() {
        let mut p1 = p0();
        p1.left_hand = Coordinate::new(6, 3);
        let out = compute_route(&request(vec![p0(), p1]), &RouteConfig::default()).unwrap();
        assert_eq!(out.processed_positions.len(), 2);
        assert_eq!(out.generated_texts.len(), 8);
        assert_eq!(out.generated_texts[5], "Keep your right-hand in the same position");
    }

    #[test]
    fn request_reads_camel_case_body() {
        let body = serde_json::json!({
            "matrix": [[null]],
            "routeName": "Slab",
            "positions": [{
                "left-hand": {"x": 7, "y": 3},
                "right-hand": {"x": 7, "y": 5},
                "left-foot": {"x": 9, "y": 2},
                "right-foot": {"x": 9, "y": 6}
            }]
        });
        let r: ProcessRouteRequest = serde_json::from_value(body).unwrap();
        assert_eq!(r.route_name.as_deref(), Some("Slab"));
        assert_eq!(r.positions, vec![p0()]);
    }
}
