use crate::models::{Coordinate, Position};
use crate::options::RouteConfig;

/// Climber standing upright in front of the wall, nothing grasped yet.
///
/// Hands hang at hip level two rows above the floor, feet stand on the floor
/// row. Each limb sits one column off the first real hold for that limb:
/// left limbs `+1`, right limbs `-1`.
pub fn synthesize_start(first: &Position, config: &RouteConfig) -> Position {
    let floor = config.panel_height;
    let hips = floor.saturating_sub(2);
    Position {
        left_hand: Coordinate::new(hips, first.left_hand.y.saturating_add(1)),
        right_hand: Coordinate::new(hips, first.right_hand.y.saturating_sub(1)),
        left_foot: Coordinate::new(floor, first.left_foot.y.saturating_add(1)),
        right_foot: Coordinate::new(floor, first.right_foot.y.saturating_sub(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Member;

    #[test]
    fn standing_start_for_tall_panel() {
        let p0 = Position {
            left_hand: Coordinate::new(10, 5),
            right_hand: Coordinate::new(10, 9),
            left_foot: Coordinate::new(20, 4),
            right_foot: Coordinate::new(20, 10),
        };
        let cfg = RouteConfig::default().panel_height(25);
        let start = synthesize_start(&p0, &cfg);
        assert_eq!(start.left_hand, Coordinate::new(23, 6));
        assert_eq!(start.right_hand, Coordinate::new(23, 8));
        assert_eq!(start.left_foot, Coordinate::new(25, 5));
        assert_eq!(start.right_foot, Coordinate::new(25, 9));
        for m in Member::ALL {
            assert_ne!(start.get(m), p0.get(m), "{m} should differ from the first hold");
        }
        assert_eq!(start.lowest_x(), 25);
    }

    #[test]
    fn column_offsets_saturate_at_grid_limits() {
        let edge = Coordinate::new(3, i32::MAX);
        let low = Coordinate::new(3, i32::MIN);
        let p0 = Position { left_hand: edge, right_hand: low, left_foot: edge, right_foot: low };
        let start = synthesize_start(&p0, &RouteConfig::default());
        assert_eq!(start.left_hand.y, i32::MAX);
        assert_eq!(start.right_hand.y, i32::MIN);
        assert_eq!(start.left_foot.y, i32::MAX);
        assert_eq!(start.right_foot.y, i32::MIN);
    }
}
