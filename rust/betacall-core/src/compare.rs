use tracing::debug;

use crate::error::{Result, RouteError};
use crate::geometry::Geometry;
use crate::models::{Coordinate, Member, MemberMoveInfo, Position, ProcessedPosition};
use crate::options::RouteConfig;

pub struct Comparator<'a> {
    geometry: Geometry<'a>,
}

impl<'a> Comparator<'a> {
    pub fn new(config: &'a RouteConfig) -> Self {
        Self { geometry: Geometry::new(config) }
    }

    /// Describe how each member travels from `source` to `destination`.
    ///
    /// Height levels are measured against the lowest limb of `source`. Fails as
    /// a whole if any single member has no reachable distance bucket.
    pub fn compare_placements(&self, destination: &Position, source: &Position) -> Result<ProcessedPosition> {
        let lowest = source.lowest_x();
        Ok(ProcessedPosition {
            left_hand: self.compare_member(Member::LeftHand, destination.left_hand, source.left_hand, lowest)?,
            right_hand: self.compare_member(Member::RightHand, destination.right_hand, source.right_hand, lowest)?,
            left_foot: self.compare_member(Member::LeftFoot, destination.left_foot, source.left_foot, lowest)?,
            right_foot: self.compare_member(Member::RightFoot, destination.right_foot, source.right_foot, lowest)?,
        })
    }

    fn compare_member(&self, member: Member, to: Coordinate, from: Coordinate, lowest: i32) -> Result<MemberMoveInfo> {
        let distance = self.geometry.compute_distance(to, from).ok_or_else(|| {
            debug!(%member, %from, %to, distance = self.geometry.physical_distance(to, from), "move out of reach");
            RouteError::UnreachableMove { member, from, to }
        })?;
        let height_level = self.geometry.compute_height_level(to, lowest).ok_or(RouteError::HeightLevelOutOfRange {
            member,
            centimeters: self.geometry.height_centimeters(to, lowest),
        })?;
        Ok(MemberMoveInfo {
            distance,
            direction: self.geometry.compute_direction(to, from),
            height_level,
            is_different: to != from,
        })
    }
}
