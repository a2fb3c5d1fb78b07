use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid cell indices: `x` is the matrix row (grows downward), `y` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const UNSET: Coordinate = Coordinate { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Member {
    #[serde(rename = "left-hand")]
    LeftHand,
    #[serde(rename = "right-hand")]
    RightHand,
    #[serde(rename = "left-foot")]
    LeftFoot,
    #[serde(rename = "right-foot")]
    RightFoot,
}

impl Member {
    /// Every member, in the order instructions and audio cues are emitted.
    pub const ALL: [Member; 4] = [Member::LeftHand, Member::RightHand, Member::LeftFoot, Member::RightFoot];

    pub fn label(&self) -> &'static str {
        match self {
            Member::LeftHand => "left-hand",
            Member::RightHand => "right-hand",
            Member::LeftFoot => "left-foot",
            Member::RightFoot => "right-foot",
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where all four limbs are placed at one move of the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "left-hand")]
    pub left_hand: Coordinate,
    #[serde(rename = "right-hand")]
    pub right_hand: Coordinate,
    #[serde(rename = "left-foot")]
    pub left_foot: Coordinate,
    #[serde(rename = "right-foot")]
    pub right_foot: Coordinate,
}

impl Position {
    pub fn get(&self, member: Member) -> Coordinate {
        match member {
            Member::LeftHand => self.left_hand,
            Member::RightHand => self.right_hand,
            Member::LeftFoot => self.left_foot,
            Member::RightFoot => self.right_foot,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Member, Coordinate)> + '_ {
        Member::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Row index of the limb closest to the floor.
    pub fn lowest_x(&self) -> i32 {
        self.iter().map(|(_, c)| c.x).max().unwrap_or(self.left_hand.x)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    Close,
    Far,
}

impl Distance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Distance::Close => "close",
            Distance::Far => "far",
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body-relative height buckets, in centimeters from the floor.
///
/// Serialized as the numeric centimeter value; deserializing any other number
/// is an error rather than a coercion to the nearest level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeightLevel {
    Legs,
    ThighsKnees,
    Hips,
    UpperBody,
    Head,
    Overhead,
    OutOfReach,
}

impl HeightLevel {
    pub const ALL: [HeightLevel; 7] = [
        HeightLevel::Legs,
        HeightLevel::ThighsKnees,
        HeightLevel::Hips,
        HeightLevel::UpperBody,
        HeightLevel::Head,
        HeightLevel::Overhead,
        HeightLevel::OutOfReach,
    ];

    pub const fn centimeters(&self) -> i64 {
        match self {
            HeightLevel::Legs => 30,
            HeightLevel::ThighsKnees => 60,
            HeightLevel::Hips => 90,
            HeightLevel::UpperBody => 120,
            HeightLevel::Head => 150,
            HeightLevel::Overhead => 180,
            HeightLevel::OutOfReach => 210,
        }
    }

    /// Exact match only; `None` for any value that is not one of the seven levels.
    pub fn from_centimeters(value: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.centimeters() == value)
    }
}

impl Serialize for HeightLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.centimeters())
    }
}

impl<'de> Deserialize<'de> for HeightLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        HeightLevel::from_centimeters(value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown height level {value}")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberMoveInfo {
    pub distance: Distance,
    pub direction: Direction,
    pub height_level: HeightLevel,
    pub is_different: bool,
}

/// Result of comparing one destination position against its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedPosition {
    #[serde(rename = "left-hand")]
    pub left_hand: MemberMoveInfo,
    #[serde(rename = "right-hand")]
    pub right_hand: MemberMoveInfo,
    #[serde(rename = "left-foot")]
    pub left_foot: MemberMoveInfo,
    #[serde(rename = "right-foot")]
    pub right_foot: MemberMoveInfo,
}

impl ProcessedPosition {
    pub fn get(&self, member: Member) -> &MemberMoveInfo {
        match member {
            Member::LeftHand => &self.left_hand,
            Member::RightHand => &self.right_hand,
            Member::LeftFoot => &self.left_foot,
            Member::RightFoot => &self.right_foot,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Member, &MemberMoveInfo)> + '_ {
        Member::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Incepator,
    Intermediar,
    Avansat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldType {
    Pinch,
    Sloper,
    Jug,
    Pocket,
    Edge,
    Crimp,
    Undercling,
    Gaston,
    Volume,
    Cubby,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldSize {
    S,
    M,
    L,
}

/// A hold placed in one grid cell of the panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hold {
    pub hold_id: String,
    pub image_format: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub type_: HoldType,
    pub size: HoldSize,
}

/// Panel grid: rows of cells, `None` where no hold is mounted.
pub type Matrix = Vec<Vec<Option<Hold>>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn pos(lh: (i32, i32), rh: (i32, i32), lf: (i32, i32), rf: (i32, i32)) -> Position {
        Position {
            left_hand: Coordinate::new(lh.0, lh.1),
            right_hand: Coordinate::new(rh.0, rh.1),
            left_foot: Coordinate::new(lf.0, lf.1),
            right_foot: Coordinate::new(rf.0, rf.1),
        }
    }

    #[test]
    fn position_uses_member_labels_on_the_wire() {
        let p = pos((1, 2), (1, 4), (5, 2), (5, 4));
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["left-hand"], json!({"x": 1, "y": 2}));
        assert_eq!(v["right-foot"], json!({"x": 5, "y": 4}));
    }

    #[test]
    fn position_missing_member_is_rejected() {
        let v = json!({
            "left-hand": {"x": 1, "y": 2},
            "right-hand": {"x": 1, "y": 4},
            "left-foot": {"x": 5, "y": 2}
        });
        assert!(serde_json::from_value::<Position>(v).is_err());
    }

    #[test]
    fn lowest_x_is_the_largest_row() {
        let p = pos((1, 2), (3, 4), (9, 2), (7, 4));
        assert_eq!(p.lowest_x(), 9);
    }

    #[test]
    fn height_levels_are_ordered_and_exact() {
        let cms: Vec<i64> = HeightLevel::ALL.iter().map(|l| l.centimeters()).collect();
        assert_eq!(cms, vec![30, 60, 90, 120, 150, 180, 210]);
        assert!(HeightLevel::Legs < HeightLevel::OutOfReach);
        assert_eq!(HeightLevel::from_centimeters(120), Some(HeightLevel::UpperBody));
        assert_eq!(HeightLevel::from_centimeters(0), None);
        assert_eq!(HeightLevel::from_centimeters(240), None);
        assert_eq!(HeightLevel::from_centimeters(45), None);
    }

    #[test]
    fn move_info_serializes_camel_case() {
        let info = MemberMoveInfo {
            distance: Distance::Far,
            direction: Direction::Left,
            height_level: HeightLevel::Hips,
            is_different: true,
        };
        let v = serde_json::to_value(info).unwrap();
        assert_eq!(v["distance"], Value::String("far".into()));
        assert_eq!(v["direction"], Value::String("left".into()));
        assert_eq!(v["heightLevel"], json!(90));
        assert_eq!(v["isDifferent"], Value::Bool(true));
        assert!(serde_json::from_value::<HeightLevel>(json!(100)).is_err());
    }

    #[test]
    fn matrix_cells_deserialize_holds_and_gaps() {
        let v = json!([[null, {
            "hold_id": "h-17",
            "image_format": "png",
            "difficulty": "Avansat",
            "type": "Crimp",
            "size": "S"
        }]]);
        let m: Matrix = serde_json::from_value(v).unwrap();
        assert!(m[0][0].is_none());
        let hold = m[0][1].as_ref().unwrap();
        assert_eq!(hold.type_, HoldType::Crimp);
        assert_eq!(hold.size, HoldSize::S);
    }
}
