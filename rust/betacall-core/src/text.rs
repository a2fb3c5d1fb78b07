use crate::models::{HeightLevel, Member, MemberMoveInfo, ProcessedPosition};

pub fn height_level_to_body_part(level: HeightLevel) -> &'static str {
    match level {
        HeightLevel::Legs => "legs",
        HeightLevel::ThighsKnees => "thighs and knees",
        HeightLevel::Hips => "hips",
        HeightLevel::UpperBody => "upper body",
        HeightLevel::Head => "head",
        HeightLevel::Overhead => "overhead",
        HeightLevel::OutOfReach => "out of reach",
    }
}

/// Spoken instruction for one member. The first move always names the hold,
/// even when the limb did not move relative to the standing start.
pub fn generate_member_text(member: Member, info: &MemberMoveInfo, first_move: bool) -> String {
    if !info.is_different && !first_move {
        return format!("Keep your {member} in the same position");
    }
    let body_part = height_level_to_body_part(info.height_level);
    let lead = if first_move {
        format!("Starting hold for your {member} is at your {body_part} level.")
    } else {
        format!("Place your {member} at your {body_part} level.")
    };
    format!("{lead} The hold is {} and to the {}", info.distance, info.direction)
}

/// Flat text list: position order, then member order. The TTS service answers
/// positionally, so this order is the audio order.
pub fn generate_texts(processed: &[ProcessedPosition]) -> Vec<String> {
    processed
        .iter()
        .enumerate()
        .flat_map(|(i, position)| position.iter().map(move |(member, info)| generate_member_text(member, info, i == 0)))
        .collect()
}
