use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::models::{Member, ProcessedPosition};
use crate::options::RouteConfig;

pub const NEXT_POSITION_LABEL: &str = "Next position";
pub const END_OF_TRACK_LABEL: &str = "End of track";

/// One playable clip and what it belongs to: a member label, or a transition label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioCue {
    pub audio: String,
    pub member: String,
}

/// Position index to its ordered cues. Serializes as an object keyed by index.
pub type AudioManifest = BTreeMap<usize, Vec<AudioCue>>;

/// Re-join the flat, positionally aligned audio list with the positions it was
/// generated from. Each position takes one clip per member, then a transition
/// clip: next-position between moves, end-of-track after the last.
pub fn build_audio_manifest(audio_ids: &[String], processed: &[ProcessedPosition], config: &RouteConfig) -> Result<AudioManifest> {
    let expected = processed.len() * Member::ALL.len();
    if audio_ids.len() != expected {
        return Err(RouteError::TextToSpeechFailure(format!(
            "expected {expected} audio files, got {}",
            audio_ids.len()
        )));
    }

    let mut clips = audio_ids.iter();
    let mut manifest = AudioManifest::new();
    for (i, position) in processed.iter().enumerate() {
        let mut cues: Vec<AudioCue> = position
            .iter()
            .zip(clips.by_ref())
            .map(|((member, _), audio)| AudioCue { audio: audio.clone(), member: member.label().to_string() })
            .collect();
        let transition = if i + 1 < processed.len() {
            AudioCue { audio: config.next_position_audio.clone(), member: NEXT_POSITION_LABEL.to_string() }
        } else {
            AudioCue { audio: config.end_audio.clone(), member: END_OF_TRACK_LABEL.to_string() }
        };
        cues.push(transition);
        manifest.insert(i, cues);
    }
    Ok(manifest)
}
