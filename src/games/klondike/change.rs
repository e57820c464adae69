use serde::{Deserialize, Serialize};

use super::card::Card;
use super::zone::ZoneKind;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChangeType {
    #[default]
    Deal,
    // card turned over in place; `card.face_up` holds the new side
    Flip,
    Take,
    Place,
    // cancelled hold went back where it came from
    Return,
    Discard,
    Restock,
    Focus,
    // rejected moves
    Border,
    Closed,
    Empty,
    Illegal,
    GameOver,
}

impl ChangeType {
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ChangeType::Border | ChangeType::Closed | ChangeType::Empty | ChangeType::Illegal
        )
    }
}

/// One step of feedback for the sound, speech and drawing layers. The engine
/// only records these; front ends replay them after each action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(rename(serialize = "type", deserialize = "type"))]
    pub change_type: ChangeType,
    pub zone: ZoneKind,
    pub row: usize,
    pub offset: usize,
    pub length: usize,
    pub card: Option<Card>,
    pub message: Option<String>,
}

impl Change {
    pub fn rejected(change_type: ChangeType, zone: ZoneKind, row: usize) -> Change {
        Change {
            change_type,
            zone,
            row,
            ..Default::default()
        }
    }

    /// Movement of `card` so that it now sits at `offset` of `zone` row `row`.
    pub fn moved(
        change_type: ChangeType,
        card: Card,
        zone: ZoneKind,
        row: usize,
        offset: usize,
    ) -> Change {
        Change {
            change_type,
            zone,
            row,
            offset,
            length: offset + 1,
            card: Some(card),
            ..Default::default()
        }
    }
}
