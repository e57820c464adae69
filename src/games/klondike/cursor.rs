use serde::{Deserialize, Serialize};

use super::zone::{ZoneKind, ZONE_COUNT};

/// Focused row and card inside one zone. `card` counts back from the top of
/// the row, so the default -1 is the top card (or nothing, for an empty row).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub row: usize,
    pub card: isize,
}

impl Default for Position {
    fn default() -> Self {
        Position { row: 0, card: -1 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    pub zone: ZoneKind,
    positions: [Position; ZONE_COUNT],
}

impl Cursor {
    pub fn new() -> Cursor {
        Cursor::default()
    }

    pub fn reset(&mut self) {
        *self = Cursor::default();
    }

    pub fn position(&self, kind: ZoneKind) -> Position {
        self.positions[kind.index()]
    }

    pub fn position_mut(&mut self, kind: ZoneKind) -> &mut Position {
        &mut self.positions[kind.index()]
    }

    pub fn current(&self) -> Position {
        self.position(self.zone)
    }

    pub fn current_mut(&mut self) -> &mut Position {
        let zone = self.zone;
        self.position_mut(zone)
    }

    pub fn zone_up(&mut self) {
        self.zone = self.zone.next();
    }

    pub fn zone_down(&mut self) {
        self.zone = self.zone.previous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_cycle_has_five_stops() {
        let mut cursor = Cursor::new();
        for _ in 0..ZONE_COUNT {
            cursor.zone_up();
        }
        assert_eq!(cursor.zone, ZoneKind::Discard);
        cursor.zone_down();
        assert_eq!(cursor.zone, ZoneKind::Tableau);
    }

    #[test]
    fn test_positions_are_kept_per_zone() {
        let mut cursor = Cursor::new();
        cursor.zone = ZoneKind::Tableau;
        cursor.current_mut().row = 5;
        cursor.zone = ZoneKind::Foundation;
        assert_eq!(cursor.current(), Position::default());
        assert_eq!(cursor.position(ZoneKind::Tableau).row, 5);
        cursor.reset();
        assert_eq!(cursor.position(ZoneKind::Tableau), Position::default());
    }
}
