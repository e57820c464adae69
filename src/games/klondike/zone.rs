use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::checker;
use super::options::DeckSize;

pub const FOUNDATION_ROWS: usize = 4;
pub const TABLEAU_ROWS: usize = 7;
pub const ZONE_COUNT: usize = 5;

/// Zones in focus order. The cursor wraps from the tableau back to the discard.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Sequence,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "camelCase")]
pub enum ZoneKind {
    #[default]
    Discard = 0,
    Stock = 1,
    Waste = 2,
    Foundation = 3,
    Tableau = 4,
}

impl ZoneKind {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> ZoneKind {
        match index % ZONE_COUNT {
            0 => ZoneKind::Discard,
            1 => ZoneKind::Stock,
            2 => ZoneKind::Waste,
            3 => ZoneKind::Foundation,
            _ => ZoneKind::Tableau,
        }
    }

    pub fn next(&self) -> ZoneKind {
        ZoneKind::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> ZoneKind {
        ZoneKind::from_index(self.index() + ZONE_COUNT - 1)
    }

    pub fn row_count(&self) -> usize {
        match self {
            ZoneKind::Discard | ZoneKind::Stock | ZoneKind::Waste => 1,
            ZoneKind::Foundation => FOUNDATION_ROWS,
            ZoneKind::Tableau => TABLEAU_ROWS,
        }
    }

    pub fn has_rows(&self) -> bool {
        self.row_count() > 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZoneKind::Discard => "discard",
            ZoneKind::Stock => "stock",
            ZoneKind::Waste => "waste",
            ZoneKind::Foundation => "foundation",
            ZoneKind::Tableau => "tableau",
        }
    }
}

/// Turns a cursor index into a position inside a row of `len` cards.
/// Negative indices count back from the top card, so -1 is the top.
pub fn resolve_index(len: usize, index: isize) -> Option<usize> {
    let resolved = if index < 0 {
        len as isize + index
    } else {
        index
    };
    if resolved >= 0 && (resolved as usize) < len {
        Some(resolved as usize)
    } else {
        None
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Zone {
    Discard(Vec<Card>),
    Stock(Vec<Card>),
    Waste(Vec<Card>),
    Foundation([Vec<Card>; FOUNDATION_ROWS]),
    Tableau([Vec<Card>; TABLEAU_ROWS]),
}

impl Zone {
    pub fn new(kind: ZoneKind) -> Zone {
        match kind {
            ZoneKind::Discard => Zone::Discard(vec![]),
            ZoneKind::Stock => Zone::Stock(vec![]),
            ZoneKind::Waste => Zone::Waste(vec![]),
            ZoneKind::Foundation => Zone::Foundation(Default::default()),
            ZoneKind::Tableau => Zone::Tableau(Default::default()),
        }
    }

    pub fn kind(&self) -> ZoneKind {
        match self {
            Zone::Discard(_) => ZoneKind::Discard,
            Zone::Stock(_) => ZoneKind::Stock,
            Zone::Waste(_) => ZoneKind::Waste,
            Zone::Foundation(_) => ZoneKind::Foundation,
            Zone::Tableau(_) => ZoneKind::Tableau,
        }
    }

    pub fn rows(&self) -> &[Vec<Card>] {
        match self {
            Zone::Discard(pile) | Zone::Stock(pile) | Zone::Waste(pile) => {
                std::slice::from_ref(pile)
            }
            Zone::Foundation(rows) => rows.as_slice(),
            Zone::Tableau(rows) => rows.as_slice(),
        }
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<Card>] {
        match self {
            Zone::Discard(pile) | Zone::Stock(pile) | Zone::Waste(pile) => {
                std::slice::from_mut(pile)
            }
            Zone::Foundation(rows) => rows.as_mut_slice(),
            Zone::Tableau(rows) => rows.as_mut_slice(),
        }
    }

    pub fn row(&self, row: usize) -> &[Card] {
        match self.rows().get(row) {
            Some(cards) => cards,
            None => panic!("{} has no row {}", self.kind().name(), row),
        }
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut Vec<Card> {
        let kind = self.kind();
        match self.rows_mut().get_mut(row) {
            Some(cards) => cards,
            None => panic!("{} has no row {}", kind.name(), row),
        }
    }

    pub fn is_empty(&self, row: usize) -> bool {
        self.row(row).is_empty()
    }

    pub fn card_at(&self, row: usize, index: isize) -> &Card {
        let cards = self.row(row);
        match resolve_index(cards.len(), index) {
            Some(offset) => &cards[offset],
            None => panic!(
                "card index {} is outside {} row {} of {} cards",
                index,
                self.kind().name(),
                row,
                cards.len()
            ),
        }
    }

    pub fn top(&self, row: usize) -> Option<&Card> {
        self.row(row).last()
    }

    pub fn card_count(&self) -> usize {
        self.rows().iter().map(|row| row.len()).sum()
    }

    pub fn clear(&mut self) {
        for row in self.rows_mut() {
            row.clear();
        }
    }

    /// Foundation row that would take `cards`: an ace goes to the first empty
    /// row, anything else onto the row topped by its same-suit predecessor.
    /// A `reserved` row is never chosen.
    pub fn foundation_target(
        &self,
        cards: &[Card],
        deck: DeckSize,
        reserved: Option<usize>,
    ) -> Option<usize> {
        let rows = match self {
            Zone::Foundation(rows) => rows,
            _ => panic!("only the foundation routes cards by suit"),
        };
        let [card] = cards else {
            return None;
        };
        let mut open = rows
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != reserved);
        if card.is_ace() {
            return open.find(|(_, row)| row.is_empty()).map(|(index, _)| index);
        }
        open.find(|(_, row)| match row.last() {
            Some(top) => top.suit() == card.suit() && deck.is_one_below(top.rank(), card.rank()),
            None => false,
        })
        .map(|(index, _)| index)
    }

    fn tableau_accepts(&self, row: usize, cards: &[Card], deck: DeckSize) -> bool {
        let Some(head) = cards.first() else {
            return false;
        };
        match self.top(row) {
            None => head.is_king(),
            Some(top) => {
                checker::alternates_color(&[*top, *head]) && deck.is_one_below(head.rank(), top.rank())
            }
        }
    }

    /// Row that `cards` would land on if dropped here with the cursor on `row`.
    pub fn accepts(&self, row: usize, cards: &[Card], deck: DeckSize) -> Option<usize> {
        match self {
            Zone::Foundation(_) => self.foundation_target(cards, deck, None),
            Zone::Tableau(_) => self.tableau_accepts(row, cards, deck).then_some(row),
            _ => None,
        }
    }

    /// Appends `cards` when the zone rules allow it and returns the row they
    /// went to. Rejected cards are handed back untouched.
    pub fn accept(
        &mut self,
        row: usize,
        mut cards: Vec<Card>,
        deck: DeckSize,
    ) -> Result<usize, Vec<Card>> {
        match self.accepts(row, &cards, deck) {
            Some(target) => {
                self.row_mut(target).append(&mut cards);
                Ok(target)
            }
            None => Err(cards),
        }
    }
}
