use enum_iterator::all;
use log::{debug, trace};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};
use super::change::{Change, ChangeType};
use super::options::{DeckSize, Options};
use super::zone::{Zone, ZoneKind, TABLEAU_ROWS, ZONE_COUNT};

/// Builds a shuffled deck, every card face down.
pub fn deck(size: DeckSize, rng: &mut impl Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(size.card_count());
    for suit in all::<Suit>() {
        for rank in size.ranks() {
            cards.push(Card::new(rank, suit));
        }
    }
    cards.shuffle(rng);
    cards
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub options: Options,
    zones: [Zone; ZONE_COUNT],
}

impl Board {
    pub fn new(options: Options) -> Board {
        Board {
            options,
            zones: [
                Zone::new(ZoneKind::Discard),
                Zone::new(ZoneKind::Stock),
                Zone::new(ZoneKind::Waste),
                Zone::new(ZoneKind::Foundation),
                Zone::new(ZoneKind::Tableau),
            ],
        }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, kind: ZoneKind) -> &Zone {
        &self.zones[kind.index()]
    }

    pub(crate) fn zone_mut(&mut self, kind: ZoneKind) -> &mut Zone {
        &mut self.zones[kind.index()]
    }

    /// The single pile of the discard, stock or waste.
    pub(crate) fn pile_mut(&mut self, kind: ZoneKind) -> &mut Vec<Card> {
        if kind.has_rows() {
            panic!("{} is not a single pile", kind.name());
        }
        self.zone_mut(kind).row_mut(0)
    }

    pub fn clear(&mut self) {
        for zone in self.zones.iter_mut() {
            zone.clear();
        }
    }

    pub fn card_count(&self) -> usize {
        self.zones.iter().map(|zone| zone.card_count()).sum()
    }

    pub fn is_won(&self) -> bool {
        self.zone(ZoneKind::Foundation).card_count() == self.options.deck.card_count()
    }

    /// Lays out a new game: everything goes to the stock, the tableau is dealt
    /// as a triangle (row i gets i + 1 cards) and each row's top card is turned.
    pub fn distribute(&mut self, cards: Vec<Card>) -> Vec<Change> {
        self.clear();
        let mut changes = vec![];

        let stock = self.pile_mut(ZoneKind::Stock);
        for card in cards {
            stock.push(card);
        }
        debug!("stock holds {} cards before the deal", stock.len());

        for start_row in 0..TABLEAU_ROWS {
            for row in start_row..TABLEAU_ROWS {
                let card = self
                    .pile_mut(ZoneKind::Stock)
                    .pop()
                    .expect("deck is large enough for the tableau");
                let tableau = self.zone_mut(ZoneKind::Tableau).row_mut(row);
                tableau.push(card);
                trace!("dealt {} to tableau row {}", card.name(), row);
                changes.push(Change::moved(
                    ChangeType::Deal,
                    card,
                    ZoneKind::Tableau,
                    row,
                    tableau.len() - 1,
                ));
            }
        }

        for row in 0..TABLEAU_ROWS {
            if let Some(change) = self.flip_top(ZoneKind::Tableau, row) {
                changes.push(change);
            }
        }
        changes
    }

    /// Turns the top card of a row face up if it is not already.
    pub(crate) fn flip_top(&mut self, kind: ZoneKind, row: usize) -> Option<Change> {
        let cards = self.zone_mut(kind).row_mut(row);
        let offset = cards.len().checked_sub(1)?;
        let card = &mut cards[offset];
        if card.face_up {
            return None;
        }
        card.face_up = true;
        trace!("flipped {} on {} row {}", card.name(), kind.name(), row);
        Some(Change::moved(ChangeType::Flip, *card, kind, row, offset))
    }
}
