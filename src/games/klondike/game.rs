/*
Game: Klondike
Single player solitaire played with a cursor: four foundations, seven tableau
columns, a stock dealt one or three cards at a time.
*/

use enum_iterator::{all, Sequence};
use log::{debug, info};
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use super::board::{deck, Board};
use super::card::Card;
use super::change::{Change, ChangeType};
use super::checker;
use super::cursor::Cursor;
use super::options::Options;
use super::zone::{resolve_index, ZoneKind};

#[derive(Debug, Clone, Copy, Serialize, Sequence, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    ZoneUp,
    ZoneDown,
    RowUp,
    RowDown,
    CardUp,
    CardDown,
    Take,
    Drop,
}

/// Cards lifted off a row. They belong to no zone until they are placed or
/// returned to `origin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Held {
    pub cards: Vec<Card>,
    pub origin: ZoneKind,
    pub row: usize,
}

/// What the cursor rests on, for narration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Focus {
    pub zone: ZoneKind,
    // only for zones with more than one row
    pub row: Option<usize>,
    pub card: Option<Card>,
}

impl Focus {
    pub fn describe(&self) -> String {
        let mut parts = vec![self.zone.name().to_string()];
        if let Some(row) = self.row {
            parts.push(format!("column {}", row + 1));
        }
        parts.push(match self.card {
            None => "empty".to_string(),
            Some(card) if card.face_up => card.name(),
            Some(_) => "closed".to_string(),
        });
        parts.join(", ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub board: Board,
    pub cursor: Cursor,
    pub held: Option<Held>,
    // Feedback from the last action, grouped into steps the front end plays in order
    pub changes: Vec<Vec<Change>>,
    // Skip building changes when running simulations
    pub no_changes: bool,
    pub won: bool,
}

impl Game {
    pub fn new() -> Game {
        Game::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Game {
        Game::with_rng(options, &mut thread_rng())
    }

    pub fn with_rng(options: Options, rng: &mut impl Rng) -> Game {
        let mut game = Game {
            board: Board::new(options),
            cursor: Cursor::new(),
            held: None,
            changes: vec![],
            no_changes: false,
            won: false,
        };
        game.new_game(rng);
        game
    }

    /// Shuffles a fresh deck and deals it, discarding whatever was on the table.
    pub fn new_game(&mut self, rng: &mut impl Rng) {
        self.changes.clear();
        self.held = None;
        self.won = false;
        self.cursor.reset();
        let cards = deck(self.board.options.deck, rng);
        info!(
            "new game with {} cards, delivering {} at a time",
            cards.len(),
            self.board.options.delivery.count()
        );
        let changes = self.board.distribute(cards);
        self.record(changes);
    }

    pub fn apply_action(&mut self, action: Action) {
        self.changes.clear();
        debug!("{:?} with focus on {}", action, self.cursor.zone.name());

        match action {
            Action::ZoneUp => {
                self.cursor.zone_up();
                self.announce_focus();
            }
            Action::ZoneDown => {
                self.cursor.zone_down();
                self.announce_focus();
            }
            Action::RowUp => self.change_row(true),
            Action::RowDown => self.change_row(false),
            Action::CardUp => self.card_up(),
            Action::CardDown => self.card_down(),
            Action::Take => self.take(),
            Action::Drop => self.drop_to_foundation(),
        }

        self.settle_cursor();
        self.check_end();
    }

    pub fn clone_and_apply_action(&self, action: Action) -> Game {
        let mut game = self.clone();
        game.apply_action(action);
        game
    }

    pub fn focus(&self) -> Focus {
        let zone = self.cursor.zone;
        let position = self.cursor.current();
        let cards = self.board.zone(zone).row(position.row);
        Focus {
            zone,
            row: zone.has_rows().then_some(position.row),
            card: resolve_index(cards.len(), position.card).map(|offset| cards[offset]),
        }
    }

    /// Cards on the table plus cards in hand.
    pub fn card_count(&self) -> usize {
        self.board.card_count() + self.held.as_ref().map_or(0, |held| held.cards.len())
    }

    fn record(&mut self, changes: Vec<Change>) {
        if self.no_changes || changes.is_empty() {
            return;
        }
        self.changes.push(changes);
    }

    fn reject(&mut self, change_type: ChangeType) {
        let zone = self.cursor.zone;
        let row = self.cursor.current().row;
        debug!("{:?} on {} row {}", change_type, zone.name(), row);
        self.record(vec![Change::rejected(change_type, zone, row)]);
        if matches!(change_type, ChangeType::Border | ChangeType::Closed) {
            self.announce_focus();
        }
    }

    fn announce_focus(&mut self) {
        if self.no_changes {
            return;
        }
        let focus = self.focus();
        let position = self.cursor.current();
        let length = self.board.zone(focus.zone).row(position.row).len();
        self.record(vec![Change {
            change_type: ChangeType::Focus,
            zone: focus.zone,
            row: position.row,
            offset: resolve_index(length, position.card).unwrap_or(0),
            length,
            card: focus.card,
            message: Some(focus.describe()),
        }]);
    }

    /// Offset of the focused card inside its row, None for an empty row.
    fn focused_offset(&self) -> Option<usize> {
        let position = self.cursor.current();
        let cards = self.board.zone(self.cursor.zone).row(position.row);
        resolve_index(cards.len(), position.card)
    }

    fn change_row(&mut self, up: bool) {
        let zone = self.cursor.zone;
        let row = self.cursor.current().row;
        let at_border = if up {
            row + 1 >= zone.row_count()
        } else {
            row == 0
        };
        if !zone.has_rows() || at_border {
            self.reject(ChangeType::Border);
            return;
        }
        let position = self.cursor.current_mut();
        position.row = if up { row + 1 } else { row - 1 };
        position.card = -1;
        self.announce_focus();
    }

    /// Card movement only exists inside tableau columns.
    fn focused_tableau_offset(&mut self) -> Option<usize> {
        if self.cursor.zone != ZoneKind::Tableau {
            self.reject(ChangeType::Border);
            return None;
        }
        let offset = self.focused_offset();
        if offset.is_none() {
            self.reject(ChangeType::Empty);
        }
        offset
    }

    fn card_up(&mut self) {
        let Some(offset) = self.focused_tableau_offset() else {
            return;
        };
        let row = self.cursor.current().row;
        let cards = self.board.zone(ZoneKind::Tableau).row(row);
        let below_is_open = offset > 0 && cards[offset - 1].face_up;
        if offset == 0 {
            self.reject(ChangeType::Border);
        } else if !below_is_open {
            self.reject(ChangeType::Closed);
        } else {
            self.cursor.current_mut().card -= 1;
            self.announce_focus();
        }
    }

    fn card_down(&mut self) {
        let Some(offset) = self.focused_tableau_offset() else {
            return;
        };
        let row = self.cursor.current().row;
        let length = self.board.zone(ZoneKind::Tableau).row(row).len();
        if offset + 1 == length {
            self.reject(ChangeType::Border);
        } else {
            self.cursor.current_mut().card += 1;
            self.announce_focus();
        }
    }

    fn take(&mut self) {
        if let Some(held) = self.held.take() {
            self.place_held(held);
            return;
        }
        match self.cursor.zone {
            ZoneKind::Stock => self.deal_from_stock(),
            ZoneKind::Discard => self.restock(),
            _ => self.pick_up(),
        }
    }

    fn pick_up(&mut self) {
        let zone = self.cursor.zone;
        let row = self.cursor.current().row;
        let Some(offset) = self.focused_offset() else {
            self.reject(ChangeType::Empty);
            return;
        };
        let deck = self.board.options.deck;
        let cards = self.board.zone(zone).row(row);
        let face_up = cards[offset].face_up;
        let liftable = checker::is_liftable(&cards[offset..], deck);
        if !face_up {
            self.reject(ChangeType::Closed);
            return;
        }
        if !liftable {
            self.reject(ChangeType::Illegal);
            return;
        }

        let lifted = self.board.zone_mut(zone).row_mut(row).split_off(offset);
        debug!(
            "took {} card(s) from {} row {}",
            lifted.len(),
            zone.name(),
            row
        );
        let changes = lifted
            .iter()
            .enumerate()
            .map(|(i, card)| Change::moved(ChangeType::Take, *card, zone, row, offset + i))
            .collect();
        self.record(changes);
        self.held = Some(Held {
            cards: lifted,
            origin: zone,
            row,
        });
    }

    fn place_held(&mut self, held: Held) {
        let zone = self.cursor.zone;
        let row = self.cursor.current().row;
        let Held {
            cards,
            origin,
            row: origin_row,
        } = held;

        let at_origin = zone == origin && row == origin_row;
        if at_origin || !matches!(zone, ZoneKind::Foundation | ZoneKind::Tableau) {
            self.return_cards(cards, origin, origin_row);
            return;
        }

        let deck = self.board.options.deck;
        let count = cards.len();
        match self.board.zone_mut(zone).accept(row, cards, deck) {
            Ok(target) => {
                let placed = self.board.zone(zone).row(target);
                let start = placed.len() - count;
                let mut changes: Vec<Change> = placed[start..]
                    .iter()
                    .enumerate()
                    .map(|(i, card)| {
                        Change::moved(ChangeType::Place, *card, zone, target, start + i)
                    })
                    .collect();
                debug!(
                    "placed {} card(s) on {} row {}",
                    count,
                    zone.name(),
                    target
                );
                changes.extend(self.board.flip_top(origin, origin_row));
                self.record(changes);
            }
            Err(cards) => {
                self.held = Some(Held {
                    cards,
                    origin,
                    row: origin_row,
                });
                self.reject(ChangeType::Illegal);
            }
        }
    }

    fn return_cards(&mut self, mut cards: Vec<Card>, origin: ZoneKind, row: usize) {
        let pile = self.board.zone_mut(origin).row_mut(row);
        let start = pile.len();
        pile.append(&mut cards);
        let changes = pile[start..]
            .iter()
            .enumerate()
            .map(|(i, card)| Change::moved(ChangeType::Return, *card, origin, row, start + i))
            .collect();
        debug!("returned held cards to {} row {}", origin.name(), row);
        self.record(changes);
    }

    /// Sends the focused top card of the waste or a tableau column to the
    /// foundation row that takes it.
    fn drop_to_foundation(&mut self) {
        let zone = self.cursor.zone;
        let row = self.cursor.current().row;
        // the held cards must find their origin row as they left it
        let holding_from_here = self
            .held
            .as_ref()
            .is_some_and(|held| held.origin == zone && held.row == row);
        if !matches!(zone, ZoneKind::Waste | ZoneKind::Tableau) || holding_from_here {
            self.reject(ChangeType::Illegal);
            return;
        }
        let Some(offset) = self.focused_offset() else {
            self.reject(ChangeType::Empty);
            return;
        };
        let reserved = self
            .held
            .as_ref()
            .filter(|held| held.origin == ZoneKind::Foundation)
            .map(|held| held.row);
        let cards = self.board.zone(zone).row(row);
        let card = cards[offset];
        let is_top = offset + 1 == cards.len();
        if !card.face_up {
            self.reject(ChangeType::Closed);
            return;
        }
        let deck = self.board.options.deck;
        let foundation = self.board.zone(ZoneKind::Foundation);
        let target = match foundation.foundation_target(&[card], deck, reserved) {
            Some(target) if is_top => target,
            _ => {
                self.reject(ChangeType::Illegal);
                return;
            }
        };

        let card = self
            .board
            .zone_mut(zone)
            .row_mut(row)
            .pop()
            .expect("focused card is the top card");
        let foundation = self.board.zone_mut(ZoneKind::Foundation).row_mut(target);
        foundation.push(card);
        let placed_at = foundation.len() - 1;
        debug!("sent {} to foundation row {}", card.name(), target);

        let mut changes = vec![Change::moved(
            ChangeType::Place,
            card,
            ZoneKind::Foundation,
            target,
            placed_at,
        )];
        changes.extend(self.board.flip_top(zone, row));
        self.record(changes);
    }

    fn deal_from_stock(&mut self) {
        if self.board.zone(ZoneKind::Stock).is_empty(0) {
            self.restock();
            return;
        }
        let mut changes = self.discard_waste();
        for _ in 0..self.board.options.delivery.count() {
            let Some(mut card) = self.board.pile_mut(ZoneKind::Stock).pop() else {
                break;
            };
            card.face_up = true;
            let waste = self.board.pile_mut(ZoneKind::Waste);
            waste.push(card);
            changes.push(Change::moved(
                ChangeType::Deal,
                card,
                ZoneKind::Waste,
                0,
                waste.len() - 1,
            ));
        }
        debug!(
            "waste shows {} card(s), {} left in stock",
            self.board.zone(ZoneKind::Waste).card_count(),
            self.board.zone(ZoneKind::Stock).card_count()
        );
        self.record(changes);
    }

    /// Turns the waste face down onto the discard, oldest card first.
    fn discard_waste(&mut self) -> Vec<Change> {
        let waste = std::mem::take(self.board.pile_mut(ZoneKind::Waste));
        let mut changes = vec![];
        for mut card in waste {
            card.face_up = false;
            let discard = self.board.pile_mut(ZoneKind::Discard);
            discard.push(card);
            changes.push(Change::moved(
                ChangeType::Discard,
                card,
                ZoneKind::Discard,
                0,
                discard.len() - 1,
            ));
        }
        changes
    }

    /// Once the stock runs out, the passed cards go back to it in their
    /// original dealing order.
    fn restock(&mut self) {
        if !self.board.zone(ZoneKind::Stock).is_empty(0) {
            self.reject(ChangeType::Illegal);
            return;
        }
        if self.board.zone(ZoneKind::Waste).is_empty(0)
            && self.board.zone(ZoneKind::Discard).is_empty(0)
        {
            self.reject(ChangeType::Empty);
            return;
        }
        let mut changes = self.discard_waste();
        while let Some(card) = self.board.pile_mut(ZoneKind::Discard).pop() {
            let stock = self.board.pile_mut(ZoneKind::Stock);
            stock.push(card);
            changes.push(Change::moved(
                ChangeType::Restock,
                card,
                ZoneKind::Stock,
                0,
                stock.len() - 1,
            ));
        }
        debug!(
            "restocked {} card(s)",
            self.board.zone(ZoneKind::Stock).card_count()
        );
        self.record(changes);
    }

    /// Points any cursor that lost its card back at the top of its row.
    fn settle_cursor(&mut self) {
        for kind in all::<ZoneKind>() {
            let position = self.cursor.position(kind);
            let cards = self.board.zone(kind).row(position.row);
            let valid = match resolve_index(cards.len(), position.card) {
                Some(offset) => cards[offset].face_up || offset + 1 == cards.len(),
                None => false,
            };
            if !valid {
                self.cursor.position_mut(kind).card = -1;
            }
        }
    }

    fn check_end(&mut self) {
        if self.won || !self.board.is_won() {
            return;
        }
        self.won = true;
        info!("every card is on the foundation");
        self.record(vec![Change {
            change_type: ChangeType::GameOver,
            zone: ZoneKind::Foundation,
            message: Some("You win! Every card is on the foundation.".to_string()),
            ..Default::default()
        }]);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
