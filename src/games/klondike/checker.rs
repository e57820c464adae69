// Run checks used before a sequence can leave its pile as one unit.

use super::card::Card;
use super::options::DeckSize;

pub fn alternates_color(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| pair[0].color() != pair[1].color())
}

pub fn is_descending_by_one(cards: &[Card], deck: DeckSize) -> bool {
    cards
        .windows(2)
        .all(|pair| deck.is_one_below(pair[1].rank(), pair[0].rank()))
}

pub fn is_liftable(cards: &[Card], deck: DeckSize) -> bool {
    alternates_color(cards) && is_descending_by_one(cards, deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::klondike::card::{Suit, ACE, KING};

    fn card(rank: i32, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_short_sequences_always_pass() {
        let single = [card(5, Suit::Hearts)];
        assert!(alternates_color(&[]));
        assert!(alternates_color(&single));
        assert!(is_descending_by_one(&[], DeckSize::Full));
        assert!(is_descending_by_one(&single, DeckSize::Full));
        assert!(is_liftable(&single, DeckSize::Half));
    }

    #[test]
    fn test_alternates_color() {
        let good = [
            card(9, Suit::Spades),
            card(8, Suit::Hearts),
            card(7, Suit::Clubs),
        ];
        let bad = [
            card(9, Suit::Spades),
            card(8, Suit::Hearts),
            card(7, Suit::Diamonds),
        ];
        assert!(alternates_color(&good));
        assert!(!alternates_color(&bad));
    }

    #[test]
    fn test_descending_by_one() {
        let good = [card(KING, Suit::Spades), card(12, Suit::Hearts)];
        let gap = [card(KING, Suit::Spades), card(11, Suit::Hearts)];
        let rising = [card(2, Suit::Spades), card(3, Suit::Hearts)];
        assert!(is_descending_by_one(&good, DeckSize::Full));
        assert!(!is_descending_by_one(&gap, DeckSize::Full));
        assert!(!is_descending_by_one(&rising, DeckSize::Full));
    }

    #[test]
    fn test_half_deck_six_sits_on_ace() {
        let run = [card(6, Suit::Clubs), card(ACE, Suit::Hearts)];
        assert!(is_liftable(&run, DeckSize::Half));
        assert!(!is_liftable(&run, DeckSize::Full));
    }

    #[test]
    fn test_liftable_needs_both_rules() {
        let same_color = [card(7, Suit::Clubs), card(6, Suit::Spades)];
        let wrong_step = [card(7, Suit::Clubs), card(5, Suit::Hearts)];
        let good = [card(7, Suit::Clubs), card(6, Suit::Hearts)];
        assert!(!is_liftable(&same_color, DeckSize::Full));
        assert!(!is_liftable(&wrong_step, DeckSize::Full));
        assert!(is_liftable(&good, DeckSize::Full));
    }
}
