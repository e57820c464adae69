use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

pub const ACE: i32 = 1;
pub const JACK: i32 = 11;
pub const QUEEN: i32 = 12;
pub const KING: i32 = 13;

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
pub enum Suit {
    #[default]
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    pub fn color(&self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

/// A playing card. Rank and suit are fixed when the deck is built; only the
/// face-up flag changes while the card travels between zones.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    rank: i32,
    suit: Suit,
    pub face_up: bool,
}

impl Card {
    pub fn new(rank: i32, suit: Suit) -> Card {
        if !(ACE..=KING).contains(&rank) {
            panic!("card rank {} is outside ace..king", rank);
        }
        Card {
            rank,
            suit,
            face_up: false,
        }
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    pub fn is_king(&self) -> bool {
        self.rank == KING
    }

    pub fn rank_name(&self) -> String {
        match self.rank {
            ACE => "ace".to_string(),
            JACK => "jack".to_string(),
            QUEEN => "queen".to_string(),
            KING => "king".to_string(),
            value => value.to_string(),
        }
    }

    pub fn name(&self) -> String {
        format!("{} of {}", self.rank_name(), self.suit.name())
    }
}
