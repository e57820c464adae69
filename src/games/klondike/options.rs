use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use super::card::{ACE, KING};

#[derive(
    Debug, Clone, Copy, Default, Serialize, Sequence, Deserialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum DeckSize {
    #[default]
    Full,
    // 36 cards: ranks two through five are left out
    Half,
}

impl DeckSize {
    /// Ranks in play, lowest first.
    pub fn ranks(&self) -> Vec<i32> {
        match self {
            DeckSize::Full => (ACE..=KING).collect(),
            DeckSize::Half => std::iter::once(ACE).chain(6..=KING).collect(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.ranks().len() * 4
    }

    fn rung(&self, rank: i32) -> Option<usize> {
        match self {
            DeckSize::Full => (ACE..=KING).contains(&rank).then(|| (rank - ACE) as usize),
            DeckSize::Half => match rank {
                ACE => Some(0),
                6..=KING => Some((rank - 5) as usize),
                _ => None,
            },
        }
    }

    /// True when `lower` sits exactly one step under `upper` on this deck's
    /// rank ladder. In a half deck the six follows the ace.
    pub fn is_one_below(&self, lower: i32, upper: i32) -> bool {
        match (self.rung(lower), self.rung(upper)) {
            (Some(low), Some(high)) => low + 1 == high,
            _ => false,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, Serialize, Sequence, Deserialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum Delivery {
    #[default]
    One,
    Three,
}

impl Delivery {
    pub fn count(&self) -> usize {
        match self {
            Delivery::One => 1,
            Delivery::Three => 3,
        }
    }
}

/// Table settings chosen by the front end before a game starts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub deck: DeckSize,
    pub delivery: Delivery,
}

impl Options {
    pub fn from_json(json: &str) -> Result<Options, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_iterator::all;

    #[test]
    fn test_deck_sizes() {
        assert_eq!(DeckSize::Full.card_count(), 52);
        assert_eq!(DeckSize::Half.card_count(), 36);
        assert_eq!(DeckSize::Half.ranks()[..2], [ACE, 6]);
    }

    #[test]
    fn test_rank_ladder() {
        assert!(DeckSize::Full.is_one_below(ACE, 2));
        assert!(DeckSize::Full.is_one_below(12, KING));
        assert!(!DeckSize::Full.is_one_below(ACE, 6));
        assert!(!DeckSize::Full.is_one_below(5, 5));

        assert!(DeckSize::Half.is_one_below(ACE, 6));
        assert!(DeckSize::Half.is_one_below(9, 10));
        assert!(!DeckSize::Half.is_one_below(ACE, 2));
        assert!(!DeckSize::Half.is_one_below(5, 6));
    }

    #[test]
    fn test_delivery_counts() {
        let counts: Vec<usize> = all::<Delivery>().map(|d| d.count()).collect();
        assert_eq!(counts, vec![1, 3]);
    }

    #[test]
    fn test_options_from_json() {
        let options = Options::from_json(r#"{"deck": "half", "delivery": "three"}"#)
            .expect("valid options");
        assert_eq!(options.deck, DeckSize::Half);
        assert_eq!(options.delivery, Delivery::Three);

        let partial = Options::from_json(r#"{"delivery": "three"}"#).expect("valid options");
        assert_eq!(partial.deck, DeckSize::Full);

        assert!(Options::from_json(r#"{"deck": "double"}"#).is_err());
    }
}
