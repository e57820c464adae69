use enum_iterator::all;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use solitaire_rs::games::klondike::{
    checker, zone::resolve_index, Action, Card, DeckSize, Delivery, Game, Options, Suit,
    ZoneKind,
};
use std::collections::HashSet;

fn all_options() -> Vec<Options> {
    let mut options = vec![];
    for deck in all::<DeckSize>() {
        for delivery in all::<Delivery>() {
            options.push(Options { deck, delivery });
        }
    }
    options
}

fn every_card(game: &Game) -> Vec<Card> {
    let mut cards: Vec<Card> = game
        .board
        .zones()
        .iter()
        .flat_map(|zone| zone.rows().iter().flatten().copied())
        .collect();
    if let Some(held) = &game.held {
        cards.extend(held.cards.iter().copied());
    }
    cards
}

fn assert_invariants(game: &Game) {
    let deck = game.board.options.deck;

    let cards = every_card(game);
    let identities: HashSet<(i32, Suit)> = cards.iter().map(|c| (c.rank(), c.suit())).collect();
    assert_eq!(cards.len(), deck.card_count());
    assert_eq!(identities.len(), deck.card_count());

    let foundation = game.board.zone(ZoneKind::Foundation);
    for row in foundation.rows() {
        let ranks: Vec<i32> = row.iter().map(|c| c.rank()).collect();
        let expected: Vec<i32> = deck.ranks().into_iter().take(row.len()).collect();
        assert_eq!(ranks, expected);
        if let Some(first) = row.first() {
            assert!(row.iter().all(|c| c.suit() == first.suit() && c.face_up));
        }
    }

    let tableau = game.board.zone(ZoneKind::Tableau);
    for row in tableau.rows() {
        let first_open = row.iter().position(|c| c.face_up).unwrap_or(row.len());
        assert!(row[first_open..].iter().all(|c| c.face_up));
        assert!(checker::is_liftable(&row[first_open..], deck));
    }

    for pile in [ZoneKind::Stock, ZoneKind::Discard] {
        assert!(game.board.zone(pile).row(0).iter().all(|c| !c.face_up));
    }
    assert!(game
        .board
        .zone(ZoneKind::Waste)
        .row(0)
        .iter()
        .all(|c| c.face_up));

    for kind in all::<ZoneKind>() {
        let position = game.cursor.position(kind);
        assert!(position.row < kind.row_count());
        let length = game.board.zone(kind).row(position.row).len();
        if length == 0 {
            assert_eq!(position.card, -1);
        } else {
            assert!(resolve_index(length, position.card).is_some());
        }
    }

    if let Some(held) = &game.held {
        assert!(!held.cards.is_empty());
        assert!(checker::is_liftable(&held.cards, deck));
    }
}

#[test]
fn test_random_actions_keep_invariants() {
    let actions: Vec<Action> = all::<Action>().collect();
    for (seed, options) in all_options().into_iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        for _ in 0..5 {
            let mut game = Game::with_rng(options, &mut rng);
            assert_invariants(&game);
            for _ in 0..1500 {
                let action = *actions.choose(&mut rng).unwrap();
                game.apply_action(action);
                assert_invariants(&game);
            }
        }
    }
}

#[test]
fn test_rejected_actions_do_not_mutate() {
    let actions: Vec<Action> = all::<Action>().collect();
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = Game::with_rng(Options::default(), &mut rng);
    for _ in 0..2000 {
        let action = *actions.choose(&mut rng).unwrap();
        let before = game.clone();
        game.apply_action(action);
        let rejected = game
            .changes
            .iter()
            .flatten()
            .any(|c| c.change_type.is_rejection());
        if rejected {
            assert_eq!(game.board, before.board);
            assert_eq!(game.cursor, before.cursor);
            assert_eq!(game.held, before.held);

            // re-sending a rejected action is rejected the same way
            let again = game.clone_and_apply_action(action);
            assert_eq!(again.board, game.board);
            assert_eq!(again.changes, game.changes);
        }
    }
}

#[test]
fn test_full_stock_cycle_restores_order() {
    for options in all_options() {
        let mut game = Game::with_rng(options, &mut StdRng::seed_from_u64(17));
        let stock_before = game.board.zone(ZoneKind::Stock).row(0).to_vec();
        game.cursor.zone = ZoneKind::Stock;

        let mut deals = 0;
        while !game.board.zone(ZoneKind::Stock).is_empty(0) {
            game.apply_action(Action::Take);
            deals += 1;
            let stock = game.board.zone(ZoneKind::Stock).card_count();
            let waste = game.board.zone(ZoneKind::Waste).card_count();
            let discard = game.board.zone(ZoneKind::Discard).card_count();
            assert_eq!(stock + waste + discard, stock_before.len());
        }
        let delivery = options.delivery.count();
        assert_eq!(deals, (stock_before.len() + delivery - 1) / delivery);

        game.apply_action(Action::Take);
        assert_eq!(game.board.zone(ZoneKind::Stock).row(0), stock_before.as_slice());
        assert_invariants(&game);
    }
}

#[test]
fn test_playing_to_the_foundation_by_hand() {
    // Sends whatever can go to the foundation from the tableau and waste while
    // cycling the stock; the foundation must only ever grow in order.
    let mut game = Game::with_rng(Options::default(), &mut StdRng::seed_from_u64(2024));
    for _ in 0..200 {
        game.cursor.zone = ZoneKind::Tableau;
        for row in 0..ZoneKind::Tableau.row_count() {
            game.cursor.current_mut().row = row;
            game.cursor.current_mut().card = -1;
            game.apply_action(Action::Drop);
        }
        game.cursor.zone = ZoneKind::Waste;
        game.apply_action(Action::Drop);
        game.cursor.zone = ZoneKind::Stock;
        game.apply_action(Action::Take);
        assert_invariants(&game);
    }
    assert!(game.board.zone(ZoneKind::Foundation).card_count() <= 52);
}
