use anyhow::{Context, Result};
use enum_iterator::all;
use log::info;
use rand::{seq::SliceRandom, thread_rng};
use solitaire_rs::games::klondike::{Action, Game, Options};
use std::env;
use std::fs;
use std::time::Instant;

const GAMES: usize = 1000;
const ACTIONS_PER_GAME: usize = 2000;

fn main() -> Result<()> {
    env_logger::init();
    let options = load_options()?;
    random_play(options);
    Ok(())
}

/// Reads table options from the JSON file named on the command line, if any.
fn load_options() -> Result<Options> {
    match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("reading options from {}", path))?;
            Options::from_json(&json).with_context(|| format!("parsing options in {}", path))
        }
        None => Ok(Options::default()),
    }
}

fn random_play(options: Options) {
    let actions: Vec<Action> = all::<Action>().collect();
    let mut rng = thread_rng();
    let mut wins = 0;

    let start = Instant::now();
    for _ in 0..GAMES {
        let mut game = Game::with_rng(options, &mut rng);
        game.no_changes = true;
        for _ in 0..ACTIONS_PER_GAME {
            let action = *actions.choose(&mut rng).expect("there is always an action");
            game.apply_action(action);
            if game.won {
                wins += 1;
                break;
            }
        }
        assert_eq!(
            game.card_count(),
            options.deck.card_count(),
            "cards were lost or duplicated"
        );
    }
    let duration = start.elapsed();

    info!("{} wins", wins);
    println!(
        "Time elapsed for {} random games ({} actions each): {:?}, wins: {}",
        GAMES, ACTIONS_PER_GAME, duration, wins
    );
}
