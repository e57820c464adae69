use colored::Colorize;
use std::io;

use solitaire_rs::games::klondike::{
    Action, Card, ChangeType, Color, Game, Options, ZoneKind,
};

pub fn get_input(prompt: &str) -> String {
    println!("{}", prompt);
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(_goes_into_input_above) => {}
        Err(_no_updates_is_fine) => {}
    }
    input.trim().to_string()
}

fn print_card(card: &Card) -> String {
    if !card.face_up {
        return "##".dimmed().to_string();
    }
    let rank = match card.rank() {
        1 => "A".to_string(),
        10 => "T".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        value => value.to_string(),
    };
    let string = format!("{}{}", rank, &card.suit().name()[..1]);
    match card.color() {
        Color::Red => string.red().to_string(),
        Color::Black => string.bold().to_string(),
    }
}

fn display_game(game: &Game) {
    for zone in game.board.zones() {
        let kind = zone.kind();
        for (row, cards) in zone.rows().iter().enumerate() {
            let focused = game.cursor.zone == kind && game.cursor.position(kind).row == row;
            let marker = if focused { ">" } else { " " };
            let label = if kind.has_rows() {
                format!("{} {}", kind.name(), row + 1)
            } else {
                kind.name().to_string()
            };
            println!(
                "{} {:<12} {}",
                marker,
                label,
                cards.iter().map(print_card).collect::<Vec<_>>().join(" ")
            );
        }
    }
    if let Some(held) = &game.held {
        println!(
            "  {:<12} {}",
            "in hand",
            held.cards.iter().map(print_card).collect::<Vec<_>>().join(" ")
        );
    }
    println!("---");
}

fn narrate(game: &Game) {
    for change in game.changes.iter().flatten() {
        match change.change_type {
            ChangeType::Focus | ChangeType::GameOver => {
                if let Some(message) = &change.message {
                    println!("{}", message.green());
                }
            }
            kind if kind.is_rejection() => println!("{}", format!("{:?}", kind).yellow()),
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    let mut game = Game::with_options(Options::default());
    game.cursor.zone = ZoneKind::Tableau;

    loop {
        display_game(&game);
        let input = get_input(
            "w/s zone, a/d column, q/e card, t take, f to foundation, n new game, x quit",
        );
        let action = match input.as_str() {
            "w" => Action::ZoneUp,
            "s" => Action::ZoneDown,
            "d" => Action::RowUp,
            "a" => Action::RowDown,
            "q" => Action::CardUp,
            "e" => Action::CardDown,
            "t" => Action::Take,
            "f" => Action::Drop,
            "n" => {
                game.new_game(&mut rand::thread_rng());
                continue;
            }
            "x" => break,
            _ => continue,
        };
        game.apply_action(action);
        narrate(&game);
        if game.won {
            display_game(&game);
            break;
        }
    }
}
