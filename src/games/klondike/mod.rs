pub mod board;
pub mod card;
pub mod change;
pub mod checker;
pub mod cursor;
pub mod game;
pub mod options;
pub mod zone;

// Re-export the main types
pub use board::Board;
pub use card::{Card, Color, Suit};
pub use change::{Change, ChangeType};
pub use cursor::{Cursor, Position};
pub use game::{Action, Focus, Game, Held};
pub use options::{DeckSize, Delivery, Options};
pub use zone::{Zone, ZoneKind};
