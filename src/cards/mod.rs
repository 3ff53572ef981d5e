//! Card system: card values and resolved decklists.
//!
//! ## Key Types
//!
//! - `CardId`: Card database identifier
//! - `Card`: Immutable card data, copied by value into zones
//! - `DeckEntry` / `Decklist`: Resolved `(quantity, card)` lines for one player

pub mod decklist;
pub mod definition;

pub use decklist::{DeckEntry, Decklist};
pub use definition::{Card, CardId, ImageUris};
