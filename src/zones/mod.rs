//! Zone system for card locations.
//!
//! Each player owns a library, hand, graveyard, battlefield and exile.
//! Only the library and hand are touched by this engine; the other three
//! are carried so that counts stay honest as the game grows.
//!
//! ## Key Types
//!
//! - `ZoneId`: Which zone
//! - `ZoneManager`: One player's zones and the moves between them

pub mod manager;

pub use manager::{build_library, ZoneId, ZoneManager};
