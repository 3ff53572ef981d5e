//! Per-player zone storage and the moves between zones.
//!
//! A `ZoneManager` owns one player's cards. It supports:
//! - Building a library from a decklist
//! - Shuffling the library
//! - Drawing from the top of the library into the hand
//!
//! Cards never enter or leave a manager after construction, they only move
//! between its zones, so [`ZoneManager::total_cards`] is constant.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Decklist};
use crate::core::error::Result;
use crate::core::rng::GameRng;

/// The zones each player owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneId {
    Library,
    Hand,
    Graveyard,
    Battlefield,
    Exile,
}

impl ZoneId {
    /// Every zone, in display order.
    pub const ALL: [ZoneId; 5] = [
        ZoneId::Library,
        ZoneId::Hand,
        ZoneId::Graveyard,
        ZoneId::Battlefield,
        ZoneId::Exile,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ZoneId::Library => "library",
            ZoneId::Hand => "hand",
            ZoneId::Graveyard => "graveyard",
            ZoneId::Battlefield => "battlefield",
            ZoneId::Exile => "exile",
        }
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Expand a decklist into library contents.
///
/// Each entry becomes `quantity` independent copies of its card, in decklist
/// order. A zero quantity contributes nothing; an empty or malformed list is
/// rejected before anything is built.
pub fn build_library(owner: &str, decklist: &Decklist) -> Result<Vec<Card>> {
    decklist.validate(owner)?;

    let mut library = Vec::with_capacity(decklist.total_cards());
    for entry in decklist.entries() {
        // validate() rejected negative quantities and bounded the total
        let copies = usize::try_from(entry.quantity).unwrap_or(0);
        library.extend(std::iter::repeat(&entry.card).take(copies).cloned());
    }
    Ok(library)
}

/// One player's zones.
///
/// The library is a stack: index 0 is the bottom, the last index is the top.
/// The hand keeps draw order, most recent draw last.
///
/// ## Usage
///
/// ```
/// use commander_table::cards::Card;
/// use commander_table::core::GameRng;
/// use commander_table::zones::{ZoneId, ZoneManager};
///
/// let cards = (0..10).map(|i| Card::new(format!("c{i}"), format!("Card {i}"))).collect();
/// let mut zones = ZoneManager::with_library(cards);
/// zones.shuffle_library(&mut GameRng::new(42));
///
/// assert_eq!(zones.draw(3), 3);
/// assert_eq!(zones.zone_size(ZoneId::Hand), 3);
/// assert_eq!(zones.zone_size(ZoneId::Library), 7);
/// assert_eq!(zones.total_cards(), 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneManager {
    library: Vec<Card>,
    hand: Vec<Card>,
    graveyard: Vec<Card>,
    battlefield: Vec<Card>,
    exile: Vec<Card>,
}

impl ZoneManager {
    /// Create a manager whose library holds `library`, last element on top.
    #[must_use]
    pub fn with_library(library: Vec<Card>) -> Self {
        Self {
            library,
            ..Self::default()
        }
    }

    /// Cards in a zone. Ordered zones come back in their order.
    #[must_use]
    pub fn cards(&self, zone: ZoneId) -> &[Card] {
        match zone {
            ZoneId::Library => &self.library,
            ZoneId::Hand => &self.hand,
            ZoneId::Graveyard => &self.graveyard,
            ZoneId::Battlefield => &self.battlefield,
            ZoneId::Exile => &self.exile,
        }
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: ZoneId) -> usize {
        self.cards(zone).len()
    }

    /// Cards across every zone.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        ZoneId::ALL.iter().map(|&z| self.zone_size(z)).sum()
    }

    /// The card that would be drawn next.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.library.last()
    }

    /// Shuffle the library in place.
    pub fn shuffle_library(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.library);
    }

    /// Move the top library card to the end of the hand.
    ///
    /// Returns the drawn card, or `None` when the library is empty.
    pub fn draw_one(&mut self) -> Option<&Card> {
        let card = self.library.pop()?;
        self.hand.push(card);
        self.hand.last()
    }

    /// Draw up to `n` cards, one at a time.
    ///
    /// Draws past the bottom of the library are skipped. Returns how many
    /// cards actually moved.
    pub fn draw(&mut self, n: usize) -> usize {
        let mut drawn = 0;
        for _ in 0..n {
            if self.draw_one().is_none() {
                break;
            }
            drawn += 1;
        }
        drawn
    }
}
