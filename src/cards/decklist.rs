//! Resolved decklists.
//!
//! The deck-fetching and card-lookup collaborators hand the engine an
//! ordered list of `(quantity, card)` pairs. On the wire each entry looks
//! like `{ "quantity": 4, "cardData": { ... } }`.

use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::config::MAX_DECK_SIZE;
use crate::core::error::{GameError, Result};

/// One decklist line: `quantity` copies of `card`.
///
/// The quantity is signed so that a negative count from a collaborator can
/// be rejected instead of silently wrapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub quantity: i64,
    #[serde(alias = "cardData")]
    pub card: Card,
}

impl DeckEntry {
    #[must_use]
    pub fn new(quantity: i64, card: Card) -> Self {
        Self { quantity, card }
    }
}

/// An ordered, fully resolved decklist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decklist {
    entries: Vec<DeckEntry>,
}

impl Decklist {
    #[must_use]
    pub fn new(entries: Vec<DeckEntry>) -> Self {
        Self { entries }
    }

    /// Parse a decklist from JSON.
    ///
    /// `owner` only labels the error. Malformed input is an
    /// [`GameError::InvalidDecklist`].
    pub fn from_json(owner: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::invalid_decklist(owner, e.to_string()))
    }

    /// Add an entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, quantity: i64, card: Card) -> Self {
        self.entries.push(DeckEntry::new(quantity, card));
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of cards once every entry is expanded.
    ///
    /// Negative quantities count as zero here and the sum saturates at
    /// `usize::MAX`; [`Decklist::validate`] rejects both cases.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.entries
            .iter()
            .map(|e| usize::try_from(e.quantity).unwrap_or(0))
            .fold(0, usize::saturating_add)
    }

    /// Check the decklist before anything is built from it.
    ///
    /// Rejects an empty list, negative quantities, cards with a blank id or
    /// name, lists whose quantities add up to zero cards, and lists larger
    /// than [`MAX_DECK_SIZE`].
    pub fn validate(&self, owner: &str) -> Result<()> {
        if self.entries.is_empty() {
            return Err(GameError::invalid_decklist(owner, "decklist is empty"));
        }

        let mut total: usize = 0;
        for (line, entry) in self.entries.iter().enumerate() {
            if entry.quantity < 0 {
                return Err(GameError::invalid_decklist(
                    owner,
                    format!(
                        "line {}: negative quantity {} for {}",
                        line + 1,
                        entry.quantity,
                        entry.card.name
                    ),
                ));
            }
            if entry.card.id.as_str().trim().is_empty() {
                return Err(GameError::invalid_decklist(
                    owner,
                    format!("line {}: card has no id", line + 1),
                ));
            }
            if entry.card.name.trim().is_empty() {
                return Err(GameError::invalid_decklist(
                    owner,
                    format!("line {}: card {} has no name", line + 1, entry.card.id),
                ));
            }

            total = usize::try_from(entry.quantity)
                .ok()
                .and_then(|copies| total.checked_add(copies))
                .filter(|&t| t <= MAX_DECK_SIZE)
                .ok_or_else(|| {
                    GameError::invalid_decklist(
                        owner,
                        format!("line {}: decklist exceeds {MAX_DECK_SIZE} cards", line + 1),
                    )
                })?;
        }

        if total == 0 {
            return Err(GameError::invalid_decklist(owner, "decklist has no cards"));
        }

        Ok(())
    }
}

impl FromIterator<DeckEntry> for Decklist {
    fn from_iter<I: IntoIterator<Item = DeckEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bolt() -> Card {
        Card::new("b1", "Lightning Bolt").with_type_line("Instant")
    }

    #[test]
    fn test_total_cards() {
        let deck = Decklist::default()
            .with_entry(4, bolt())
            .with_entry(0, Card::new("x", "Unused"))
            .with_entry(2, Card::new("m", "Mountain"));

        assert_eq!(deck.total_cards(), 6);
        assert!(deck.validate("p").is_ok());
    }

    #[test]
    fn test_empty_decklist_rejected() {
        let err = Decklist::default().validate("Player 1").unwrap_err();
        assert_eq!(err, GameError::invalid_decklist("Player 1", "decklist is empty"));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let deck = Decklist::default().with_entry(-1, bolt());
        let err = deck.validate("p").unwrap_err();
        assert!(matches!(err, GameError::InvalidDecklist { ref reason, .. } if reason.contains("negative quantity -1")));
    }

    #[test]
    fn test_all_zero_quantities_rejected() {
        let deck = Decklist::default().with_entry(0, bolt());
        let err = deck.validate("p").unwrap_err();
        assert_eq!(err, GameError::invalid_decklist("p", "decklist has no cards"));
    }

    #[test]
    fn test_oversized_decklist_rejected() {
        let deck = Decklist::default().with_entry(i64::MAX, bolt());
        let err = deck.validate("p").unwrap_err();
        assert!(matches!(err, GameError::InvalidDecklist { ref reason, .. } if reason.contains("exceeds")));

        let deck = Decklist::default()
            .with_entry(MAX_DECK_SIZE as i64, bolt())
            .with_entry(1, Card::new("m", "Mountain"));
        assert!(deck.validate("p").is_err());

        let deck = Decklist::default().with_entry(MAX_DECK_SIZE as i64, bolt());
        assert!(deck.validate("p").is_ok());
    }

    #[test]
    fn test_huge_quantities_do_not_overflow() {
        let json = r#"[
            { "quantity": 9223372036854775807, "cardData": { "id": "a", "name": "Alpha" } },
            { "quantity": 9223372036854775807, "cardData": { "id": "b", "name": "Beta" } },
            { "quantity": 9223372036854775807, "cardData": { "id": "c", "name": "Gamma" } }
        ]"#;
        let deck = Decklist::from_json("p", json).unwrap();

        assert_eq!(deck.total_cards(), usize::MAX);
        assert!(matches!(deck.validate("p"), Err(GameError::InvalidDecklist { .. })));
    }

    #[test]
    fn test_blank_name_rejected() {
        let deck = Decklist::default().with_entry(1, Card::new("id", "  "));
        assert!(deck.validate("p").is_err());
    }

    #[test]
    fn test_from_json_card_data_alias() {
        let json = r#"[
            { "quantity": 1, "cardData": { "id": "s", "name": "Sol Ring", "mana_cost": "{1}", "type_line": "Artifact" } },
            { "quantity": 30, "card": { "id": "f", "name": "Forest", "typeLine": "Basic Land — Forest" } }
        ]"#;

        let deck = Decklist::from_json("p", json).unwrap();
        assert_eq!(deck.entries().len(), 2);
        assert_eq!(deck.total_cards(), 31);
        assert_eq!(deck.entries()[0].card.mana_cost, "{1}");
        assert_eq!(deck.entries()[1].card.type_line, "Basic Land — Forest");
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Decklist::from_json("Player 1", r#"{"not": "a list"}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidDecklist { ref player, .. } if player == "Player 1"));
    }
}
