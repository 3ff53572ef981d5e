//! Card data - immutable values handed in by the card lookup collaborator.
//!
//! A `Card` has no per-instance state in this engine, so every copy in a
//! zone is a plain clone. Field names serialize in camelCase for the
//! snapshot consumer, and deserialization also accepts the card database's
//! snake_case names (`mana_cost`, `type_line`, ...).

use serde::{Deserialize, Serialize};

/// Card identifier as issued by the card database.
///
/// Opaque to the engine. Two cards with the same id are the same printing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Image links for a card. Every size is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, alias = "art_crop", skip_serializing_if = "Option::is_none")]
    pub art_crop: Option<String>,
    #[serde(default, alias = "border_crop", skip_serializing_if = "Option::is_none")]
    pub border_crop: Option<String>,
}

/// Static card data.
///
/// Power and toughness are strings because printed values such as `*` or
/// `1+*` are not integers. Both are `None` for non-creatures.
///
/// ## Example
///
/// ```
/// use commander_table::cards::Card;
///
/// let bear = Card::new("c-1", "Grizzly Bears")
///     .with_mana_cost("{1}{G}")
///     .with_type_line("Creature — Bear")
///     .with_power_toughness("2", "2");
///
/// assert!(bear.is_creature());
/// assert_eq!(bear.power.as_deref(), Some("2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card database identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Cost string, e.g. `{2}{U}{U}`.
    #[serde(default, alias = "mana_cost")]
    pub mana_cost: String,

    #[serde(default, alias = "type_line")]
    pub type_line: String,

    /// Rules text.
    #[serde(default, alias = "oracle_text")]
    pub oracle_text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,

    #[serde(default, alias = "image_uris", skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,
}

impl Card {
    /// Create a card with only an id and a name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            mana_cost: String::new(),
            type_line: String::new(),
            oracle_text: String::new(),
            power: None,
            toughness: None,
            image_uris: None,
        }
    }

    #[must_use]
    pub fn with_mana_cost(mut self, cost: impl Into<String>) -> Self {
        self.mana_cost = cost.into();
        self
    }

    #[must_use]
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    #[must_use]
    pub fn with_oracle_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = text.into();
        self
    }

    /// Set power and toughness (creatures only).
    #[must_use]
    pub fn with_power_toughness(
        mut self,
        power: impl Into<String>,
        toughness: impl Into<String>,
    ) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    #[must_use]
    pub fn with_image_uris(mut self, uris: ImageUris) -> Self {
        self.image_uris = Some(uris);
        self
    }

    /// Does the type line name a creature?
    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.type_line.contains("Creature")
    }
}
