//! Gear catalog entries.
//!
//! Gear items are immutable from the dashboard's perspective; they are owned by the remote guild
//! API and fetched as a whole catalog whenever a loadout is loaded. Type and rarity are closed
//! enumerations so slot compatibility can be checked exhaustively.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a gear item, used to decide which slots it fits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase", from = "String")]
pub enum GearType {
    Weapon,
    Armor,
    Accessory,
    Mod,
    /// Anything the remote API reports that the dashboard does not know how to equip.
    Other,
}

impl GearType {
    pub const ALL: [GearType; 5] = [
        GearType::Weapon,
        GearType::Armor,
        GearType::Accessory,
        GearType::Mod,
        GearType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Accessory => "accessory",
            Self::Mod => "mod",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for GearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known gear type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown gear type: {0:?}")]
pub struct GearTypeParseError(pub String);

impl FromStr for GearType {
    type Err = GearTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GearType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GearTypeParseError(s.to_string()))
    }
}

// Wire data is lenient: a type the dashboard does not model is still displayable, it just
// can't be equipped anywhere.
impl From<String> for GearType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(GearType::Other)
    }
}

/// Rarity tier of a gear item.
///
/// Ordering is used for display emphasis only and carries no gameplay meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Rarity {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "uncommon" => Self::Uncommon,
            "rare" => Self::Rare,
            "epic" => Self::Epic,
            "legendary" => Self::Legendary,
            _ => Self::Common,
        }
    }
}

/// A single gear catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GearDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub gear_type: GearType,
    pub rarity: Rarity,
    /// Skill or description text shown under the item name.
    #[serde(default, alias = "description")]
    pub skill: Option<String>,
    #[serde(default)]
    pub damage_pct: Option<f64>,
    #[serde(default)]
    pub defense: Option<i32>,
    #[serde(default)]
    pub health_bonus: Option<i32>,
}
