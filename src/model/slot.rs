//! Equipment slot taxonomy.
//!
//! Every drifter has the same nine slots: five equipment slots and four mod slots. Each slot
//! accepts exactly one gear type, so compatibility is a total function over [`SlotKey`] and
//! [`GearType`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{gear::GearType, player::DrifterDto};

/// Name of an equipment position on a drifter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SlotKey {
    Weapon,
    Helmet,
    Chest,
    Boots,
    Consumable,
    Mod1,
    Mod2,
    Mod3,
    Mod4,
}

impl SlotKey {
    /// All slot keys in display order, equipment slots first.
    pub const ALL: [SlotKey; 9] = [
        SlotKey::Weapon,
        SlotKey::Helmet,
        SlotKey::Chest,
        SlotKey::Boots,
        SlotKey::Consumable,
        SlotKey::Mod1,
        SlotKey::Mod2,
        SlotKey::Mod3,
        SlotKey::Mod4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Helmet => "helmet",
            Self::Chest => "chest",
            Self::Boots => "boots",
            Self::Consumable => "consumable",
            Self::Mod1 => "mod1",
            Self::Mod2 => "mod2",
            Self::Mod3 => "mod3",
            Self::Mod4 => "mod4",
        }
    }

    pub fn is_mod(&self) -> bool {
        matches!(self, Self::Mod1 | Self::Mod2 | Self::Mod3 | Self::Mod4)
    }

    /// The only gear type this slot accepts.
    pub fn accepted_type(&self) -> GearType {
        match self {
            Self::Weapon => GearType::Weapon,
            Self::Helmet | Self::Chest | Self::Boots => GearType::Armor,
            Self::Consumable => GearType::Accessory,
            Self::Mod1 | Self::Mod2 | Self::Mod3 | Self::Mod4 => GearType::Mod,
        }
    }

    pub fn descriptor(&self) -> SlotDescriptor {
        SlotDescriptor {
            key: *self,
            accepted_type: self.accepted_type(),
            is_mod: self.is_mod(),
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown equipment slot: {0:?}")]
pub struct UnknownSlot(pub String);

impl FromStr for SlotKey {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSlot(s.to_string()))
    }
}

/// Static description of a slot as presented to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SlotDescriptor {
    pub key: SlotKey,
    pub accepted_type: GearType,
    pub is_mod: bool,
}

/// Identifies one slot across all of a player's drifters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SlotRef {
    pub drifter: u8,
    pub slot: SlotKey,
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drifter {} {}", self.drifter, self.slot)
    }
}

/// Returns the slot layout of a drifter.
///
/// The layout is identical for every drifter; see [`DrifterDto::interactive_slots`] for the
/// variant that hides slots of unassigned drifters.
pub fn slots_for(_drifter: &DrifterDto) -> [SlotDescriptor; 9] {
    SlotKey::ALL.map(|key| key.descriptor())
}

/// Whether gear of `gear_type` may be placed in `slot`.
pub fn is_compatible(slot: SlotKey, gear_type: GearType) -> bool {
    slot.accepted_type() == gear_type
}
