use serde::{Deserialize, Serialize};

use crate::model::slot::{slots_for, SlotDescriptor};

/// Number of drifter positions every player has.
pub const DRIFTER_COUNT: u8 = 3;

pub const DEFAULT_HEALTH: i32 = 100;
pub const DEFAULT_ENERGY: i32 = 100;
pub const DEFAULT_DAMAGE: i32 = 50;
pub const DEFAULT_DEFENSE: i32 = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase", from = "String")]
pub enum GameRole {
    Tank,
    Damage,
    Support,
    Healer,
    Unknown,
}

impl From<String> for GameRole {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tank" => Self::Tank,
            "damage" | "dps" => Self::Damage,
            "support" => Self::Support,
            "healer" => Self::Healer,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GuildRefDto {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlayerDto {
    pub id: i64,
    pub name: String,
    pub level: u32,
    pub role: GameRole,
    #[serde(default)]
    pub guild: Option<GuildRefDto>,
}

/// A drifter position as reported by the remote API.
///
/// Missing stats fall back to the defaults exposed by [`DrifterDto::stats`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DrifterDto {
    #[serde(alias = "drifter_num")]
    pub ordinal: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub health: Option<i32>,
    #[serde(default)]
    pub energy: Option<i32>,
    #[serde(default)]
    pub damage: Option<i32>,
    #[serde(default)]
    pub defense: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DrifterStats {
    pub health: i32,
    pub energy: i32,
    pub damage: i32,
    pub defense: i32,
}

impl DrifterDto {
    pub fn unassigned(ordinal: u8) -> Self {
        Self {
            ordinal,
            name: None,
            health: None,
            energy: None,
            damage: None,
            defense: None,
        }
    }

    /// A drifter with no name (or a blank one) occupies its position without a character.
    pub fn is_assigned(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "unassigned",
        }
    }

    pub fn stats(&self) -> DrifterStats {
        DrifterStats {
            health: self.health.unwrap_or(DEFAULT_HEALTH),
            energy: self.energy.unwrap_or(DEFAULT_ENERGY),
            damage: self.damage.unwrap_or(DEFAULT_DAMAGE),
            defense: self.defense.unwrap_or(DEFAULT_DEFENSE),
        }
    }

    /// Slots a viewer may interact with; unassigned drifters expose none.
    pub fn interactive_slots(&self) -> Vec<SlotDescriptor> {
        if self.is_assigned() {
            slots_for(self).to_vec()
        } else {
            Vec::new()
        }
    }
}
