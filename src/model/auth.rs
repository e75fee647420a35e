use serde::{Deserialize, Serialize};

/// Identity of a signed-in dashboard user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ViewerDto {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_staff: bool,
    /// Player record owned by this viewer, if any
    #[serde(default)]
    pub player_id: Option<i64>,
}

impl ViewerDto {
    pub fn owns(&self, player_id: i64) -> bool {
        self.player_id == Some(player_id)
    }
}

/// Staff or member login credentials
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Outcome of an access check for one player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AccessDto {
    pub player_id: i64,
    pub granted: bool,
    /// Whether the viewer is staff or the owner of the player and may edit
    pub can_edit: bool,
    /// Signed-in viewer, absent when access was granted through a profile link
    pub viewer: Option<ViewerDto>,
}
