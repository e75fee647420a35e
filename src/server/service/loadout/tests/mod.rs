mod load;
mod unequip;

use guildhall_test_utils::{
    fixtures::guild::data::{
        mock_equipped, FIELD_RATION, G101, IRON_HELM, KEEN_EDGE, PLAYER_ID, RUNNER_BOOTS,
        SPLINTER_MOD, STRANGE_IDOL, TRAINING_BOW,
    },
    prelude::*,
};
use serde_json::json;

use crate::{
    model::{
        auth::ViewerDto,
        slot::{SlotKey, SlotRef},
    },
    server::{
        error::{auth::AuthError, loadout::LoadoutError, remote::RemoteError, Error},
        model::app::AppState,
        service::{access::Credentials, loadout::LoadoutService},
        util::test::TestContextExt,
    },
};

/// Session credentials of the player's owner.
fn owner() -> Credentials {
    Credentials::Session(ViewerDto {
        id: 1,
        username: "ash".to_string(),
        is_staff: false,
        player_id: Some(PLAYER_ID),
    })
}

/// Session credentials of a guild member who does not own the player.
fn member() -> Credentials {
    Credentials::Session(ViewerDto {
        id: 2,
        username: "moth".to_string(),
        is_staff: false,
        player_id: Some(PLAYER_ID + 100),
    })
}

fn slot(drifter: u8, slot: SlotKey) -> SlotRef {
    SlotRef { drifter, slot }
}

fn service(state: &AppState) -> LoadoutService<'_> {
    LoadoutService::new(&state.guild_client, &state.locks, &state.catalog)
}
