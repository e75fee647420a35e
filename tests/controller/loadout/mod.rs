mod equip;
mod get_loadout;
mod unequip;

use guildhall::{model::auth::ViewerDto, server::model::session::viewer::SessionViewer};
use guildhall_test_utils::{fixtures::guild::data::PLAYER_ID, prelude::*};

/// Signs the owner of the test player into the session.
async fn sign_in_owner(test: &TestContext) {
    let owner = ViewerDto {
        id: 1,
        username: "ash".to_string(),
        is_staff: false,
        player_id: Some(PLAYER_ID),
    };

    SessionViewer::insert(&test.session, owner, "remote-token".to_string())
        .await
        .unwrap();
}
