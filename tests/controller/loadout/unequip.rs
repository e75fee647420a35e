use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use guildhall::{
    model::{api::UnequipRequestDto, loadout::LoadoutDto},
    server::controller::{loadout::unequip_gear, util::credentials::TokenQuery},
};
use guildhall_test_utils::{
    fixtures::guild::data::{mock_equipped, G101, IRON_HELM, PLAYER_ID},
    prelude::*,
};
use serde_json::json;

use super::sign_in_owner;
use crate::util::{json_body, TestContextExt};

#[tokio::test]
/// Expect 200 success with the gear back in the available list
async fn unequips_gear_for_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let fake = test
        .guild()
        .create_fake_loadout(PLAYER_ID, vec![(1, "helmet", IRON_HELM)]);
    sign_in_owner(&test).await;

    let result = unequip_gear(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        Query(TokenQuery::default()),
        Json(UnequipRequestDto { gear_id: IRON_HELM }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let loadout: LoadoutDto = json_body(resp).await;
    assert_eq!(loadout.slot_of(IRON_HELM), None);
    assert!(loadout.available.iter().any(|g| g.id == IRON_HELM));
    assert!(fake.records().is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 200 success without any mutation for gear that is not equipped
async fn unequipping_unequipped_gear_is_a_no_op() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_loadout_endpoints(PLAYER_ID, json!([mock_equipped(1, "helmet", IRON_HELM)]), 1)
        .build()
        .await?;
    let spy = test.guild().create_any_mutation_endpoint(PLAYER_ID, 0);
    test.track(spy);
    sign_in_owner(&test).await;

    let result = unequip_gear(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        Query(TokenQuery::default()),
        Json(UnequipRequestDto { gear_id: G101 }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let loadout: LoadoutDto = json_body(resp).await;
    assert_eq!(loadout.slot_of(G101), None);
    test.assert_mocks();

    Ok(())
}
