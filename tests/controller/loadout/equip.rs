use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use guildhall::{
    model::{
        api::{ApiErrorKind, EquipRequestDto, ErrorDto},
        loadout::LoadoutDto,
        slot::{SlotKey, SlotRef},
    },
    server::controller::{
        loadout::{equip_gear, get_loadout},
        util::credentials::TokenQuery,
    },
};
use guildhall_test_utils::{
    fixtures::guild::data::{G101, PLAYER_ID},
    prelude::*,
};
use serde_json::json;

use super::sign_in_owner;
use crate::util::{json_body, TestContextExt};

fn request(gear_id: i64, drifter: u8, slot: SlotKey) -> Json<EquipRequestDto> {
    Json(EquipRequestDto {
        gear_id,
        drifter,
        slot,
    })
}

#[tokio::test]
/// Expect 200 success with the refetched loadout showing G101 in the weapon slot
async fn equips_gear_for_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let fake = test.guild().create_fake_loadout(PLAYER_ID, Vec::new());
    sign_in_owner(&test).await;

    let result = equip_gear(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        Query(TokenQuery::default()),
        request(G101, 1, SlotKey::Weapon),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let loadout: LoadoutDto = json_body(resp).await;
    assert_eq!(
        loadout.slot_of(G101),
        Some(SlotRef {
            drifter: 1,
            slot: SlotKey::Weapon
        })
    );
    assert!(loadout.available.iter().all(|g| g.id != G101));
    assert_eq!(fake.slot_of(G101), Some((1, "weapon".to_string())));

    Ok(())
}

#[tokio::test]
/// Expect 400 with the incompatible slot category and no request to the guild API
async fn fails_for_incompatible_slot() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_loadout_endpoints(PLAYER_ID, json!([]), 1)
        .build()
        .await?;
    let spy = test.guild().create_any_mutation_endpoint(PLAYER_ID, 0);
    test.track(spy);
    sign_in_owner(&test).await;
    let state = test.app_state();

    // Load once so the catalog is known before the equip
    let load = get_loadout(
        State(state.clone()),
        test.session.clone(),
        Path(PLAYER_ID),
        Query(TokenQuery::default()),
    )
    .await;
    assert!(load.is_ok());

    let result = equip_gear(
        State(state),
        test.session.clone(),
        Path(PLAYER_ID),
        Query(TokenQuery::default()),
        request(G101, 1, SlotKey::Helmet),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.kind, Some(ApiErrorKind::IncompatibleSlot));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 access denied for an anonymous equip without any request to the guild API
async fn fails_without_credentials() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_loadout_endpoints(PLAYER_ID, json!([]), 0)
        .build()
        .await?;
    let spy = test.guild().create_any_mutation_endpoint(PLAYER_ID, 0);
    test.track(spy);

    let result = equip_gear(
        State(test.app_state()),
        test.session.clone(),
        Path(PLAYER_ID),
        Query(TokenQuery::default()),
        request(G101, 1, SlotKey::Weapon),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}
