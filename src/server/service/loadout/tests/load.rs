use super::*;

/// Expect the loadout and access of the owner, with drifters in ordinal order
#[tokio::test]
async fn loads_loadout_for_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_loadout_endpoints(
            PLAYER_ID,
            json!([mock_equipped(1, "weapon", G101), mock_equipped(2, "mod1", KEEN_EDGE)]),
            1,
        )
        .build()
        .await?;
    let state = test.app_state();

    let (loadout, access) = service(&state)
        .load_player_loadout(PLAYER_ID, &owner())
        .await
        .unwrap();

    assert!(access.can_edit);
    assert_eq!(loadout.player().id, PLAYER_ID);
    assert_eq!(loadout.drifters().len(), 3);
    assert_eq!(loadout.slot_of(G101), Some(slot(1, SlotKey::Weapon)));
    assert_eq!(loadout.slot_of(KEEN_EDGE), Some(slot(2, SlotKey::Mod1)));
    assert!(!loadout.drifters()[2].is_assigned());
    test.assert_mocks();

    Ok(())
}

/// Expect a player unknown to the remote API to be reported as not found
#[tokio::test]
async fn missing_player_is_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.guild().create_player_status_endpoint(PLAYER_ID, 404, 1);
    test.track(mock);
    let state = test.app_state();

    let result = service(&state)
        .load_player_loadout(PLAYER_ID, &owner())
        .await;

    assert!(matches!(
        result,
        Err(Error::LoadoutError(LoadoutError::PlayerNotFound(PLAYER_ID)))
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect access to be checked before any loadout data is fetched
#[tokio::test]
async fn denies_before_fetching() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_loadout_endpoints(PLAYER_ID, json!([]), 0)
        .build()
        .await?;
    let state = test.app_state();

    let result = service(&state)
        .load_player_loadout(PLAYER_ID, &Credentials::None)
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::AccessDenied(PLAYER_ID)))
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect a remote server error to surface as a transient failure
#[tokio::test]
async fn server_error_is_transient() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.guild().create_player_status_endpoint(PLAYER_ID, 503, 1);
    test.track(mock);
    let state = test.app_state();

    let result = service(&state)
        .load_player_loadout(PLAYER_ID, &owner())
        .await;

    match result {
        Err(Error::RemoteError(err)) => assert!(err.is_transient()),
        other => panic!("expected transient remote error, got {:?}", other.map(|_| ())),
    }
    test.assert_mocks();

    Ok(())
}

/// Expect a read failing once with a server error to succeed on the next attempt
#[tokio::test]
async fn retries_transient_reads() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/gear")
                .with_status(502)
                .expect(1)
                .create()
        })
        .with_loadout_endpoints(PLAYER_ID, json!([]), 1)
        .build()
        .await?;
    let state = AppState::from(test.retrying_guild_client(2));

    let result = service(&state)
        .load_player_loadout(PLAYER_ID, &owner())
        .await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Expect remote records placing one gear item twice to be rejected as inconsistent
#[tokio::test]
async fn rejects_inconsistent_remote_state() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_loadout_endpoints(
            PLAYER_ID,
            json!([mock_equipped(1, "weapon", G101), mock_equipped(2, "weapon", G101)]),
            1,
        )
        .build()
        .await?;
    let state = test.app_state();

    let result = service(&state)
        .load_player_loadout(PLAYER_ID, &owner())
        .await;

    assert!(matches!(
        result,
        Err(Error::LoadoutError(LoadoutError::InconsistentState(_)))
    ));

    Ok(())
}
