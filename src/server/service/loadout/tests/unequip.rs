use super::*;

/// Expect equipped gear to be removed and confirmed by the refetch
#[tokio::test]
async fn unequips_equipped_gear() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let fake = test.guild().create_fake_loadout(
        PLAYER_ID,
        vec![(1, "weapon", G101), (1, "chest", RUNNER_BOOTS)],
    );
    let state = test.app_state();

    let (after, _) = service(&state)
        .unequip(PLAYER_ID, G101, &owner())
        .await
        .unwrap();

    assert_eq!(after.slot_of(G101), None);
    assert_eq!(after.slot_of(RUNNER_BOOTS), Some(slot(1, SlotKey::Chest)));
    assert_eq!(fake.slot_of(G101), None);

    Ok(())
}

/// Expect unequipping gear that is not equipped to succeed twice with the same state and no mutation
#[tokio::test]
async fn unequip_of_unequipped_gear_is_idempotent() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_loadout_endpoints(PLAYER_ID, json!([mock_equipped(2, "helmet", IRON_HELM)]), 2)
        .build()
        .await?;
    let spy = test.guild().create_any_mutation_endpoint(PLAYER_ID, 0);
    test.track(spy);
    let state = test.app_state();
    let service = service(&state);

    let (first, access) = service
        .unequip(PLAYER_ID, KEEN_EDGE, &owner())
        .await
        .unwrap();
    let (second, _) = service
        .unequip(PLAYER_ID, KEEN_EDGE, &owner())
        .await
        .unwrap();

    assert_eq!(
        first.to_dto(access.can_edit),
        second.to_dto(access.can_edit)
    );
    assert_eq!(second.slot_of(IRON_HELM), Some(slot(2, SlotKey::Helmet)));
    test.assert_mocks();

    Ok(())
}

/// Expect gear missing from the catalog to be refused
#[tokio::test]
async fn unknown_gear_is_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_loadout_endpoints(PLAYER_ID, json!([]), 1)
        .build()
        .await?;
    let spy = test.guild().create_any_mutation_endpoint(PLAYER_ID, 0);
    test.track(spy);
    let state = test.app_state();

    let result = service(&state).unequip(PLAYER_ID, 4242, &owner()).await;

    assert!(matches!(
        result,
        Err(Error::LoadoutError(LoadoutError::GearNotFound(4242)))
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect a failed remote unequip to leave the loadout as it was
#[tokio::test]
async fn failed_unequip_is_transient() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_loadout_endpoints(PLAYER_ID, json!([mock_equipped(1, "weapon", G101)]), 1)
        .with_unequip_endpoint(PLAYER_ID, G101, 500, 1)
        .build()
        .await?;
    let state = test.app_state();

    let result = service(&state).unequip(PLAYER_ID, G101, &owner()).await;

    match result {
        Err(Error::RemoteError(err)) => assert!(err.is_transient()),
        other => panic!("expected transient remote error, got {:?}", other.map(|_| ())),
    }
    test.assert_mocks();

    Ok(())
}
