use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use guildhall::{
    model::{filter::TypeFilter, gear::{GearDto, GearType}},
    server::controller::gear::{get_gear, GearQuery},
};
use guildhall_test_utils::{
    fixtures::guild::data::{mock_catalog, G101, KEEN_EDGE},
    prelude::*,
};

use crate::util::{json_body, TestContextExt};

#[tokio::test]
/// Expect 200 success with every catalog entry for an empty search
async fn returns_whole_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_endpoint(mock_catalog(), 1)
        .build()
        .await?;

    let result = get_gear(State(test.app_state()), Query(GearQuery::default())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let gear: Vec<GearDto> = json_body(resp).await;
    assert_eq!(gear.len(), mock_catalog().as_array().unwrap().len());
    assert_eq!(gear[0].id, G101);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect search text to match skill descriptions within the requested type
async fn filters_by_search_and_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_endpoint(mock_catalog(), 1)
        .build()
        .await?;

    let result = get_gear(
        State(test.app_state()),
        Query(GearQuery {
            search: "SHARPENS".to_string(),
            gear_type: TypeFilter::Only(GearType::Mod),
        }),
    )
    .await;

    assert!(result.is_ok());
    let gear: Vec<GearDto> = json_body(result.unwrap().into_response()).await;
    let ids: Vec<i64> = gear.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![KEEN_EDGE]);

    Ok(())
}
