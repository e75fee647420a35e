//! Stateful stand-in for the equipped gear routes of the remote guild API.
//!
//! Static mocks cannot follow a sequence of equips and unequips. [`FakeEquipped`] keeps the
//! equipped records in shared memory and answers the read and mutation routes from it, so a
//! test can drive many operations and inspect the resulting records.

use std::sync::{Arc, Mutex};

use mockito::{Matcher, Request};
use serde_json::{json, Value};

use crate::{
    constant::{API_KEY_HEADER, TEST_API_KEY},
    fixtures::guild::GuildFixtures,
};

/// Shared equipped gear records of one player.
#[derive(Clone, Default)]
pub struct FakeEquipped {
    records: Arc<Mutex<Vec<(u8, String, i64)>>>,
}

impl FakeEquipped {
    /// Current `(drifter, slot, gear_id)` records.
    pub fn records(&self) -> Vec<(u8, String, i64)> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Slot currently holding `gear_id`.
    pub fn slot_of(&self, gear_id: i64) -> Option<(u8, String)> {
        self.records()
            .into_iter()
            .find(|(_, _, id)| *id == gear_id)
            .map(|(drifter, slot, _)| (drifter, slot))
    }

    fn to_json(&self) -> Vec<u8> {
        let records: Vec<Value> = self
            .records()
            .into_iter()
            .map(|(drifter, slot, gear_id)| {
                json!({ "drifter_num": drifter, "slot": slot, "gear_id": gear_id })
            })
            .collect();

        Value::Array(records).to_string().into_bytes()
    }

    /// Places gear, displacing whatever held the target slot.
    fn equip(&self, request: &Request) -> Vec<u8> {
        let body: Value = request
            .body()
            .ok()
            .and_then(|body| serde_json::from_slice(body).ok())
            .unwrap_or(Value::Null);

        let (Some(gear_id), Some(drifter), Some(slot)) = (
            body["gear_id"].as_i64(),
            body["drifter"].as_u64(),
            body["slot"].as_str(),
        ) else {
            return json!({ "success": false, "error": "malformed body" })
                .to_string()
                .into_bytes();
        };
        let drifter = drifter as u8;

        if let Ok(mut records) = self.records.lock() {
            records.retain(|(d, s, id)| *id != gear_id && !(*d == drifter && s == slot));
            records.push((drifter, slot.to_string(), gear_id));
        }

        json!({ "success": true }).to_string().into_bytes()
    }

    fn unequip(&self, request: &Request) -> Vec<u8> {
        let gear_id = request
            .path()
            .split('/')
            .rev()
            .nth(1)
            .and_then(|id| id.parse::<i64>().ok());

        if let (Some(gear_id), Ok(mut records)) = (gear_id, self.records.lock()) {
            records.retain(|(_, _, id)| *id != gear_id);
        }

        json!({ "success": true }).to_string().into_bytes()
    }
}

impl<'a> GuildFixtures<'a> {
    /// Serve the full loadout of `player_id` with equipped gear backed by a [`FakeEquipped`].
    ///
    /// Player, drifters, and catalog use the default fixtures. The mocks accept any number of
    /// calls and are not part of [`TestContext::assert_mocks`](crate::TestContext::assert_mocks).
    pub fn create_fake_loadout(
        &mut self,
        player_id: i64,
        initial: Vec<(u8, &str, i64)>,
    ) -> FakeEquipped {
        use crate::fixtures::guild::data::{mock_catalog, mock_drifters, mock_player};

        let fake = FakeEquipped {
            records: Arc::new(Mutex::new(
                initial
                    .into_iter()
                    .map(|(drifter, slot, gear_id)| (drifter, slot.to_string(), gear_id))
                    .collect(),
            )),
        };

        let server = &mut self.setup.server;
        let mut mocks = Vec::new();

        for (path, body) in [
            (format!("/players/{}", player_id), mock_player(player_id)),
            (format!("/players/{}/drifters", player_id), mock_drifters()),
            ("/gear".to_string(), mock_catalog()),
        ] {
            mocks.push(
                server
                    .mock("GET", path.as_str())
                    .match_header(API_KEY_HEADER, TEST_API_KEY)
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(body.to_string())
                    .expect_at_least(0)
                    .create(),
            );
        }

        let equipped_path = format!("/players/{}/equipped-gear", player_id);

        let reader = fake.clone();
        mocks.push(
            server
                .mock("GET", equipped_path.as_str())
                .match_header(API_KEY_HEADER, TEST_API_KEY)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body_from_request(move |_| reader.to_json())
                .expect_at_least(0)
                .create(),
        );

        let writer = fake.clone();
        mocks.push(
            server
                .mock("POST", equipped_path.as_str())
                .match_header(API_KEY_HEADER, TEST_API_KEY)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body_from_request(move |request| writer.equip(request))
                .expect_at_least(0)
                .create(),
        );

        let remover = fake.clone();
        mocks.push(
            server
                .mock(
                    "POST",
                    Matcher::Regex(format!(
                        r"^/players/{}/equipped-gear/\d+/unequip$",
                        player_id
                    )),
                )
                .match_header(API_KEY_HEADER, TEST_API_KEY)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body_from_request(move |request| remover.unequip(request))
                .expect_at_least(0)
                .create(),
        );

        self.setup.unasserted.extend(mocks);

        fake
    }
}
