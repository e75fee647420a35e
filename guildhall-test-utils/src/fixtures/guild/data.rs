//! JSON bodies served by the mock guild API.
//!
//! Fixtures are built as `serde_json::Value` so they describe the wire format directly rather
//! than the dashboard's own types.

use chrono::{Duration, Utc};
use serde_json::{json, Value};

/// Player every default fixture belongs to.
pub const PLAYER_ID: i64 = 7;
/// A player that only appears in access tests.
pub const OTHER_PLAYER_ID: i64 = 8;

/// Epic weapon used by the end-to-end loadout scenarios.
pub const G101: i64 = 101;
pub const IRON_HELM: i64 = 102;
pub const RUNNER_BOOTS: i64 = 103;
pub const FIELD_RATION: i64 = 104;
pub const KEEN_EDGE: i64 = 105;
pub const SPLINTER_MOD: i64 = 106;
pub const TRAINING_BOW: i64 = 107;
/// Catalog item whose type fits no slot.
pub const STRANGE_IDOL: i64 = 108;

/// Create a mock player record.
pub fn mock_player(player_id: i64) -> Value {
    json!({
        "id": player_id,
        "name": "Ash",
        "level": 30,
        "role": "support",
        "guild": { "id": 1, "name": "Autumn" }
    })
}

/// Create a drifter record; `None` leaves the position unassigned.
pub fn mock_drifter(ordinal: u8, name: Option<&str>) -> Value {
    match name {
        Some(name) => json!({
            "drifter_num": ordinal,
            "name": name,
            "health": 120,
            "energy": 90,
            "damage": 55,
            "defense": 30
        }),
        None => json!({ "drifter_num": ordinal, "name": null }),
    }
}

/// Drifter 1 and 2 assigned, drifter 3 unassigned.
pub fn mock_drifters() -> Value {
    json!([
        mock_drifter(1, Some("Kestrel")),
        mock_drifter(2, Some("Moth")),
        mock_drifter(3, None)
    ])
}

/// Create a gear catalog entry.
pub fn mock_gear(gear_id: i64, name: &str, gear_type: &str, rarity: &str) -> Value {
    json!({
        "id": gear_id,
        "name": name,
        "type": gear_type,
        "rarity": rarity,
        "skill": null
    })
}

/// Catalog covering every slot family plus one item that fits nowhere.
pub fn mock_catalog() -> Value {
    json!([
        {
            "id": G101,
            "name": "Stormpiercer Crossbow",
            "type": "weapon",
            "rarity": "epic",
            "skill": "Bolts chain lightning to a second target",
            "damage_pct": 12.5
        },
        {
            "id": IRON_HELM,
            "name": "Iron Helm",
            "type": "armor",
            "rarity": "common",
            "defense": 8
        },
        {
            "id": RUNNER_BOOTS,
            "name": "Runner Boots",
            "type": "armor",
            "rarity": "rare",
            "defense": 4,
            "health_bonus": 10
        },
        mock_gear(FIELD_RATION, "Field Ration", "accessory", "common"),
        {
            "id": KEEN_EDGE,
            "name": "Keen Edge",
            "type": "mod",
            "rarity": "uncommon",
            "description": "Sharpens any sword",
            "damage_pct": 3.0
        },
        mock_gear(SPLINTER_MOD, "Splinter Mod", "mod", "rare"),
        mock_gear(TRAINING_BOW, "Training Bow", "weapon", "common"),
        mock_gear(STRANGE_IDOL, "Strange Idol", "relic", "legendary")
    ])
}

/// Create an equipped gear record.
pub fn mock_equipped(drifter: u8, slot: &str, gear_id: i64) -> Value {
    json!({ "drifter_num": drifter, "slot": slot, "gear_id": gear_id })
}

/// Create a signed-in viewer.
pub fn mock_viewer(viewer_id: i64, is_staff: bool, player_id: Option<i64>) -> Value {
    json!({
        "id": viewer_id,
        "username": format!("viewer{}", viewer_id),
        "is_staff": is_staff,
        "player_id": player_id
    })
}

/// Body of a successful `POST /auth/login`.
pub fn mock_login(auth_token: &str, viewer: Value) -> Value {
    json!({ "token": auth_token, "viewer": viewer })
}

/// Profile token accepted for `player_id`, expiring in an hour.
pub fn mock_token_valid(player_id: i64) -> Value {
    json!({
        "success": true,
        "player": mock_player(player_id),
        "expires_at": (Utc::now() + Duration::hours(1)).to_rfc3339()
    })
}

/// Profile token reported as expired by the remote API.
pub fn mock_token_expired() -> Value {
    json!({
        "success": false,
        "error": "Token expired",
        "error_kind": "expired"
    })
}

/// Profile token the remote API accepts but whose expiry has already passed.
pub fn mock_token_stale(player_id: i64) -> Value {
    json!({
        "success": true,
        "player": mock_player(player_id),
        "expires_at": (Utc::now() - Duration::minutes(5)).to_rfc3339()
    })
}

/// Profile token the remote API does not recognise.
pub fn mock_token_invalid() -> Value {
    json!({
        "success": false,
        "error": "Invalid token",
        "error_kind": "invalid"
    })
}

/// Body of a remote error response.
pub fn mock_error(message: &str) -> Value {
    json!({ "success": false, "error": message })
}
