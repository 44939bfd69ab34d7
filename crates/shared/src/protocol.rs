//! Response envelopes of the collection service.
//!
//! Bodies look like `{"success": true, "data": {"players": [...]}}`, but the
//! envelope is owned by the service and drifts between deployments, so every
//! accessor here degrades to "no data" instead of failing.

use serde::de::DeserializeOwned;
use serde_json::Value;

pub const PLAYERS_KEY: &str = "players";
pub const PLAYER_KEY: &str = "player";
pub const TEAMS_KEY: &str = "teams";

/// Items decoded from a list envelope, plus how many malformed items were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPayload<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for ListPayload<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
        }
    }
}

fn data_field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get("data")?.get(key)
}

/// Reads `data.<key>` as a list. A missing key or a non-array value yields an
/// empty payload; individual items that fail to decode are skipped.
pub fn extract_list<T: DeserializeOwned>(body: &Value, key: &str) -> ListPayload<T> {
    let Some(Value::Array(raw_items)) = data_field(body, key) else {
        return ListPayload::default();
    };

    let mut payload = ListPayload {
        items: Vec::with_capacity(raw_items.len()),
        skipped: 0,
    };
    for raw in raw_items {
        match serde_json::from_value::<T>(raw.clone()) {
            Ok(item) => payload.items.push(item),
            Err(_) => payload.skipped += 1,
        }
    }
    payload
}

/// Reads `data.<key>` as a single record; absent or undecodable means `None`.
pub fn extract_record<T: DeserializeOwned>(body: &Value, key: &str) -> Option<T> {
    match data_field(body, key)? {
        Value::Null => None,
        raw => serde_json::from_value(raw.clone()).ok(),
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
