// src/directory/normalize.rs
use serde_json::{Map, Value};

use crate::error::FetchError;
use crate::models::server::RawServer;

/// The response shapes the directories are known to produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `[ {...}, ... ]`
    Bare(Vec<Value>),
    /// `{ "servers": [ ... ] }`
    Servers(Vec<Value>),
    /// `{ "data": [ ... ] }`
    Data(Vec<Value>),
}

impl Payload {
    /// Picks the first matching shape, in declaration order. Anything else has
    /// nothing we can show and counts as an empty result.
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        match value {
            Value::Array(items) => Ok(Self::Bare(items)),
            Value::Object(mut fields) => {
                if let Some(items) = take_array(&mut fields, "servers") {
                    Ok(Self::Servers(items))
                } else if let Some(items) = take_array(&mut fields, "data") {
                    Ok(Self::Data(items))
                } else {
                    Err(FetchError::EmptyResult)
                }
            }
            _ => Err(FetchError::EmptyResult),
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Bare(items) | Self::Servers(items) | Self::Data(items) => items,
        }
    }
}

fn take_array(fields: &mut Map<String, Value>, key: &str) -> Option<Vec<Value>> {
    match fields.remove(key) {
        Some(Value::Array(items)) => Some(items),
        _ => None,
    }
}

pub fn normalize(payload: Value) -> Result<Vec<RawServer>, FetchError> {
    let items = Payload::from_value(payload)?.into_items();
    if items.is_empty() {
        return Err(FetchError::EmptyResult);
    }

    Ok(items.into_iter().map(RawServer::from_value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries() -> Value {
        json!([
            { "EndPoint": "a:1", "Data": { "server": "Slo RP", "players": 10 } },
            { "EndPoint": "b:2", "Data": { "server": "US RP" } },
        ])
    }

    #[test]
    fn test_all_shapes_yield_same_records() {
        let bare = normalize(entries()).unwrap();
        let servers = normalize(json!({ "servers": entries() })).unwrap();
        let data = normalize(json!({ "data": entries(), "total": 2 })).unwrap();

        assert_eq!(bare.len(), 2);
        assert_eq!(bare, servers);
        assert_eq!(bare, data);
        assert_eq!(bare[0].name(), Some("Slo RP"));
        assert_eq!(bare[1].endpoint.as_deref(), Some("b:2"));
    }

    #[test]
    fn test_servers_takes_priority_over_data() {
        let payload = json!({
            "servers": [{ "EndPoint": "from-servers:1" }],
            "data": [{ "EndPoint": "from-data:1" }],
        });
        let records = normalize(payload).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].endpoint.as_deref(), Some("from-servers:1"));
    }

    #[test]
    fn test_non_array_servers_field_falls_through_to_data() {
        let payload = json!({ "servers": 3, "data": [{ "EndPoint": "x:1" }] });
        assert!(matches!(Payload::from_value(payload), Ok(Payload::Data(_))));
    }

    #[test]
    fn test_empty_results() {
        for payload in [
            json!([]),
            json!({ "servers": [] }),
            json!({ "servers": [], "data": [{ "EndPoint": "x:1" }] }),
            json!({ "data": [] }),
            json!({ "error": "rate limited" }),
            json!("text"),
            json!(null),
        ] {
            assert!(
                matches!(normalize(payload.clone()), Err(FetchError::EmptyResult)),
                "{payload} should be empty"
            );
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let payload = json!({ "servers": entries() });
        assert_eq!(normalize(payload.clone()).unwrap(), normalize(payload).unwrap());
    }

    #[test]
    fn test_unexpected_entries_are_kept() {
        let records = normalize(json!([1, { "EndPoint": "a:1" }])).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], RawServer::default());
    }
}
