// src/models/server.rs
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_NAME: &str = "Unknown Server";
pub const DEFAULT_DESCRIPTION: &str = "FiveM Role-Playing Server";
pub const DEFAULT_MAX_PLAYERS: u32 = 128;

/// The `Data` block of a directory entry. Every field may be missing, and a
/// field of the wrong type is treated as missing without touching the others.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawServerData {
    #[serde(default, deserialize_with = "lenient")]
    pub server: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub locale: Option<String>,
    // A count on some directories, the list of connected players on others.
    #[serde(default, deserialize_with = "player_count")]
    pub players: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub clients: Option<u32>,
    #[serde(default, rename = "maxClients", deserialize_with = "lenient")]
    pub max_clients: Option<u32>,
}

/// One entry as the directory sends it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawServer {
    #[serde(default, rename = "Data", deserialize_with = "lenient")]
    pub data: Option<RawServerData>,
    #[serde(default, rename = "EndPoint", deserialize_with = "lenient")]
    pub endpoint: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn player_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().map(|n| n.min(u32::MAX as u64) as u32),
        Value::Array(players) => Some(players.len() as u32),
        _ => None,
    };
    Ok(count)
}

impl RawServer {
    /// Entries that don't match the expected shape are kept as empty records,
    /// so counts and ordering follow what the directory returned.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.server.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.description.as_deref())
    }

    pub fn locale(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.locale.as_deref())
    }

    pub fn players(&self) -> Option<u32> {
        self.data.as_ref().and_then(|d| d.players)
    }

    pub fn clients(&self) -> Option<u32> {
        self.data.as_ref().and_then(|d| d.clients)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRecord {
    pub name: String,
    pub description: String,
    pub locale: String,
    pub current_players: u32,
    pub max_players: u32,
    pub endpoint: String,
    pub online: bool,
}

impl ServerRecord {
    pub fn player_count(&self) -> String {
        format!("{}/{}", self.current_players, self.max_players)
    }
}

impl From<RawServer> for ServerRecord {
    fn from(raw: RawServer) -> Self {
        let online = raw.players().or(raw.clients()).is_some();
        let endpoint = raw.endpoint.clone().unwrap_or_default();
        let data = raw.data.unwrap_or_default();

        // Empty strings and zero counts fall back like missing ones.
        Self {
            name: data
                .server
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            description: data
                .description
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            locale: data.locale.unwrap_or_default(),
            current_players: data.players.or(data.clients).unwrap_or(0),
            max_players: data
                .max_clients
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_PLAYERS),
            endpoint,
            online,
        }
    }
}
