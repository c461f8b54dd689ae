// src/config.rs
use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "https://servers-frontend.fivem.net/api/servers/?limit=500",
    "https://cfx.re/api/servers/list.json",
];

pub const DEFAULT_RELAYS: &[&str] = &[
    "https://thingproxy.freeboard.io/fetch/",
    "https://api.codetabs.com/v1/proxy?quest=",
];

// "si " keeps its trailing space, otherwise it matches half the server list.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "slovenia",
    "slovenija",
    "slovenski",
    "slo",
    "si ",
    "slovenian",
    "hrvat",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Candidate sources, tried in this order
    pub endpoints: Vec<String>,
    pub relays: Vec<String>,

    // Locale filter
    pub keywords: Vec<String>,
    pub fallback_truncate: usize,

    // Timing
    pub fetch_timeout_ms: u64,
    pub refresh_interval_ms: u64,

    // Other configs
    pub run_once: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: to_owned_list(DEFAULT_ENDPOINTS),
            relays: to_owned_list(DEFAULT_RELAYS),
            keywords: to_owned_list(DEFAULT_KEYWORDS),
            fallback_truncate: 15,
            fetch_timeout_ms: 8000,
            refresh_interval_ms: 60_000, // 1 minute
            run_once: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Missing or unparsable
    /// values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            endpoints: lookup("DIRECTORY_ENDPOINTS")
                .map(|v| split_list(&v, true))
                .unwrap_or(defaults.endpoints),

            relays: lookup("RELAY_PREFIXES")
                .map(|v| split_list(&v, true))
                .unwrap_or(defaults.relays),

            keywords: lookup("LOCALE_KEYWORDS")
                .map(|v| split_list(&v, false))
                .map(|list| list.into_iter().map(|k| k.to_lowercase()).collect())
                .unwrap_or(defaults.keywords),

            fallback_truncate: lookup("FALLBACK_TRUNCATE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.fallback_truncate),

            fetch_timeout_ms: lookup("FETCH_TIMEOUT_MS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.fetch_timeout_ms),

            refresh_interval_ms: lookup("REFRESH_INTERVAL_MS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.refresh_interval_ms),

            run_once: lookup("RUN_ONCE")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.run_once),
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// Keywords are whitespace sensitive, URLs are not.
fn split_list(raw: &str, trim: bool) -> Vec<String> {
    raw.split(',')
        .map(|item| if trim { item.trim() } else { item })
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.fetch_timeout(), Duration::from_secs(8));
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.endpoints.len(), 2);
        assert_eq!(config.relays.len(), 2);
        assert!(config.keywords.contains(&"si ".to_string()));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DIRECTORY_ENDPOINTS", " http://a/list , http://b/list,"),
            ("RELAY_PREFIXES", ""),
            ("LOCALE_KEYWORDS", "HR,si "),
            ("FETCH_TIMEOUT_MS", "250"),
            ("REFRESH_INTERVAL_MS", "not a number"),
            ("RUN_ONCE", "true"),
        ]));

        assert_eq!(config.endpoints, vec!["http://a/list", "http://b/list"]);
        assert!(config.relays.is_empty());
        assert_eq!(config.keywords, vec!["hr", "si "]);
        assert_eq!(config.fetch_timeout_ms, 250);
        assert_eq!(config.refresh_interval_ms, 60_000);
        assert!(config.run_once);
    }

    #[test]
    fn test_zero_timeout_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("FETCH_TIMEOUT_MS", "0")]));
        assert_eq!(config.fetch_timeout_ms, 8000);
    }
}
