// src/directory/resolver.rs
use log::{debug, info, warn};
use std::fmt;
use std::time::Duration;

use crate::config::Config;
use crate::directory::fetcher::Fetch;
use crate::directory::filter::LocaleFilter;
use crate::directory::normalize::normalize;
use crate::error::{FetchError, ResolveError};
use crate::models::server::ServerRecord;
use crate::utils::{relayed_url, short_url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Direct,
    Relay { prefix: String },
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Relay { prefix } => write!(f, "relay {}", prefix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub strategy: Strategy,
}

pub struct Resolver<F> {
    fetcher: F,
    endpoints: Vec<String>,
    relays: Vec<String>,
    filter: LocaleFilter,
    timeout: Duration,
}

impl<F: Fetch> Resolver<F> {
    pub fn new(
        fetcher: F,
        endpoints: Vec<String>,
        relays: Vec<String>,
        filter: LocaleFilter,
        timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            endpoints,
            relays,
            filter,
            timeout,
        }
    }

    pub fn from_config(fetcher: F, config: &Config) -> Self {
        Self::new(
            fetcher,
            config.endpoints.clone(),
            config.relays.clone(),
            LocaleFilter::new(config.keywords.iter().cloned(), config.fallback_truncate),
            config.fetch_timeout(),
        )
    }

    /// Every attempt of one pass, in the order they are tried: all direct
    /// endpoints, then each relay over each endpoint.
    pub fn candidates(&self) -> Vec<Candidate> {
        let direct = self.endpoints.iter().map(|url| Candidate {
            url: url.clone(),
            strategy: Strategy::Direct,
        });

        let relayed = self.relays.iter().flat_map(|prefix| {
            self.endpoints.iter().map(move |url| Candidate {
                url: relayed_url(prefix, url),
                strategy: Strategy::Relay {
                    prefix: prefix.clone(),
                },
            })
        });

        direct.chain(relayed).collect()
    }

    /// Tries candidates in order and returns the first usable list.
    pub async fn resolve(&self) -> Result<Vec<ServerRecord>, ResolveError> {
        let mut last: Option<FetchError> = None;

        for candidate in self.candidates() {
            info!(
                "[{}] Trying {}",
                candidate.strategy,
                short_url(&candidate.url)
            );

            match self.attempt(&candidate).await {
                Ok(records) => {
                    info!(
                        "[{}] Resolved {} servers from {}",
                        candidate.strategy,
                        records.len(),
                        short_url(&candidate.url)
                    );
                    return Ok(records);
                }
                Err(e) => {
                    warn!("[{}] Failed: {}", candidate.strategy, e);
                    last = Some(e);
                }
            }
        }

        Err(ResolveError::AllStrategiesFailed { last })
    }

    async fn attempt(&self, candidate: &Candidate) -> Result<Vec<ServerRecord>, FetchError> {
        let payload = self.fetcher.fetch_once(&candidate.url, self.timeout).await?;
        let records = normalize(payload)?;
        let total = records.len();

        let selected = self.filter.apply(records);
        let matches = selected.iter().filter(|r| self.filter.classify(r)).count();
        debug!("Fetched {} servers, {} match the locale", total, matches);

        Ok(selected.into_iter().map(ServerRecord::from).collect())
    }
}
