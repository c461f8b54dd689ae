// src/error.rs
use reqwest::StatusCode;

/// A single candidate failed. The resolver logs these and moves on.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {0}")]
    Http(StatusCode),
    #[error("invalid JSON: {0}")]
    Parse(String),
    #[error("no servers in response")]
    EmptyResult,
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::Http(status)
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error(
        "all directory strategies failed, using demo mode. Details: {}",
        describe(.last)
    )]
    AllStrategiesFailed { last: Option<FetchError> },
}

fn describe(last: &Option<FetchError>) -> String {
    last.as_ref()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

impl ResolveError {
    pub fn last_error(&self) -> Option<&FetchError> {
        match self {
            Self::AllStrategiesFailed { last } => last.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FetchError::Http(StatusCode::BAD_GATEWAY).to_string(),
            "HTTP 502 Bad Gateway"
        );

        let err = ResolveError::AllStrategiesFailed {
            last: Some(FetchError::Timeout),
        };
        assert!(err.to_string().ends_with("Details: request timed out"));
        assert!(matches!(err.last_error(), Some(FetchError::Timeout)));

        let err = ResolveError::AllStrategiesFailed { last: None };
        assert!(err.to_string().ends_with("Details: unknown"));
    }
}
