// src/directory/filter.rs
use crate::models::server::RawServer;

/// Keyword heuristic for picking out servers of one locale.
#[derive(Debug, Clone)]
pub struct LocaleFilter {
    keywords: Vec<String>,
    truncate: usize,
}

impl LocaleFilter {
    pub fn new<I, S>(keywords: I, truncate: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
            truncate,
        }
    }

    pub fn classify(&self, record: &RawServer) -> bool {
        let text = format!(
            "{} {} {}",
            record.name().unwrap_or(""),
            record.description().unwrap_or(""),
            record.locale().unwrap_or("")
        )
        .to_lowercase();

        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }

    /// Matching records in order, or the head of the unfiltered list if
    /// nothing matched.
    pub fn apply(&self, records: Vec<RawServer>) -> Vec<RawServer> {
        let matched: Vec<RawServer> = records
            .iter()
            .filter(|r| self.classify(r))
            .cloned()
            .collect();

        if matched.is_empty() {
            records.into_iter().take(self.truncate).collect()
        } else {
            matched
        }
    }
}
