// src/display/mod.rs
pub mod console;

use crate::models::server::ServerRecord;

pub use console::ConsoleSink;

/// Where the records on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Live,
    Sample,
}

/// Everything a pass can ask the render target to show. Each signal replaces
/// whatever was shown before.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderSignal {
    Loading,
    Servers {
        records: Vec<ServerRecord>,
        source: Source,
    },
    Error(String),
    NoData,
}

pub trait Sink: Send + Sync {
    fn render(&self, signal: RenderSignal);
}

/// Most players first. Stable, so equal counts keep resolver order.
pub fn sort_by_players(records: &mut [ServerRecord]) {
    records.sort_by(|a, b| b.current_players.cmp(&a.current_players));
}
