// src/display/console.rs
use log::error;
use parking_lot::Mutex;
use std::io::{self, Write};

use crate::display::{sort_by_players, RenderSignal, Sink, Source};
use crate::models::server::ServerRecord;

/// Renders server cards as plain text.
pub struct ConsoleSink<W> {
    out: Mutex<W>,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_signal(out: &mut W, signal: RenderSignal) -> io::Result<()> {
        match signal {
            RenderSignal::Loading => writeln!(out, "Nalagam strežnike...")?,
            RenderSignal::NoData => {
                writeln!(out, "Trenutno ni dostopnih slovenskih strežnikov")?
            }
            RenderSignal::Error(message) => {
                writeln!(out, "⚠️ Napaka pri nalaganju strežnikov")?;
                writeln!(out, "   {}", message)?;
            }
            RenderSignal::Servers {
                mut records,
                source,
            } => {
                if source == Source::Sample {
                    writeln!(
                        out,
                        "ℹ️ Demo mode: Prikazujem primere strežnikov. Pravi podatki o strežnikih bodo na voljo kmalu."
                    )?;
                }
                sort_by_players(&mut records);
                for record in &records {
                    write_card(out, record)?;
                }
            }
        }
        out.flush()
    }
}

fn write_card<W: Write>(out: &mut W, record: &ServerRecord) -> io::Result<()> {
    let status = if record.online { "Online" } else { "Offline" };
    writeln!(out, "┌ {} [{}]", record.name, status)?;
    writeln!(out, "│ {}", record.description)?;
    writeln!(out, "│ Igralci: {}", record.player_count())?;
    writeln!(out, "└ IP: {}", record.endpoint)?;
    Ok(())
}

impl<W: Write + Send> Sink for ConsoleSink<W> {
    fn render(&self, signal: RenderSignal) {
        let mut out = self.out.lock();
        if let Err(e) = Self::write_signal(&mut *out, signal) {
            error!("Failed to render servers: {}", e);
        }
    }
}
