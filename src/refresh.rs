// src/refresh.rs
use log::{debug, error, info};
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use crate::directory::{Fetch, Resolver};
use crate::display::{RenderSignal, Sink, Source};
use crate::fallback::sample_servers;

/// One full pass: resolve live servers, or show the sample set in demo mode.
pub async fn load_servers<F: Fetch>(resolver: &Resolver<F>, sink: &dyn Sink) -> Source {
    sink.render(RenderSignal::Loading);

    match resolver.resolve().await {
        Ok(records) if records.is_empty() => {
            sink.render(RenderSignal::NoData);
            Source::Live
        }
        Ok(records) => {
            sink.render(RenderSignal::Servers {
                records,
                source: Source::Live,
            });
            Source::Live
        }
        Err(e) => {
            error!("Failed to fetch live servers: {}", e);
            if let Some(last) = e.last_error() {
                debug!("Last candidate error: {:?}", last);
            }
            info!("Showing demo servers as fallback");

            sink.render(RenderSignal::Error(e.to_string()));
            sink.render(RenderSignal::Servers {
                records: sample_servers(),
                source: Source::Sample,
            });
            Source::Sample
        }
    }
}

/// Runs a pass now and then once per `period` until `shutdown` resolves.
/// Passes never overlap: a slow pass pushes the next one back and the ticks
/// it overran are dropped. Shutdown abandons a pass that is still running.
pub async fn run<F, S>(resolver: &Resolver<F>, sink: &dyn Sink, period: Duration, shutdown: S)
where
    F: Fetch,
    S: Future<Output = ()>,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Stopping refresh loop");
                return;
            }
            _ = ticker.tick() => {}
        }

        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Stopping refresh loop, abandoning the running pass");
                return;
            }
            source = load_servers(resolver, sink) => {
                info!("Refresh finished ({:?} data), next in {:?}", source, period);
            }
        }
    }
}
