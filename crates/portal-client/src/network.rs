// crates/portal-client/src/network.rs

//! HTTP plumbing: the recurring market-data poll and order submission.
//!
//! One task owns both. The poll ticks every `poll_interval` with one
//! immediate tick at startup; each tick is awaited before the next is
//! scheduled, so polls never overlap and responses cannot arrive out
//! of order. A failed tick is logged and skipped; the next tick
//! proceeds with no backoff. Aborting the task on shutdown stops new
//! polls from being scheduled (in-flight requests are simply dropped).

use std::time::Duration;

use anyhow::{anyhow, Result};
use portal_core::{MarketSnapshot, OrderRequest, OrderResponse, SnapshotEnvelope};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::errors::ClientError;

/// Requests from the app to the network task.
#[derive(Debug)]
pub enum Command {
    SubmitOrder(OrderRequest),
}

/// Results from the network task back to the app.
#[derive(Debug)]
pub enum PortalEvent {
    Snapshot(MarketSnapshot),
    OrderAccepted(OrderResponse),
    OrderFailed(ClientError),
}

pub struct PortalConnection {
    base_url: String,
    poll_interval: Duration,
    http: reqwest::Client,
    tx: UnboundedSender<PortalEvent>,
}

impl PortalConnection {
    pub fn new(
        base_url: &str,
        poll_interval: Duration,
        tx: UnboundedSender<PortalEvent>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(PortalConnection {
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval,
            http,
            tx,
        })
    }

    pub async fn run(self, mut rx: UnboundedReceiver<Command>) {
        info!("polling {} every {:?}", self.base_url, self.poll_interval);
        let mut ticker = interval(self.poll_interval);
        // A slow poll delays later ticks instead of bunching them up.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // First tick completes immediately: the startup poll.
                _ = ticker.tick() => {
                    match self.fetch_snapshot().await {
                        Ok(snapshot) => {
                            debug!(
                                stats = snapshot.stats.len(),
                                securities = snapshot.securities.len(),
                                "market data tick"
                            );
                            let _ = self.tx.send(PortalEvent::Snapshot(snapshot));
                        }
                        // Skipped tick: diagnostic only, no retry.
                        Err(e) => warn!("market data poll skipped: {:#}", e),
                    }
                }

                cmd = rx.recv() => match cmd {
                    Some(Command::SubmitOrder(req)) => {
                        let event = match self.submit_order(&req).await {
                            Ok(resp) => PortalEvent::OrderAccepted(resp),
                            Err(e) => PortalEvent::OrderFailed(e),
                        };
                        let _ = self.tx.send(event);
                    }
                    None => break,
                },
            }
        }
    }

    async fn fetch_snapshot(&self) -> Result<MarketSnapshot> {
        let url = format!("{}/market/data/update", self.base_url);
        let envelope: SnapshotEnvelope = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        envelope.into_snapshot().map_err(|msg| anyhow!(msg))
    }

    /// Submit an order. Transport and decode problems become
    /// `Transport`; a well-formed `success: false` answer becomes
    /// `Rejected` carrying the server's message verbatim.
    async fn submit_order(&self, req: &OrderRequest) -> Result<OrderResponse, ClientError> {
        let url = format!("{}/market/order/submit", self.base_url);
        let response = self
            .http
            .post(&url)
            .form(req)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let envelope: OrderResponse = response
            .error_for_status()
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if envelope.success {
            Ok(envelope)
        } else {
            let message = envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| "Order was rejected".to_string());
            Err(ClientError::Rejected(message))
        }
    }
}
