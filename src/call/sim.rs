//! Dry-run transport: answers after a fixed delay, logs every tone, never
//! fails. Lets the binary demonstrate a full traversal without any live
//! call plumbing.

use super::{CallControl, CallError, CallHandle, TransportError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::info;

/// In-process stand-in for the live-call layer.
///
/// Holds each "tone" for its duration so pacing behaves like a real call.
pub struct SimTransport {
    answer_delay: Duration,
    next_id: AtomicU64,
}

impl SimTransport {
    pub fn new(answer_delay: Duration) -> Self {
        Self {
            answer_delay,
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl CallControl for SimTransport {
    async fn place_call(&self, target: &str) -> Result<CallHandle, CallError> {
        tokio::time::sleep(self.answer_delay).await;
        let id = format!("sim-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        info!(call = %id, target, "simulated call answered");
        Ok(CallHandle::new(id, target))
    }

    async fn send_dtmf(
        &self,
        handle: &CallHandle,
        digit: u8,
        tone: Duration,
    ) -> Result<(), TransportError> {
        tokio::time::sleep(tone).await;
        info!(call = handle.id(), digit, "simulated dtmf tone");
        Ok(())
    }
}
