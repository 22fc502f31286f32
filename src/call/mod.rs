//! Call-control seam and the DTMF path executor.
//!
//! The engine reaches the live-call layer through [`CallControl`] only:
//! place a call, send one DTMF digit. Signaling, audio devices, and call
//! liveness all stay on the far side of the trait; a dead call surfaces
//! here as a failed send, nothing more.

mod executor;
mod sim;

#[cfg(test)]
pub(crate) mod testing;

pub use executor::{ExecuteError, PathExecutor, DEFAULT_TONE_DURATION};
pub use sim::SimTransport;

use crate::config::TransportConfig;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Handle to an established call, opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallHandle {
    id: String,
    target: String,
}

impl CallHandle {
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Call placement failed; fatal to the run.
#[derive(Debug, Error)]
#[error("failed to call '{target}': {reason}")]
pub struct CallError {
    pub target: String,
    pub reason: String,
}

/// A DTMF send failed; the call is assumed unusable.
#[derive(Debug, Error)]
#[error("dtmf send failed on call {call_id}: {reason}")]
pub struct TransportError {
    pub call_id: String,
    pub reason: String,
}

/// Narrow contract to the live-call collaborator.
#[async_trait]
pub trait CallControl: Send + Sync {
    /// Place a call to `target`, returning a handle once established.
    async fn place_call(&self, target: &str) -> Result<CallHandle, CallError>;

    /// Send one DTMF digit (`0..=9`) on an established call, holding the
    /// tone for approximately `tone` before returning.
    async fn send_dtmf(
        &self,
        handle: &CallHandle,
        digit: u8,
        tone: Duration,
    ) -> Result<(), TransportError>;
}

/// Build a transport from configuration.
pub fn create_transport(config: &TransportConfig) -> Arc<dyn CallControl> {
    match config {
        TransportConfig::Sim { answer_delay_ms } => {
            Arc::new(SimTransport::new(Duration::from_millis(*answer_delay_ms)))
        }
    }
}
