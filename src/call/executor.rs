//! Sequential DTMF path executor.

use super::{CallControl, CallHandle, TransportError};
use crate::logsink::LogSink;
use crate::script::DialPath;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

/// Default hold time for each DTMF tone.
pub const DEFAULT_TONE_DURATION: Duration = Duration::from_millis(500);

/// A traversal aborted mid-path.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// A digit send failed; the traversal stopped at the recorded position.
    #[error("transport failure at group {group}, digit {digit}")]
    Transport {
        /// Index of the group being sent when the transport failed.
        group: usize,
        /// The digit whose send failed.
        digit: u8,
        #[source]
        source: TransportError,
    },
}

/// Walks a [`DialPath`] over an established call, one digit at a time.
///
/// Every digit of a group is sent back-to-back, then the group's delay is
/// slept before the next group. The first failed send aborts the traversal;
/// there is no retry and no liveness probing. The inter-group sleeps are
/// ordinary await points, so a host can cancel a long traversal by dropping
/// the future or by tearing down the call so the next send fails.
pub struct PathExecutor {
    transport: Arc<dyn CallControl>,
    tone: Duration,
    log: Arc<dyn LogSink>,
}

impl PathExecutor {
    pub fn new(transport: Arc<dyn CallControl>, log: Arc<dyn LogSink>) -> Self {
        Self {
            transport,
            tone: DEFAULT_TONE_DURATION,
            log,
        }
    }

    /// Override the tone hold time handed to the transport per digit.
    pub fn with_tone_duration(mut self, tone: Duration) -> Self {
        self.tone = tone;
        self
    }

    /// Send every group of `path` on `handle`, in order.
    pub async fn execute(&self, path: &DialPath, handle: &CallHandle) -> Result<(), ExecuteError> {
        for (group_idx, group) in path.groups().iter().enumerate() {
            for &digit in group.digits() {
                self.transport
                    .send_dtmf(handle, digit, self.tone)
                    .await
                    .map_err(|source| ExecuteError::Transport {
                        group: group_idx,
                        digit,
                        source,
                    })?;
                self.log.append_line(&format!("Send DTMF = {digit}"));
                debug!(call = handle.id(), digit, group = group_idx, "sent dtmf");
            }

            if !group.delay().is_zero() {
                debug!(
                    group = group_idx,
                    delay_ms = group.delay().as_millis() as u64,
                    "pacing menu transition"
                );
                sleep(group.delay()).await;
            }
        }

        info!(
            call = handle.id(),
            groups = path.groups().len(),
            digits = path.digit_count(),
            "path traversal complete"
        );
        Ok(())
    }
}
