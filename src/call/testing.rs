//! Test harness for [`CallControl`] consumers.
//!
//! [`MockTransport`] records every `send_dtmf` call and can be scripted to
//! fail on the Nth send, so executor behavior around transport failures is
//! testable without a live call.

use super::{CallControl, CallError, CallHandle, TransportError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// Records sent digits; optionally fails on one send ordinal (1-based).
///
/// Sends take no simulated time, so tests under `tokio::time::pause` can
/// attribute all elapsed time to the executor's inter-group delays.
pub(crate) struct MockTransport {
    sent: Mutex<Vec<u8>>,
    tones: Mutex<Vec<Duration>>,
    fail_on_send: Option<usize>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            tones: Mutex::new(Vec::new()),
            fail_on_send: None,
        }
    }

    /// Fail the `ordinal`-th send (1-based); earlier sends succeed.
    pub(crate) fn failing_on(ordinal: usize) -> Self {
        Self {
            fail_on_send: Some(ordinal),
            ..Self::new()
        }
    }

    /// Digits passed to `send_dtmf` so far, including a failed send.
    pub(crate) fn sent(&self) -> Vec<u8> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Tone durations observed per send.
    pub(crate) fn tones(&self) -> Vec<Duration> {
        self.tones.lock().unwrap().clone()
    }
}

#[async_trait]
impl CallControl for MockTransport {
    async fn place_call(&self, target: &str) -> Result<CallHandle, CallError> {
        Ok(CallHandle::new("mock-1", target))
    }

    async fn send_dtmf(
        &self,
        handle: &CallHandle,
        digit: u8,
        tone: Duration,
    ) -> Result<(), TransportError> {
        let ordinal = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(digit);
            self.tones.lock().unwrap().push(tone);
            sent.len()
        };

        if self.fail_on_send == Some(ordinal) {
            return Err(TransportError {
                call_id: handle.id().to_string(),
                reason: format!("scripted failure on send {ordinal}"),
            });
        }
        Ok(())
    }
}
