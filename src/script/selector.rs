//! Random path selection.

use super::{DialPath, ScriptCatalog};
use crate::logsink::LogSink;
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// The catalog holds no paths; there is nothing to traverse.
    #[error("path catalog is empty")]
    EmptyCatalog,
}

/// Draws one path uniformly at random from a catalog.
///
/// The RNG and log sink are injected so a run can be replayed from a fixed
/// seed and its selections audited afterward.
pub struct PathSelector<R> {
    rng: R,
    log: Arc<dyn LogSink>,
}

impl<R: Rng> PathSelector<R> {
    pub fn new(rng: R, log: Arc<dyn LogSink>) -> Self {
        Self { rng, log }
    }

    /// Pick one path uniformly from `catalog`.
    ///
    /// Records the chosen index and a rendering of the path's digit groups
    /// in the log sink before returning.
    pub fn select<'a>(
        &mut self,
        catalog: &'a ScriptCatalog,
    ) -> Result<(usize, &'a DialPath), SelectError> {
        if catalog.is_empty() {
            return Err(SelectError::EmptyCatalog);
        }

        let index = self.rng.random_range(0..catalog.len());
        let path = &catalog.paths()[index];

        self.log.append_line(&format!("Path = {index}"));
        self.log.append_line(&format!("Path: {path}"));
        info!(index, %path, "selected dial path");

        Ok((index, path))
    }
}
