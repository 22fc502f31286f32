//! Run orchestration: build the catalog, place the call, walk paths.

use crate::call::{create_transport, CallControl, PathExecutor};
use crate::config::Config;
use crate::logsink::{FileLogSink, LogSink, NullLogSink};
use crate::script::{CustomerId, PathSelector, ScriptCatalog};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub struct AppBuilder {
    config: Option<Config>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<App> {
        let config = Arc::new(self.config.unwrap_or_default());

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let customer = CustomerId::generate(&mut rng);
        info!(customer = customer.value(), "customer id for this run");

        let sink: Arc<dyn LogSink> = match config.run_log {
            Some(ref path) => {
                Arc::new(FileLogSink::create(path).context("failed to open run log")?)
            }
            None => Arc::new(NullLogSink),
        };

        let catalog = match config.script {
            Some(ref path) => ScriptCatalog::from_file(
                path,
                customer,
                Duration::from_millis(config.single_digit_delay_ms),
            )?,
            None => ScriptCatalog::builtin(customer),
        };

        let transport = create_transport(&config.transport);
        let selector = PathSelector::new(rng, sink.clone());
        let executor = PathExecutor::new(transport.clone(), sink)
            .with_tone_duration(Duration::from_millis(config.tone_duration_ms));

        Ok(App {
            config,
            catalog,
            selector,
            executor,
            transport,
            token: CancellationToken::new(),
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One configured run: a call plus `runs` random path traversals over it.
pub struct App {
    pub config: Arc<Config>,
    catalog: ScriptCatalog,
    selector: PathSelector<StdRng>,
    executor: PathExecutor,
    transport: Arc<dyn CallControl>,
    token: CancellationToken,
}

impl App {
    /// Token an embedder can cancel to stop between (or during) traversals.
    pub fn cancel_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Place the call and traverse the configured number of random paths.
    ///
    /// A transport failure ends the run with an error; the far end is
    /// assumed gone. Selection and parse errors surface unchanged.
    pub async fn run(mut self) -> Result<()> {
        let handle = self.transport.place_call(&self.config.target).await?;
        info!(call = handle.id(), target = %self.config.target, "call established");

        // Let the far-end greeting finish before the first tone.
        tokio::time::sleep(Duration::from_millis(self.config.settle_delay_ms)).await;

        for run in 0..self.config.runs {
            if self.token.is_cancelled() {
                warn!(run, "cancelled before traversal");
                return Ok(());
            }

            let (index, path) = self.selector.select(&self.catalog)?;
            info!(run, index, "starting traversal");

            tokio::select! {
                _ = self.token.cancelled() => {
                    warn!(run, index, "cancelled mid-traversal");
                    return Ok(());
                }
                result = self.executor.execute(path, &handle) => {
                    result.with_context(|| format!("traversal of path {index} failed"))?;
                }
            }
        }

        info!(runs = self.config.runs, "all traversals complete");
        Ok(())
    }
}
