use anyhow::Error;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Call target handed to the transport (whoever answers the IVR).
    pub target: String,
    /// Path script file; the built-in catalog is used when absent.
    pub script: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    /// Append-only traversal record; disabled when absent.
    pub run_log: Option<String>,
    /// Number of paths to traverse on the call.
    pub runs: u32,
    /// How long the transport holds each DTMF tone, in milliseconds.
    pub tone_duration_ms: u64,
    /// Pause after a single-digit group parsed from a script, in milliseconds.
    pub single_digit_delay_ms: u64,
    /// Settle time between call answer and the first tone, in milliseconds,
    /// so the far-end greeting can finish.
    pub settle_delay_ms: u64,
    /// Fixed RNG seed for reproducible runs; fresh entropy when absent.
    pub seed: Option<u64>,
    pub transport: TransportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: "sip:ivr@127.0.0.1".to_string(),
            script: None,
            log_level: None,
            log_file: None,
            run_log: Some("callgen-run.log".to_string()),
            runs: 1,
            tone_duration_ms: 500,
            single_digit_delay_ms: 3000,
            settle_delay_ms: 8000,
            seed: None,
            transport: TransportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum TransportConfig {
    /// In-process dry-run transport; answers after `answer_delay_ms`.
    Sim {
        #[serde(default = "default_answer_delay_ms")]
        answer_delay_ms: u64,
    },
}

fn default_answer_delay_ms() -> u64 {
    1000
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig::Sim {
            answer_delay_ms: default_answer_delay_ms(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(Error::from)
    }
}
