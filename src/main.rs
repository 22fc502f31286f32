use anyhow::Result;
use callgen::app::AppBuilder;
use callgen::config::Config;
use clap::Parser;
use std::fs::File;
use tokio::select;
use tracing::{info, level_filters::LevelFilter};

#[derive(Parser, Debug)]
#[command(version, about = "Automated IVR menu traversal tester")]
struct Cli {
    /// Path to the configuration file (TOML format)
    #[clap(long)]
    conf: Option<String>,
    /// Call target, overriding the configuration file
    #[clap(long)]
    target: Option<String>,
    /// Path script file, overriding the configuration file
    #[clap(long)]
    script: Option<String>,
    /// RNG seed for a reproducible run
    #[clap(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = cli
        .conf
        .map(|conf| Config::load(&conf).expect("Failed to load config"))
        .unwrap_or_default();
    if let Some(target) = cli.target {
        config.target = target;
    }
    if let Some(script) = cli.script {
        config.script = Some(script);
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    let mut log_fmt = tracing_subscriber::fmt();
    if let Some(ref level) = config.log_level {
        if let Ok(lv) = level.as_str().parse::<LevelFilter>() {
            log_fmt = log_fmt.with_max_level(lv);
        }
    }

    let mut _appender_guard = None;
    if let Some(ref log_file) = config.log_file {
        let file = File::create(log_file).expect("Failed to create log file");
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        _appender_guard = Some(guard);
        log_fmt.with_writer(non_blocking).try_init().ok();
    } else {
        log_fmt.try_init().ok();
    }

    let app = AppBuilder::new().config(config).build()?;

    info!("Starting callgen against {}", app.config.target);
    select! {
        result = app.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Received CTRL+C, shutting down");
        }
    }
    Ok(())
}
