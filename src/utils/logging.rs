use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::Result;
use tracing::{debug, level_filters::LevelFilter};
use tracing_appender::rolling::Rotation;
use tracing_subscriber::{
    fmt::{format::FmtSpan, writer::MakeWriterExt},
    EnvFilter,
};

pub const CLI_PREFIX: &str = "cli";

/// Log files kept around before the oldest gets removed.
const KEPT_LOG_FILES: usize = 5;

pub fn log_dir(application_data_path: &Path) -> PathBuf {
    application_data_path.join("logs")
}

/// Level used when neither `--log` nor `RUST_LOG` asks for one.
const DEFAULT_LEVEL: &str = "debug";

/// Filter directive for the file and stdout writers. An explicit `log_level` wins over
/// `env_level` (`RUST_LOG`). A bare level only applies to this crate, a full directive such as
/// `procrastitrack=info,warn` is used as is.
fn filter_directive(log_level: Option<LevelFilter>, env_level: Option<String>) -> String {
    match (log_level, env_level.filter(|v| !v.trim().is_empty())) {
        (Some(level), _) => crate_directive(&level.to_string()),
        (None, Some(env)) if env.contains('=') => env,
        (None, Some(env)) => crate_directive(env.trim()),
        (None, None) => crate_directive(DEFAULT_LEVEL),
    }
}

fn crate_directive(level: &str) -> String {
    format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
}

/// Sends traces of this crate into daily rotated files under [log_dir] and, with `show_std`,
/// into stdout as well. Without an explicit level `RUST_LOG` is used, then `debug`.
pub fn enable_logging(
    prefix: &str,
    application_data_path: &Path,
    log_level: Option<LevelFilter>,
    show_std: bool,
) -> Result<()> {
    let dir = log_dir(application_data_path);
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(KEPT_LOG_FILES)
        .filename_prefix(prefix)
        .build(&dir)?;

    let stdout = std::io::stdout.with_filter(move |_| show_std);

    let directive = filter_directive(log_level, std::env::var("RUST_LOG").ok());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(stdout.and(appender))
        .pretty()
        .init();

    debug!("Logging into {dir:?} with {directive}");
    Ok(())
}

/// Everything this crate traces, written through the test harness.
pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(Some(LevelFilter::TRACE), None)))
        .with_test_writer()
        .pretty()
        .init()
});
