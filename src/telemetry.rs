use crate::config::AppConfig;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// JSON-lines trace file, overridable with `POLYGOL_TRACE_LOG`.
pub fn tracing_log_path() -> PathBuf {
    env::var("POLYGOL_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("polygol_mini_trace.jsonl"))
}

/// Install the global subscriber once; a no-op when logging is off.
pub fn init_tracing(config: &AppConfig) {
    if !config.logs_enabled() {
        return;
    }

    TRACING_INIT.get_or_init(|| {
        let path = tracing_log_path();
        let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
            return;
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_target(false)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
