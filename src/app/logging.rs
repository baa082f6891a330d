use crate::config::AppConfig;
use chrono::{SecondsFormat, Utc};
use std::{
    env, fs,
    io::Write,
    panic,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, OnceLock,
    },
};

const LOG_MAX_BYTES: u64 = 2 * 1024 * 1024;
const CRASH_LOG_MAX_BYTES: u64 = 128 * 1024;
static LOG_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_CONTENT_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_STATE: OnceLock<Mutex<Option<LogWriter>>> = OnceLock::new();

/// Debug log; the terminal belongs to the UI so nothing goes to stderr.
pub fn log_file_path() -> PathBuf {
    env::temp_dir().join("polygol_mini.log")
}

/// Crash log (location only unless content logging is on).
pub fn crash_log_path() -> PathBuf {
    env::temp_dir().join("polygol_mini_crash.log")
}

/// Append-only file that truncates itself once it would pass `max_bytes`.
struct LogWriter {
    path: PathBuf,
    file: fs::File,
    max_bytes: u64,
    bytes_written: u64,
}

impl LogWriter {
    fn open(path: &Path, max_bytes: u64) -> Option<Self> {
        let mut bytes_written = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        if bytes_written > max_bytes {
            let _ = fs::remove_file(path);
            bytes_written = 0;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()?;
        Some(Self {
            path: path.to_path_buf(),
            file,
            max_bytes,
            bytes_written,
        })
    }

    fn write_line(&mut self, line: &str) {
        let len = line.len() as u64;
        if self.bytes_written.saturating_add(len) > self.max_bytes {
            if let Ok(file) = fs::File::create(&self.path) {
                self.file = file;
                self.bytes_written = 0;
            }
        }
        if self.file.write_all(line.as_bytes()).is_ok() {
            self.bytes_written = self.bytes_written.saturating_add(len);
        }
    }
}

fn log_state() -> &'static Mutex<Option<LogWriter>> {
    LOG_STATE.get_or_init(|| Mutex::new(None))
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn set_enabled(enabled: bool, content_enabled: bool) {
    LOG_ENABLED.store(enabled, Ordering::Relaxed);
    LOG_CONTENT_ENABLED.store(enabled && content_enabled, Ordering::Relaxed);
    let mut writer = log_state()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *writer = if enabled {
        LogWriter::open(&log_file_path(), LOG_MAX_BYTES)
    } else {
        None
    };
}

/// Turn file logging on or off from the parsed flags.
pub fn init_logging(config: &AppConfig) {
    set_enabled(config.logs_enabled(), config.log_content);
}

pub fn log_debug(msg: &str) {
    if !LOG_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let line = format!("[{}] {msg}\n", timestamp());
    let mut writer = log_state()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(writer) = writer.as_mut() {
        writer.write_line(&line);
    }
}

/// For messages that carry user-entered text (wallpaper URLs).
pub fn log_debug_content(msg: &str) {
    if !LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    log_debug(msg);
}

pub fn log_panic(info: &panic::PanicHookInfo<'_>) {
    if !LOG_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let location = info
        .location()
        .map(|loc| format!("{}:{}", loc.file(), loc.line()))
        .unwrap_or_else(|| "unknown".to_string());
    let payload = if LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        info.payload()
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string())
    } else {
        "payload omitted".to_string()
    };
    let line = format!(
        "[{}] panic at {location}: {payload} (v{})\n",
        timestamp(),
        env!("CARGO_PKG_VERSION")
    );
    if let Some(mut writer) = LogWriter::open(&crash_log_path(), CRASH_LOG_MAX_BYTES) {
        writer.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log(name: &str) -> PathBuf {
        env::temp_dir().join(format!("polygol_log_{name}_{}.log", std::process::id()))
    }

    #[test]
    fn writer_truncates_when_full() {
        let path = temp_log("rotate");
        let _ = fs::remove_file(&path);
        let mut writer = LogWriter::open(&path, 16).expect("open log");
        writer.write_line("0123456789\n");
        writer.write_line("abcdefghij\n");
        drop(writer);
        let contents = fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "abcdefghij\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn oversized_file_is_discarded_on_open() {
        let path = temp_log("oversized");
        fs::write(&path, "x".repeat(64)).expect("seed log");
        let mut writer = LogWriter::open(&path, 32).expect("open log");
        writer.write_line("fresh\n");
        drop(writer);
        assert_eq!(fs::read_to_string(&path).expect("read log"), "fresh\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn timestamps_are_rfc3339_utc() {
        let stamp = timestamp();
        assert!(stamp.ends_with('Z'), "{stamp}");
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
