use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Truncates `path` and routes every later `log_msg` call to it.
pub fn init_log(path: &Path) {
    let _ = std::fs::write(path, "");
    let _ = LOG_FILE.set(path.to_path_buf());
}

pub fn log_msg(level: &str, msg: &str) {
    if let Some(path) = LOG_FILE.get() {
        append_record(path, level, msg);
    }
}

fn append_record(path: &Path, level: &str, msg: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let now: DateTime<Local> = Local::now();
        let _ = writeln!(
            file,
            "time=\"{time}\" level={level} msg=\"{msg}\"",
            time = now.format("%Y-%m-%dT%H:%M:%S%z"),
            msg = escape_value(msg),
        );
    }
}

// Backslash goes first so the escapes added afterwards stay unambiguous.
fn escape_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
