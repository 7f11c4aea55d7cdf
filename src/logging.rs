//! File-backed diagnostics. Stdout belongs to the terminal UI, so the
//! tracing subscriber appends to a log file in the working directory.
//! Submission failures land here with their underlying detail; the UI
//! only ever shows the generic error banner.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::Result;

pub const LOG_FILE: &str = "postbox.log";

/// Install the global tracing subscriber, writing to [`LOG_FILE`].
pub fn init() -> Result<()> {
    let file = open_log_file(Path::new("."))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Open (creating if needed) the append-mode log file under `dir`.
pub fn open_log_file(dir: &Path) -> Result<File> {
    Ok(OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn opens_and_appends_to_the_log_file() {
        let dir = tempfile::tempdir().unwrap();

        let mut file = open_log_file(dir.path()).unwrap();
        writeln!(file, "first").unwrap();
        let mut file = open_log_file(dir.path()).unwrap();
        writeln!(file, "second").unwrap();

        let contents = std::fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
