//! Tracing subscriber setup for the binary.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::ConfigError;

/// `RUST_LOG` if set, otherwise `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Plain-text subscriber writing through `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}

/// Install a global subscriber that logs to stderr.
pub fn init_stderr() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(subscriber(env_filter(), io::stderr))
}

/// Install a global subscriber that appends to `path`, leaving the terminal
/// to the UI.
pub fn init_file(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing::subscriber::set_global_default(subscriber(env_filter(), Mutex::new(file)))?;
    Ok(())
}

/// Load configuration with a temporary subscriber writing to `writer`. Used
/// before the global subscriber exists, since that one depends on the config.
pub fn load_config_logging_to<W>(
    path: &Path,
    filter: EnvFilter,
    writer: W,
) -> Result<AppConfig, ConfigError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing::subscriber::with_default(subscriber(filter, writer), || {
        AppConfig::load_or_default(path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuf {
        type Writer = SharedBuf;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_missing_config_warning_is_written() {
        let buf = SharedBuf::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let config = load_config_logging_to(&path, EnvFilter::new("warn"), buf.clone()).unwrap();

        assert_eq!(config, AppConfig::default());
        let logged = buf.contents();
        assert!(logged.contains("WARN"), "nothing logged: {logged:?}");
        assert!(logged.contains("config file not found, using defaults"));
    }

    #[test]
    fn test_existing_config_loads_quietly() {
        let buf = SharedBuf::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "[game]\nwidth = 8\n").unwrap();

        let config = load_config_logging_to(&path, EnvFilter::new("warn"), buf.clone()).unwrap();

        assert_eq!(config.game.width, 8);
        assert!(!buf.contents().contains("WARN"));
    }
}
