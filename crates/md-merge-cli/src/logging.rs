use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging settings, derived from the command line and passed to [`init`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
}

impl LogConfig {
    pub fn from_verbose(verbose: bool) -> Self {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        Self { level }
    }

    pub fn is_verbose(&self) -> bool {
        self.level >= Level::DEBUG
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn directive(&self) -> String {
        self.level.as_str().to_ascii_lowercase()
    }
}

/// Install the global fmt subscriber on stderr. `RUST_LOG` wins over `config`.
pub fn init(config: LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if config.is_verbose() {
        tracing::info!("Verbose logging enabled.");
    }
}

/// Run `f` under a debug-level subscriber local to this thread and return
/// the formatted lines, each reading `LEVEL message fields..`.
#[cfg(test)]
pub(crate) fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    let lines = String::from_utf8_lossy(&bytes)
        .lines()
        .map(|line| line.trim_start().to_string())
        .collect();
    (value, lines)
}
