use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Console verbosity, ordered from least to most chatty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        format!("test_discovery={}", self.level())
    }

    /// Quiet runs discard log output entirely; errors still surface through
    /// the process exit status.
    fn discards_logs(self) -> bool {
        self == Self::Quiet
    }

    fn shows_timestamps(self) -> bool {
        self >= Self::Debug
    }

    fn shows_source_location(self) -> bool {
        self >= Self::Debug
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over the flags.
///
/// Logs go to stderr so stdout stays clean for JSON output.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(verbosity.shows_source_location())
        .with_line_number(verbosity.shows_source_location())
        .compact();

    if verbosity.discards_logs() {
        subscriber.with_writer(std::io::sink).init();
    } else if verbosity.shows_timestamps() {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
