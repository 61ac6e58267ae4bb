//! Logging setup for the `tokensmith` binary.
//!
//! Diagnostics share stdout with the progress lines so that a build log reads
//! top to bottom: progress, unresolved-reference warnings, summary.

use tracing_subscriber::EnvFilter;

/// How chatty the build should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set and no verbosity flag was given.
pub fn init(verbosity: Verbosity) {
    let filter = match verbosity {
        Verbosity::Normal => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity.directive())),
        _ => EnvFilter::new(verbosity.directive()),
    };

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
