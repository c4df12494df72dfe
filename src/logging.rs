use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level implied by the `-v`/`-q` flags.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over the flags.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_warn() {
        assert_eq!(level_for(0, false), Level::WARN);
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(1, false), Level::INFO);
        assert_eq!(level_for(2, false), Level::DEBUG);
        assert_eq!(level_for(5, false), Level::TRACE);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(3, true), Level::ERROR);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0, false);
        init(2, false);
    }
}
