//! Tracing subscriber setup.
//!
//! Logs always go to stderr so that `--json` output on stdout stays parseable.

use tracing_subscriber::EnvFilter;

/// Filter used with `--verbose` when `RUST_LOG` is not set.
pub const VERBOSE_FILTER: &str = "diatonic=debug,diatonic_cli=debug,diatonic_theory=debug,warn";

/// Filter used otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`.
pub fn filter_directive(env: Option<&str>, verbose: bool) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => VERBOSE_FILTER.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn setup_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(env.as_deref(), verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_verbose() {
        assert_eq!(filter_directive(Some("trace"), false), "trace");
        assert_eq!(filter_directive(Some("info"), true), "info");
    }

    #[test]
    fn blank_env_is_ignored() {
        assert_eq!(filter_directive(Some("  "), true), VERBOSE_FILTER);
        assert_eq!(filter_directive(None, false), DEFAULT_FILTER);
    }
}
