//! tracing-subscriber setup. Logs go to stderr so `--json` output stays clean.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `--verbose` means debug, else `fallback`.
pub fn init(verbose: bool, fallback: &str) {
    let default = if verbose { "debug" } else { fallback };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("cucostatus={default}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (tests running `run()` twice) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
