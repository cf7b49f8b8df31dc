//! Tracing subscriber setup shared by both binaries.
//!
//! `LOG_LEVEL` picks the default level (`RUST_LOG` directives win when set),
//! `LOG_FORMAT=pretty` switches to multi-line output.

use tracing_subscriber::EnvFilter;

/// Gateway logging: `info` by default, written to stdout
pub fn init() {
    init_with("info", false);
}

/// Terminal client logging: `warn` by default, written to stderr so it
/// stays out of the rendered view
pub fn init_cli() {
    init_with("warn", true);
}

fn init_with(default_level: &str, to_stderr: bool) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());
    let pretty = std::env::var("LOG_FORMAT").map(|f| f == "pretty").unwrap_or(false);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if to_stderr {
        let subscriber = subscriber.with_writer(std::io::stderr);
        if pretty {
            subscriber.pretty().init();
        } else {
            subscriber.init();
        }
    } else if pretty {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}
