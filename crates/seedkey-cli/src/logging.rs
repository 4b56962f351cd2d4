//! Logging setup for the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter applied when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Initializes a compact stderr logger filtered by `RUST_LOG`.
///
/// `LOG_FILE=1` and `LOG_LINE_NUM=1` add source locations to each event.
/// Stdout is left to command output.
pub(crate) fn init() {
    let filt = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let log_file = std::env::var("LOG_FILE").is_ok_and(|v| v == "1");
    let log_line_num = std::env::var("LOG_LINE_NUM").is_ok_and(|v| v == "1");

    let stderr_sub = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .event_format(
            tracing_subscriber::fmt::format()
                .compact()
                .with_file(log_file)
                .with_line_number(log_line_num),
        )
        .with_filter(filt);

    tracing_subscriber::registry().with(stderr_sub).init();
}
