use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::Args;

/// Setting this variable replaces the `--log` filter with its value and switches to
/// a verbose, pretty output meant for working on the graph itself.
const DEVELOPER_FILTER_ENV: &str = "PEOPLE_GRAPH_RUST_LOG";

pub(crate) fn init(args: &Args) {
    if std::env::var(DEVELOPER_FILTER_ENV).is_ok() {
        let filter = EnvFilter::try_from_env(DEVELOPER_FILTER_ENV).unwrap_or_default();

        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .without_time()
            .with_writer(std::io::stderr)
            .init();

        tracing::warn!("Using the log filter from {DEVELOPER_FILTER_ENV}.");

        return;
    }

    let filter = args.log_level().unwrap_or_default().as_filter_str();

    tracing_subscriber::registry()
        .with(args.log_format())
        .with(EnvFilter::new(filter))
        .init();
}
