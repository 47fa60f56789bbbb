//! IDB Errors entry point.

use tracing_subscriber::EnvFilter;

use idb_errors::commands;
use idb_errors::config::Config;

fn main() {
    let config = Config::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        host_message = config.host_message.label(),
        "idb-errors starting",
    );

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = commands::run(&config.command, config.host_message, &mut stdout) {
        tracing::error!("{e}");
        std::process::exit(e.exit_code());
    }
}
