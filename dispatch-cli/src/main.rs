//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_logging();
    if let Err(err) = dispatch_cli::run() {
        if let dispatch_cli::CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        report_failure(&err);
        std::process::exit(1);
    }
}

/// Send `log` and `tracing` records to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report_failure(err: &dispatch_cli::CliError) {
    eprintln!("dispatch-sim: {err}");
}
