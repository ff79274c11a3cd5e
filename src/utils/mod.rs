pub mod build_info;

/// Installs the global tracing subscriber, writing to stderr so command
/// output on stdout stays machine-readable.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cardcycle=info,cardcycle_core=warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
