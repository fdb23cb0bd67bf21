use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber once. The filter comes from
/// RUST_LOG, defaulting to info for this crate.
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("madcreate_client=info"));

        // We use 'with_writer(std::io::stderr)' so progress output on
        // stdout stays machine-readable.
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set global tracing subscriber");
    });
}
