use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: crate events at debug, request
/// spans from `TraceLayer`, and quiet transport internals.
fn default_filter() -> String {
    format!(
        "info,{}=debug,tower_http=debug,hyper=warn,axum::rejection=trace",
        env!("CARGO_CRATE_NAME")
    )
}

/// Installs the global subscriber for the named service.
///
/// A second call leaves the existing subscriber in place.
pub fn init_tracing(service: &'static str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(service, version = env!("CARGO_PKG_VERSION"), "tracing initialized");
    } else {
        tracing::debug!(service, "tracing already initialized");
    }
}
