//! Logging facade for Plinth crates.
//!
//! Re-exports the `tracing` macros so downstream crates can write
//! `plinth_core::debug!(...)` without taking a direct `tracing` dependency.
//! With the `tracing-json` feature, `init_from_env` installs a JSON
//! subscriber filtered by `RUST_LOG`.

pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON-formatted subscriber configured from `RUST_LOG`.
///
/// Returns an error if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_from_env() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    use tracing_subscriber::layer::SubscriberExt;

    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json());
    tracing::subscriber::set_global_default(subscriber)
}
