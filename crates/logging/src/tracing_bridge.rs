//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation driven by [`VerbosityConfig`].
//!
//! Engine crates emit events under the `dar::*` targets; this module builds an
//! `EnvFilter` from the configuration and installs a formatting subscriber on
//! stderr. `RUST_LOG`, when set, takes precedence.
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! tracing::debug!(target: logging::POLICY_TARGET, "resolved");
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::config::VerbosityConfig;

fn build_filter(config: &VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter_directives()))
}

/// Install the global subscriber, failing if one is already set.
pub fn try_init_tracing(config: VerbosityConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(&config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

/// Install the global subscriber.
///
/// A second call keeps the first subscriber and logs nothing.
pub fn init_tracing(config: VerbosityConfig) {
    if try_init_tracing(config).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
