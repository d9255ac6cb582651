use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "artikel=debug";

/// Installs the global tracing subscriber when debug mode is on.
///
/// Outside debug mode the message macros print straight to the console and
/// no subscriber is needed. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    if !is_debug_mode() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stdout_layer = fmt::layer().with_target(true);

    let _ = tracing_subscriber::registry().with(env_filter).with(stdout_layer).try_init();
}
