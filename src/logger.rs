use std::sync::Once;

use env_logger::Env;

static LOG: Once = Once::new();

/// Installs the global logger on first call; later calls are no-ops.
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_log() {
    LOG.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .format_target(false)
            .init()
    });
}
