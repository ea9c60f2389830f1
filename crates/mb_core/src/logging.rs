use tracing::Level;
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the fmt subscriber once; later calls and pre-set dispatchers win.
pub fn init_logging(level: Level) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        });
    }
}
