//! One-shot `env_logger` setup for the demo binary.

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the global logger. Defaults to `warn`, so rejected inserts are
/// reported; `RUST_LOG` overrides it (e.g. `RUST_LOG=chained_table=trace`).
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the embedding program.
        let _ = builder.try_init();
    });
}
