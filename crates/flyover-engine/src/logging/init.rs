use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` backend once; later calls are
/// ignored.
///
/// Filter resolution order: the explicit `filter` argument (same syntax as
/// `RUST_LOG`, e.g. `"info"` or `"flyover_engine=debug"`), then the
/// `RUST_LOG` environment variable, then an info-level default.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
