use log::LevelFilter;

/// Install the global logger
///
/// `RUST_LOG` is honoured; `--debug` raises everything to debug.
pub fn init_logging(debug_mode: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format_timestamp(None);
    if debug_mode {
        builder.filter_level(LevelFilter::Debug);
    }
    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
