use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Set the log level for the application
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Initialize logging with the specified level
///
/// The logger itself accepts every record; what gets through is decided by
/// the global max level, so `set_log_level` can raise or lower it later.
pub fn init_logging(debug: bool) {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Trace).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    set_log_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
