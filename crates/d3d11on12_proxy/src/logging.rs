use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a stderr `fmt` subscriber the first time it is called.
///
/// The proxy lives inside someone else's process, so a host that already set
/// a global subscriber keeps it.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::SubscriberBuilder::default()
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
            .with_level(true)
            .with_target(false)
            .try_init();
    });
}
