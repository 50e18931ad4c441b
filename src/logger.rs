// SPDX-License-Identifier: MIT

use time::macros::format_description;
use time::UtcOffset;
use tracing::Level;
use tracing_subscriber::fmt::time::OffsetTime;

pub fn init_logger(level: Level) {
    let level = match level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    };

    // Fall back to UTC timestamps if the local offset can't be
    // determined, which happens in multi-threaded contexts.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer = OffsetTime::new(
        offset,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    );

    // Everything goes to stderr, stdout is reserved for the header
    // bytes.
    let builder = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(level.to_string())
        .with_writer(std::io::stderr)
        .with_timer(timer);

    #[cfg(target_os = "windows")]
    let builder = builder.with_ansi(false);

    tracing::subscriber::set_global_default(builder.finish())
        .expect("setting default subscriber failed");
}
