use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Build the subscriber for `level_regex`. Falls back to `debug` if the directives don't parse,
/// handing the parse error back so it can be reported once logging is up.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("debug")
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry().with(filter).with(layer)
}

/// # Panics
///
/// Panics if a global subscriber was already installed.
pub fn setup_logging(level_regex: &str) {
    let (subscriber, parse_err) = parse_log_level(level_regex);
    tracing::subscriber::set_global_default(subscriber)
        .expect("Couldn't setup global subscriber (logger)");
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log_level `{}`, logging everything: {}", level_regex, err);
    }
}
