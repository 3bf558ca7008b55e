#![forbid(unsafe_code)]

//! Structured logging.
//!
//! All folio crates emit `tracing` events under `folio.*` targets:
//!
//! | target           | emitted by                                   |
//! |------------------|----------------------------------------------|
//! | `folio.catalog`  | unknown category lookups                     |
//! | `folio.config`   | parameter loading and clamping               |
//! | `folio.drag`     | drag lifecycle transitions, ignored pointers |
//! | `folio.scrapbook`| scrapbook navigation                         |
//! | `folio.ring`     | ring scrubbing                               |
//! | `folio.detail`   | detail-level persistence                     |
//! | `folio.folder`   | folder shelf toggling                        |
//!
//! Library code never installs a subscriber. Hosts that want JSON output can
//! enable the `tracing-json` feature and call [`init_json_logging`].

/// Environment variable consulted for the log filter.
pub const LOG_FILTER_ENV: &str = "FOLIO_LOG";

/// Default filter when [`LOG_FILTER_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "folio=info";

/// Install a global JSON subscriber.
///
/// The filter comes from `FOLIO_LOG` when set, otherwise `fallback_filter`
/// (or [`DEFAULT_LOG_FILTER`]). Returns `false` if a global subscriber was
/// already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging(fallback_filter: Option<&str>) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter.unwrap_or(DEFAULT_LOG_FILTER)));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
