// ── Runtime application configuration ──
//
// These types describe *which* backend to talk to and the static data
// the schedule starts from. They never touch disk: the CLI (via
// rooster-config) constructs an `AppConfig` and hands it in.

use std::time::Duration;

use chrono::NaiveDate;
use url::Url;

use rooster_api::{Room, TransportConfig, fixtures};

/// Which data facade backs the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Fixture data. `delay` replaces the simulated per-operation
    /// latency when set; zero disables it.
    Mock {
        delay: Option<Duration>,
        offline: bool,
    },
    /// JSON over HTTP at `ApiConfig::base_url`.
    Http,
}

impl Default for Backend {
    fn default() -> Self {
        Self::Mock {
            delay: None,
            offline: false,
        }
    }
}

/// Network settings for the HTTP backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let transport = TransportConfig::default();
        Self {
            base_url: transport.base_url,
            timeout: transport.timeout,
        }
    }
}

impl ApiConfig {
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
    }
}

/// Configuration for one app instance.
///
/// Built by the CLI, passed to [`App`](crate::App).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: Backend,
    pub api: ApiConfig,
    /// Rooms offered by the room selector, in display order. Must be
    /// non-empty; the first is selected initially.
    pub rooms: Vec<Room>,
    /// Initial pivot for the schedule. See [`AppConfig::resolve_initial_date`].
    pub initial_date: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            api: ApiConfig::default(),
            rooms: fixtures::rooms(),
            initial_date: None,
        }
    }
}

impl AppConfig {
    /// The configured pivot. Unset, the mock opens on the day its sample
    /// shifts are on and a live backend opens on today's local date.
    pub fn resolve_initial_date(&self) -> NaiveDate {
        self.initial_date.unwrap_or_else(|| match self.backend {
            Backend::Mock { .. } => fixtures::fixture_day(),
            Backend::Http => chrono::Local::now().date_naive(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mock_opens_on_the_sample_day() {
        let config = AppConfig::default();
        assert_eq!(config.resolve_initial_date(), fixtures::fixture_day());
    }

    #[test]
    fn configured_date_wins_for_every_backend() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        for backend in [Backend::default(), Backend::Http] {
            let config = AppConfig {
                backend,
                initial_date: Some(date),
                ..AppConfig::default()
            };
            assert_eq!(config.resolve_initial_date(), date);
        }
    }

    #[test]
    fn http_opens_on_today() {
        let config = AppConfig {
            backend: Backend::Http,
            ..AppConfig::default()
        };
        let before = chrono::Local::now().date_naive();
        let resolved = config.resolve_initial_date();
        let after = chrono::Local::now().date_naive();
        assert!(resolved == before || resolved == after);
    }

    #[test]
    fn transport_carries_base_url_and_timeout() {
        let api = ApiConfig {
            base_url: Url::parse("http://roster.test/api").unwrap(),
            timeout: Duration::from_secs(3),
        };
        let transport = api.transport();
        assert_eq!(transport.base_url.as_str(), "http://roster.test/api");
        assert_eq!(transport.timeout_ms(), 3_000);
    }
}
