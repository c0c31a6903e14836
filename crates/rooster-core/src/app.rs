// ── Root composition ──
//
// Owns the data facade and the three stores built on it. Consumers
// borrow stores from here; nothing is global.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use rooster_api::{DataSource, HttpSource, MockSource, Publication, Shift, fixtures};

use crate::config::{AppConfig, Backend};
use crate::error::CoreError;
use crate::store::{PublicationsStore, ScheduleStore, UserStore};

/// The backend selected by configuration.
#[derive(Debug, Clone)]
pub enum Source {
    Mock(MockSource),
    Http(HttpSource),
}

impl Source {
    /// Build the backend described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, CoreError> {
        match config.backend {
            Backend::Mock { delay, offline } => {
                let mut mock = MockSource::new();
                if let Some(delay) = delay {
                    mock = mock.with_delay(delay);
                }
                mock.set_offline(offline);
                Ok(Self::Mock(mock))
            }
            Backend::Http => {
                let http = HttpSource::new(&config.api.transport())?;
                debug!(base_url = %http.base_url(), "using HTTP backend");
                Ok(Self::Http(http))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mock(_) => "mock",
            Self::Http(_) => "http",
        }
    }
}

impl DataSource for Source {
    async fn get_publications(&self) -> Result<Vec<Publication>, rooster_api::Error> {
        match self {
            Self::Mock(s) => s.get_publications().await,
            Self::Http(s) => s.get_publications().await,
        }
    }

    async fn get_publication_by_id(
        &self,
        id: &str,
    ) -> Result<Option<Publication>, rooster_api::Error> {
        match self {
            Self::Mock(s) => s.get_publication_by_id(id).await,
            Self::Http(s) => s.get_publication_by_id(id).await,
        }
    }

    async fn search_publications(
        &self,
        query: &str,
    ) -> Result<Vec<Publication>, rooster_api::Error> {
        match self {
            Self::Mock(s) => s.search_publications(query).await,
            Self::Http(s) => s.search_publications(query).await,
        }
    }

    async fn get_shifts(&self, date: Option<NaiveDate>) -> Result<Vec<Shift>, rooster_api::Error> {
        match self {
            Self::Mock(s) => s.get_shifts(date).await,
            Self::Http(s) => s.get_shifts(date).await,
        }
    }

    async fn get_shift_by_id(&self, id: &str) -> Result<Option<Shift>, rooster_api::Error> {
        match self {
            Self::Mock(s) => s.get_shift_by_id(id).await,
            Self::Http(s) => s.get_shift_by_id(id).await,
        }
    }
}

/// One running app: a data facade and the stores that read from it.
pub struct App<S: DataSource = Source> {
    source: Arc<S>,
    publications: PublicationsStore<S>,
    schedule: ScheduleStore<S>,
    user: UserStore,
}

impl App<Source> {
    /// Build the configured backend and the stores on top of it.
    ///
    /// The session starts signed in as the fixture user; there is no
    /// login flow.
    pub fn new(config: &AppConfig) -> Result<Self, CoreError> {
        let source = Source::from_config(config)?;
        info!(backend = source.kind(), "starting app");
        Self::with_source(Arc::new(source), config, Some(fixtures::current_user()))
    }
}

impl<S: DataSource> App<S> {
    /// Compose the stores over an arbitrary data facade.
    pub fn with_source(
        source: Arc<S>,
        config: &AppConfig,
        user: Option<rooster_api::User>,
    ) -> Result<Self, CoreError> {
        let pivot = config.resolve_initial_date();
        let schedule = ScheduleStore::new(Arc::clone(&source), config.rooms.clone(), pivot)?;
        let publications = PublicationsStore::new(Arc::clone(&source));

        Ok(Self {
            source,
            publications,
            schedule,
            user: UserStore::new(user),
        })
    }

    /// Issue the initial publication and shift fetches concurrently.
    pub async fn load(&self) {
        futures_util::future::join(
            self.publications.fetch_publications(),
            self.schedule.fetch_shifts(),
        )
        .await;

        let publications = self.publications.snapshot();
        let schedule = self.schedule.snapshot();
        info!(
            publications = publications.publications.len(),
            shifts = schedule.shifts.len(),
            failed = publications.error.is_some() || schedule.error.is_some(),
            "initial load finished"
        );
    }

    pub fn publications(&self) -> &PublicationsStore<S> {
        &self.publications
    }

    pub fn schedule(&self) -> &ScheduleStore<S> {
        &self.schedule
    }

    pub fn user(&self) -> &UserStore {
        &self.user
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn mock_config() -> AppConfig {
        AppConfig {
            backend: Backend::Mock {
                delay: Some(Duration::ZERO),
                offline: false,
            },
            initial_date: Some(fixtures::fixture_day()),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn load_fills_both_stores() {
        let app = App::new(&mock_config()).unwrap();
        app.load().await;

        assert_eq!(app.publications().snapshot().publications.len(), 3);
        let schedule = app.schedule().snapshot();
        assert_eq!(schedule.shifts_for_selected_date().len(), 5);
        assert!(schedule.selected_day().unwrap().has_event);
        assert!(app.user().snapshot().is_authenticated);
    }

    #[tokio::test]
    async fn offline_backend_surfaces_store_errors() {
        let config = AppConfig {
            backend: Backend::Mock {
                delay: Some(Duration::ZERO),
                offline: true,
            },
            ..mock_config()
        };
        let app = App::new(&config).unwrap();
        app.load().await;

        assert_eq!(
            app.publications().snapshot().error.as_deref(),
            Some(crate::store::FETCH_PUBLICATIONS_FAILED)
        );
        assert_eq!(
            app.schedule().snapshot().error.as_deref(),
            Some(crate::store::FETCH_SHIFTS_FAILED)
        );
    }

    #[test]
    fn empty_rooms_fail_composition() {
        let config = AppConfig {
            rooms: Vec::new(),
            ..mock_config()
        };
        assert!(matches!(
            App::new(&config),
            Err(CoreError::Validation { .. })
        ));
    }

    #[test]
    fn http_backend_is_selected_by_config() {
        let config = AppConfig {
            backend: Backend::Http,
            ..mock_config()
        };
        let app = App::new(&config).unwrap();
        assert_eq!(app.source().kind(), "http");
    }
}
