// ── Core error types ──
//
// User-facing errors from rooster-core. These are NOT transport-specific:
// consumers never see reqwest errors or raw JSON failures. The
// `From<rooster_api::Error>` impl flattens facade failures into a
// message plus a retry hint.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Backend errors (wrapped, not exposed raw) ────────────────────
    #[error("Backend request failed: {message}")]
    Backend {
        message: String,
        /// Whether retrying the same request may succeed.
        transient: bool,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Input errors ─────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, identifier: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Backend { transient: true, .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<rooster_api::Error> for CoreError {
    fn from(err: rooster_api::Error) -> Self {
        match err {
            rooster_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            other => CoreError::Backend {
                transient: other.is_transient(),
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_backend_is_transient() {
        let err = CoreError::from(rooster_api::Error::Unavailable("offline".into()));
        assert!(err.is_transient());
        assert!(err.to_string().contains("offline"));
    }

    #[test]
    fn status_is_preserved() {
        let err = CoreError::from(rooster_api::Error::Status {
            status: 500,
            message: "Internal Server Error".into(),
        });
        match err {
            CoreError::Backend { status, .. } => assert_eq!(status, Some(500)),
            other => panic!("expected Backend, got {other:?}"),
        }
    }

    #[test]
    fn bad_url_is_config_error() {
        let parse = url::Url::parse("::").unwrap_err();
        let err = CoreError::from(rooster_api::Error::InvalidUrl(parse));
        assert!(matches!(err, CoreError::Config { .. }));
    }
}
