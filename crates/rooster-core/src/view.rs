// ── Screen view state ──
//
// What a screen should render for a store: a loading indicator, an
// error with a retry action, an empty-state affordance, or content.

use serde::Serialize;

/// Derived presentation state, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum ViewState<T> {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; the screen offers a retry of the same fetch.
    Failed { message: String },
    /// The last fetch succeeded with nothing to show.
    Empty,
    Ready(T),
}

impl<T> ViewState<Vec<T>> {
    /// Derive from the common store fields. `items` is only evaluated
    /// when neither loading nor failed.
    pub fn from_parts(is_loading: bool, error: Option<&str>, items: impl FnOnce() -> Vec<T>) -> Self {
        if is_loading {
            return ViewState::Loading;
        }
        if let Some(message) = error {
            return ViewState::Failed {
                message: message.to_owned(),
            };
        }
        let items = items();
        if items.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Ready(items)
        }
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the screen should offer a retry action.
    pub fn offers_retry(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}
