use dishcover_recipe::Recipe;

/// Which screen is active. Exactly one state at a time; transitions happen
/// only through [`crate::DiscoveryFlow`] methods, never spontaneously.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Initial,
    Options,
    Results(FetchStatus),
}

impl ViewState {
    pub(crate) fn screen(&self) -> &'static str {
        match self {
            ViewState::Initial => "initial",
            ViewState::Options => "options",
            ViewState::Results(_) => "results",
        }
    }
}

/// Lifecycle of the fetch behind the results screen. A `Success` list is a
/// fresh value per search, never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Loading,
    Success(Vec<Recipe>),
    Error(String),
}

/// What a dispatched fetch is asking for. Built from caller input, consumed
/// by the resolve step.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    ByIngredients { selected: Vec<String> },
    Recommendation { user_id: Option<String> },
}

/// Explicit session value handed to the flow at construction. Replaces any
/// ambient authentication state; an anonymous session is fully functional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSession {
    pub user_id: Option<String>,
}

impl UserSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }
}

/// Handle for one dispatched fetch. Completing with a superseded ticket is
/// a no-op, which is what keeps stale responses from overwriting newer ones.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub(crate) seq: u64,
    pub request: SearchRequest,
}
