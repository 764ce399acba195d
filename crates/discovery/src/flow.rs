use std::time::Duration;

use dishcover_recipe::Recipe;
use dishcover_source::{RecipeSource, SourceError};
use thiserror::Error;
use tokio::time::timeout;

use crate::types::{FetchStatus, FetchTicket, SearchRequest, UserSession, ViewState};

/// Bound on how long a dispatched fetch may stay in flight before it is
/// treated as failed.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, PartialEq)]
pub enum FlowError {
    #[error("'{event}' is not available on the {screen} screen")]
    InvalidTransition {
        screen: &'static str,
        event: &'static str,
    },
}

/// Drives the discovery screens: initial → options → results, with at most
/// one fetch in flight.
///
/// Every dispatch bumps an internal sequence number and hands out a
/// [`FetchTicket`]; completions only apply while their ticket is current and
/// the results screen is still loading. Leaving the results screen bumps the
/// sequence too, so a dismissed search can never resurface.
pub struct DiscoveryFlow {
    state: ViewState,
    session: UserSession,
    seq: u64,
    last_request: Option<SearchRequest>,
    request_timeout: Duration,
}

impl DiscoveryFlow {
    pub fn new(session: UserSession) -> Self {
        Self {
            state: ViewState::Initial,
            session,
            seq: 0,
            last_request: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    /// Initial → Options.
    pub fn browse_ingredients(&mut self) -> Result<(), FlowError> {
        match self.state {
            ViewState::Initial => {
                self.state = ViewState::Options;
                Ok(())
            }
            _ => Err(self.rejected("browse ingredients")),
        }
    }

    /// Initial → Results(Loading) with a recommendation request. The
    /// session's user id, when present, rides along untouched.
    pub fn surprise_me(&mut self) -> Result<FetchTicket, FlowError> {
        match self.state {
            ViewState::Initial => Ok(self.dispatch(SearchRequest::Recommendation {
                user_id: self.session.user_id.clone(),
            })),
            _ => Err(self.rejected("surprise me")),
        }
    }

    /// Options → Results(Loading) with the submitted selection.
    pub fn submit_ingredients(&mut self, selected: Vec<String>) -> Result<FetchTicket, FlowError> {
        match self.state {
            ViewState::Options => Ok(self.dispatch(SearchRequest::ByIngredients { selected })),
            _ => Err(self.rejected("submit ingredients")),
        }
    }

    /// Options → Results(Loading) once image analysis hands back names.
    pub fn ingredients_detected(&mut self, detected: Vec<String>) -> Result<FetchTicket, FlowError> {
        match self.state {
            ViewState::Options => Ok(self.dispatch(SearchRequest::ByIngredients {
                selected: detected,
            })),
            _ => Err(self.rejected("ingredients detected")),
        }
    }

    /// Results(any) → Initial. Invalidates whatever fetch is still in
    /// flight.
    pub fn search_again(&mut self) -> Result<(), FlowError> {
        match self.state {
            ViewState::Results(_) => {
                self.seq += 1;
                self.state = ViewState::Initial;
                Ok(())
            }
            _ => Err(self.rejected("search again")),
        }
    }

    /// Results(Error) → Results(Loading), re-issuing the same last request
    /// under a fresh ticket.
    pub fn retry(&mut self) -> Result<FetchTicket, FlowError> {
        match (&self.state, &self.last_request) {
            (ViewState::Results(FetchStatus::Error(_)), Some(request)) => {
                let request = request.clone();
                Ok(self.dispatch(request))
            }
            _ => Err(self.rejected("retry")),
        }
    }

    /// Apply a fetch outcome. Returns whether it took effect: stale tickets
    /// (superseded or dismissed) are dropped and the state left untouched.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Recipe>, SourceError>,
    ) -> bool {
        if ticket.seq != self.seq
            || !matches!(self.state, ViewState::Results(FetchStatus::Loading))
        {
            tracing::debug!(
                ticket_seq = ticket.seq,
                current_seq = self.seq,
                "dropping stale fetch outcome"
            );
            return false;
        }

        self.state = ViewState::Results(match outcome {
            Ok(recipes) => {
                tracing::debug!(count = recipes.len(), "fetch resolved");
                FetchStatus::Success(recipes)
            }
            Err(err) => {
                tracing::warn!("recipe fetch failed: {err}");
                FetchStatus::Error(err.to_string())
            }
        });
        true
    }

    /// Run a ticket against a source, bounded by the configured timeout,
    /// and apply the outcome. Returns the state the flow lands in.
    pub async fn resolve(
        &mut self,
        source: &dyn RecipeSource,
        ticket: FetchTicket,
    ) -> &ViewState {
        let fetch = async {
            match &ticket.request {
                SearchRequest::ByIngredients { selected } => source.search(selected).await,
                SearchRequest::Recommendation { user_id } => {
                    source.recommend(user_id.as_deref()).await
                }
            }
        };

        let outcome = match timeout(self.request_timeout, fetch).await {
            Ok(outcome) => outcome,
            Err(_) => Err(SourceError::TimedOut(self.request_timeout.as_secs())),
        };

        self.complete(&ticket, outcome);
        &self.state
    }

    fn dispatch(&mut self, request: SearchRequest) -> FetchTicket {
        self.seq += 1;
        self.last_request = Some(request.clone());
        self.state = ViewState::Results(FetchStatus::Loading);
        FetchTicket {
            seq: self.seq,
            request,
        }
    }

    fn rejected(&self, event: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            screen: self.state.screen(),
            event,
        }
    }
}
