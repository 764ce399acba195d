mod flow;
mod types;

pub use flow::{DEFAULT_REQUEST_TIMEOUT_SECS, DiscoveryFlow, FlowError};
pub use types::{FetchStatus, FetchTicket, SearchRequest, UserSession, ViewState};
