pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

use std::sync::Arc;

use dishcover_source::{
    ImageAnalyzer, MockImageAnalyzer, MockSource, RecipeSource, RemoteImageAnalyzer, RemoteSource,
};

use crate::config::{Config, SourceKind};

/// Build the recipe source selected by configuration.
pub fn build_source(config: &Config) -> anyhow::Result<Arc<dyn RecipeSource>> {
    Ok(match config.source.kind {
        SourceKind::Mock => Arc::new(MockSource::new(config.matcher.mode.clone())),
        SourceKind::Remote => Arc::new(RemoteSource::with_timeouts(
            &config.source.base_url,
            config.source.request_timeout_secs,
            config.source.connect_timeout_secs,
        )?),
    })
}

/// Build the image analyzer matching the configured source kind.
pub fn build_analyzer(config: &Config) -> anyhow::Result<Arc<dyn ImageAnalyzer>> {
    Ok(match config.source.kind {
        SourceKind::Mock => Arc::new(MockImageAnalyzer),
        SourceKind::Remote => Arc::new(RemoteImageAnalyzer::with_timeouts(
            &config.source.base_url,
            config.source.request_timeout_secs,
            config.source.connect_timeout_secs,
        )?),
    })
}

/// Create app router for testing
///
/// This function creates the Axum router with all routes configured,
/// useful for integration testing without starting the full server.
pub fn create_app(config: Config) -> anyhow::Result<axum::Router> {
    let source = build_source(&config)?;
    let analyzer = build_analyzer(&config)?;

    let state = AppState {
        config,
        source,
        analyzer,
    };

    Ok(routes::router(state))
}
