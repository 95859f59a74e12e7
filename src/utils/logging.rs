//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Quedada client core.

use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "quedada.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log plan lifecycle actions with structured data
pub fn log_plan_action(plan_id: i64, action: &str, user_id: Uuid, details: Option<&str>) {
    info!(
        plan_id = plan_id,
        action = action,
        user_id = %user_id,
        details = details,
        "Plan action performed"
    );
}

/// Log membership changes (join/leave)
pub fn log_membership_change(plan_id: i64, user_id: Uuid, joined: bool, participant_count: usize) {
    info!(
        plan_id = plan_id,
        user_id = %user_id,
        joined = joined,
        participant_count = participant_count,
        "Membership changed"
    );
}

/// Log identity verification lookups
pub fn log_verification_lookup(found: bool, details: Option<&str>) {
    if found {
        debug!(details = details, "Identity verification: national id found");
    } else {
        warn!(details = details, "Identity verification: national id not found");
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
