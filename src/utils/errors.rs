//! Error handling for the Quedada core
//!
//! This module defines the main error types used throughout the library
//! and provides a unified error handling strategy.

use thiserror::Error;
use uuid::Uuid;

/// Main error type for Quedada core operations
#[derive(Error, Debug)]
pub enum QuedadaError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Identity verification error: {0}")]
    Verification(#[from] VerificationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Plan not found: {plan_id}")]
    PlanNotFound { plan_id: i64 },

    #[error("Profile not found: {user_id}")]
    ProfileNotFound { user_id: Uuid },

    #[error("Invitation not found: {invitation_id}")]
    InvitationNotFound { invitation_id: i64 },

    #[error("User {user_id} already joined plan {plan_id}")]
    AlreadyJoined { plan_id: i64, user_id: Uuid },

    #[error("User {user_id} is not a participant of plan {plan_id}")]
    NotMember { plan_id: i64, user_id: Uuid },

    #[error("Plan {plan_id} is full ({max_participants} participants)")]
    PlanFull { plan_id: i64, max_participants: u32 },

    #[error("Creator cannot join or leave their own plan {plan_id}")]
    OwnPlan { plan_id: i64 },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Identity verification API specific errors
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Verification API request failed: {0}")]
    RequestFailed(String),

    #[error("Verification API timeout")]
    Timeout,

    #[error("Invalid verification response: {0}")]
    InvalidResponse(String),

    #[error("Verification service unavailable")]
    ServiceUnavailable,

    #[error("National id not found")]
    NotFound,
}

/// Result type alias for Quedada core operations
pub type Result<T> = std::result::Result<T, QuedadaError>;

/// Result type alias for identity verification operations
pub type VerificationResult<T> = std::result::Result<T, VerificationError>;

impl QuedadaError {
    /// Check if the error is recoverable (worth retrying)
    pub fn is_recoverable(&self) -> bool {
        match self {
            QuedadaError::Transport(_) => true,
            QuedadaError::Api { status, .. } => *status >= 500,
            QuedadaError::Verification(VerificationError::NotFound) => false,
            QuedadaError::Verification(_) => true,
            QuedadaError::Config(_) => false,
            QuedadaError::PermissionDenied(_) => false,
            QuedadaError::PlanNotFound { .. } => false,
            QuedadaError::ProfileNotFound { .. } => false,
            QuedadaError::InvitationNotFound { .. } => false,
            QuedadaError::AlreadyJoined { .. } => false,
            QuedadaError::NotMember { .. } => false,
            QuedadaError::PlanFull { .. } => false,
            QuedadaError::OwnPlan { .. } => false,
            QuedadaError::InvalidStateTransition { .. } => false,
            QuedadaError::Serialization(_) => false,
            QuedadaError::UrlParse(_) => false,
            QuedadaError::Validation(_) => false,
            QuedadaError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuedadaError::Config(_) => ErrorSeverity::Critical,
            QuedadaError::PermissionDenied(_) => ErrorSeverity::Warning,
            QuedadaError::AlreadyJoined { .. } => ErrorSeverity::Info,
            QuedadaError::NotMember { .. } => ErrorSeverity::Info,
            QuedadaError::PlanFull { .. } => ErrorSeverity::Info,
            QuedadaError::OwnPlan { .. } => ErrorSeverity::Info,
            QuedadaError::Validation(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
