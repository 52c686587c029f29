#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ChatTurn, ConnectionState, ConversationHistoryEntry, DashboardSnapshot, DashboardStats,
    IntegrationStatus, IssueProgress, IssueSearch, JiraIssue, JiraProject, JiraUser,
    SprintProgress, Transcript, TurnRole, VelocityPoint,
};
pub use ports::{
    ChatTurnReply, ChatTurnRequest, CoreError, GatewayError, GatewayResult, OAuthInitiation,
    RemoteGatewayPort,
};
pub use services::{
    AuthorizationHandoff, ChatOrchestrator, Confirmation, ConnectionLifecycle, DashboardState,
    DashboardView, IgnoreReason, LifecycleError, MountReport, PulseSession, RedirectOutcome,
    SubmitOutcome, consume_redirect_marker,
};
pub use settings::{
    DEFAULT_API_BASE_URL, DEFAULT_RECONCILE_DELAY_MS, PulseSettings, SettingsError,
    validate_settings,
};

// Dev-dependency used only by the integration tests under tests/
#[cfg(test)]
use mockall as _;
