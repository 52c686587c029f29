//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, terminal, etc.).
//!
//! # Structure
//!
//! - `chat` - Turns, transcripts and the outbound history projection
//! - `integration` - Jira link status and the derived connection state
//! - `dashboard` - Aggregated dashboard snapshot

pub mod chat;
pub mod dashboard;
pub mod integration;

pub use chat::{ChatTurn, ConversationHistoryEntry, Transcript, TurnRole};
pub use dashboard::{
    DashboardSnapshot, DashboardStats, IssueProgress, IssueSearch, JiraIssue, JiraProject,
    JiraUser, SprintProgress, VelocityPoint,
};
pub use integration::{ConnectionState, IntegrationStatus};
