//! Dashboard snapshot types.
//!
//! A snapshot is a full aggregate fetched fresh on every load. There is no
//! merge path: a new snapshot replaces the old one entirely. Field names
//! follow the backend's snake_case aggregation payload.

use serde::{Deserialize, Serialize};

/// Number of active sprints shown on the dashboard.
pub const SPRINT_SECTION_LIMIT: usize = 3;
/// Number of assigned issues shown on the dashboard.
pub const ISSUE_SECTION_LIMIT: usize = 5;
/// Number of closed sprints shown in the velocity section.
pub const VELOCITY_SECTION_LIMIT: usize = 6;

/// Aggregated Jira data for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub projects: Vec<JiraProject>,
    pub current_user: Option<JiraUser>,
    pub user_issues: IssueSearch,
    pub recent_activity: IssueSearch,
    pub sprint_data: Vec<SprintProgress>,
    pub velocity_data: Vec<VelocityPoint>,
    pub stats: DashboardStats,
}

impl DashboardSnapshot {
    /// Active sprints to render, or `None` when there are none.
    #[must_use]
    pub fn sprint_section(&self) -> Option<&[SprintProgress]> {
        non_empty_prefix(&self.sprint_data, SPRINT_SECTION_LIMIT)
    }

    /// Issues assigned to the user, or `None` when there are none.
    #[must_use]
    pub fn issue_section(&self) -> Option<&[JiraIssue]> {
        non_empty_prefix(&self.user_issues.issues, ISSUE_SECTION_LIMIT)
    }

    /// Recent closed-sprint velocity, or `None` when there is none.
    #[must_use]
    pub fn velocity_section(&self) -> Option<&[VelocityPoint]> {
        non_empty_prefix(&self.velocity_data, VELOCITY_SECTION_LIMIT)
    }

    #[must_use]
    pub fn project_section(&self) -> Option<&[JiraProject]> {
        non_empty_prefix(&self.projects, self.projects.len())
    }
}

fn non_empty_prefix<T>(items: &[T], limit: usize) -> Option<&[T]> {
    if items.is_empty() {
        None
    } else {
        Some(&items[..limit.min(items.len())])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_projects: u32,
    pub user_open_issues: u32,
    pub recent_activity_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraProject {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(alias = "projectTypeKey")]
    pub project_type_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraUser {
    #[serde(alias = "accountId")]
    pub account_id: Option<String>,
    #[serde(alias = "displayName")]
    pub display_name: Option<String>,
    #[serde(alias = "emailAddress")]
    pub email_address: Option<String>,
}

/// A page of issues returned by a JQL search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueSearch {
    pub issues: Vec<JiraIssue>,
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraIssue {
    pub key: String,
    pub fields: IssueFields,
}

impl JiraIssue {
    #[must_use]
    pub fn progress(&self) -> IssueProgress {
        IssueProgress::from_category(&self.fields.status.status_category.name)
    }

    /// Priority name, or `"No priority"`.
    #[must_use]
    pub fn priority_label(&self) -> &str {
        self.fields
            .priority
            .as_ref()
            .map_or("No priority", |p| p.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueFields {
    pub summary: String,
    pub status: IssueStatus,
    pub priority: Option<IssuePriority>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueStatus {
    pub name: String,
    #[serde(rename = "statusCategory", alias = "status_category")]
    pub status_category: StatusCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCategory {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuePriority {
    pub name: String,
}

/// Coarse progress bucket of an issue, from its Jira status category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueProgress {
    Done,
    InProgress,
    ToDo,
}

impl IssueProgress {
    #[must_use]
    pub fn from_category(name: &str) -> Self {
        match name {
            "Done" => Self::Done,
            "In Progress" => Self::InProgress,
            _ => Self::ToDo,
        }
    }
}

/// Progress of one active sprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SprintProgress {
    pub id: serde_json::Value,
    pub name: String,
    pub state: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub project_key: String,
    pub project_name: String,
    pub board_name: String,
    pub total_issues: u32,
    pub done_issues: u32,
    pub progress_percentage: f64,
}

/// Completed work for one closed sprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityPoint {
    pub sprint_name: String,
    pub end_date: Option<String>,
    pub story_points: f64,
    pub completed_issues: u32,
    pub project_key: String,
}
