//! Dashboard snapshot formatting.

use pulse_core::domain::dashboard::ISSUE_SECTION_LIMIT;
use pulse_core::{DashboardSnapshot, DashboardState, IssueProgress};

use super::tables::{separator, truncate_string};

const WIDTH: usize = 72;
const SUMMARY_WIDTH: usize = 44;

/// Render the dashboard state as plain text.
pub fn render_dashboard(state: &DashboardState) -> String {
    match state {
        DashboardState::ConnectPrompt => {
            "Connect your Jira workspace to see your dashboard.\nRun `pulse connect` to start."
                .to_string()
        }
        DashboardState::Unavailable { message } => message.clone(),
        DashboardState::Ready(snapshot) => render_snapshot(snapshot),
    }
}

fn render_snapshot(snapshot: &DashboardSnapshot) -> String {
    let mut out = Vec::new();

    let greeting = snapshot
        .current_user
        .as_ref()
        .and_then(|u| u.display_name.as_deref())
        .map_or_else(|| "Dashboard".to_string(), |name| format!("Welcome back, {name}"));
    out.push(greeting);
    out.push(separator(WIDTH));
    out.push(format!(
        "Projects: {}   Open issues: {}   Recent activity: {}",
        snapshot.stats.total_projects,
        snapshot.stats.user_open_issues,
        snapshot.stats.recent_activity_count
    ));

    if let Some(sprints) = snapshot.sprint_section() {
        out.push(String::new());
        out.push("Active sprints".to_string());
        for sprint in sprints {
            out.push(format!(
                "  {:<28} {:<8} {:>3}/{:<3} {:>5.1}%",
                truncate_string(&sprint.name, 28),
                sprint.project_key,
                sprint.done_issues,
                sprint.total_issues,
                sprint.progress_percentage
            ));
        }
    }

    if let Some(issues) = snapshot.issue_section() {
        out.push(String::new());
        out.push("My issues".to_string());
        for issue in issues {
            out.push(format!(
                "  {} {:<10} {:<width$} {}",
                progress_marker(issue.progress()),
                issue.key,
                truncate_string(&issue.fields.summary, SUMMARY_WIDTH),
                issue.priority_label(),
                width = SUMMARY_WIDTH
            ));
        }
        let total = snapshot
            .user_issues
            .total
            .map_or(snapshot.user_issues.issues.len(), |t| t as usize);
        if total > ISSUE_SECTION_LIMIT {
            out.push(format!("  ... and {} more", total - issues.len()));
        }
    }

    if let Some(points) = snapshot.velocity_section() {
        out.push(String::new());
        out.push("Velocity".to_string());
        for point in points {
            out.push(format!(
                "  {:<28} {:>6.1} pts {:>4} issues",
                truncate_string(&point.sprint_name, 28),
                point.story_points,
                point.completed_issues
            ));
        }
    }

    if let Some(projects) = snapshot.project_section() {
        out.push(String::new());
        out.push("Projects".to_string());
        for project in projects {
            out.push(format!("  {:<10} {}", project.key, project.name));
        }
    }

    out.join("\n")
}

const fn progress_marker(progress: IssueProgress) -> &'static str {
    match progress {
        IssueProgress::Done => "[x]",
        IssueProgress::InProgress => "[~]",
        IssueProgress::ToDo => "[ ]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::{DashboardStats, JiraIssue, JiraUser, SprintProgress};
    use std::sync::Arc;

    fn issue(key: &str, category: &str) -> JiraIssue {
        let mut issue = JiraIssue {
            key: key.to_string(),
            ..JiraIssue::default()
        };
        issue.fields.summary = format!("Work on {key}");
        issue.fields.status.status_category.name = category.to_string();
        issue
    }

    #[test]
    fn test_connect_prompt() {
        let text = render_dashboard(&DashboardState::ConnectPrompt);
        assert!(text.contains("pulse connect"));
    }

    #[test]
    fn test_unavailable_shows_message_only() {
        let state = DashboardState::Unavailable {
            message: "Unable to load dashboard data.".to_string(),
        };
        assert_eq!(render_dashboard(&state), "Unable to load dashboard data.");
    }

    #[test]
    fn test_ready_snapshot_sections() {
        let mut snapshot = DashboardSnapshot {
            current_user: Some(JiraUser {
                display_name: Some("Ada".to_string()),
                ..JiraUser::default()
            }),
            stats: DashboardStats {
                total_projects: 2,
                user_open_issues: 7,
                recent_activity_count: 4,
            },
            sprint_data: vec![SprintProgress {
                name: "Sprint 12".to_string(),
                project_key: "PUL".to_string(),
                total_issues: 10,
                done_issues: 4,
                progress_percentage: 40.0,
                ..SprintProgress::default()
            }],
            ..DashboardSnapshot::default()
        };
        snapshot.user_issues.issues = (1..=6)
            .map(|n| issue(&format!("PUL-{n}"), if n == 1 { "Done" } else { "To Do" }))
            .collect();
        snapshot.user_issues.total = Some(7);

        let text = render_dashboard(&DashboardState::Ready(Arc::new(snapshot)));
        assert!(text.starts_with("Welcome back, Ada"));
        assert!(text.contains("Projects: 2   Open issues: 7   Recent activity: 4"));
        assert!(text.contains("Sprint 12"));
        assert!(text.contains("[x] PUL-1"));
        assert!(text.contains("PUL-5"));
        assert!(!text.contains("PUL-6"));
        assert!(text.contains("... and 2 more"));
        assert!(!text.contains("Velocity"));
    }
}
