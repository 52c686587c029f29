//! Integration status formatting.

use pulse_core::{ConnectionState, IntegrationStatus, MountReport, RedirectOutcome};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render the link state and, when known, the server's status record.
pub fn render_status(state: ConnectionState, status: Option<&IntegrationStatus>) -> String {
    let mut lines = vec![format!("Jira integration: {state}")];

    let Some(status) = status else {
        return lines.join("\n");
    };

    if let Some(site) = status.site_name.as_deref() {
        match status.site_url.as_deref() {
            Some(url) => lines.push(format!("  Site:        {site} ({url})")),
            None => lines.push(format!("  Site:        {site}")),
        }
    }
    if let Some(at) = status.created_at {
        lines.push(format!(
            "  Connected:   {}",
            at.with_timezone(&chrono::Local).format(TIMESTAMP_FORMAT)
        ));
    }
    if let Some(at) = status.last_sync_at {
        lines.push(format!(
            "  Last sync:   {}",
            at.with_timezone(&chrono::Local).format(TIMESTAMP_FORMAT)
        ));
    }
    if status.requires_reauthorization() {
        lines.push("  Re-authorization required: run `pulse connect`".to_string());
    }
    if !status.effective_connected()
        && let Some(message) = status.message.as_deref()
    {
        lines.push(format!("  {message}"));
    }

    lines.join("\n")
}

/// Summarize what happened while handling an OAuth callback address.
pub fn render_mount_report(report: &MountReport) -> String {
    let headline = match report.redirect {
        RedirectOutcome::Connected => "Jira authorization completed.",
        RedirectOutcome::Failed => "Jira authorization failed. Please try connecting again.",
        RedirectOutcome::Absent => "No Jira authorization result found on the address.",
    };
    format!("{headline}\nJira integration: {}", report.current())
}
