//! OAuth redirect marker handling.
//!
//! After the provider round trip the backend sends the browser back to the
//! app with `?jira_connected=success` (or `=error`). The marker is consumed
//! exactly once: it is removed from the address so that reloading the
//! address does not trigger reconciliation again.

use tracing::debug;
use url::Url;

/// Query parameter carrying the redirect outcome.
pub const REDIRECT_MARKER_PARAM: &str = "jira_connected";

/// What the inbound address said about the OAuth round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// No (recognised) marker on the address.
    Absent,
    /// The backend finished the token exchange successfully.
    Connected,
    /// The backend reported a failed token exchange.
    Failed,
}

/// Read and strip the redirect marker from `address`.
///
/// Other query parameters are preserved in their original order.
pub fn consume_redirect_marker(address: &mut Url) -> RedirectOutcome {
    let mut outcome = None;
    let mut kept = Vec::new();

    for (key, value) in address.query_pairs() {
        if key == REDIRECT_MARKER_PARAM {
            outcome = Some(match value.as_ref() {
                "success" => RedirectOutcome::Connected,
                "error" => RedirectOutcome::Failed,
                other => {
                    debug!(value = other, "Ignoring unrecognised redirect marker");
                    RedirectOutcome::Absent
                }
            });
        } else {
            kept.push((key.into_owned(), value.into_owned()));
        }
    }

    let Some(outcome) = outcome else {
        return RedirectOutcome::Absent;
    };

    if kept.is_empty() {
        address.set_query(None);
    } else {
        address.query_pairs_mut().clear().extend_pairs(kept);
    }
    outcome
}
